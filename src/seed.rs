use crate::{
    models::{Account, AccountProfile, Money},
    store::{Marketplace, NewProduct, StoreResult},
};

pub const DEMO_SHOP: &str = "SuperMart";

/// Loads one account per role and a small SuperMart catalog.
pub fn seed_demo(market: &mut Marketplace) -> StoreResult<()> {
    let accounts = [
        account(
            "shop1@example.com",
            "shop123",
            DEMO_SHOP,
            AccountProfile::Shopkeeper {
                address: "123 Main St".into(),
            },
        ),
        account(
            "customer1@example.com",
            "customer123",
            "John Doe",
            AccountProfile::Customer {
                phone: "9876543210".into(),
            },
        ),
        account(
            "delivery1@example.com",
            "delivery123",
            "Mike Johnson",
            AccountProfile::Delivery {
                vehicle: "bike".into(),
            },
        ),
    ];
    for account in accounts {
        market.register(account)?;
    }

    let products = [
        (
            "Milk",
            "https://4.imimg.com/data4/JF/JX/MY-9419122/milk-3.jpg",
            50,
            "500ml",
            "Fresh cow milk",
        ),
        (
            "Bread",
            "https://5.imimg.com/data5/TF/EA/MH/SELLER-8764849/fresh-bread-500x500.png",
            35,
            "1 loaf",
            "Whole wheat bread",
        ),
        (
            "Eggs",
            "https://4.imimg.com/data4/IU/DJ/IMOB-16689578/image.jpeg",
            60,
            "12 pieces",
            "Farm fresh eggs",
        ),
    ];
    for (name, image, price, quantity, description) in products {
        market.catalog_mut().add_product(
            DEMO_SHOP,
            NewProduct {
                name: name.into(),
                image: image.into(),
                price: Money::from_major(price),
                quantity: quantity.into(),
                description: description.into(),
            },
        )?;
    }

    tracing::info!(
        accounts = market.accounts().len(),
        products = market.catalog().len(),
        "demo data seeded"
    );
    Ok(())
}

fn account(email: &str, password: &str, name: &str, profile: AccountProfile) -> Account {
    Account {
        email: email.into(),
        password: password.into(),
        name: name.into(),
        profile,
    }
}
