use grocery_delivery_api::{
    models::{Account, AccountProfile, Money, Role},
    seed::seed_demo,
    store::{AccountDirectory, Catalog, Marketplace, MarketplaceSettings, NewProduct, StoreError},
};

fn customer(email: &str, password: &str) -> Account {
    Account {
        email: email.into(),
        password: password.into(),
        name: "Asha".into(),
        profile: AccountProfile::Customer {
            phone: "9123456780".into(),
        },
    }
}

#[test]
fn registries_are_disjoint_per_role() {
    let mut directory = AccountDirectory::new();
    directory
        .register(customer("asha@example.com", "pw"))
        .expect("register");

    assert!(
        directory
            .authenticate(Role::Customer, "asha@example.com", "pw")
            .is_some()
    );
    assert!(
        directory
            .authenticate(Role::Shopkeeper, "asha@example.com", "pw")
            .is_none()
    );
    assert!(
        directory
            .authenticate(Role::Customer, "asha@example.com", "PW")
            .is_none()
    );
}

#[test]
fn duplicate_email_in_same_role_is_rejected() {
    let mut directory = AccountDirectory::new();
    directory
        .register(customer("asha@example.com", "pw"))
        .expect("register");

    let err = directory
        .register(customer("asha@example.com", "other"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateEmail {
            role: Role::Customer,
            email: "asha@example.com".into(),
        }
    );

    let courier = Account {
        email: "asha@example.com".into(),
        password: "pw".into(),
        name: "Asha".into(),
        profile: AccountProfile::Delivery {
            vehicle: "scooter".into(),
        },
    };
    assert!(directory.register(courier).is_ok());
    assert_eq!(directory.len(), 2);
}

#[test]
fn blank_role_field_is_rejected() {
    let mut directory = AccountDirectory::new();
    let shop = Account {
        email: "shop@example.com".into(),
        password: "pw".into(),
        name: "Fresh Basket".into(),
        profile: AccountProfile::Shopkeeper {
            address: String::new(),
        },
    };
    assert!(matches!(
        directory.register(shop),
        Err(StoreError::Validation(_))
    ));
}

#[test]
fn failed_login_leaves_session_untouched() {
    let mut market = Marketplace::new(MarketplaceSettings::default());
    seed_demo(&mut market).expect("seed");
    assert_eq!(
        market
            .login(Role::Customer, "nope@x.com", "wrong")
            .unwrap_err(),
        StoreError::InvalidCredentials
    );
    assert!(market.session().is_none());

    market
        .login(Role::Shopkeeper, "shop1@example.com", "shop123")
        .expect("login");
    assert!(
        market
            .login(Role::Customer, "nope@x.com", "wrong")
            .is_err()
    );
    assert_eq!(market.current_user().map(|u| u.role), Some(Role::Shopkeeper));
}

#[test]
fn logout_returns_the_ended_session() {
    let mut market = Marketplace::new(MarketplaceSettings::default());
    seed_demo(&mut market).expect("seed");
    let session_id = market
        .login(Role::Delivery, "delivery1@example.com", "delivery123")
        .expect("login")
        .session_id;

    let ended = market.logout().expect("session");
    assert_eq!(ended.session_id, session_id);
    assert_eq!(ended.name, "Mike Johnson");
    assert!(market.logout().is_none());
}

fn new_product(name: &str, description: &str, price: i64) -> NewProduct {
    NewProduct {
        name: name.into(),
        image: String::new(),
        price: Money::from_major(price),
        quantity: "1 pc".into(),
        description: description.into(),
    }
}

#[test]
fn catalog_ids_follow_catalog_size() {
    let mut catalog = Catalog::new();
    let first = catalog
        .add_product("SuperMart", new_product("Milk", "Fresh cow milk", 50))
        .expect("add")
        .id;
    let second = catalog
        .add_product("Corner Store", new_product("Tea", "Assam leaf", 120))
        .expect("add")
        .id;
    assert_eq!((first.get(), second.get()), (1, 2));
    assert_eq!(catalog.list_for_shop("Corner Store").count(), 1);
}

#[test]
fn catalog_rejects_non_positive_price_and_blank_name() {
    let mut catalog = Catalog::new();
    assert!(matches!(
        catalog.add_product("SuperMart", new_product("Milk", "", 0)),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        catalog.add_product("SuperMart", new_product(" ", "", 10)),
        Err(StoreError::Validation(_))
    ));
    assert!(catalog.is_empty());
}

#[test]
fn search_matches_name_or_description_case_insensitively() {
    let mut catalog = Catalog::new();
    catalog
        .add_product("SuperMart", new_product("Milk", "Fresh cow milk", 50))
        .expect("add");
    catalog
        .add_product("SuperMart", new_product("Paneer", "Made from MILK", 90))
        .expect("add");
    catalog
        .add_product("SuperMart", new_product("Bread", "Whole wheat", 35))
        .expect("add");

    let names: Vec<&str> = catalog.search("mIlK").map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Paneer"]);
    assert_eq!(catalog.search("").count(), 3);
    assert_eq!(catalog.search("chocolate").count(), 0);
}

#[test]
fn shop_names_are_unique_among_shopkeepers() {
    let mut directory = AccountDirectory::new();
    let shop = |email: &str, name: &str| Account {
        email: email.into(),
        password: "pw".into(),
        name: name.into(),
        profile: AccountProfile::Shopkeeper {
            address: "1 Market Rd".into(),
        },
    };
    directory
        .register(shop("shop1@example.com", "SuperMart"))
        .expect("register");

    let err = directory
        .register(shop("impostor@example.com", " supermart "))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateShopName(" supermart ".into()));
    assert_eq!(directory.registry(Role::Shopkeeper).len(), 1);

    // Customers may share a name; their email tells them apart.
    directory
        .register(customer("asha@example.com", "pw"))
        .expect("register");
    directory
        .register(customer("asha.two@example.com", "pw"))
        .expect("register");
    assert_eq!(directory.registry(Role::Customer).len(), 2);
}
