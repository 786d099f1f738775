use chrono::{Duration, Utc};
use grocery_delivery_api::{
    models::{Money, PaymentMethod, ProductId, Role},
    seed::{DEMO_SHOP, seed_demo},
    store::{DeliveryDetails, Marketplace, MarketplaceSettings, NewProduct, StoreError},
};

fn customer_market() -> Marketplace {
    let mut market = Marketplace::new(MarketplaceSettings::default());
    seed_demo(&mut market).expect("seed");
    market
        .login(Role::Customer, "customer1@example.com", "customer123")
        .expect("login");
    market
}

fn details() -> DeliveryDetails {
    DeliveryDetails {
        recipient: None,
        address: "12 Lake Road".into(),
        phone: "9000000000".into(),
        time: Utc::now() + Duration::hours(2),
        instructions: None,
        payment_method: PaymentMethod::CashOnDelivery,
    }
}

#[test]
fn repeated_adds_keep_one_line_with_call_count() {
    let mut market = customer_market();
    let milk = ProductId::new(1);
    for _ in 0..5 {
        market.add_to_cart(milk).expect("add");
    }

    let cart = market.cart().expect("cart");
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.get(milk).map(|item| item.quantity), Some(5));
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn remove_then_add_starts_again_at_one() {
    let mut market = customer_market();
    let bread = ProductId::new(2);
    market.add_to_cart(bread).expect("add");
    market.add_to_cart(bread).expect("add");

    assert!(market.remove_from_cart(bread).expect("remove"));
    assert!(market.cart().expect("cart").is_empty());

    let item = market.add_to_cart(bread).expect("add");
    assert_eq!(item.quantity, 1);
}

#[test]
fn removing_absent_product_is_a_noop() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(1)).expect("add");

    assert!(!market.remove_from_cart(ProductId::new(3)).expect("remove"));
    assert_eq!(market.cart().expect("cart").items().len(), 1);
}

#[test]
fn unknown_product_is_rejected_and_cart_unchanged() {
    let mut market = customer_market();
    let err = market.add_to_cart(ProductId::new(99)).unwrap_err();
    assert_eq!(err, StoreError::ProductNotFound(ProductId::new(99)));
    assert!(market.cart().expect("cart").is_empty());
}

#[test]
fn total_is_price_times_quantity_summed() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(1)).expect("add");
    market.add_to_cart(ProductId::new(1)).expect("add");
    market.add_to_cart(ProductId::new(2)).expect("add");

    let cart = market.cart().expect("cart");
    assert_eq!(cart.total(), Money::from_major(50 * 2 + 35));
    assert_eq!(cart.total().to_string(), "₹135.00");
}

#[test]
fn cart_lines_snapshot_product_fields() {
    let mut market = customer_market();
    let item = market.add_to_cart(ProductId::new(3)).expect("add").clone();

    assert_eq!(item.name, "Eggs");
    assert_eq!(item.unit, "12 pieces");
    assert_eq!(item.shop, DEMO_SHOP);
    assert_eq!(item.price, Money::from_major(60));
}

#[test]
fn cart_requires_a_session() {
    let mut market = customer_market();
    market.logout();
    assert_eq!(
        market.add_to_cart(ProductId::new(1)).unwrap_err(),
        StoreError::NotLoggedIn
    );
}

#[test]
fn logout_discards_the_cart() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(1)).expect("add");
    market.logout();
    market
        .login(Role::Customer, "customer1@example.com", "customer123")
        .expect("login");

    assert!(market.cart().expect("cart").is_empty());
}

#[test]
fn order_items_are_independent_of_later_cart_changes() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(1)).expect("add");
    let order_id = market.checkout(details()).expect("checkout").id;

    market.add_to_cart(ProductId::new(1)).expect("add");
    market.add_to_cart(ProductId::new(2)).expect("add");

    let order = market.ledger().get(order_id).expect("order");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 1);
}

#[test]
fn failed_checkout_keeps_the_cart() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(1)).expect("add");

    let mut too_soon = details();
    too_soon.time = Utc::now();
    let err = market.checkout(too_soon).unwrap_err();
    assert!(matches!(err, StoreError::DeliveryTooSoon { .. }));
    assert_eq!(market.cart().expect("cart").item_count(), 1);
    assert!(market.ledger().is_empty());
}

#[test]
fn mixed_shop_cart_is_rejected_at_checkout() {
    let mut market = customer_market();
    market
        .catalog_mut()
        .add_product(
            "Corner Store",
            NewProduct {
                name: "Rice".into(),
                image: String::new(),
                price: Money::from_major(80),
                quantity: "1 kg".into(),
                description: "Basmati".into(),
            },
        )
        .expect("product");
    market.add_to_cart(ProductId::new(1)).expect("add");
    market.add_to_cart(ProductId::new(4)).expect("add");

    let err = market.checkout(details()).unwrap_err();
    assert_eq!(
        err,
        StoreError::MixedShops(vec![DEMO_SHOP.to_string(), "Corner Store".to_string()])
    );
}

#[test]
fn checkout_records_customer_recipient_and_payment() {
    let mut market = customer_market();
    market.add_to_cart(ProductId::new(3)).expect("add");

    let mut gift = details();
    gift.recipient = Some("Priya Doe".into());
    gift.payment_method = PaymentMethod::OnlinePayment;
    let order = market.checkout(gift).expect("checkout");
    assert_eq!(order.customer.name, "John Doe");
    assert_eq!(order.customer.email, "customer1@example.com");
    assert_eq!(order.recipient, "Priya Doe");
    assert_eq!(order.payment_method, PaymentMethod::OnlinePayment);
    assert_eq!(order.delivered_by, None);

    market.add_to_cart(ProductId::new(3)).expect("add");
    let mut unnamed = details();
    unnamed.recipient = Some("  ".into());
    let order = market.checkout(unnamed).expect("checkout");
    assert_eq!(order.recipient, "John Doe");
}

#[test]
fn money_from_major_saturates() {
    assert_eq!(Money::from_major(i64::MAX), Money::from_minor(i64::MAX));
    assert_eq!(Money::from_major(i64::MIN), Money::from_minor(i64::MIN));
    assert_eq!(Money::from_major(35).minor(), 3_500);
}
