use chrono::{Duration, Utc};
use grocery_delivery_api::{
    models::{AccountRef, Money, OrderId, OrderStatus, PaymentMethod, Product, ProductId},
    store::{Cart, DeliveryDetails, OrderBoard, OrderLedger, StoreError},
};

fn product(id: u32, shop: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        shop: shop.into(),
        name: format!("Item {id}"),
        image: String::new(),
        price: Money::from_major(price),
        quantity: "1 pc".into(),
        description: String::new(),
    }
}

fn details(hours_ahead: i64) -> DeliveryDetails {
    DeliveryDetails {
        recipient: None,
        address: "X".into(),
        phone: "Y".into(),
        time: Utc::now() + Duration::hours(hours_ahead),
        instructions: Some("  ".into()),
        payment_method: PaymentMethod::default(),
    }
}

fn account(name: &str, email: &str) -> AccountRef {
    AccountRef {
        name: name.into(),
        email: email.into(),
    }
}

fn john() -> AccountRef {
    account("John Doe", "customer1@example.com")
}

fn courier() -> AccountRef {
    account("Mike Johnson", "delivery1@example.com")
}

fn place(ledger: &mut OrderLedger, customer: &AccountRef) -> OrderId {
    let mut cart = Cart::new();
    cart.add(&product(1, "SuperMart", 50));
    ledger
        .place_order(&cart, details(2), customer, Duration::minutes(60), Utc::now())
        .expect("order")
        .id
}

#[test]
fn empty_cart_cannot_be_placed() {
    let mut ledger = OrderLedger::new();
    let err = ledger
        .place_order(&Cart::new(), details(2), &john(), Duration::zero(), Utc::now())
        .unwrap_err();
    assert_eq!(err, StoreError::EmptyCart);
    assert!(ledger.is_empty());
}

#[test]
fn order_ids_are_strictly_increasing() {
    let mut ledger = OrderLedger::new();
    let ids: Vec<OrderId> = (0..4).map(|_| place(&mut ledger, &john())).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.first(), Some(&OrderId::new(1)));
}

#[test]
fn new_order_is_pending_and_copies_shop_and_items() {
    let mut ledger = OrderLedger::new();
    let mut cart = Cart::new();
    let milk = product(1, "SuperMart", 50);
    cart.add(&milk);
    cart.add(&milk);

    let order = ledger
        .place_order(&cart, details(2), &john(), Duration::minutes(60), Utc::now())
        .expect("order");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.shop, "SuperMart");
    assert_eq!(order.items, cart.items());
    assert_eq!(order.total(), Money::from_major(100));
    assert_eq!(order.summary(), "Item 1 (2)");
    assert_eq!(order.instructions, None);
}

#[test]
fn zero_lead_time_accepts_immediate_delivery() {
    let mut ledger = OrderLedger::new();
    let mut cart = Cart::new();
    cart.add(&product(1, "SuperMart", 50));
    let now = Utc::now();
    let mut asap = details(0);
    asap.time = now;

    assert!(
        ledger
            .place_order(&cart, asap, &john(), Duration::zero(), now)
            .is_ok()
    );
}

#[test]
fn blank_address_is_rejected() {
    let mut ledger = OrderLedger::new();
    let mut cart = Cart::new();
    cart.add(&product(1, "SuperMart", 50));
    let mut blank = details(2);
    blank.address = "   ".into();

    let err = ledger
        .place_order(&cart, blank, &john(), Duration::zero(), Utc::now())
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn status_moves_forward_one_step_at_a_time() {
    let mut ledger = OrderLedger::new();
    let id = place(&mut ledger, &john());

    let err = ledger
        .update_status(id, OrderStatus::Delivered, &courier())
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidTransition {
            id,
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        }
    );

    ledger.update_status(id, OrderStatus::Ready, &courier()).expect("ready");
    ledger
        .update_status(id, OrderStatus::Delivered, &courier())
        .expect("delivered");

    for target in [OrderStatus::Pending, OrderStatus::Ready, OrderStatus::Delivered] {
        assert!(ledger.update_status(id, target, &courier()).is_err());
    }
    assert_eq!(ledger.get(id).map(|o| o.status), Some(OrderStatus::Delivered));
}

#[test]
fn unknown_order_reports_not_found_and_changes_nothing() {
    let mut ledger = OrderLedger::new();
    let id = place(&mut ledger, &john());

    let err = ledger
        .update_status(OrderId::new(42), OrderStatus::Ready, &courier())
        .unwrap_err();
    assert_eq!(err, StoreError::OrderNotFound(OrderId::new(42)));
    assert_eq!(ledger.get(id).map(|o| o.status), Some(OrderStatus::Pending));
}

#[test]
fn board_partitions_active_and_delivered() {
    let mut ledger = OrderLedger::new();
    let first = place(&mut ledger, &john());
    let second = place(&mut ledger, &john());
    let third = place(&mut ledger, &account("Asha", "asha@example.com"));
    for id in [second, third] {
        ledger
            .update_status(id, OrderStatus::Ready, &courier())
            .expect("ready");
    }
    ledger
        .update_status(third, OrderStatus::Delivered, &courier())
        .expect("delivered");

    let board = OrderBoard::from_orders(ledger.all());
    let active: Vec<OrderId> = board.active.iter().map(|o| o.id).collect();
    let delivered: Vec<OrderId> = board.delivered.iter().map(|o| o.id).collect();
    assert_eq!(active, vec![first, second]);
    assert_eq!(delivered, vec![third]);
    assert!(board.active.iter().all(|o| o.status.is_active()));
    assert!(board.delivered.iter().all(|o| o.status == OrderStatus::Delivered));

    assert_eq!(ledger.for_customer("customer1@example.com").count(), 2);
    assert_eq!(ledger.for_customer("asha@example.com").count(), 1);
    assert_eq!(ledger.active().count(), 2);
    assert_eq!(ledger.delivered().count(), 1);
    assert_eq!(ledger.pending_count_for_shop("SuperMart"), 1);
}

#[test]
fn customers_sharing_a_name_are_kept_apart() {
    let mut ledger = OrderLedger::new();
    place(&mut ledger, &john());
    place(&mut ledger, &account("John Doe", "other.john@example.com"));

    assert_eq!(ledger.for_customer("customer1@example.com").count(), 1);
    assert_eq!(ledger.for_customer("other.john@example.com").count(), 1);
}

#[test]
fn delivering_records_the_courier() {
    let mut ledger = OrderLedger::new();
    let id = place(&mut ledger, &john());
    let shop = account("SuperMart", "shop1@example.com");

    let ready = ledger
        .update_status(id, OrderStatus::Ready, &shop)
        .expect("ready");
    assert_eq!(ready.delivered_by, None);

    let delivered = ledger
        .update_status(id, OrderStatus::Delivered, &courier())
        .expect("delivered");
    assert_eq!(delivered.delivered_by, Some(courier()));
    assert_eq!(ledger.delivered_by("delivery1@example.com").count(), 1);
    assert_eq!(ledger.delivered_by("shop1@example.com").count(), 0);
}

#[test]
fn oversized_lead_time_is_rejected_without_overflow() {
    let mut ledger = OrderLedger::new();
    let mut cart = Cart::new();
    cart.add(&product(1, "SuperMart", 50));

    let err = ledger
        .place_order(&cart, details(2), &john(), Duration::MAX, Utc::now())
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(ledger.is_empty());
}

#[test]
fn blank_recipient_falls_back_to_customer_name() {
    let mut ledger = OrderLedger::new();
    let id = place(&mut ledger, &john());
    assert_eq!(ledger.get(id).map(|o| o.recipient.as_str()), Some("John Doe"));
}
