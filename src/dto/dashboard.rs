use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::cart::CartView,
    models::{Order, Product},
    store::{OrderBoard, SessionUser},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ShopkeeperDashboard {
    pub user: SessionUser,
    pub products: Vec<Product>,
    pub orders: OrderBoard,
    pub pending_orders: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDashboard {
    pub user: SessionUser,
    pub products: Vec<Product>,
    pub cart: CartView,
    pub orders: OrderBoard,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryDashboard {
    pub user: SessionUser,
    pub orders: OrderBoard,
    /// Orders this account delivered.
    pub deliveries: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Dashboard {
    Shopkeeper(ShopkeeperDashboard),
    Customer(CustomerDashboard),
    Delivery(DeliveryDashboard),
}
