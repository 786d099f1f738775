use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Money, Order, OrderStatus, PaymentMethod},
    store::DeliveryDetails,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Name to deliver to; the customer's own name when omitted.
    pub recipient: Option<String>,
    pub address: String,
    pub phone: String,
    pub delivery_time: DateTime<Utc>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl From<CheckoutRequest> for DeliveryDetails {
    fn from(req: CheckoutRequest) -> Self {
        DeliveryDetails {
            recipient: req.recipient,
            address: req.address,
            phone: req.phone,
            time: req.delivery_time,
            instructions: req.instructions,
            payment_method: req.payment_method,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderDetail {
    pub order: Order,
    pub total: Money,
    pub total_display: String,
    pub summary: String,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        let total = order.total();
        OrderDetail {
            order: order.clone(),
            total,
            total_display: total.to_string(),
            summary: order.summary(),
        }
    }
}
