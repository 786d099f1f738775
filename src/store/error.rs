use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{OrderId, OrderStatus, ProductId, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("A {role} account with email {email} already exists")]
    DuplicateEmail { role: Role, email: String },

    #[error("A shop named {0} is already registered")]
    DuplicateShopName(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session")]
    NotLoggedIn,

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Cart holds items from more than one shop: {}", .0.join(", "))]
    MixedShops(Vec<String>),

    #[error("Delivery time must be no earlier than {earliest}")]
    DeliveryTooSoon { earliest: DateTime<Utc> },

    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl StoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejects blank (empty or whitespace-only) input for a named field.
pub(crate) fn require(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{field} is required")));
    }
    Ok(())
}
