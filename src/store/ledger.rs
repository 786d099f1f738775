use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{AccountRef, Order, OrderId, OrderStatus, PaymentMethod};

use super::{
    cart::Cart,
    error::{StoreError, StoreResult, require},
};

/// Delivery details collected at checkout.
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    /// Defaults to the customer's name when blank.
    pub recipient: Option<String>,
    pub address: String,
    pub phone: String,
    pub time: DateTime<Utc>,
    pub instructions: Option<String>,
    pub payment_method: PaymentMethod,
}

/// Orders split for display: pending/ready vs. delivered history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderBoard {
    pub active: Vec<Order>,
    pub delivered: Vec<Order>,
}

impl OrderBoard {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let (active, delivered) = orders
            .into_iter()
            .cloned()
            .partition(|order| order.status.is_active());
        Self { active, delivered }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Append-only list of orders. Only `status` changes after insertion.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cart as a new pending order. Clearing the cart is left to
    /// the caller.
    pub fn place_order(
        &mut self,
        cart: &Cart,
        details: DeliveryDetails,
        customer: &AccountRef,
        min_lead: Duration,
        now: DateTime<Utc>,
    ) -> StoreResult<&Order> {
        let Some(first) = cart.items().first() else {
            return Err(StoreError::EmptyCart);
        };
        let shops = cart.shops();
        if shops.len() > 1 {
            return Err(StoreError::MixedShops(
                shops.into_iter().map(str::to_string).collect(),
            ));
        }
        require("delivery address", &details.address)?;
        require("delivery phone", &details.phone)?;
        let earliest = now
            .checked_add_signed(min_lead)
            .ok_or_else(|| StoreError::validation("delivery lead time is out of range"))?;
        if details.time < earliest {
            return Err(StoreError::DeliveryTooSoon { earliest });
        }

        let next = u32::try_from(self.orders.len() + 1)
            .map_err(|_| StoreError::validation("order ledger is full"))?;
        let instructions = details
            .instructions
            .filter(|text| !text.trim().is_empty());
        let recipient = details
            .recipient
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| customer.name.clone());

        self.orders.push(Order {
            id: OrderId::new(next),
            customer: customer.clone(),
            shop: first.shop.clone(),
            items: cart.items().to_vec(),
            recipient,
            delivery_address: details.address,
            delivery_phone: details.phone,
            delivery_time: details.time,
            instructions,
            payment_method: details.payment_method,
            status: OrderStatus::Pending,
            delivered_by: None,
            created_at: now,
        });
        let index = self.orders.len() - 1;
        Ok(&self.orders[index])
    }

    /// Moves an order one step forward through pending -> ready -> delivered.
    /// The account completing delivery is recorded on the order.
    pub fn update_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
        by: &AccountRef,
    ) -> StoreResult<&Order> {
        let Some(order) = self.orders.iter_mut().find(|order| order.id == id) else {
            tracing::warn!(order_id = %id, %status, "status update for unknown order");
            return Err(StoreError::OrderNotFound(id));
        };
        if !order.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                id,
                from: order.status,
                to: status,
            });
        }
        tracing::debug!(order_id = %id, from = %order.status, to = %status, "order status changed");
        order.status = status;
        if status == OrderStatus::Delivered {
            order.delivered_by = Some(by.clone());
        }
        Ok(order)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn all(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn for_shop<'a>(&'a self, shop: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |order| order.shop == shop)
    }

    /// Orders placed by the customer with this email.
    pub fn for_customer<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders
            .iter()
            .filter(move |order| order.customer.email == email)
    }

    /// Orders completed by the delivery account with this email.
    pub fn delivered_by<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |order| {
            order
                .delivered_by
                .as_ref()
                .is_some_and(|courier| courier.email == email)
        })
    }

    pub fn active(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| order.status.is_active())
    }

    pub fn delivered(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| !order.status.is_active())
    }

    pub fn pending_count_for_shop(&self, shop: &str) -> usize {
        self.for_shop(shop)
            .filter(|order| order.status == OrderStatus::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
