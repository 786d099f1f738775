use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

/// Fixed-point amount in minor currency units (paise).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    const MINOR_PER_MAJOR: i64 = 100;

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(Self::MINOR_PER_MAJOR))
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Line amount for `quantity` units, saturating instead of wrapping.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = Self::MINOR_PER_MAJOR.unsigned_abs();
        write!(f, "{sign}₹{}.{:02}", abs / per, abs % per)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Shopkeeper,
    Customer,
    Delivery,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Shopkeeper, Role::Customer, Role::Delivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Shopkeeper => "shopkeeper",
            Role::Customer => "customer",
            Role::Delivery => "delivery",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific part of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum AccountProfile {
    Shopkeeper { address: String },
    Customer { phone: String },
    Delivery { vehicle: String },
}

impl AccountProfile {
    pub fn role(&self) -> Role {
        match self {
            AccountProfile::Shopkeeper { .. } => Role::Shopkeeper,
            AccountProfile::Customer { .. } => Role::Customer,
            AccountProfile::Delivery { .. } => Role::Delivery,
        }
    }

    pub(crate) fn detail(&self) -> &str {
        match self {
            AccountProfile::Shopkeeper { address } => address,
            AccountProfile::Customer { phone } => phone,
            AccountProfile::Delivery { vehicle } => vehicle,
        }
    }
}

/// Registry record. Stays inside the store; callers see [`AccountView`].
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub name: String,
    pub profile: AccountProfile,
}

impl Account {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn view(&self) -> AccountView {
        AccountView {
            email: self.email.clone(),
            name: self.name.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Names an account on an order. The email is unique within a role's
/// registry; the name is for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountRef {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountView {
    pub email: String,
    pub name: String,
    pub profile: AccountProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub shop: String,
    pub name: String,
    pub image: String,
    pub price: Money,
    /// Free-text pack size such as "500ml" or "12 pieces".
    pub quantity: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub shop: String,
    pub unit: String,
    pub image: String,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// Pending and ready orders still need work; delivered ones are history.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Ready)
    }

    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }

    /// The role allowed to move an order into this status.
    pub fn advanced_by(&self) -> Option<Role> {
        match self {
            OrderStatus::Pending => None,
            OrderStatus::Ready => Some(Role::Shopkeeper),
            OrderStatus::Delivered => Some(Role::Delivery),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recorded with the order only; nothing is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
    OnlinePayment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: OrderId,
    pub customer: AccountRef,
    pub shop: String,
    pub items: Vec<CartItem>,
    /// Who receives the order at the door.
    pub recipient: String,
    pub delivery_address: String,
    pub delivery_phone: String,
    pub delivery_time: DateTime<Utc>,
    pub instructions: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    /// Delivery account that completed the order.
    pub delivered_by: Option<AccountRef>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// "Milk (2), Bread (1)"
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} ({})", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
