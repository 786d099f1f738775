use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{CartItem, Money, ProductId},
    store::Cart,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Money,
    pub total_display: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartView {
            items: cart.items().to_vec(),
            total,
            total_display: total.to_string(),
            item_count: cart.item_count(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveFromCartResponse {
    pub removed: bool,
    pub cart: CartView,
}
