use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Money, Product},
    store::NewProduct,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// Minor currency units.
    pub price: i64,
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            image: req.image,
            price: Money::from_minor(req.price),
            quantity: req.quantity,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
