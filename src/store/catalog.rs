use crate::models::{Money, Product, ProductId};

use super::error::{StoreError, StoreResult, require};

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub price: Money,
    pub quantity: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn list_for_shop<'a>(&'a self, shop: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |product| product.shop == shop)
    }

    /// Case-insensitive substring match on name or description. An empty
    /// term matches every product.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = term.to_lowercase();
        self.products.iter().filter(move |product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
    }

    /// Ids are catalog size + 1; products are never removed, so they stay unique.
    pub fn add_product(&mut self, shop: &str, fields: NewProduct) -> StoreResult<&Product> {
        require("name", &fields.name)?;
        require("quantity", &fields.quantity)?;
        if !fields.price.is_positive() {
            return Err(StoreError::validation("price must be greater than 0"));
        }
        let next = u32::try_from(self.products.len() + 1)
            .map_err(|_| StoreError::validation("catalog is full"))?;

        self.products.push(Product {
            id: ProductId::new(next),
            shop: shop.to_string(),
            name: fields.name,
            image: fields.image,
            price: fields.price,
            quantity: fields.quantity,
            description: fields.description,
        });
        let index = self.products.len() - 1;
        Ok(&self.products[index])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
