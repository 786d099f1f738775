use crate::models::{CartItem, Money, Product, ProductId};

/// Line items of the active customer. One entry per product, quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the existing line or snapshots the product into a new one.
    pub fn add(&mut self, product: &Product) -> &CartItem {
        let index = match self
            .items
            .iter()
            .position(|item| item.product_id == product.id)
        {
            Some(index) => {
                self.items[index].quantity += 1;
                index
            }
            None => {
                self.items.push(CartItem {
                    product_id: product.id,
                    name: product.name.clone(),
                    price: product.price,
                    quantity: 1,
                    shop: product.shop.clone(),
                    unit: product.quantity.clone(),
                    image: product.image.clone(),
                });
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Returns whether a line was dropped.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.items.len() != before
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct shops in first-seen order.
    pub fn shops(&self) -> Vec<&str> {
        let mut shops: Vec<&str> = Vec::new();
        for item in &self.items {
            if !shops.contains(&item.shop.as_str()) {
                shops.push(&item.shop);
            }
        }
        shops
    }
}
