use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Two-decimal money formatting for display surfaces. Stored totals stay
/// unrounded.
pub fn display_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// One cart row. Unit price and discount are snapshotted from the product
/// at first add; later price changes in the catalog do not affect the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    pub discount_percentage: f64,
    pub discounted_total: f64,
    pub thumbnail: String,
}

impl CartItem {
    fn from_product(product: &Product) -> Self {
        let mut item = CartItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            quantity: 1,
            total: 0.0,
            discount_percentage: product.discount_percentage,
            discounted_total: 0.0,
            thumbnail: product.thumbnail.clone(),
        };
        item.recompute();
        item
    }

    fn recompute(&mut self) {
        self.total = self.price * self.quantity as f64;
        self.discounted_total = self.total * (1.0 - self.discount_percentage / 100.0);
    }
}

/// Insertion-ordered line items plus derived totals. The derived fields
/// are always the full reduction of the item list; every mutation ends in
/// `recompute_totals`, never an incremental adjustment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total: f64,
    discounted_total: f64,
    total_quantity: u32,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn discounted_total(&self) -> f64 {
        self.discounted_total
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of the product. A repeat add increments the existing
    /// row and recomputes it from the stored unit price, not the product's
    /// current one. Cannot fail.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
            item.recompute();
        } else {
            self.items.push(CartItem::from_product(product));
        }

        self.recompute_totals();
    }

    /// Sets a row's quantity. A quantity of zero is rejected, not treated
    /// as removal; an unknown id is ignored.
    pub fn update_quantity(&mut self, id: u32, quantity: u32) {
        if quantity < 1 {
            return;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        item.quantity = quantity;
        item.recompute();
        self.recompute_totals();
    }

    /// Removes the row with `id` if present. Idempotent.
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
        self.recompute_totals();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        self.total_quantity = self.items.iter().map(|item| item.quantity).sum();
        self.total = self.items.iter().map(|item| item.total).sum();
        self.discounted_total = self.items.iter().map(|item| item.discounted_total).sum();
    }
}
