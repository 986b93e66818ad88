pub mod aggregator;

pub use aggregator::{Cart, CartItem, display_price};
