pub mod catalog_models;
pub mod notification;

pub use catalog_models::*;
pub use notification::*;
