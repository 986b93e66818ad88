pub mod client;

pub use client::{CatalogApi, CatalogClient};
