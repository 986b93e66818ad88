use anyhow::Result;

use storefront::catalog::{CatalogApi, CatalogClient};
use storefront::config::StoreConfig;

/// Probes all five catalog endpoints against the live API and prints what
/// came back. A connectivity tool, not a test.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = StoreConfig::load_or_default("storefront.toml");
    let catalog = CatalogClient::new(&config)?;

    println!("Probing catalog at {}...\n", catalog.base_url());

    let page = catalog
        .list(config.catalog.default_page_size, 0)
        .await?;
    println!(
        "GET /products: {} of {} products",
        page.products.len(),
        page.total
    );
    for product in page.products.iter().take(3) {
        println!(
            "  {}: \"{}\" ${:.2} [{}]",
            product.id, product.title, product.price, product.category
        );
    }
    if page.products.len() > 3 {
        println!("  ... and {} more", page.products.len() - 3);
    }

    if let Some(first) = page.products.first() {
        let product = catalog.get_by_id(first.id).await?;
        println!(
            "GET /products/{}: \"{}\" rated {:.2}",
            product.id, product.title, product.rating
        );
    }

    let categories = catalog.list_categories().await?;
    println!("GET /products/categories: {} categories", categories.len());

    if let Some(category) = categories.first() {
        let category_page = catalog
            .list_by_category(category, config.catalog.default_page_size, 0)
            .await?;
        println!(
            "GET /products/category/{}: {} of {} products",
            category,
            category_page.products.len(),
            category_page.total
        );
    }

    let results = catalog.search("phone").await?;
    println!(
        "GET /products/search?q=phone: {} of {} hits",
        results.products.len(),
        results.total
    );

    println!("\n=== SUMMARY ===");
    println!("✅ All five catalog endpoints responded");

    Ok(())
}
