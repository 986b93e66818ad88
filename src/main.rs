use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use storefront::cart::display_price;
use storefront::catalog::CatalogClient;
use storefront::config::StoreConfig;
use storefront::models::{FilterSpec, NotificationKind, PriceRange, SortKey};
use storefront::routes::Route;
use storefront::state::{AppState, run_search};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("🚀 Starting storefront session");

    let config = StoreConfig::load_or_default("storefront.toml");
    config
        .validate()
        .context("Invalid storefront configuration")?;
    info!("Catalog endpoint: {}", config.catalog.base_url);

    let catalog = CatalogClient::new(&config)?;
    let mut state = AppState::new();

    // Home page: product page and category list in one round.
    state
        .products
        .load_home(&catalog, config.catalog.default_page_size)
        .await;

    if let Some(error) = &state.products.error {
        warn!("Home page load failed: {}", error);
    } else {
        info!(
            "Loaded {} products ({} featured, {} new arrivals, {} categories)",
            state.products.products.len(),
            state.products.featured.len(),
            state.products.new_arrivals.len(),
            state.products.categories.len()
        );
    }

    // Category browse, entered through the routing table.
    if let Some(category) = state.products.categories.first().cloned() {
        let route = Route::parse(&format!("/category/{}", category));
        if let Route::Category(category) = route {
            state
                .products
                .load_category(&catalog, &category, config.catalog.default_page_size, 0)
                .await;
            info!(
                "Category \"{}\": {} of {} products",
                category,
                state.products.products.len(),
                state.products.total
            );
        }
    }

    // Filtered view: mid-range and well rated, cheapest first.
    let spec = FilterSpec {
        price_range: Some(PriceRange {
            min: 10.0,
            max: 500.0,
        }),
        min_rating: Some(4.0),
        sort: Some(SortKey::PriceAsc),
        ..Default::default()
    };
    state.products.set_filters(spec.clone());
    state
        .products
        .load_filtered(&catalog, &spec, config.catalog.default_page_size, 0)
        .await;
    info!(
        "Filtered view: {} products match",
        state.products.products.len()
    );

    // Scripted cart session over the filtered results.
    if state.products.products.len() >= 2 {
        let first = state.products.products[0].clone();
        let second = state.products.products[1].clone();

        state.cart.add_item(&first);
        state.cart.add_item(&first);
        state.cart.add_item(&second);
        state.cart.update_quantity(second.id, 3);
        state
            .ui
            .push_notification(NotificationKind::Success, format!("Added {}", second.title));

        info!(
            "🛒 Cart: {} units, total {}, after discounts {}",
            state.cart.total_quantity(),
            display_price(state.cart.total()),
            display_price(state.cart.discounted_total())
        );

        state.cart.remove_item(first.id);
        info!(
            "Removed \"{}\"; {} units remain",
            first.title,
            state.cart.total_quantity()
        );
    } else {
        warn!("Not enough products for the cart session");
    }

    // Quick view of the first featured product.
    if let Some(featured_id) = state.products.featured.first().map(|p| p.id) {
        state.ui.open_quick_view(featured_id);
        state.products.load_product(&catalog, featured_id).await;
        if let Some(product) = &state.products.selected {
            info!(
                "👁 Quick view: \"{}\" at {} ({})",
                product.title,
                display_price(product.price),
                product.category
            );
        }
        state.ui.close_quick_view();
    }

    // Debounced search pass.
    let generation = state.search.begin("phone");
    run_search(&mut state.search, &catalog, generation, &config).await;
    info!(
        "🔍 Search \"{}\": {} results",
        state.search.query,
        state.search.results.len()
    );

    // Toast sweep before shutdown.
    state.ui.expire_notifications(
        Utc::now(),
        chrono::Duration::seconds(config.notifications.toast_ttl_secs as i64),
    );
    info!("{} toast(s) still visible", state.ui.notifications().len());

    info!("✅ Storefront session complete");

    Ok(())
}
