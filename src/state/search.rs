use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info};

use crate::catalog::CatalogApi;
use crate::config::StoreConfig;
use crate::models::Product;

/// Debounced search session. Every keystroke bumps the generation; a
/// response commits only if its generation is still current, so stale
/// results are discarded by sequence number rather than delivery order.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Product>,
    pub loading: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        SearchState::default()
    }

    /// Records a new query, superseding any pending search. Returns the
    /// generation the caller must pass back when committing.
    pub fn begin(&mut self, query: impl Into<String>) -> u64 {
        self.query = query.into();
        self.generation += 1;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Stores a result set unless the session has moved on. Returns
    /// whether the commit happened.
    pub fn commit(&mut self, generation: u64, products: Vec<Product>) -> bool {
        if !self.is_current(generation) {
            info!(
                "Dropping stale search results (generation {} < {})",
                generation, self.generation
            );
            return false;
        }

        self.results = products;
        self.loading = false;
        true
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
        self.loading = false;
    }
}

/// One debounced search pass: waits out the debounce window, re-checks the
/// generation, fetches, and commits unless a newer keystroke superseded
/// this one. Queries below the minimum length clear the results without a
/// fetch.
pub async fn run_search(
    search: &mut SearchState,
    catalog: &dyn CatalogApi,
    generation: u64,
    config: &StoreConfig,
) {
    if search.query.chars().count() < config.search.min_query_len {
        search.clear_results();
        return;
    }

    sleep(Duration::from_millis(config.search.debounce_ms)).await;
    if !search.is_current(generation) {
        return;
    }

    search.loading = true;
    let query = search.query.clone();

    match catalog.search(&query).await {
        Ok(page) => {
            search.commit(generation, page.products);
        }
        Err(e) => {
            // Same posture as any other fetch: log, stop loading, keep
            // whatever results were already on screen.
            error!("Search for \"{}\" failed: {}", query, e);
            search.loading = false;
        }
    }
}
