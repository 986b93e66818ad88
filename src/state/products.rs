use tracing::{error, warn};

use crate::catalog::CatalogApi;
use crate::filter::FilterEngine;
use crate::models::{FilterSpec, Product};

const HIGHLIGHT_COUNT: usize = 5;

/// Catalog slice of the application state. Loaders overwrite the whole
/// slice on success; on failure they store a message and stop loading,
/// never propagating the error further up.
#[derive(Debug, Clone, Default)]
pub struct ProductState {
    pub products: Vec<Product>,
    pub featured: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub selected: Option<Product>,
    pub categories: Vec<String>,
    pub filters: FilterSpec,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProductState {
    pub fn new() -> Self {
        ProductState::default()
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
    }

    fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: &str, e: anyhow::Error) {
        error!("{}: {}", message, e);
        self.loading = false;
        self.error = Some(message.to_string());
    }

    /// General product page. Also derives the home-page highlight rows:
    /// featured takes the first five, new arrivals the last five reversed.
    pub async fn load_page(&mut self, catalog: &dyn CatalogApi, limit: u32, skip: u32) {
        self.begin_load();

        match catalog.list(limit, skip).await {
            Ok(page) => {
                self.loading = false;
                self.products = page.products;
                self.total = page.total;
                self.skip = page.skip;
                self.limit = page.limit;
                self.featured = self.products.iter().take(HIGHLIGHT_COUNT).cloned().collect();
                self.new_arrivals = self
                    .products
                    .iter()
                    .rev()
                    .take(HIGHLIGHT_COUNT)
                    .cloned()
                    .collect();
            }
            Err(e) => self.fail("Failed to fetch products", e),
        }
    }

    /// Home-page load: the product page and the category list are fetched
    /// concurrently, then both committed in one step. A categories failure
    /// is not page-fatal; the existing list stays.
    pub async fn load_home(&mut self, catalog: &dyn CatalogApi, limit: u32) {
        self.begin_load();

        let (page, categories) = futures::join!(catalog.list(limit, 0), catalog.list_categories());

        match page {
            Ok(page) => {
                self.loading = false;
                self.products = page.products;
                self.total = page.total;
                self.skip = page.skip;
                self.limit = page.limit;
                self.featured = self.products.iter().take(HIGHLIGHT_COUNT).cloned().collect();
                self.new_arrivals = self
                    .products
                    .iter()
                    .rev()
                    .take(HIGHLIGHT_COUNT)
                    .cloned()
                    .collect();
            }
            Err(e) => self.fail("Failed to fetch products", e),
        }

        match categories {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!("Failed to fetch categories: {}", e),
        }
    }

    pub async fn load_product(&mut self, catalog: &dyn CatalogApi, id: u32) {
        self.begin_load();

        match catalog.get_by_id(id).await {
            Ok(product) => {
                self.loading = false;
                self.selected = Some(product);
            }
            Err(e) => {
                self.selected = None;
                self.fail("Failed to fetch product", e);
            }
        }
    }

    pub async fn load_filtered(
        &mut self,
        catalog: &dyn CatalogApi,
        spec: &FilterSpec,
        limit: u32,
        skip: u32,
    ) {
        self.begin_load();
        let engine = FilterEngine;

        match engine.fetch_filtered(catalog, spec, limit, skip).await {
            Ok(page) => {
                self.loading = false;
                self.products = page.products;
                self.total = page.total;
                self.skip = page.skip;
                self.limit = page.limit;
            }
            Err(e) => self.fail("Failed to fetch filtered products", e),
        }
    }

    pub async fn load_category(
        &mut self,
        catalog: &dyn CatalogApi,
        category: &str,
        limit: u32,
        skip: u32,
    ) {
        self.begin_load();

        match catalog.list_by_category(category, limit, skip).await {
            Ok(page) => {
                self.loading = false;
                self.products = page.products;
                self.total = page.total;
                self.skip = page.skip;
                self.limit = page.limit;
            }
            Err(e) => self.fail("Failed to fetch products by category", e),
        }
    }

    pub async fn load_categories(&mut self, catalog: &dyn CatalogApi) {
        match catalog.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!("Failed to fetch categories: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductPage;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    fn product(id: u32) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price: id as f64,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 3,
            brand: "Acme".to_string(),
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    struct FakeCatalog {
        products: Vec<Product>,
        fail: bool,
    }

    impl FakeCatalog {
        fn page(&self) -> Result<ProductPage> {
            if self.fail {
                return Err(anyhow!("connection refused"));
            }
            Ok(ProductPage {
                products: self.products.clone(),
                total: self.products.len() as u32,
                skip: 0,
                limit: 12,
            })
        }
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn list(&self, _limit: u32, _skip: u32) -> Result<ProductPage> {
            self.page()
        }

        async fn get_by_id(&self, id: u32) -> Result<Product> {
            if self.fail {
                return Err(anyhow!("connection refused"));
            }
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("HTTP error: 404 Not Found"))
        }

        async fn list_by_category(
            &self,
            _category: &str,
            _limit: u32,
            _skip: u32,
        ) -> Result<ProductPage> {
            self.page()
        }

        async fn search(&self, _query: &str) -> Result<ProductPage> {
            self.page()
        }

        async fn list_categories(&self) -> Result<Vec<String>> {
            if self.fail {
                return Err(anyhow!("connection refused"));
            }
            Ok(vec!["smartphones".to_string(), "laptops".to_string()])
        }
    }

    #[tokio::test]
    async fn test_load_page_derives_highlight_rows() {
        let catalog = FakeCatalog {
            products: (1..=8).map(product).collect(),
            fail: false,
        };
        let mut state = ProductState::new();

        state.load_page(&catalog, 12, 0).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.products.len(), 8);
        assert_eq!(state.total, 8);

        let featured: Vec<u32> = state.featured.iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 3, 4, 5]);

        let arrivals: Vec<u32> = state.new_arrivals.iter().map(|p| p.id).collect();
        assert_eq!(arrivals, vec![8, 7, 6, 5, 4]);
    }

    #[tokio::test]
    async fn test_failed_load_stores_message_and_stops_loading() {
        let catalog = FakeCatalog {
            products: Vec::new(),
            fail: true,
        };
        let mut state = ProductState::new();

        state.load_page(&catalog, 12, 0).await;

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch products"));
        assert!(state.products.is_empty());
    }

    #[tokio::test]
    async fn test_load_home_fills_page_and_categories() {
        let catalog = FakeCatalog {
            products: (1..=3).map(product).collect(),
            fail: false,
        };
        let mut state = ProductState::new();

        state.load_home(&catalog, 12).await;

        assert_eq!(state.products.len(), 3);
        assert_eq!(state.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_categories_failure_keeps_existing_list() {
        let mut state = ProductState::new();
        state.categories = vec!["smartphones".to_string()];

        let catalog = FakeCatalog {
            products: Vec::new(),
            fail: true,
        };
        state.load_categories(&catalog).await;

        assert_eq!(state.categories, vec!["smartphones".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_product_clears_selection() {
        let catalog = FakeCatalog {
            products: vec![product(1)],
            fail: false,
        };
        let mut state = ProductState::new();
        state.selected = Some(product(1));

        state.load_product(&catalog, 99).await;

        assert!(state.selected.is_none());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch product"));
    }

    #[tokio::test]
    async fn test_load_category_overwrites_the_page_slice() {
        let catalog = FakeCatalog {
            products: (1..=2).map(product).collect(),
            fail: false,
        };
        let mut state = ProductState::new();
        state.products = (10..=20).map(product).collect();

        state.load_category(&catalog, "misc", 12, 0).await;

        assert_eq!(state.products.len(), 2);
        assert_eq!(state.total, 2);
    }
}
