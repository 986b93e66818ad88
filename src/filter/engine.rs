use anyhow::Result;
use tracing::info;

use crate::catalog::CatalogApi;
use crate::models::{FilterSpec, Product, ProductPage, SortKey};

pub struct FilterEngine;

impl FilterEngine {
    /// Produces one result page for the given filter spec.
    ///
    /// A set category hands the whole request to the server's by-category
    /// endpoint and skips every other dimension, matching the upstream
    /// catalog's paging. Otherwise a general page is fetched and the
    /// remaining dimensions run client-side, in order: price range, rating
    /// threshold, brand, then sort. When any client-side filter applied,
    /// the returned `total` is the filtered count.
    pub async fn fetch_filtered(
        &self,
        catalog: &dyn CatalogApi,
        spec: &FilterSpec,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage> {
        if let Some(category) = &spec.category {
            return catalog.list_by_category(category, limit, skip).await;
        }

        let page = catalog.list(limit, skip).await?;
        let mut products = self.apply_filters(&page.products, spec);

        if let Some(sort) = spec.sort {
            self.sort_products(&mut products, sort);
        }

        let total = if spec.has_client_filters() {
            info!(
                "Client-side filters kept {} of {} products",
                products.len(),
                page.products.len()
            );
            products.len() as u32
        } else {
            page.total
        };

        Ok(ProductPage {
            products,
            total,
            skip,
            limit,
        })
    }

    /// Applies the client-side dimensions. Order is preserved; the filter
    /// step never reorders.
    pub fn apply_filters(&self, products: &[Product], spec: &FilterSpec) -> Vec<Product> {
        products
            .iter()
            .filter(|p| {
                if let Some(range) = &spec.price_range {
                    if p.price < range.min || p.price > range.max {
                        return false;
                    }
                }

                if let Some(min_rating) = spec.min_rating {
                    if p.rating < min_rating {
                        return false;
                    }
                }

                if let Some(brand) = &spec.brand {
                    if !p.brand.eq_ignore_ascii_case(brand) {
                        return false;
                    }
                }

                true
            })
            .cloned()
            .collect()
    }

    /// Stable sorts over the filtered set. `Newest` keeps fetch order: the
    /// upstream catalog exposes no recency field to sort by.
    pub fn sort_products(&self, products: &mut [Product], sort: SortKey) {
        match sort {
            SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Newest => {}
        }
    }
}
