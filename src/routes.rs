/// The navigation surface: a routing table, not a protocol. Unmatched
/// paths (including malformed product ids) fall back to the deals view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail(u32),
    Category(String),
    Deals,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products,
            ["product", id] => id
                .parse()
                .map(Route::ProductDetail)
                .unwrap_or(Route::Deals),
            ["category", category] => Route::Category((*category).to_string()),
            _ => Route::Deals,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/product/{}", id),
            Route::Category(category) => format!("/category/{}", category),
            Route::Deals => "/deals".to_string(),
        }
    }
}
