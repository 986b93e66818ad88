use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub notifications: NotificationSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub base_url: String,
    pub default_page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    pub debounce_ms: u64,
    pub min_query_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSection {
    pub toast_ttl_secs: u64,
}

impl Default for CatalogSection {
    fn default() -> Self {
        CatalogSection {
            base_url: "https://dummyjson.com".to_string(),
            default_page_size: 12,
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchSection {
            debounce_ms: 300,
            min_query_len: 2,
        }
    }
}

impl Default for NotificationSection {
    fn default() -> Self {
        NotificationSection { toast_ttl_secs: 5 }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            catalog: CatalogSection::default(),
            search: SearchSection::default(),
            notifications: NotificationSection::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: StoreConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    /// Loads the config file if present, otherwise falls back to the
    /// built-in defaults. Core logic reads no environment variables.
    pub fn load_or_default(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {}", e);
                StoreConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.is_empty() {
            return Err(anyhow::anyhow!("Catalog base URL is empty"));
        }

        if self.catalog.default_page_size == 0 {
            return Err(anyhow::anyhow!("Default page size must be at least 1"));
        }

        Ok(())
    }
}
