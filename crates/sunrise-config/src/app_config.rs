//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use sunrise_core::telemetry::LoggingConfig;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Storefront presentation settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Translation settings.
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Route templates used by the URL generator, keyed by route name.
    #[serde(default = "default_routes")]
    pub routes: BTreeMap<String, String>,

    /// Logging configuration.
    #[serde(default)]
    pub observability: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppMetadata::default(),
            storefront: StorefrontConfig::default(),
            i18n: I18nConfig::default(),
            cache: CacheConfig::default(),
            routes: default_routes(),
            observability: LoggingConfig::default(),
        }
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "sunrise".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Storefront presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Slug of the root category flagged as the sale category in the menu.
    pub sale_slug: String,
    /// Base path of static assets handed to templates.
    pub assets_path: String,
    /// Phone number interpolated into the header "call us" text.
    pub call_us: String,
    /// Languages offered in the header language selector.
    pub languages: Vec<String>,
    /// Countries offered in the header country selector.
    pub countries: Vec<String>,
    /// Page sizes a shopper may pick on listings.
    pub items_per_page: Vec<u64>,
    /// Page size used when the request asks for none or an unsupported one.
    pub default_items_per_page: u64,
    /// Sort keys accepted from the request, mapped to listing sort expressions.
    pub sort: BTreeMap<String, String>,
    /// Sort key used when the request asks for none or an unknown one.
    pub default_sort: String,
    /// Pages shown on each side of the current page in the page selector.
    pub page_range: u64,
    /// Highest quantity offered in the add-to-bag selector.
    pub max_bag_quantity: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let sort = [
            ("new", "createdAt desc"),
            ("price-asc", "price asc"),
            ("price-desc", "price desc"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            sale_slug: "sale".to_string(),
            assets_path: "/assets/".to_string(),
            call_us: "+49 89 12345678".to_string(),
            languages: vec!["de".to_string(), "en".to_string()],
            countries: vec!["DE".to_string(), "AT".to_string()],
            items_per_page: vec![12, 24, 48],
            default_items_per_page: 12,
            sort,
            default_sort: "new".to_string(),
            page_range: 2,
            max_bag_quantity: 9,
        }
    }
}

/// Translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Translation domain used when a caller names none.
    pub default_namespace: String,
    /// Prepended to parameter names to form message placeholders.
    pub interpolation_prefix: String,
    /// Appended to parameter names to form message placeholders.
    pub interpolation_suffix: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_namespace: "main".to_string(),
            interpolation_prefix: "__".to_string(),
            interpolation_suffix: "__".to_string(),
        }
    }
}

/// Cache backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local cache with TTL expiry.
    #[default]
    Memory,
    /// Shared Redis cache.
    Redis,
    /// No caching; every lookup misses.
    Disabled,
}

/// Cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend to use.
    pub backend: CacheBackend,
    /// Redis URL (required for the redis backend).
    pub redis_url: Option<String>,
    /// Redis connection pool size.
    pub redis_pool_size: usize,
    /// TTL of the cached category menu in seconds.
    pub category_menu_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis_url: None,
            redis_pool_size: 10,
            category_menu_ttl_secs: 3600, // 1 hour
        }
    }
}

impl CacheConfig {
    /// Returns the category menu TTL as a Duration.
    #[must_use]
    pub const fn category_menu_ttl(&self) -> Duration {
        Duration::from_secs(self.category_menu_ttl_secs)
    }
}

/// Route names every storefront page links to.
pub const REQUIRED_ROUTES: &[&str] = &["home", "category", "cart", "cart_add"];

/// Default route templates.
#[must_use]
pub fn default_routes() -> BTreeMap<String, String> {
    [
        ("home", "/{locale}/"),
        ("category", "/{locale}/{category}"),
        ("cart", "/{locale}/cart"),
        ("cart_add", "/{locale}/cart/add"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
