//! Configuration validation module.
//!
//! Collects every problem in one pass so a broken deployment reports all of
//! them at once instead of failing on the first render.

use crate::{AppConfig, CacheBackend, CacheConfig, StorefrontConfig, REQUIRED_ROUTES};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Sale category slug is empty.
    EmptySaleSlug,
    /// No page sizes are offered.
    NoItemsPerPageOptions,
    /// A page size of zero is offered.
    ZeroItemsPerPage,
    /// The default page size is not one of the offered sizes.
    DefaultItemsPerPageNotOffered { default: u64 },
    /// The default sort key is missing from the sort table.
    DefaultSortMissing { default: String },
    /// The page selector range must be at least 1.
    InvalidPageRange { value: u64 },
    /// No languages configured for the language selector.
    NoLanguages,
    /// TTL value must be positive.
    NonPositiveTtl { name: String },
    /// Redis URL required for the redis cache backend.
    MissingRedisUrl,
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// A route every page links to has no template.
    MissingRoute { name: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySaleSlug => write!(f, "Sale category slug must not be empty"),
            Self::NoItemsPerPageOptions => {
                write!(f, "At least one items-per-page option is required")
            }
            Self::ZeroItemsPerPage => write!(f, "Items-per-page options must be positive"),
            Self::DefaultItemsPerPageNotOffered { default } => {
                write!(
                    f,
                    "Default items per page ({}) is not one of the offered options",
                    default
                )
            }
            Self::DefaultSortMissing { default } => {
                write!(f, "Default sort '{}' is missing from the sort table", default)
            }
            Self::InvalidPageRange { value } => {
                write!(f, "Invalid page range: {} (must be at least 1)", value)
            }
            Self::NoLanguages => write!(f, "At least one language is required"),
            Self::NonPositiveTtl { name } => write!(f, "TTL '{}' must be positive", name),
            Self::MissingRedisUrl => write!(f, "Redis URL required when the cache backend is redis"),
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::MissingRoute { name } => write!(f, "Missing route template for '{}'", name),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Result of configuration validation containing all errors found.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut result = ValidationResult::default();

        Self::validate_storefront(&config.storefront, &mut result);
        Self::validate_cache(&config.cache, &mut result);
        Self::validate_routes(&config.routes, &mut result);

        result.into_result()
    }

    fn validate_storefront(config: &StorefrontConfig, result: &mut ValidationResult) {
        if config.sale_slug.trim().is_empty() {
            result.add_error(ConfigValidationError::EmptySaleSlug);
        }

        if config.items_per_page.is_empty() {
            result.add_error(ConfigValidationError::NoItemsPerPageOptions);
        } else if !config.items_per_page.contains(&config.default_items_per_page) {
            result.add_error(ConfigValidationError::DefaultItemsPerPageNotOffered {
                default: config.default_items_per_page,
            });
        }

        if config.items_per_page.contains(&0) {
            result.add_error(ConfigValidationError::ZeroItemsPerPage);
        }

        if !config.sort.contains_key(&config.default_sort) {
            result.add_error(ConfigValidationError::DefaultSortMissing {
                default: config.default_sort.clone(),
            });
        }

        if config.page_range == 0 {
            result.add_error(ConfigValidationError::InvalidPageRange {
                value: config.page_range,
            });
        }

        if config.languages.is_empty() {
            result.add_error(ConfigValidationError::NoLanguages);
        }
    }

    fn validate_cache(config: &CacheConfig, result: &mut ValidationResult) {
        if config.category_menu_ttl_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTtl {
                name: "category_menu_ttl_secs".to_string(),
            });
        }

        if config.backend != CacheBackend::Redis {
            return;
        }

        match &config.redis_url {
            None => result.add_error(ConfigValidationError::MissingRedisUrl),
            Some(url) => {
                if let Err(e) = Url::parse(url) {
                    result.add_error(ConfigValidationError::InvalidUrl {
                        url_type: "redis".to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    fn validate_routes(routes: &BTreeMap<String, String>, result: &mut ValidationResult) {
        for name in REQUIRED_ROUTES {
            if !routes.contains_key(*name) {
                result.add_error(ConfigValidationError::MissingRoute {
                    name: (*name).to_string(),
                });
            }
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
