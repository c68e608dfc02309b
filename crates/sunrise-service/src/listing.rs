//! Listing request parameters.

use serde::{Deserialize, Serialize};
use sunrise_config::StorefrontConfig;
use sunrise_core::{PageRequest, SunriseError, SunriseResult, FIRST_PAGE};
use url::Url;

use crate::pagination::PAGE_QUERY;

/// Query parameter carrying the requested page size.
pub const ITEMS_QUERY: &str = "items";

/// Query parameter carrying the requested sort key.
pub const SORT_QUERY: &str = "sort";

/// Listing parameters as requested by the shopper.
///
/// Values are untrusted; the accessors clamp them to what the storefront
/// offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Requested page (1-based).
    pub page: Option<i64>,
    /// Requested page size.
    pub items: Option<u64>,
    /// Requested sort key.
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Reads the listing parameters from a request URL.
    ///
    /// Unparseable numbers are treated as absent. The last occurrence of a
    /// repeated parameter wins.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let mut query = Self::default();
        for (key, value) in url.query_pairs() {
            match &*key {
                PAGE_QUERY => query.page = value.parse().ok(),
                ITEMS_QUERY => query.items = value.parse().ok(),
                SORT_QUERY => query.sort = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// The page to show, at least 1.
    #[must_use]
    pub fn current_page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page.unsigned_abs(),
            _ => FIRST_PAGE,
        }
    }

    /// The page size to use, falling back to the default unless the request
    /// names one of the offered sizes.
    #[must_use]
    pub fn items_per_page(&self, config: &StorefrontConfig) -> u64 {
        match self.items {
            Some(items) if config.items_per_page.contains(&items) => items,
            _ => config.default_items_per_page,
        }
    }

    /// The listing sort expression for the requested sort key.
    ///
    /// Unknown keys fall back to the default key.
    pub fn sort<'a>(&self, config: &'a StorefrontConfig) -> SunriseResult<&'a str> {
        if let Some(expression) = self
            .sort
            .as_deref()
            .and_then(|key| config.sort.get(key))
            .map(String::as_str)
        {
            return Ok(expression);
        }
        config
            .sort
            .get(&config.default_sort)
            .map(String::as_str)
            .ok_or_else(|| {
                SunriseError::configuration(format!(
                    "Default sort '{}' has no sort expression",
                    config.default_sort
                ))
            })
    }

    /// The page of items to fetch.
    ///
    /// The page is capped so that its item offset fits in a `u64`.
    #[must_use]
    pub fn page_request(&self, config: &StorefrontConfig) -> PageRequest {
        let size = self.items_per_page(config).max(1);
        PageRequest::new(self.current_page().min(u64::MAX / size), size)
    }
}
