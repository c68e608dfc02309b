//! Page selector planning for product listings.
//!
//! The selector shows a bounded window of page links around the current page.
//! With the default range of 2 at most seven numbered links are shown:
//!
//! ```text
//! small       1 2 3 4 5 6 7
//! near start  1 2 3 4 5 6        » last
//! middle      first «   3 4 5 6 7   » last
//! near end    first «   4 5 6 7 8 9
//! ```

use serde::{Deserialize, Serialize};
use sunrise_core::{total_pages, PageRequest, FIRST_PAGE};
use url::Url;

/// Query parameter carrying the page number.
pub const PAGE_QUERY: &str = "page";

/// Default number of pages shown on each side of the current page.
pub const PAGE_SELECTOR_RANGE: u64 = 2;

/// A numbered link in the page selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    /// Page number (1-based).
    pub number: u64,
    /// Listing URL for this page.
    pub url: String,
    /// True for the page being displayed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// Page selector for one listing render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationPlan {
    /// Current page (1-based).
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Numbered links, ascending.
    pub pages: Vec<PageLink>,
    /// Jump-to-first link, shown when page 1 is outside the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<PageLink>,
    /// Jump-to-last link, shown when the last page is outside the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<PageLink>,
    /// URL of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    /// URL of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

/// Computes page selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPlanner {
    page_range: u64,
}

impl Default for PaginationPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationPlanner {
    /// Creates a planner with the default range.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page_range: PAGE_SELECTOR_RANGE,
        }
    }

    /// Creates a planner showing `page_range` pages on each side of the
    /// current one.
    #[must_use]
    pub const fn with_page_range(page_range: u64) -> Self {
        Self { page_range }
    }

    /// Pages shown on each side of the current page.
    #[must_use]
    pub const fn page_range(&self) -> u64 {
        self.page_range
    }

    /// Plans the page selector for a listing.
    ///
    /// `offset` is the zero-based index of the first item on the current
    /// page. An `items_per_page` of zero is treated as one.
    #[must_use]
    pub fn plan(&self, base_url: &Url, offset: u64, total_items: u64, items_per_page: u64) -> PaginationPlan {
        let current_page = PageRequest::containing(offset, items_per_page).page;
        let total_pages = total_pages(total_items, items_per_page);

        let range = self.page_range;
        let displayed_pages = range.saturating_mul(2).saturating_add(3);

        let mut plan = PaginationPlan {
            current_page,
            total_pages,
            ..PaginationPlan::default()
        };

        if total_pages <= displayed_pages {
            plan.pages = page_links(base_url, FIRST_PAGE, total_pages, current_page);
        } else if current_page < displayed_pages - range {
            plan.pages = page_links(base_url, FIRST_PAGE, displayed_pages - 1, current_page);
            plan.last_page = Some(page_link(base_url, total_pages));
        } else if current_page > total_pages - range - 2 {
            plan.pages = page_links(
                base_url,
                total_pages - displayed_pages + 2,
                total_pages,
                current_page,
            );
            plan.first_page = Some(page_link(base_url, FIRST_PAGE));
        } else {
            plan.pages = page_links(
                base_url,
                current_page - range,
                current_page + range,
                current_page,
            );
            plan.first_page = Some(page_link(base_url, FIRST_PAGE));
            plan.last_page = Some(page_link(base_url, total_pages));
        }

        if current_page > FIRST_PAGE {
            plan.previous_url = Some(page_url(base_url, current_page - 1).into());
        }
        if current_page < total_pages {
            plan.next_url = Some(page_url(base_url, current_page + 1).into());
        }

        plan
    }
}

fn page_links(base_url: &Url, start: u64, stop: u64, current_page: u64) -> Vec<PageLink> {
    (start..=stop)
        .map(|number| PageLink {
            selected: number == current_page,
            ..page_link(base_url, number)
        })
        .collect()
}

fn page_link(base_url: &Url, number: u64) -> PageLink {
    PageLink {
        number,
        url: page_url(base_url, number).into(),
        selected: false,
    }
}

/// Returns `base_url` pointing at page `number`.
#[must_use]
pub fn page_url(base_url: &Url, number: u64) -> Url {
    with_query_value(base_url, PAGE_QUERY, &number.to_string())
}

/// Returns a copy of `url` with every `key` query parameter replaced by a
/// single `key=value` pair appended after the remaining parameters.
#[must_use]
pub fn with_query_value(url: &Url, key: &str, value: &str) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut result = url.clone();
    result
        .query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(key, value);
    result
}
