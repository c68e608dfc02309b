//! Page arithmetic for product listings.
//!
//! Listing pages are 1-based: page 1 starts at item offset 0.

use serde::{Deserialize, Serialize};

/// The first page number.
pub const FIRST_PAGE: u64 = 1;

/// A request for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-based).
    pub page: u64,
    /// The number of items per page (at least 1).
    pub size: u64,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: u64 = 12;

    /// Creates a new page request, clamping page and size to at least 1.
    #[must_use]
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            size: size.max(1),
        }
    }

    /// Creates a request for the first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(FIRST_PAGE, Self::DEFAULT_SIZE)
    }

    /// Returns the request for the page that contains the item at `offset`.
    #[must_use]
    pub fn containing(offset: u64, size: u64) -> Self {
        let size = size.max(1);
        Self::new((offset / size).saturating_add(1), size)
    }

    /// Returns the zero-based item offset of the first item on this page.
    ///
    /// Saturates at `u64::MAX` for pages beyond any addressable item.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Returns the limit for listing queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Number of pages needed to show `total_items` at `size` items per page.
///
/// A size of zero is treated as one.
#[must_use]
pub fn total_pages(total_items: u64, size: u64) -> u64 {
    total_items.div_ceil(size.max(1))
}
