//! Repository trait definitions.

use crate::CategoryCollection;
use async_trait::async_trait;
use sunrise_core::{Interface, SunriseResult};

/// Category repository trait.
///
/// Implementations return the whole category set for the storefront; the
/// menu builder walks it through the collection's parent index.
#[async_trait]
pub trait CategoryRepository: Interface + Send + Sync {
    /// Fetches all categories.
    async fn get_categories(&self) -> SunriseResult<CategoryCollection>;
}
