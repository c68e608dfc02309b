//! In-memory category repository.

use crate::{Category, CategoryCollection, CategoryRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use sunrise_core::{SunriseError, SunriseResult};
use tracing::{debug, info};

/// Category repository backed by an in-process snapshot.
///
/// The snapshot can be swapped at runtime with [`replace`](Self::replace),
/// e.g. after a catalog export has been re-read.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    /// Creates a repository holding `categories`.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    /// Parses a JSON array of categories.
    pub fn from_json_str(json: &str) -> SunriseResult<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)
            .map_err(|e| SunriseError::repository(format!("Invalid category data: {}", e)))?;
        debug!("Parsed {} categories", categories.len());
        Ok(Self::new(categories))
    }

    /// Reads a JSON array of categories from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SunriseResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SunriseError::repository(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let repository = Self::from_json_str(&json)?;
        info!("Loaded category snapshot from {}", path.display());
        Ok(repository)
    }

    /// Replaces the snapshot.
    pub fn replace(&self, categories: Vec<Category>) {
        let mut current = self.categories.write();
        debug!("Replacing {} categories with {}", current.len(), categories.len());
        *current = categories;
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_categories(&self) -> SunriseResult<CategoryCollection> {
        let categories = self.categories.read().clone();
        Ok(CategoryCollection::new(categories))
    }
}
