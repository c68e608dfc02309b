//! Parent-indexed view over a flat list of categories.

use crate::Category;
use std::collections::HashMap;
use sunrise_core::CategoryId;

/// A flat set of categories indexed by parent.
///
/// Iteration order of [`roots`](Self::roots) and [`by_parent`](Self::by_parent)
/// follows the order the categories were supplied in, so a stable sort on top
/// keeps ties in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CategoryCollection {
    categories: Vec<Category>,
    roots: Vec<usize>,
    children: HashMap<CategoryId, Vec<usize>>,
}

impl CategoryCollection {
    /// Builds the collection and its parent index.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let mut roots = Vec::new();
        let mut children: HashMap<CategoryId, Vec<usize>> = HashMap::new();

        for (index, category) in categories.iter().enumerate() {
            match &category.parent {
                None => roots.push(index),
                Some(parent) => children.entry(parent.clone()).or_default().push(index),
            }
        }

        Self {
            categories,
            roots,
            children,
        }
    }

    /// Returns all categories without a parent.
    #[must_use]
    pub fn roots(&self) -> Vec<&Category> {
        self.roots.iter().map(|&i| &self.categories[i]).collect()
    }

    /// Returns the direct children of `parent`.
    #[must_use]
    pub fn by_parent(&self, parent: &CategoryId) -> Vec<&Category> {
        self.children
            .get(parent)
            .map(|indexes| indexes.iter().map(|&i| &self.categories[i]).collect())
            .unwrap_or_default()
    }

    /// Finds a category by id.
    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the collection holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over all categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

impl From<Vec<Category>> for CategoryCollection {
    fn from(categories: Vec<Category>) -> Self {
        Self::new(categories)
    }
}
