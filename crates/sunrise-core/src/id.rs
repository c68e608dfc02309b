//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for category IDs.
///
/// Category ids come from the product catalog and are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Creates a new category ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_display() {
        let id = CategoryId::new("c-42");
        assert_eq!(id.to_string(), "c-42");
        assert_eq!(id.as_str(), "c-42");
    }

    #[test]
    fn test_category_id_serializes_transparently() {
        let id = CategoryId::from("root");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"root\"");

        let parsed: CategoryId = serde_json::from_str("\"child\"").unwrap();
        assert_eq!(parsed, CategoryId::from("child"));
    }
}
