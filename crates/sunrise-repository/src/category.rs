//! Category entity as delivered by the product catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use sunrise_core::{CategoryId, SunriseError, SunriseResult};

/// A string with one value per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(pub BTreeMap<String, String>);

impl LocalizedString {
    /// Creates an empty localized string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `locale`.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(locale.into(), value.into());
        self
    }

    /// Returns the value for `locale`.
    ///
    /// An exact match wins; otherwise the primary language subtag is tried
    /// (`de-DE` falls back to `de`).
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        if let Some(value) = self.0.get(locale) {
            return Some(value.as_str());
        }
        let language = primary_language(locale);
        if language == locale {
            return None;
        }
        self.0.get(language).map(String::as_str)
    }
}

fn primary_language(locale: &str) -> &str {
    locale
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or(locale)
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Catalog id.
    pub id: CategoryId,
    /// Display name per locale.
    pub name: LocalizedString,
    /// URL slug per locale.
    pub slug: LocalizedString,
    /// Parent category; `None` marks a root.
    #[serde(default)]
    pub parent: Option<CategoryId>,
    /// Sort key among siblings, lower first.
    #[serde(default)]
    pub order_hint: i32,
}

impl Category {
    /// Creates a root category with a single-locale name and slug.
    #[must_use]
    pub fn root(id: impl Into<CategoryId>, locale: &str, name: &str, slug: &str, order_hint: i32) -> Self {
        Self {
            id: id.into(),
            name: LocalizedString::new().with(locale, name),
            slug: LocalizedString::new().with(locale, slug),
            parent: None,
            order_hint,
        }
    }

    /// Creates a child of `parent` with a single-locale name and slug.
    #[must_use]
    pub fn child_of(
        parent: impl Into<CategoryId>,
        id: impl Into<CategoryId>,
        locale: &str,
        name: &str,
        slug: &str,
        order_hint: i32,
    ) -> Self {
        Self {
            parent: Some(parent.into()),
            ..Self::root(id, locale, name, slug, order_hint)
        }
    }

    /// Returns true if this category has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the display name for `locale`.
    pub fn name_in(&self, locale: &str) -> SunriseResult<&str> {
        self.name
            .get(locale)
            .ok_or_else(|| SunriseError::missing_translation(format!("category.{}.name", self.id), locale))
    }

    /// Returns the URL slug for `locale`.
    pub fn slug_in(&self, locale: &str) -> SunriseResult<&str> {
        self.slug
            .get(locale)
            .ok_or_else(|| SunriseError::missing_translation(format!("category.{}.slug", self.id), locale))
    }
}
