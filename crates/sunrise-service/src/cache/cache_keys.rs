//! Cache key generators for consistent key naming.

/// Prefix of the per-locale category menu entries.
pub const CATEGORY_MENU_PREFIX: &str = "category-menu-";

/// Generate the cache key of the category menu for a locale.
#[must_use]
pub fn category_menu(locale: &str) -> String {
    format!("{}{}", CATEGORY_MENU_PREFIX, locale)
}
