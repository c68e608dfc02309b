//! Category navigation menu.
//!
//! The menu is the category tree cut at three levels, each level ordered by
//! order hint. It is cached per locale and rebuilt from the repository on a
//! miss.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::routing::UrlGenerator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use sunrise_config::AppConfig;
use sunrise_core::SunriseResult;
use sunrise_repository::{Category, CategoryCollection, CategoryRepository};
use tracing::{debug, info};

/// Route used for category links.
pub const CATEGORY_ROUTE: &str = "category";

/// Deepest menu level rendered (roots are level 1).
pub const MAX_MENU_DEPTH: usize = 3;

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeNode {
    /// Localized category name.
    pub label: String,
    /// Category page URL.
    pub link: String,
    /// Sub-entries in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryTreeNode>,
    /// Marks the sale category.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sale: bool,
}

/// Builds the category navigation menu with cache-aside population.
#[derive(Clone)]
pub struct CategoryMenuBuilder {
    repository: Arc<dyn CategoryRepository>,
    cache: Arc<dyn CacheInterface>,
    urls: Arc<dyn UrlGenerator>,
    sale_slug: String,
    ttl: Duration,
}

impl CategoryMenuBuilder {
    /// Creates a new builder.
    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        cache: Arc<dyn CacheInterface>,
        urls: Arc<dyn UrlGenerator>,
        sale_slug: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            urls,
            sale_slug: sale_slug.into(),
            ttl,
        }
    }

    /// Creates a builder with the sale slug and TTL from configuration.
    pub fn from_config(
        repository: Arc<dyn CategoryRepository>,
        cache: Arc<dyn CacheInterface>,
        urls: Arc<dyn UrlGenerator>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            repository,
            cache,
            urls,
            config.storefront.sale_slug.clone(),
            config.cache.category_menu_ttl(),
        )
    }

    /// Returns the menu for `locale`, from cache when available.
    pub async fn build(&self, locale: &str) -> SunriseResult<Vec<CategoryTreeNode>> {
        let key = cache_keys::category_menu(locale);
        self.cache
            .get_or_set(&key, self.ttl, || self.rebuild(locale))
            .await
    }

    /// Drops the cached menu for `locale`.
    ///
    /// Returns true if an entry was removed.
    pub async fn invalidate(&self, locale: &str) -> SunriseResult<bool> {
        let removed = self.cache.delete(&cache_keys::category_menu(locale)).await?;
        info!(locale, removed, "Category menu invalidated");
        Ok(removed)
    }

    async fn rebuild(&self, locale: &str) -> SunriseResult<Vec<CategoryTreeNode>> {
        let categories = self.repository.get_categories().await?;
        let menu = build_menu(&categories, locale, self.urls.as_ref(), &self.sale_slug)?;
        debug!(locale, roots = menu.len(), "Category menu built");
        Ok(menu)
    }
}

impl std::fmt::Debug for CategoryMenuBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryMenuBuilder")
            .field("sale_slug", &self.sale_slug)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Builds the menu tree for `locale` from a category collection.
pub fn build_menu(
    categories: &CategoryCollection,
    locale: &str,
    urls: &dyn UrlGenerator,
    sale_slug: &str,
) -> SunriseResult<Vec<CategoryTreeNode>> {
    let menu = MenuContext {
        categories,
        locale,
        urls,
    };

    sorted(categories.roots())
        .into_iter()
        .map(|root| -> SunriseResult<CategoryTreeNode> {
            let mut node = menu.node(root, 1)?;
            node.sale = root.slug_in(locale)? == sale_slug;
            Ok(node)
        })
        .collect()
}

struct MenuContext<'a> {
    categories: &'a CategoryCollection,
    locale: &'a str,
    urls: &'a dyn UrlGenerator,
}

impl MenuContext<'_> {
    fn node(&self, category: &Category, depth: usize) -> SunriseResult<CategoryTreeNode> {
        let slug = category.slug_in(self.locale)?;
        let link = self.urls.generate(
            CATEGORY_ROUTE,
            &[("locale", self.locale), ("category", slug)],
        )?;

        let children = if depth < MAX_MENU_DEPTH {
            sorted(self.categories.by_parent(&category.id))
                .into_iter()
                .map(|child| self.node(child, depth + 1))
                .collect::<SunriseResult<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(CategoryTreeNode {
            label: category.name_in(self.locale)?.to_string(),
            link,
            children,
            sale: false,
        })
    }
}

// Stable: equal hints keep catalog order.
fn sorted(mut categories: Vec<&Category>) -> Vec<&Category> {
    categories.sort_by_key(|category| category.order_hint);
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCacheService;
    use crate::routing::RouteTable;
    use async_trait::async_trait;
    use mockall::mock;
    use sunrise_config::default_routes;
    use sunrise_core::SunriseError;

    mock! {
        Repo {}

        #[async_trait]
        impl CategoryRepository for Repo {
            async fn get_categories(&self) -> SunriseResult<CategoryCollection>;
        }
    }

    /// Cache whose backend is unreachable.
    struct BrokenCache;

    #[async_trait]
    impl CacheInterface for BrokenCache {
        async fn get_raw(&self, _key: &str) -> SunriseResult<Option<String>> {
            Err(SunriseError::cache("connection refused"))
        }

        async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> SunriseResult<()> {
            Err(SunriseError::cache("connection refused"))
        }

        async fn delete(&self, _key: &str) -> SunriseResult<bool> {
            Err(SunriseError::cache("connection refused"))
        }

        async fn exists(&self, _key: &str) -> SunriseResult<bool> {
            Err(SunriseError::cache("connection refused"))
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    fn catalog() -> Vec<Category> {
        vec![
            Category::root("1", "en", "B", "b", 2),
            Category::root("2", "en", "A", "a", 1),
            Category::root("3", "en", "Sale", "sale", 3),
            Category::child_of("2", "21", "en", "A-2", "a-2", 5),
            Category::child_of("2", "22", "en", "A-1", "a-1", 1),
            Category::child_of("22", "221", "en", "A-1-x", "a-1-x", 0),
            Category::child_of("22", "222", "en", "A-1-y", "a-1-y", 0),
            Category::child_of("221", "2211", "en", "Too deep", "too-deep", 0),
        ]
    }

    fn urls() -> Arc<dyn UrlGenerator> {
        Arc::new(RouteTable::new(default_routes()))
    }

    fn repo_returning(categories: Vec<Category>, calls: usize) -> Arc<MockRepo> {
        let mut repo = MockRepo::new();
        repo.expect_get_categories()
            .times(calls)
            .returning(move || Ok(CategoryCollection::new(categories.clone())));
        Arc::new(repo)
    }

    fn builder(repo: Arc<MockRepo>, cache: Arc<dyn CacheInterface>) -> CategoryMenuBuilder {
        CategoryMenuBuilder::new(repo, cache, urls(), "sale", Duration::from_secs(3600))
    }

    fn labels(nodes: &[CategoryTreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn test_roots_ordered_by_hint() {
        let collection = CategoryCollection::new(catalog());
        let menu = build_menu(&collection, "en", urls().as_ref(), "sale").unwrap();

        assert_eq!(labels(&menu), vec!["A", "B", "Sale"]);
        assert_eq!(menu[0].link, "/en/a");
    }

    #[test]
    fn test_children_ordered_and_depth_limited() {
        let collection = CategoryCollection::new(catalog());
        let menu = build_menu(&collection, "en", urls().as_ref(), "sale").unwrap();

        let a = &menu[0];
        assert_eq!(labels(&a.children), vec!["A-1", "A-2"]);
        assert_eq!(labels(&a.children[0].children), vec!["A-1-x", "A-1-y"]);
        assert!(a.children[0].children[0].children.is_empty());
        assert!(a.children[1].children.is_empty());
    }

    #[test]
    fn test_equal_hints_keep_catalog_order() {
        let collection = CategoryCollection::new(vec![
            Category::root("z", "en", "Zeta", "zeta", 0),
            Category::root("y", "en", "Ypsilon", "ypsilon", 0),
            Category::root("x", "en", "Xi", "xi", -1),
        ]);
        let menu = build_menu(&collection, "en", urls().as_ref(), "sale").unwrap();
        assert_eq!(labels(&menu), vec!["Xi", "Zeta", "Ypsilon"]);
    }

    #[test]
    fn test_sale_flag_only_on_sale_root() {
        let collection = CategoryCollection::new(vec![
            Category::root("1", "en", "Sale", "sale", 0),
            Category::root("2", "en", "Women", "women", 1),
            Category::child_of("2", "21", "en", "Women Sale", "sale", 0),
        ]);
        let menu = build_menu(&collection, "en", urls().as_ref(), "sale").unwrap();

        assert!(menu[0].sale);
        assert!(!menu[1].sale);
        assert!(!menu[1].children[0].sale);
    }

    #[test]
    fn test_missing_translation_propagates() {
        let collection = CategoryCollection::new(catalog());
        let err = build_menu(&collection, "fr", urls().as_ref(), "sale").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TRANSLATION");
    }

    #[test]
    fn test_missing_category_route_is_configuration_error() {
        let collection = CategoryCollection::new(catalog());
        let err = build_menu(&collection, "en", &RouteTable::default(), "sale").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_node_serialization_omits_defaults() {
        let node = CategoryTreeNode {
            label: "A".to_string(),
            link: "/en/a".to_string(),
            children: Vec::new(),
            sale: false,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"label": "A", "link": "/en/a"}));

        let back: CategoryTreeNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[tokio::test]
    async fn test_second_build_served_from_cache() {
        let cache = Arc::new(InMemoryCacheService::new());
        let builder = builder(repo_returning(catalog(), 1), cache.clone());

        let first = builder.build("en").await.unwrap();
        assert!(cache.exists("category-menu-en").await.unwrap());

        let second = builder.build("en").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_hit_matches_rebuild() {
        let cache = Arc::new(InMemoryCacheService::new());
        let cached = builder(repo_returning(catalog(), 1), cache.clone());
        cached.build("en").await.unwrap();
        let from_cache = cached.build("en").await.unwrap();

        let uncached = builder(repo_returning(catalog(), 1), Arc::new(InMemoryCacheService::new()));
        let rebuilt = uncached.build("en").await.unwrap();

        assert_eq!(from_cache, rebuilt);
    }

    #[tokio::test]
    async fn test_menus_cached_per_locale() {
        let mut catalog = catalog();
        for category in &mut catalog {
            let name = category.name.get("en").unwrap_or_default().to_string();
            let slug = category.slug.get("en").unwrap_or_default().to_string();
            category.name.0.insert("de".to_string(), format!("{name} (de)"));
            category.slug.0.insert("de".to_string(), slug);
        }

        let cache = Arc::new(InMemoryCacheService::new());
        let builder = builder(repo_returning(catalog, 2), cache.clone());

        let en = builder.build("en").await.unwrap();
        let de = builder.build("de").await.unwrap();

        assert_eq!(en[0].label, "A");
        assert_eq!(de[0].label, "A (de)");
        assert_eq!(de[0].link, "/de/a");
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_rebuild() {
        let cache = Arc::new(InMemoryCacheService::new());
        let builder = builder(repo_returning(catalog(), 2), cache);

        builder.build("en").await.unwrap();
        assert!(builder.invalidate("en").await.unwrap());
        assert!(!builder.invalidate("en").await.unwrap());
        builder.build("en").await.unwrap();
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockRepo::new();
        repo.expect_get_categories()
            .times(1)
            .returning(|| Err(SunriseError::repository("catalog unavailable")));
        let cache = Arc::new(InMemoryCacheService::new());
        let builder = builder(Arc::new(repo), cache.clone());

        let err = builder.build("en").await.unwrap_err();
        assert_eq!(err.error_code(), "REPOSITORY_ERROR");
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_broken_cache_degrades_to_rebuild() {
        let builder = builder(repo_returning(catalog(), 2), Arc::new(BrokenCache));

        let first = builder.build("en").await.unwrap();
        let second = builder.build("en").await.unwrap();

        assert_eq!(labels(&first), vec!["A", "B", "Sale"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_rebuilt() {
        let cache = Arc::new(InMemoryCacheService::new());
        cache
            .set_raw("category-menu-en", "{\"stale\":", Duration::from_secs(60))
            .await
            .unwrap();
        let builder = builder(repo_returning(catalog(), 1), cache.clone());

        let menu = builder.build("en").await.unwrap();
        assert_eq!(labels(&menu), vec!["A", "B", "Sale"]);

        let stored: Option<Vec<CategoryTreeNode>> = cache.get("category-menu-en").await.unwrap();
        assert_eq!(stored, Some(menu));
    }
}
