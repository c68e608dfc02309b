//! # Sunrise Service
//!
//! Assembles the view model of storefront pages.
//!
//! - [`navigation`]: the three-level category menu, cached per locale
//! - [`pagination`]: the page selector of product listings
//! - [`storefront`]: the header, meta, footer and seo shell of every page
//!
//! Translation, URL generation, session state and access control are
//! collaborator traits with in-process implementations in [`i18n`],
//! [`routing`], [`session`] and [`security`].

pub mod cache;
pub mod i18n;
pub mod listing;
pub mod navigation;
pub mod pagination;
pub mod routing;
pub mod security;
pub mod session;
pub mod storefront;
pub mod view;

pub use cache::{create_cache, CacheExt, CacheInterface, InMemoryCacheService, RedisCacheService};
pub use i18n::{CatalogTranslator, Messages, Translator};
pub use listing::ListingQuery;
pub use navigation::{build_menu, CategoryMenuBuilder, CategoryTreeNode};
pub use pagination::{PageLink, PaginationPlan, PaginationPlanner};
pub use routing::{RouteTable, UrlGenerator};
pub use security::{ensure_granted, AuthorizationChecker, StaticAuthorizationChecker};
pub use session::{CsrfTokens, InMemorySession, SessionStore};
pub use storefront::{StorefrontController, StorefrontServices};
pub use view::PageView;
