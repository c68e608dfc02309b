//! Integration tests for StorefrontController.

mod common;

use common::TestStorefront;
use serde_json::json;
use sunrise_config::AppConfig;
use sunrise_repository::Category;
use sunrise_service::session::{CART_ITEM_COUNT_KEY, CSRF_TOKEN_FORM};
use sunrise_service::{CacheInterface, ListingQuery, SessionStore};
use url::Url;

#[tokio::test]
async fn test_page_view_header() {
    let shop = TestStorefront::new();
    shop.session.set(CART_ITEM_COUNT_KEY, json!(3));

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let header = &view.header;

    assert_eq!(header.title, "Home");
    assert_eq!(header.stores.text, "Stores");
    assert_eq!(header.call_us.text, "Call us: +49 89 12345678");
    assert_eq!(header.location.language[0].text, "German");
    assert_eq!(header.location.language[0].value, "de");
    assert_eq!(header.location.country[1].text, "Austria");
    assert_eq!(header.mini_cart.total_items, 3);
    assert!(!header.user.is_logged_in);
}

#[tokio::test]
async fn test_page_view_navigation_menu() {
    let shop = TestStorefront::new();

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let menu = &view.header.nav_menu.categories;

    let labels: Vec<&str> = menu.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["Men", "Women", "Sale"]);
    assert_eq!(menu[1].link, "/en/women");
    assert_eq!(menu[1].children[0].label, "Shoes");
    assert_eq!(menu[1].children[0].children[0].link, "/en/women-sneakers");
    assert!(menu[2].sale);
    assert!(!menu[0].sale);
}

#[tokio::test]
async fn test_page_view_meta() {
    let shop = TestStorefront::new();

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let meta = &view.meta;

    assert_eq!(meta.assets_path, "/assets/");
    assert_eq!(meta.links.home.href, "/en/");
    assert_eq!(meta.links.new_products.href, "/en/new");
    assert_eq!(meta.links.add_to_cart.href, "/en/cart/add");
    assert_eq!(meta.links.cart.href, "/en/cart");
    assert_eq!(meta.bag_quantity_options, (1..=9).collect::<Vec<u32>>());

    assert_eq!(
        shop.session.get(CSRF_TOKEN_FORM),
        Some(json!(meta.csrf_token.clone()))
    );
    assert!(shop.controller.csrf().validate(CSRF_TOKEN_FORM, &meta.csrf_token));
    assert!(!shop.controller.csrf().validate(CSRF_TOKEN_FORM, &meta.csrf_token));
}

#[tokio::test]
async fn test_page_view_footer_and_seo() {
    let shop = TestStorefront::new();

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let footer = &view.footer;

    assert_eq!(footer.newsletter.place_holder, "Your email");
    assert_eq!(footer.newsletter.input_id, "pop-newsletter-input");
    assert_eq!(footer.customer_care.list.len(), 5);
    assert_eq!(footer.about_us.list[1].text, "Careers");
    assert_eq!(footer.shortcuts.list.len(), 4);
    assert_eq!(footer.legal_info.text, "Legal");
    assert_eq!(view.seo.description, "Fashion for everyone");
}

#[tokio::test]
async fn test_page_view_serializes_for_templates() {
    let shop = TestStorefront::new();

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["header"]["navMenu"]["categories"][2]["sale"], true);
    assert_eq!(json["meta"]["_links"]["addToCart"]["href"], "/en/cart/add");
    assert_eq!(json["footer"]["legalInfo"]["list"][0]["text"], "Imprint");
}

#[tokio::test]
async fn test_region_locale_falls_back_to_language() {
    let shop = TestStorefront::new();

    let view = shop.controller.page_view("Home", "en-GB").await.unwrap();
    assert_eq!(view.header.help.text, "Help");
    assert_eq!(view.header.nav_menu.categories[0].link, "/en-GB/men");
}

#[tokio::test]
async fn test_page_view_without_catalog_fails() {
    let shop = TestStorefront::new();

    let err = shop.controller.page_view("Startseite", "de").await.unwrap_err();
    assert_eq!(err.error_code(), "MISSING_TRANSLATION");
}

#[tokio::test]
async fn test_menu_cached_until_invalidated() {
    let shop = TestStorefront::new();
    shop.controller.page_view("Home", "en").await.unwrap();
    assert!(shop.cache.exists("category-menu-en").await.unwrap());

    shop.repository
        .replace(vec![Category::root("kids", "en", "Kids", "kids", 0)]);

    let cached = shop.controller.page_view("Home", "en").await.unwrap();
    assert_eq!(cached.header.nav_menu.categories.len(), 3);

    assert!(shop.controller.menu().invalidate("en").await.unwrap());
    let fresh = shop.controller.page_view("Home", "en").await.unwrap();
    assert_eq!(fresh.header.nav_menu.categories.len(), 1);
    assert_eq!(fresh.header.nav_menu.categories[0].label, "Kids");
}

#[tokio::test]
async fn test_custom_sale_slug() {
    let mut config = AppConfig::default();
    config.storefront.sale_slug = "men".to_string();
    let shop = TestStorefront::with_config(&config);

    let view = shop.controller.page_view("Home", "en").await.unwrap();
    let menu = &view.header.nav_menu.categories;
    assert!(menu[0].sale);
    assert!(!menu[2].sale);
}

#[test]
fn test_listing_pagination_from_request() {
    let shop = TestStorefront::new();
    let url = Url::parse("https://shop.example/en/women?page=5&sort=price-asc").unwrap();
    let query = ListingQuery::from_url(&url);

    let plan = shop.controller.listing_pagination(&url, &query, 100);

    assert_eq!(plan.current_page, 5);
    assert_eq!(plan.total_pages, 9);
    let numbers: Vec<u64> = plan.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![3, 4, 5, 6, 7]);
    assert_eq!(
        plan.next_url.as_deref(),
        Some("https://shop.example/en/women?sort=price-asc&page=6")
    );
}

#[test]
fn test_listing_pagination_with_huge_page() {
    let shop = TestStorefront::new();
    let url = Url::parse("https://shop.example/en/women?page=9223372036854775807").unwrap();
    let query = ListingQuery::from_url(&url);

    let plan = shop.controller.listing_pagination(&url, &query, 100);

    assert_eq!(plan.current_page, u64::MAX / 12);
    assert_eq!(plan.total_pages, 9);
    assert!(plan.pages.iter().all(|p| !p.selected));
    assert!(plan.next_url.is_none());
    assert!(plan.previous_url.is_some());
}

#[test]
fn test_listing_pagination_ignores_unsupported_page_size() {
    let shop = TestStorefront::new();
    let url = Url::parse("https://shop.example/en/women?items=7").unwrap();
    let query = ListingQuery::from_url(&url);

    let plan = shop.controller.listing_pagination(&url, &query, 30);
    assert_eq!(plan.total_pages, 3);
    assert_eq!(plan.current_page, 1);
}

#[test]
fn test_access_control() {
    let shop = TestStorefront::new();

    assert!(shop.controller.is_granted("ROLE_CUSTOMER", None));
    assert!(shop
        .controller
        .deny_access_unless_granted("ROLE_CUSTOMER", None, None)
        .is_ok());

    let err = shop
        .controller
        .deny_access_unless_granted("ROLE_ADMIN", None, None)
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert!(err.to_string().contains("Access Denied."));
}

#[test]
fn test_access_denied_with_custom_message() {
    let shop = TestStorefront::new();

    let err = shop
        .controller
        .deny_access_unless_granted("ROLE_ADMIN", Some("order-42"), Some("Only admins may edit orders."))
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "Forbidden: Only admins may edit orders.");
}
