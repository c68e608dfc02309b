//! Shared fixtures for storefront integration tests.

use std::sync::Arc;
use sunrise_config::AppConfig;
use sunrise_repository::InMemoryCategoryRepository;
use sunrise_service::{
    CatalogTranslator, InMemoryCacheService, InMemorySession, RouteTable, StaticAuthorizationChecker,
    StorefrontController, StorefrontServices,
};

pub const CATEGORIES: &str = r#"[
    {"id": "women", "name": {"en": "Women", "de": "Damen"}, "slug": {"en": "women", "de": "damen"}, "orderHint": 2},
    {"id": "men", "name": {"en": "Men", "de": "Herren"}, "slug": {"en": "men", "de": "herren"}, "orderHint": 1},
    {"id": "sale", "name": {"en": "Sale", "de": "Sale"}, "slug": {"en": "sale", "de": "sale"}, "orderHint": 3},
    {"id": "women-shoes", "name": {"en": "Shoes", "de": "Schuhe"}, "slug": {"en": "women-shoes", "de": "damen-schuhe"}, "parent": "women", "orderHint": 1},
    {"id": "women-sneakers", "name": {"en": "Sneakers", "de": "Sneaker"}, "slug": {"en": "women-sneakers", "de": "damen-sneaker"}, "parent": "women-shoes"}
]"#;

pub const MESSAGES_EN: &str = r#"{
    "header": {
        "stores": "Stores",
        "help": "Help",
        "callUs": "Call us: __phone__",
        "languages": {"de": "German", "en": "English"},
        "countries": {"DE": "Germany", "AT": "Austria"}
    },
    "footer": {
        "paySecure": "Pay secure",
        "followUs": "Follow us",
        "newsletter": {"text": "Newsletter", "textAlt": "Sign up", "placeHolder": "Your email"},
        "customerCare": {
            "text": "Customer care",
            "contactUs": "Contact us",
            "help": "Help",
            "shipping": "Shipping",
            "returns": "Returns",
            "sizeGuide": "Size guide"
        },
        "aboutUs": {"text": "About us", "ourStory": "Our story", "careers": "Careers"},
        "shortcuts": {
            "text": "Shortcuts",
            "myAccount": "My account",
            "stores": "Stores",
            "giftCards": "Gift cards",
            "payment": "Payment"
        },
        "legalInfo": {"text": "Legal", "imprint": "Imprint", "privacy": "Privacy", "terms": "Terms"}
    },
    "seo": {"text": "Sunrise", "description": "Fashion for everyone"}
}"#;

/// A storefront wired to in-memory collaborators.
pub struct TestStorefront {
    pub controller: StorefrontController,
    pub repository: Arc<InMemoryCategoryRepository>,
    pub cache: Arc<InMemoryCacheService>,
    pub session: Arc<InMemorySession>,
}

impl TestStorefront {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let repository =
            Arc::new(InMemoryCategoryRepository::from_json_str(CATEGORIES).expect("Invalid category fixture"));
        let cache = Arc::new(InMemoryCacheService::new());
        let session = Arc::new(InMemorySession::new());

        let translator = CatalogTranslator::new();
        translator
            .add_json_str("en", &config.i18n.default_namespace, MESSAGES_EN)
            .expect("Invalid message fixture");

        let services = StorefrontServices {
            repository: repository.clone(),
            cache: cache.clone(),
            translator: Arc::new(translator),
            urls: Arc::new(RouteTable::new(config.routes.clone())),
            session: session.clone(),
            authorization: Arc::new(StaticAuthorizationChecker::new(["ROLE_CUSTOMER"])),
        };

        Self {
            controller: StorefrontController::new(config, services),
            repository,
            cache,
            session,
        }
    }
}
