//! Page shell assembly shared by every storefront page.

use crate::cache::CacheInterface;
use crate::i18n::{Messages, Translator};
use crate::listing::ListingQuery;
use crate::navigation::{CategoryMenuBuilder, CATEGORY_ROUTE};
use crate::pagination::{PaginationPlan, PaginationPlanner};
use crate::routing::UrlGenerator;
use crate::security::{ensure_granted, AuthorizationChecker};
use crate::session::{CsrfTokens, SessionStore, CART_ITEM_COUNT_KEY, CSRF_TOKEN_FORM};
use crate::view::{
    Footer, Header, Link, LinkList, Location, Meta, MetaLinks, MiniCart, NavMenu, Newsletter, PageView, Seo,
    SelectOption, UserMenu, ViewLink,
};
use std::sync::Arc;
use sunrise_config::{AppConfig, StorefrontConfig};
use sunrise_core::SunriseResult;
use sunrise_repository::CategoryRepository;
use tracing::{debug, instrument};
use url::Url;

/// Category slug linked as "new products".
pub const NEW_PRODUCTS_CATEGORY: &str = "new";

const NEWSLETTER_INPUT_ID: &str = "pop-newsletter-input";
const NEWSLETTER_BUTTON_ID: &str = "pop-newsletter-button";

/// Collaborators of the storefront controller.
#[derive(Clone)]
pub struct StorefrontServices {
    pub repository: Arc<dyn CategoryRepository>,
    pub cache: Arc<dyn CacheInterface>,
    pub translator: Arc<dyn Translator>,
    pub urls: Arc<dyn UrlGenerator>,
    pub session: Arc<dyn SessionStore>,
    pub authorization: Arc<dyn AuthorizationChecker>,
}

/// Builds the view model around page content.
pub struct StorefrontController {
    config: StorefrontConfig,
    messages: Messages,
    urls: Arc<dyn UrlGenerator>,
    session: Arc<dyn SessionStore>,
    csrf: CsrfTokens,
    authorization: Arc<dyn AuthorizationChecker>,
    menu: CategoryMenuBuilder,
    planner: PaginationPlanner,
}

impl StorefrontController {
    /// Creates a controller from configuration and collaborators.
    pub fn new(config: &AppConfig, services: StorefrontServices) -> Self {
        let menu = CategoryMenuBuilder::from_config(
            services.repository,
            services.cache,
            Arc::clone(&services.urls),
            config,
        );

        Self {
            config: config.storefront.clone(),
            messages: Messages::new(services.translator, &config.i18n),
            urls: services.urls,
            csrf: CsrfTokens::new(Arc::clone(&services.session)),
            session: services.session,
            authorization: services.authorization,
            menu,
            planner: PaginationPlanner::with_page_range(config.storefront.page_range),
        }
    }

    /// The category menu builder.
    #[must_use]
    pub fn menu(&self) -> &CategoryMenuBuilder {
        &self.menu
    }

    /// The CSRF token manager.
    #[must_use]
    pub fn csrf(&self) -> &CsrfTokens {
        &self.csrf
    }

    /// Assembles header, meta, footer and seo data for a page.
    #[instrument(skip(self))]
    pub async fn page_view(&self, title: &str, locale: &str) -> SunriseResult<PageView> {
        let header = self.header(title, locale).await?;
        let view = PageView {
            header,
            meta: self.meta(locale)?,
            footer: self.footer(locale)?,
            seo: self.seo(locale)?,
            content: serde_json::Map::new(),
        };
        debug!("Page view assembled");
        Ok(view)
    }

    /// Plans the page selector for a listing at `url`.
    #[must_use]
    pub fn listing_pagination(&self, url: &Url, query: &ListingQuery, total_items: u64) -> PaginationPlan {
        let request = query.page_request(&self.config);
        self.planner.plan(url, request.offset(), total_items, request.size)
    }

    /// Returns true if the shopper holds `attribute`.
    pub fn is_granted(&self, attribute: &str, subject: Option<&str>) -> bool {
        self.authorization.is_granted(attribute, subject)
    }

    /// Fails with a forbidden error unless the shopper holds `attribute`.
    ///
    /// The error message defaults to "Access Denied.".
    pub fn deny_access_unless_granted(
        &self,
        attribute: &str,
        subject: Option<&str>,
        message: Option<&str>,
    ) -> SunriseResult<()> {
        ensure_granted(self.authorization.as_ref(), attribute, subject, message)
    }

    async fn header(&self, title: &str, locale: &str) -> SunriseResult<Header> {
        let t = |id: &str| self.messages.trans(id, &[], locale);

        let language = self
            .config
            .languages
            .iter()
            .map(|language| -> SunriseResult<SelectOption> {
                Ok(SelectOption {
                    text: t(&format!("header.languages.{language}"))?,
                    value: language.clone(),
                })
            })
            .collect::<SunriseResult<Vec<_>>>()?;

        let country = self
            .config
            .countries
            .iter()
            .map(|country| -> SunriseResult<SelectOption> {
                Ok(SelectOption {
                    text: t(&format!("header.countries.{country}"))?,
                    value: country.clone(),
                })
            })
            .collect::<SunriseResult<Vec<_>>>()?;

        let total_items = self
            .session
            .get(CART_ITEM_COUNT_KEY)
            .and_then(|value| value.as_u64())
            .unwrap_or(0);

        Ok(Header {
            title: title.to_string(),
            stores: Link::text_only(t("header.stores")?),
            help: Link::text_only(t("header.help")?),
            call_us: Link::text_only(self.messages.trans(
                "header.callUs",
                &[("phone", self.config.call_us.as_str())],
                locale,
            )?),
            location: Location { language, country },
            user: UserMenu {
                is_logged_in: false,
                sign_in: Link::text_only("Login"),
            },
            mini_cart: MiniCart { total_items },
            nav_menu: NavMenu {
                categories: self.menu.build(locale).await?,
            },
        })
    }

    fn meta(&self, locale: &str) -> SunriseResult<Meta> {
        let locale_param = [("locale", locale)];

        Ok(Meta {
            assets_path: self.config.assets_path.clone(),
            links: MetaLinks {
                home: ViewLink::from(self.urls.generate("home", &locale_param)?),
                new_products: ViewLink::from(self.urls.generate(
                    CATEGORY_ROUTE,
                    &[("locale", locale), ("category", NEW_PRODUCTS_CATEGORY)],
                )?),
                add_to_cart: ViewLink::from(self.urls.generate("cart_add", &locale_param)?),
                cart: ViewLink::from(self.urls.generate("cart", &locale_param)?),
            },
            csrf_token: self.csrf.issue(CSRF_TOKEN_FORM),
            bag_quantity_options: (1..=self.config.max_bag_quantity).collect(),
        })
    }

    fn footer(&self, locale: &str) -> SunriseResult<Footer> {
        let t = |id: &str| self.messages.trans(id, &[], locale);
        let list = |section: &str, entries: &[&str]| -> SunriseResult<LinkList> {
            Ok(LinkList {
                text: t(&format!("footer.{section}.text"))?,
                list: entries
                    .iter()
                    .map(|entry| -> SunriseResult<Link> {
                        Ok(Link::text_only(t(&format!("footer.{section}.{entry}"))?))
                    })
                    .collect::<SunriseResult<Vec<_>>>()?,
            })
        };

        Ok(Footer {
            pay_secure: t("footer.paySecure")?,
            follow_us: t("footer.followUs")?,
            newsletter: Newsletter {
                text: t("footer.newsletter.text")?,
                url: String::new(),
                text_alt: t("footer.newsletter.textAlt")?,
                place_holder: t("footer.newsletter.placeHolder")?,
                input_id: NEWSLETTER_INPUT_ID.to_string(),
                button_id: NEWSLETTER_BUTTON_ID.to_string(),
            },
            customer_care: list(
                "customerCare",
                &["contactUs", "help", "shipping", "returns", "sizeGuide"],
            )?,
            about_us: list("aboutUs", &["ourStory", "careers"])?,
            shortcuts: list("shortcuts", &["myAccount", "stores", "giftCards", "payment"])?,
            legal_info: list("legalInfo", &["imprint", "privacy", "terms"])?,
        })
    }

    fn seo(&self, locale: &str) -> SunriseResult<Seo> {
        Ok(Seo {
            text: self.messages.trans("seo.text", &[], locale)?,
            description: self.messages.trans("seo.description", &[], locale)?,
        })
    }
}

impl std::fmt::Debug for StorefrontController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontController")
            .field("config", &self.config)
            .field("messages", &self.messages)
            .field("menu", &self.menu)
            .field("planner", &self.planner)
            .finish_non_exhaustive()
    }
}
