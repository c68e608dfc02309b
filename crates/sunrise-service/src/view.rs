//! View models handed to the template renderer.
//!
//! Field names serialize in camelCase to match the storefront templates.

use crate::navigation::CategoryTreeNode;
use serde::{Deserialize, Serialize};

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    /// Creates a link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Creates a link without a target.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, "")
    }
}

/// A bare URL reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewLink {
    pub href: String,
}

impl From<String> for ViewLink {
    fn from(href: String) -> Self {
        Self { href }
    }
}

/// An entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub language: Vec<SelectOption>,
    pub country: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMenu {
    pub is_logged_in: bool,
    pub sign_in: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniCart {
    pub total_items: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavMenu {
    pub categories: Vec<CategoryTreeNode>,
}

/// Page header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub stores: Link,
    pub help: Link,
    pub call_us: Link,
    pub location: Location,
    pub user: UserMenu,
    pub mini_cart: MiniCart,
    pub nav_menu: NavMenu,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaLinks {
    pub home: ViewLink,
    pub new_products: ViewLink,
    pub add_to_cart: ViewLink,
    pub cart: ViewLink,
}

/// Page metadata used by scripts and forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub assets_path: String,
    #[serde(rename = "_links")]
    pub links: MetaLinks,
    pub csrf_token: String,
    pub bag_quantity_options: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub text: String,
    pub url: String,
    pub text_alt: String,
    pub place_holder: String,
    pub input_id: String,
    pub button_id: String,
}

/// A titled list of links in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkList {
    pub text: String,
    pub list: Vec<Link>,
}

/// Page footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub pay_secure: String,
    pub follow_us: String,
    pub newsletter: Newsletter,
    pub customer_care: LinkList,
    pub about_us: LinkList,
    pub shortcuts: LinkList,
    pub legal_info: LinkList,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seo {
    pub text: String,
    pub description: String,
}

/// Everything a storefront page renders around its own content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageView {
    pub header: Header,
    pub meta: Meta,
    pub footer: Footer,
    pub seo: Seo,
    /// Page-specific data, filled in by the page handler.
    pub content: serde_json::Map<String, serde_json::Value>,
}
