//! Message translation.
//!
//! [`Translator`] is the lookup seam. [`Messages`] is what page assembly
//! calls: it fills in the default namespace and turns plain parameter names
//! into the placeholder syntax the catalogs use.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use sunrise_config::I18nConfig;
use sunrise_core::{Interface, SunriseError, SunriseResult};
use tracing::debug;

/// Translates message ids.
pub trait Translator: Interface + Send + Sync {
    /// Translates `id` from `domain` into `locale`.
    ///
    /// `params` holds placeholder/value pairs, placeholders already in
    /// catalog syntax (e.g. `__phone__`).
    fn trans(&self, id: &str, params: &[(String, String)], domain: &str, locale: &str) -> SunriseResult<String>;
}

/// Translator front end with namespace and placeholder defaults.
#[derive(Clone)]
pub struct Messages {
    translator: Arc<dyn Translator>,
    default_namespace: String,
    prefix: String,
    suffix: String,
}

impl Messages {
    /// Creates a front end over `translator`.
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>, config: &I18nConfig) -> Self {
        Self {
            translator,
            default_namespace: config.default_namespace.clone(),
            prefix: config.interpolation_prefix.clone(),
            suffix: config.interpolation_suffix.clone(),
        }
    }

    /// Translates `id` from the default namespace.
    pub fn trans(&self, id: &str, params: &[(&str, &str)], locale: &str) -> SunriseResult<String> {
        self.trans_in(id, params, &self.default_namespace, locale)
    }

    /// Translates `id` from `domain`.
    pub fn trans_in(&self, id: &str, params: &[(&str, &str)], domain: &str, locale: &str) -> SunriseResult<String> {
        let mapped = self.map_interpolation(params);
        self.translator.trans(id, &mapped, domain, locale)
    }

    /// Wraps each parameter name in the configured placeholder affixes.
    #[must_use]
    pub fn map_interpolation(&self, params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(name, value)| (format!("{}{}{}", self.prefix, name, self.suffix), (*value).to_string()))
            .collect()
    }

    /// The namespace used when none is given.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }
}

impl std::fmt::Debug for Messages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messages")
            .field("default_namespace", &self.default_namespace)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .finish()
    }
}

type CatalogKey = (String, String);

/// In-memory translator over message catalogs.
///
/// Catalogs are nested JSON objects flattened to dotted ids, so
/// `{"header": {"help": "Help"}}` provides `header.help`. Locale lookup
/// falls back from `de-DE` to `de`.
#[derive(Debug, Default)]
pub struct CatalogTranslator {
    catalogs: RwLock<HashMap<CatalogKey, HashMap<String, String>>>,
}

impl CatalogTranslator {
    /// Creates a translator with no catalogs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a catalog document for `locale` and `domain`.
    pub fn add_document(&self, locale: &str, domain: &str, document: &Value) -> SunriseResult<()> {
        let Value::Object(_) = document else {
            return Err(SunriseError::configuration(format!(
                "Catalog {}/{} must be a JSON object",
                locale, domain
            )));
        };

        let mut messages = HashMap::new();
        flatten(None, document, &mut messages);
        debug!(locale, domain, count = messages.len(), "Loaded message catalog");

        self.catalogs
            .write()
            .entry((locale.to_string(), domain.to_string()))
            .or_default()
            .extend(messages);
        Ok(())
    }

    /// Parses and merges a JSON catalog.
    pub fn add_json_str(&self, locale: &str, domain: &str, json: &str) -> SunriseResult<()> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| SunriseError::configuration(format!("Invalid catalog {}/{}: {}", locale, domain, e)))?;
        self.add_document(locale, domain, &document)
    }

    fn lookup(&self, id: &str, domain: &str, locale: &str) -> Option<String> {
        let catalogs = self.catalogs.read();
        let find = |loc: &str| {
            catalogs
                .get(&(loc.to_string(), domain.to_string()))
                .and_then(|messages| messages.get(id))
                .cloned()
        };

        find(locale).or_else(|| {
            let language = locale.split(['-', '_']).next().unwrap_or(locale);
            if language == locale {
                None
            } else {
                find(language)
            }
        })
    }
}

impl Translator for CatalogTranslator {
    fn trans(&self, id: &str, params: &[(String, String)], domain: &str, locale: &str) -> SunriseResult<String> {
        let message = self
            .lookup(id, domain, locale)
            .ok_or_else(|| SunriseError::missing_translation(format!("{}:{}", domain, id), locale))?;

        Ok(params
            .iter()
            .fold(message, |text, (placeholder, value)| text.replace(placeholder, value)))
    }
}

fn flatten(prefix: Option<&str>, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = match prefix {
                    Some(p) => format!("{}.{}", p, key),
                    None => key.clone(),
                };
                flatten(Some(&path), child, out);
            }
        }
        Value::String(text) => {
            if let Some(p) = prefix {
                out.insert(p.to_string(), text.clone());
            }
        }
        Value::Null => {}
        other => {
            if let Some(p) = prefix {
                out.insert(p.to_string(), other.to_string());
            }
        }
    }
}
