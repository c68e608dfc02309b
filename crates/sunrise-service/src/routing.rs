//! URL generation from named route templates.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use sunrise_core::{Interface, SunriseError, SunriseResult};
use url::form_urlencoded;

/// Characters escaped in a substituted path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Generates URLs for named routes.
pub trait UrlGenerator: Interface + Send + Sync {
    /// Generates the URL of `route` with the given parameters.
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> SunriseResult<String>;
}

/// Route templates with `{name}` placeholders.
///
/// Parameters matching a placeholder are percent-encoded into the path as a
/// single segment. The rest are appended as query parameters in the order
/// given.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    /// Creates a table from route name to template.
    #[must_use]
    pub fn new(routes: BTreeMap<String, String>) -> Self {
        Self { routes }
    }

    /// Adds or replaces a route.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(name.into(), template.into());
        self
    }

    /// Returns true if a route with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl UrlGenerator for RouteTable {
    fn generate(&self, route: &str, params: &[(&str, &str)]) -> SunriseResult<String> {
        let template = self
            .routes
            .get(route)
            .ok_or_else(|| SunriseError::configuration(format!("Unknown route '{}'", route)))?;

        let mut path = String::with_capacity(template.len());
        let mut used = Vec::new();
        let mut rest = template.as_str();

        while let Some(start) = rest.find('{') {
            let end = rest[start..].find('}').ok_or_else(|| {
                SunriseError::configuration(format!("Unclosed placeholder in route '{}'", route))
            })? + start;
            let name = &rest[start + 1..end];

            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    SunriseError::configuration(format!(
                        "Missing parameter '{}' for route '{}'",
                        name, route
                    ))
                })?;

            path.push_str(&rest[..start]);
            path.extend(utf8_percent_encode(value, PATH_SEGMENT));
            used.push(name);
            rest = &rest[end + 1..];
        }
        path.push_str(rest);

        let extra: Vec<&(&str, &str)> = params.iter().filter(|(key, _)| !used.contains(key)).collect();
        if !extra.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(extra.iter().map(|(k, v)| (*k, *v)))
                .finish();
            path.push('?');
            path.push_str(&query);
        }

        Ok(path)
    }
}
