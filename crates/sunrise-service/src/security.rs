//! Access control checks delegated to an authorization service.

use std::collections::HashSet;
use sunrise_core::{Interface, SunriseError, SunriseResult};
use tracing::warn;

/// Message of the error returned when access is denied.
pub const ACCESS_DENIED: &str = "Access Denied.";

/// Decides whether the current shopper holds an attribute.
pub trait AuthorizationChecker: Interface + Send + Sync {
    /// Returns true if `attribute` is granted, optionally on `subject`.
    fn is_granted(&self, attribute: &str, subject: Option<&str>) -> bool;
}

/// Fails with [`SunriseError::Forbidden`] unless `attribute` is granted.
///
/// The error carries `message`, or [`ACCESS_DENIED`] when none is given.
pub fn ensure_granted(
    checker: &dyn AuthorizationChecker,
    attribute: &str,
    subject: Option<&str>,
    message: Option<&str>,
) -> SunriseResult<()> {
    if checker.is_granted(attribute, subject) {
        return Ok(());
    }
    warn!(attribute, ?subject, "Access denied");
    Err(SunriseError::forbidden(message.unwrap_or(ACCESS_DENIED)))
}

/// Grants a fixed set of attributes regardless of subject.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizationChecker {
    granted: HashSet<String>,
}

impl StaticAuthorizationChecker {
    /// Grants every attribute in `granted`.
    #[must_use]
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }

    /// Grants nothing.
    #[must_use]
    pub fn deny_all() -> Self {
        Self::default()
    }
}

impl AuthorizationChecker for StaticAuthorizationChecker {
    fn is_granted(&self, attribute: &str, _subject: Option<&str>) -> bool {
        self.granted.contains(attribute)
    }
}
