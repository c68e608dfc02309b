//! Session state and CSRF tokens.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use sunrise_core::Interface;
use tracing::debug;
use uuid::Uuid;

/// Session key holding the number of items in the shopper's cart.
pub const CART_ITEM_COUNT_KEY: &str = "cartNumItems";

/// Form name of the token rendered into every page.
pub const CSRF_TOKEN_FORM: &str = "csrfToken";

/// Per-shopper key/value session.
pub trait SessionStore: Interface + Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: Value);

    /// Removes `key`, returning the previous value.
    fn remove(&self, key: &str) -> Option<Value>;
}

/// Session held in process memory.
#[derive(Debug, Default)]
pub struct InMemorySession {
    values: RwLock<HashMap<String, Value>>,
}

impl InMemorySession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySession {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.values.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        self.values.write().remove(key)
    }
}

/// Issues and checks CSRF tokens kept in the session.
///
/// Each form has at most one outstanding token. Checking a token consumes
/// it whether or not it matched.
#[derive(Clone)]
pub struct CsrfTokens {
    session: Arc<dyn SessionStore>,
}

impl CsrfTokens {
    /// Creates a token manager over `session`.
    #[must_use]
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Issues a fresh token for `form`, replacing any previous one.
    pub fn issue(&self, form: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.session.set(form, Value::String(token.clone()));
        debug!(form, "Issued CSRF token");
        token
    }

    /// Checks `token` against the one issued for `form`.
    pub fn validate(&self, form: &str, token: &str) -> bool {
        let stored = self.session.remove(form);
        let valid = matches!(stored, Some(Value::String(ref expected)) if expected == token);
        debug!(form, valid, "Checked CSRF token");
        valid
    }
}

impl std::fmt::Debug for CsrfTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfTokens").finish_non_exhaustive()
    }
}
