//! Unified error types for the storefront view layer.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Sunrise.
///
/// Configuration and repository failures are hard failures: a page cannot be
/// rendered without its menu or its translated labels. Cache failures are
/// reported through [`SunriseError::Cache`] but callers are expected to
/// degrade to a rebuild rather than surface them.
#[derive(Error, Debug)]
pub enum SunriseError {
    // ============ Configuration Errors ============
    /// Required configuration entry missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Translation key (or localized category field) missing for a locale
    #[error("Missing translation for '{key}' in locale '{locale}'")]
    MissingTranslation { key: String, locale: String },

    // ============ Infrastructure Errors ============
    /// Category repository failure
    #[error("Repository error: {0}")]
    Repository(String),

    /// Cache backend unavailable or failing
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Request Errors ============
    /// Access denied by the authorization checker
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SunriseError {
    /// Returns the HTTP status code the request layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden(_) => 403,
            Self::Cache(_) => 503,
            Self::Configuration(_)
            | Self::MissingTranslation { .. }
            | Self::Repository(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::MissingTranslation { .. } => "MISSING_TRANSLATION",
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::Cache(_) => "CACHE_UNAVAILABLE",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a missing translation error.
    #[must_use]
    pub fn missing_translation(key: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::MissingTranslation {
            key: key.into(),
            locale: locale.into(),
        }
    }

    /// Creates a repository error.
    #[must_use]
    pub fn repository<T: Into<String>>(message: T) -> Self {
        Self::Repository(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True for errors caused by missing or invalid configuration, including
    /// missing translations.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::MissingTranslation { .. })
    }

    /// True when the error only affects the cache and the caller can carry on
    /// by recomputing the value.
    #[must_use]
    pub const fn is_degradable(&self) -> bool {
        matches!(self, Self::Cache(_))
    }
}

impl From<serde_json::Error> for SunriseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body handed to the request layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `SunriseError`.
    #[must_use]
    pub fn from_error(error: &SunriseError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<&SunriseError> for ErrorResponse {
    fn from(error: &SunriseError) -> Self {
        Self::from_error(error)
    }
}
