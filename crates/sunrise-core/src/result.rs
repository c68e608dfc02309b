//! Result type aliases for Sunrise.

use crate::SunriseError;

/// A specialized `Result` type for Sunrise operations.
pub type SunriseResult<T> = Result<T, SunriseError>;
