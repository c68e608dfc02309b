//! # Sunrise Core
//!
//! Core types and error definitions shared by every Sunrise crate: the
//! unified [`SunriseError`], typed identifiers, listing page requests, and
//! logging initialization.

pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
