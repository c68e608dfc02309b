//! # Sunrise Config
//!
//! Configuration management for the Sunrise storefront view layer.
//! Supports layered configuration from files and environment variables,
//! with validation that reports every problem at once.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
