//! Configuration management module for orbiter
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//! - Named profiles (development, production, ...)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base default configuration
//! 2. `{profile}.toml` - Profile-specific configuration
//! 3. `local.toml` - Local development overrides (not committed to version control)
//! 4. `ORBITER_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpSettings, ProviderSettings, Settings};
