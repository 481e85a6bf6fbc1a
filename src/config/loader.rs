//! Configuration loader for orbiter
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "ORBITER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ORBITER_CONFIG_FILE";

/// Environment variable naming the active profile
const PROFILE_ENV: &str = "ORBITER_PROFILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Profile used when `ORBITER_PROFILE` is unset
const DEFAULT_PROFILE: &str = "development";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ORBITER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{profile}.toml` - Profile-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `ORBITER_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Active profile name
    profile: String,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if both `ORBITER_CONFIG_DIR` and `ORBITER_CONFIG_FILE`
    /// are set, as they are mutually exclusive, or if `ORBITER_PROFILE` is not
    /// a plain file stem.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir.is_some() {
            return Err(ConfigError::ConflictingSources(
                "ORBITER_CONFIG_DIR and ORBITER_CONFIG_FILE cannot both be set. \
                 Use ORBITER_CONFIG_DIR for layered configuration or \
                 ORBITER_CONFIG_FILE for a single configuration file."
                    .to_string(),
            ));
        }

        let profile = std::env::var(PROFILE_ENV)
            .ok()
            .filter(|profile| !profile.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        validate_profile(&profile)?;

        Ok(Self {
            config_dir: config_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            profile,
        })
    }

    /// Active profile name
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` (or the single configured file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let kind = config
            .get_string("provider.kind")
            .unwrap_or_else(|_| "<unset>".to_string());
        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::deserialize(kind, e.to_string()))?;

        settings.validate()?;

        tracing::debug!(profile = %self.profile, provider = ?settings.provider, "Configuration loaded");
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // Environment variables always win:
        // ORBITER_PROVIDER__APPLICATION_KEY -> provider.application_key
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = add_file_source(builder, &self.config_dir.join("default.toml"), true)?;
        let builder = add_file_source(
            builder,
            &self.config_dir.join(format!("{}.toml", self.profile)),
            false,
        )?;
        add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }
}

fn add_file_source(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::file_not_found(path));
    }

    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(required)))
}

/// Profiles become `{profile}.toml` inside the config directory, so they
/// must not carry separators or dots.
fn validate_profile(profile: &str) -> Result<(), ConfigError> {
    let valid = profile
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));

    if !valid {
        return Err(ConfigError::invalid_profile(
            profile,
            "only ASCII letters, digits, '-' and '_' are allowed",
        ));
    }

    Ok(())
}
