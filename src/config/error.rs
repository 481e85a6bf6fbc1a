//! Errors raised while locating, reading and checking orbiter settings

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce usable [`Settings`](crate::config::Settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `default.toml`, or the file named by `ORBITER_CONFIG_FILE`, is missing
    #[error("Required configuration file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// `ORBITER_CONFIG_DIR` and `ORBITER_CONFIG_FILE` were both set
    #[error("Conflicting configuration sources: {0}")]
    ConflictingSources(String),

    /// `ORBITER_PROFILE` cannot name a file inside the config directory
    #[error("Invalid profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    /// Sources merged but do not describe a provider this crate knows how to build
    #[error("Failed to deserialize settings for provider kind '{kind}': {message}")]
    Deserialize { kind: String, message: String },

    /// A loaded value is out of range or missing
    #[error("Invalid setting {field}: {message}")]
    Validation { field: String, message: String },

    /// A TOML file or environment override could not be read
    #[error("Failed to read configuration sources: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound { path: path.into() }
    }

    pub fn invalid_profile(profile: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidProfile {
            profile: profile.into(),
            reason: reason.into(),
        }
    }

    pub fn deserialize(kind: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Deserialize {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Settings field the error refers to, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
