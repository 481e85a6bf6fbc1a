//! Configuration settings structures for orbiter
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::external::client::USER_AGENT;
use crate::logger::LoggerConfig;
use crate::providers::{PARSE_BASE_URL, URBAN_AIRSHIP_BASE_URL};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pool_max_idle_per_host() -> usize {
    10
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

fn default_urban_airship_base_url() -> String {
    URBAN_AIRSHIP_BASE_URL.to_string()
}

fn default_parse_base_url() -> String {
    PARSE_BASE_URL.to_string()
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Outbound HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Idle connections kept per host
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Push provider selection and credentials
///
/// Selected by the `kind` key:
///
/// ```toml
/// [provider]
/// kind = "urban_airship"
/// application_key = "..."
/// application_secret = "..."
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderSettings {
    /// Any service exposing `device_tokens/{token}`
    Generic {
        base_url: String,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
    /// Urban Airship, basic auth with application key and secret
    UrbanAirship {
        #[serde(default = "default_urban_airship_base_url")]
        base_url: String,
        application_key: String,
        application_secret: String,
    },
    /// Parse, application id and REST API key headers
    Parse {
        #[serde(default = "default_parse_base_url")]
        base_url: String,
        application_id: String,
        rest_api_key: String,
    },
}

impl ProviderSettings {
    pub fn base_url(&self) -> &str {
        match self {
            ProviderSettings::Generic { base_url, .. }
            | ProviderSettings::UrbanAirship { base_url, .. }
            | ProviderSettings::Parse { base_url, .. } => base_url,
        }
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderSettings::Generic {
                base_url, username, ..
            } => f
                .debug_struct("Generic")
                .field("base_url", base_url)
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            ProviderSettings::UrbanAirship {
                base_url,
                application_key,
                ..
            } => f
                .debug_struct("UrbanAirship")
                .field("base_url", base_url)
                .field("application_key", application_key)
                .field("application_secret", &"[REDACTED]")
                .finish(),
            ProviderSettings::Parse {
                base_url,
                application_id,
                ..
            } => f
                .debug_struct("Parse")
                .field("base_url", base_url)
                .field("application_id", application_id)
                .field("rest_api_key", &"[REDACTED]")
                .finish(),
        }
    }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logger: LoggerConfig,

    /// Outbound HTTP configuration
    #[serde(default)]
    pub http: HttpSettings,

    /// Push provider configuration
    pub provider: ProviderSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_settings_defaults() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, 30);
        assert_eq!(settings.connect_timeout, 10);
        assert_eq!(settings.pool_max_idle_per_host, 10);
        assert!(settings.user_agent.starts_with("orbiter/"));
    }

    #[test]
    fn test_provider_settings_tagged_by_kind() {
        let provider: ProviderSettings = serde_json::from_value(serde_json::json!({
            "kind": "urban_airship",
            "application_key": "key",
            "application_secret": "secret",
        }))
        .unwrap();

        assert_eq!(
            provider,
            ProviderSettings::UrbanAirship {
                base_url: URBAN_AIRSHIP_BASE_URL.to_string(),
                application_key: "key".to_string(),
                application_secret: "secret".to_string(),
            }
        );
        assert_eq!(provider.base_url(), URBAN_AIRSHIP_BASE_URL);
    }

    #[test]
    fn test_provider_settings_debug_redacts_secrets() {
        let provider = ProviderSettings::Parse {
            base_url: PARSE_BASE_URL.to_string(),
            application_id: "app".to_string(),
            rest_api_key: "super-secret".to_string(),
        };

        let rendered = format!("{:?}", provider);
        assert!(rendered.contains("app"));
        assert!(!rendered.contains("super-secret"));
    }
}
