//! Configuration validation logic
//!
//! Checks that loaded settings can actually produce a working client before
//! any request is attempted.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{HttpSettings, ProviderSettings, Settings};

impl HttpSettings {
    /// Validate HTTP configuration
    ///
    /// # Validation Rules
    /// - Request and connect timeouts must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    /// - User-Agent must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::validation(
                "http.timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout > self.timeout {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout must not exceed the request timeout.",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::validation(
                "http.user_agent",
                "User-Agent must not be empty.",
            ));
        }

        Ok(())
    }
}

impl ProviderSettings {
    /// Validate provider configuration
    ///
    /// # Validation Rules
    /// - Base URL must be an absolute http(s) URL
    /// - Provider credentials must not be empty
    /// - Generic username and password must be given together
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(self.base_url())?;

        match self {
            ProviderSettings::Generic {
                username, password, ..
            } => {
                if username.is_some() != password.is_some() {
                    return Err(ConfigError::validation(
                        "provider.username",
                        "Username and password must be set together.",
                    ));
                }
            }
            ProviderSettings::UrbanAirship {
                application_key,
                application_secret,
                ..
            } => {
                require_non_empty("provider.application_key", application_key)?;
                require_non_empty("provider.application_secret", application_secret)?;
            }
            ProviderSettings::Parse {
                application_id,
                rest_api_key,
                ..
            } => {
                require_non_empty("provider.application_id", application_id)?;
                require_non_empty("provider.rest_api_key", rest_api_key)?;
            }
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))?;
        self.http.validate()?;
        self.provider.validate()?;
        Ok(())
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url).map_err(|e| {
        ConfigError::validation("provider.base_url".to_string(), format!("Invalid URL: {}", e))
    })?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::validation(
            "provider.base_url",
            "URL must use http or https protocol.",
        ));
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(
            field.to_string(),
            format!("{} is required.", field),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::URBAN_AIRSHIP_BASE_URL;

    fn urban_airship(key: &str, secret: &str) -> ProviderSettings {
        ProviderSettings::UrbanAirship {
            base_url: URBAN_AIRSHIP_BASE_URL.to_string(),
            application_key: key.to_string(),
            application_secret: secret.to_string(),
        }
    }

    #[test]
    fn test_http_settings_valid() {
        assert!(HttpSettings::default().validate().is_ok());
    }

    #[test]
    fn test_http_settings_zero_timeout() {
        let settings = HttpSettings {
            timeout: 0,
            ..HttpSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Validation { field, .. }) if field == "http.timeout"
        ));
    }

    #[test]
    fn test_http_settings_connect_timeout_exceeds_timeout() {
        let settings = HttpSettings {
            timeout: 5,
            connect_timeout: 10,
            ..HttpSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_provider_requires_credentials() {
        assert!(urban_airship("key", "secret").validate().is_ok());
        assert!(urban_airship("", "secret").validate().is_err());
        assert!(urban_airship("key", "  ").validate().is_err());
    }

    #[test]
    fn test_provider_rejects_bad_base_url() {
        let generic = ProviderSettings::Generic {
            base_url: "ftp://example.com".to_string(),
            username: None,
            password: None,
        };
        assert!(generic.validate().is_err());

        let generic = ProviderSettings::Generic {
            base_url: "not a url".to_string(),
            username: None,
            password: None,
        };
        assert!(generic.validate().is_err());
    }

    #[test]
    fn test_generic_credentials_must_be_paired() {
        let generic = ProviderSettings::Generic {
            base_url: "https://example.com".to_string(),
            username: Some("user".to_string()),
            password: None,
        };
        assert!(matches!(
            generic.validate(),
            Err(ConfigError::Validation { field, .. }) if field == "provider.username"
        ));
    }
}
