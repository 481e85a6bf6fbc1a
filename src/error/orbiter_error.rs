use crate::config::error::ConfigError;
use thiserror::Error;

/// Crate-wide error type for building and issuing device token requests.
///
/// Failures are grouped the way callers need to react to them: input that
/// should never have been sent (`InvalidDeviceToken`, `InvalidUrl`,
/// `InvalidCredential`), failures while talking to the provider (`Transport`),
/// and provider-reported failures (`Status`, `Decode`).
#[derive(Error, Debug)]
pub enum OrbiterError {
    /// Device token that is empty or unusable as a path segment after normalization
    #[error("Invalid device token: {reason}")]
    InvalidDeviceToken { reason: String },

    /// Base URL that cannot be parsed or cannot carry path segments
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Credential material that cannot be expressed as HTTP headers
    #[error("Invalid credential: {reason}")]
    InvalidCredential { reason: String },

    /// Request payload could not be serialized
    #[error("Failed to serialize request payload")]
    Serialization(#[from] serde_json::Error),

    /// Connection, timeout or TLS failure while executing the request
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: anyhow::Error,
    },

    /// Provider answered with a non-2xx status
    #[error("Provider responded with HTTP {status}")]
    Status { status: u16, body: String },

    /// Provider answered 2xx but the body is not valid JSON
    #[error("Failed to decode provider response")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Client could not be built from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Continuation-style call made outside a tokio runtime
    #[error("No async runtime available: {reason}")]
    Runtime { reason: String },
}

impl OrbiterError {
    pub fn invalid_device_token(reason: impl Into<String>) -> Self {
        Self::InvalidDeviceToken {
            reason: reason.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        Self::InvalidCredential {
            reason: reason.into(),
        }
    }

    pub fn runtime(reason: impl Into<String>) -> Self {
        Self::Runtime {
            reason: reason.into(),
        }
    }

    /// Wraps any transport-level failure, keeping it as the error source
    pub fn transport<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Transport {
            source: error.into(),
        }
    }

    /// HTTP status reported by the provider, if the failure came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body returned by the provider, if any
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OrbiterError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error)
    }
}

/// Type alias for Result with OrbiterError
pub type OrbiterResult<T> = Result<T, OrbiterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_exposes_code_and_body() {
        let error = OrbiterError::Status {
            status: 500,
            body: "{\"error\":\"boom\"}".to_string(),
        };

        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.response_body(), Some("{\"error\":\"boom\"}"));
        assert_eq!(error.to_string(), "Provider responded with HTTP 500");
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let error = OrbiterError::transport(anyhow::anyhow!("connection refused"));

        assert_eq!(error.status_code(), None);
        assert!(error.response_body().is_none());
        let source = std::error::Error::source(&error).expect("source should be preserved");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_invalid_device_token_message() {
        let error = OrbiterError::invalid_device_token("token is empty");
        assert_eq!(error.to_string(), "Invalid device token: token is empty");
    }
}
