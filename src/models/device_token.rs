//! Device token input and normalization.
//!
//! Platforms hand out push tokens either as raw bytes or as a printable form
//! such as `<a1b2c3d4 e5f6...>`. Both are accepted and reduced to a single
//! lower-case hex string before they reach a request.

use crate::error::{OrbiterError, OrbiterResult};

/// Device token as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceToken {
    /// Printable token, possibly wrapped in `<>` and grouped with spaces
    Text(String),
    /// Raw token bytes
    Binary(Vec<u8>),
}

impl DeviceToken {
    /// Returns the canonical textual form used in request paths and bodies.
    ///
    /// Text tokens have angle brackets and whitespace stripped and are
    /// lower-cased; binary tokens are hex-encoded. A token that is empty after
    /// this step, contains control characters, or is a `.`/`..` path segment
    /// is rejected.
    pub fn normalize(&self) -> OrbiterResult<String> {
        let normalized = match self {
            DeviceToken::Text(text) => text
                .chars()
                .filter(|c| !matches!(c, '<' | '>') && !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect::<String>(),
            DeviceToken::Binary(bytes) => hex::encode(bytes),
        };

        if normalized.is_empty() {
            return Err(OrbiterError::invalid_device_token(
                "device token is empty after normalization",
            ));
        }

        if normalized == "." || normalized == ".." {
            return Err(OrbiterError::invalid_device_token(format!(
                "'{}' is not usable as a path segment",
                normalized
            )));
        }

        if normalized.chars().any(char::is_control) {
            return Err(OrbiterError::invalid_device_token(
                "device token contains control characters",
            ));
        }

        Ok(normalized)
    }
}

impl From<&str> for DeviceToken {
    fn from(value: &str) -> Self {
        DeviceToken::Text(value.to_string())
    }
}

impl From<String> for DeviceToken {
    fn from(value: String) -> Self {
        DeviceToken::Text(value)
    }
}

impl From<&String> for DeviceToken {
    fn from(value: &String) -> Self {
        DeviceToken::Text(value.clone())
    }
}

impl From<&[u8]> for DeviceToken {
    fn from(value: &[u8]) -> Self {
        DeviceToken::Binary(value.to_vec())
    }
}

impl From<Vec<u8>> for DeviceToken {
    fn from(value: Vec<u8>) -> Self {
        DeviceToken::Binary(value)
    }
}

impl<const N: usize> From<[u8; N]> for DeviceToken {
    fn from(value: [u8; N]) -> Self {
        DeviceToken::Binary(value.to_vec())
    }
}
