use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::error::{OrbiterError, OrbiterResult};

/// Authentication material a client presents to its provider.
///
/// A credential is turned into request headers once, when the client is
/// built, and those headers are reused for every request.
#[derive(Clone, Default)]
pub enum Credential {
    /// No authentication headers
    #[default]
    None,
    /// HTTP basic authentication
    Basic { username: String, password: String },
    /// Fixed API key headers, e.g. application id and REST key
    Headers(Vec<(String, String)>),
}

impl Credential {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Credential::Headers(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Builds the authentication headers for this credential.
    ///
    /// All produced values are marked sensitive so they are never printed by
    /// `HeaderMap`'s debug output.
    pub fn to_header_map(&self) -> OrbiterResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        match self {
            Credential::None => {}
            Credential::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                headers.insert(AUTHORIZATION, sensitive_value(&format!("Basic {}", encoded))?);
            }
            Credential::Headers(pairs) => {
                for (name, value) in pairs {
                    let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                        OrbiterError::invalid_credential(format!("invalid header name '{}'", name))
                    })?;
                    headers.insert(name, sensitive_value(value)?);
                }
            }
        }

        Ok(headers)
    }
}

fn sensitive_value(value: &str) -> OrbiterResult<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| OrbiterError::invalid_credential("credential contains invalid characters"))?;
    value.set_sensitive(true);
    Ok(value)
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::None => f.write_str("None"),
            Credential::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credential::Headers(pairs) => f
                .debug_list()
                .entries(pairs.iter().map(|(name, _)| (name, "[REDACTED]")))
                .finish(),
        }
    }
}
