//! Transport abstraction.
//!
//! The client never talks to the network directly. It hands a fully built
//! request to a `Transport` and gets back the status and body of a single
//! round trip. Tests substitute a scripted transport; production code uses
//! `ReqwestTransport`.

use async_trait::async_trait;
use reqwest::{Request, StatusCode};

use super::client::{HTTP_CLIENT, build_client};
use crate::config::settings::HttpSettings;
use crate::error::OrbiterResult;

/// Status and body of a completed HTTP round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes one HTTP request
///
/// Implementations must not retry: one call is one round trip. Any
/// connection, timeout or TLS failure is reported as
/// `OrbiterError::Transport`; HTTP error statuses are *not* errors at this
/// layer and are returned as a normal `TransportResponse`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> OrbiterResult<TransportResponse>;
}

/// Transport backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Uses the shared global client
    pub fn new() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }

    /// Uses a dedicated client built from the given settings
    pub fn from_settings(settings: &HttpSettings) -> OrbiterResult<Self> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> OrbiterResult<TransportResponse> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
