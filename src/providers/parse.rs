//! Parse installation registration.
//!
//! Parse keys registrations by installation rather than by token path, so
//! every registration is a `POST installations` whose body names the token
//! and device type. Authentication uses the application id and REST API key
//! headers.
//!
//! API Reference: https://parse.com/docs/push_guide

use reqwest::Method;
use serde_json::{Value, json};

use super::provider::{Provider, StructuredPayload};
use crate::models::{Payload, Registration};
use crate::request::Endpoint;

/// Production API root
pub const PARSE_BASE_URL: &str = "https://api.parse.com/1/";

pub const APPLICATION_ID_HEADER: &str = "X-Parse-Application-Id";
pub const REST_API_KEY_HEADER: &str = "X-Parse-REST-API-Key";

const DEVICE_TYPE: &str = "ios";

/// Channel based provider
#[derive(Debug, Clone, Copy, Default)]
pub struct Parse;

impl Provider for Parse {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn registration_endpoint(&self, _token: &str) -> Endpoint {
        Endpoint::new(Method::POST, ["installations"])
    }

    fn unregistration_endpoint(&self, token: &str) -> Endpoint {
        Endpoint::new(Method::DELETE, ["installations", token])
    }

    fn registration_body(&self, token: &str, mut payload: Payload) -> Payload {
        payload.insert("deviceType".to_string(), json!(DEVICE_TYPE));
        payload.insert("deviceToken".to_string(), json!(token));
        payload
    }
}

impl StructuredPayload for Parse {
    fn structured_payload(&self, registration: &Registration) -> Payload {
        let mut payload = Payload::new();

        if let Some(alias) = registration.effective_alias() {
            payload.insert("alias".to_string(), json!(alias));
        }

        if let Some(badge) = registration.badge {
            payload.insert("badge".to_string(), json!(badge));
        }

        if let Some(channels) = &registration.tags {
            payload.insert(
                "channels".to_string(),
                Value::Array(channels.iter().map(|channel| json!(channel)).collect()),
            );
        }

        if let Some(tz) = registration.time_zone_name() {
            payload.insert("timeZone".to_string(), json!(tz));
        }

        if registration.quiet_time.is_some() {
            tracing::debug!(provider = "parse", "Quiet time is not supported, dropping it");
        }

        payload
    }
}
