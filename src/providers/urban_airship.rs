//! Urban Airship device token registration.
//!
//! Urban Airship authenticates with HTTP basic auth using the application
//! key and secret, and keys registrations by `device_tokens/{token}`.
//!
//! API Reference: http://docs.urbanairship.com

use serde_json::{Value, json};

use super::provider::{Provider, StructuredPayload};
use crate::models::{Payload, Registration};

/// Production API root
pub const URBAN_AIRSHIP_BASE_URL: &str = "https://go.urbanairship.com/api/";

/// Alias and tag based provider
#[derive(Debug, Clone, Copy, Default)]
pub struct UrbanAirship;

impl Provider for UrbanAirship {
    fn name(&self) -> &'static str {
        "urban_airship"
    }
}

impl StructuredPayload for UrbanAirship {
    fn structured_payload(&self, registration: &Registration) -> Payload {
        let mut payload = Payload::new();

        if let Some(alias) = registration.effective_alias() {
            payload.insert("alias".to_string(), json!(alias));
        }

        if let Some(badge) = registration.badge {
            payload.insert("badge".to_string(), json!(badge));
        }

        if let Some(tags) = &registration.tags {
            payload.insert(
                "tags".to_string(),
                Value::Array(tags.iter().map(|tag| json!(tag)).collect()),
            );
        }

        if let Some(tz) = registration.time_zone_name() {
            payload.insert("tz".to_string(), json!(tz));
        }

        if let Some(quiet_time) = &registration.quiet_time {
            payload.insert("quiettime".to_string(), quiet_time.to_json());
        }

        payload
    }
}
