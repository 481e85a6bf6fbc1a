//! Provider strategy traits.
//!
//! A provider decides *where* requests go and how a registration body is
//! shaped. The client itself is provider-agnostic; it asks the provider for
//! an `Endpoint` and for the final body, then builds and sends the request.

use reqwest::Method;

use crate::models::{Payload, Registration};
use crate::request::Endpoint;

/// Routing and body shaping for one push provider
///
/// The default methods describe the common `device_tokens/{token}` resource:
/// `PUT` to register, `DELETE` to unregister, body passed through unchanged.
pub trait Provider: Send + Sync {
    /// Short provider name for logging
    fn name(&self) -> &'static str;

    /// Endpoint used to register `token` (already normalized)
    fn registration_endpoint(&self, token: &str) -> Endpoint {
        Endpoint::new(Method::PUT, ["device_tokens", token])
    }

    /// Endpoint used to unregister `token` (already normalized)
    fn unregistration_endpoint(&self, token: &str) -> Endpoint {
        Endpoint::new(Method::DELETE, ["device_tokens", token])
    }

    /// Final registration body for `token`
    fn registration_body(&self, _token: &str, payload: Payload) -> Payload {
        payload
    }
}

/// Providers that accept typed registration fields
pub trait StructuredPayload: Provider {
    /// Builds the provider's payload from typed fields, omitting absent ones
    fn structured_payload(&self, registration: &Registration) -> Payload;
}
