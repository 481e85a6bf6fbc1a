use super::provider::Provider;

/// Any service exposing `device_tokens/{token}` under a base URL
///
/// Registration bodies are sent exactly as supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericProvider;

impl Provider for GenericProvider {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Payload;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_default_routes() {
        let provider = GenericProvider;

        let register = provider.registration_endpoint("abc123");
        assert_eq!(register.method, Method::PUT);
        assert_eq!(register.segments, vec!["device_tokens", "abc123"]);

        let unregister = provider.unregistration_endpoint("abc123");
        assert_eq!(unregister.method, Method::DELETE);
        assert_eq!(unregister.segments, vec!["device_tokens", "abc123"]);
    }

    #[test]
    fn test_body_is_passed_through() {
        let payload: Payload = json!({"anything": [1, 2, 3]}).as_object().cloned().unwrap();
        assert_eq!(GenericProvider.registration_body("abc123", payload.clone()), payload);
    }
}
