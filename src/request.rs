//! Pure construction of provider requests.
//!
//! Nothing here performs I/O. The functions take a base URL, the
//! credential headers and an `Endpoint` chosen by the provider, and return a
//! `reqwest::Request` that can be executed by any `Transport` or by a caller's
//! own `reqwest::Client`.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Body, Method, Request, Url};

use crate::error::{OrbiterError, OrbiterResult};
use crate::models::Payload;

const APPLICATION_JSON: &str = "application/json";

/// Method and path segments of a provider resource, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub segments: Vec<String>,
}

impl Endpoint {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolves the endpoint against a base URL.
    ///
    /// Segments are percent-encoded individually, so a token can never
    /// escape its path segment. A trailing slash on the base URL is ignored.
    pub fn url(&self, base_url: &Url) -> OrbiterResult<Url> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OrbiterError::invalid_url(base_url.as_str(), "URL cannot be a base"))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

/// Builds a registration request carrying `payload` as its JSON body
pub fn build_registration_request(
    base_url: &Url,
    headers: &HeaderMap,
    endpoint: &Endpoint,
    payload: &Payload,
) -> OrbiterResult<Request> {
    let body = serde_json::to_vec(payload)?;

    let mut request = base_request(base_url, headers, endpoint)?;
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    *request.body_mut() = Some(Body::from(body));

    Ok(request)
}

/// Builds a body-less unregistration request
pub fn build_unregistration_request(
    base_url: &Url,
    headers: &HeaderMap,
    endpoint: &Endpoint,
) -> OrbiterResult<Request> {
    base_request(base_url, headers, endpoint)
}

fn base_request(base_url: &Url, headers: &HeaderMap, endpoint: &Endpoint) -> OrbiterResult<Request> {
    let url = endpoint.url(base_url)?;

    let mut request = Request::new(endpoint.method.clone(), url);
    let request_headers = request.headers_mut();
    request_headers.extend(headers.clone());
    request_headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceToken;
    use proptest::prelude::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::{Value, json};

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    fn body_json(request: &Request) -> serde_json::Value {
        let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_segments() {
        let endpoint = Endpoint::new(Method::PUT, ["device_tokens", "abc123"]);

        assert_eq!(
            endpoint.url(&base("https://api.example.com")).unwrap().as_str(),
            "https://api.example.com/device_tokens/abc123"
        );
        assert_eq!(
            endpoint.url(&base("https://go.urbanairship.com/api/")).unwrap().as_str(),
            "https://go.urbanairship.com/api/device_tokens/abc123"
        );
        assert_eq!(
            endpoint.url(&base("https://example.com/v1")).unwrap().as_str(),
            "https://example.com/v1/device_tokens/abc123"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_segments() {
        let endpoint = Endpoint::new(Method::PUT, ["device_tokens", "a/b?c"]);
        let url = endpoint.url(&base("https://api.example.com")).unwrap();

        assert_eq!(url.path(), "/device_tokens/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_endpoint_url_rejects_cannot_be_a_base() {
        let endpoint = Endpoint::new(Method::PUT, ["device_tokens", "abc"]);
        let result = endpoint.url(&base("mailto:someone@example.com"));

        assert!(matches!(result, Err(OrbiterError::InvalidUrl { .. })));
    }

    #[test]
    fn test_registration_request_shape() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        let endpoint = Endpoint::new(Method::PUT, ["device_tokens", "abc123"]);
        let payload = json!({"alias": "jdoe", "badge": 2})
            .as_object()
            .cloned()
            .unwrap();

        let request = build_registration_request(
            &base("https://api.example.com"),
            &headers,
            &endpoint,
            &payload,
        )
        .unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/device_tokens/abc123"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(request.headers()[ACCEPT], APPLICATION_JSON);
        assert_eq!(request.headers()[AUTHORIZATION], "Basic abc");
        assert_eq!(body_json(&request), serde_json::Value::Object(payload));
    }

    #[test]
    fn test_registration_request_with_empty_payload() {
        let endpoint = Endpoint::new(Method::PUT, ["device_tokens", "abc123"]);
        let request = build_registration_request(
            &base("https://api.example.com"),
            &HeaderMap::new(),
            &endpoint,
            &Payload::new(),
        )
        .unwrap();

        assert_eq!(body_json(&request), json!({}));
    }

    #[test]
    fn test_unregistration_request_has_no_body() {
        let endpoint = Endpoint::new(Method::DELETE, ["device_tokens", "abc123"]);
        let request =
            build_unregistration_request(&base("https://api.example.com"), &HeaderMap::new(), &endpoint)
                .unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            ".{0,16}".prop_map(Value::from),
        ];
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                proptest::collection::btree_map(".{0,8}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_registration_body_round_trips_and_path_ends_with_token(
            entries in proptest::collection::btree_map(".{0,16}", json_value(), 0..8),
            token_bytes in proptest::collection::vec(any::<u8>(), 1..32),
        ) {
            let payload: Payload = entries.into_iter().collect();
            let token = DeviceToken::from(token_bytes).normalize().unwrap();
            let endpoint = Endpoint::new(Method::PUT, ["device_tokens", token.as_str()]);

            let request = build_registration_request(
                &base("https://api.example.com/"),
                &HeaderMap::new(),
                &endpoint,
                &payload,
            )
            .unwrap();

            prop_assert_eq!(body_json(&request), Value::Object(payload));
            let expected_suffix = format!("/device_tokens/{}", token);
            prop_assert!(request.url().path().ends_with(&expected_suffix));
        }
    }
}
