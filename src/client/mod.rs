//! Device token client.
//!
//! `Orbiter` holds a base URL and the credential headers for one provider,
//! and turns register/unregister calls into single HTTP round trips. The
//! provider strategy `P` decides routing and body shape; the transport `T`
//! executes the request.

mod callback;
mod configured;

pub use configured::AnyOrbiter;

use reqwest::header::HeaderMap;
use reqwest::{Request, Url};
use serde_json::{Value, json};

use crate::error::{OrbiterError, OrbiterResult};
use crate::external::{ReqwestTransport, Transport, TransportResponse};
use crate::models::{Credential, DeviceToken, Payload, Registration};
use crate::providers::{
    APPLICATION_ID_HEADER, GenericProvider, PARSE_BASE_URL, Parse, Provider, REST_API_KEY_HEADER,
    StructuredPayload, URBAN_AIRSHIP_BASE_URL, UrbanAirship,
};
use crate::request;

/// Push registration client for a single provider
///
/// All state is fixed at construction and shared read-only, so one client
/// can serve any number of concurrent calls. Each call is independent and
/// issues exactly one request; nothing is retried.
///
/// # Example
/// ```ignore
/// let orbiter = Orbiter::urban_airship("app-key", "app-secret")?;
/// let registration = Registration::new().alias("jdoe").badge(1).tags(["news"]);
/// let response = orbiter.register_device_token(token_bytes, &registration).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Orbiter<P = GenericProvider, T = ReqwestTransport> {
    base_url: Url,
    headers: HeaderMap,
    provider: P,
    transport: T,
}

impl Orbiter {
    /// Creates a client for a generic `device_tokens` service
    ///
    /// # Arguments
    /// * `base_url` - Root URL that `device_tokens/{token}` is appended to
    /// * `credential` - Authentication presented with every request
    pub fn new(base_url: &str, credential: Credential) -> OrbiterResult<Self> {
        Self::with_provider(base_url, &credential, GenericProvider, ReqwestTransport::new())
    }
}

impl Orbiter<UrbanAirship> {
    /// Creates an Urban Airship client authenticated with the app key and secret
    pub fn urban_airship(application_key: &str, application_secret: &str) -> OrbiterResult<Self> {
        Self::with_provider(
            URBAN_AIRSHIP_BASE_URL,
            &Credential::basic(application_key, application_secret),
            UrbanAirship,
            ReqwestTransport::new(),
        )
    }
}

impl Orbiter<Parse> {
    /// Creates a Parse client authenticated with the application id and REST API key
    pub fn parse(application_id: &str, rest_api_key: &str) -> OrbiterResult<Self> {
        Self::with_provider(
            PARSE_BASE_URL,
            &parse_credential(application_id, rest_api_key),
            Parse,
            ReqwestTransport::new(),
        )
    }
}

pub(crate) fn parse_credential(application_id: &str, rest_api_key: &str) -> Credential {
    Credential::headers([
        (APPLICATION_ID_HEADER, application_id),
        (REST_API_KEY_HEADER, rest_api_key),
    ])
}

impl<P: Provider, T: Transport> Orbiter<P, T> {
    /// Creates a client from its parts
    ///
    /// The credential is converted into headers here, once; an unusable
    /// credential or base URL fails construction instead of failing later
    /// requests.
    pub fn with_provider(
        base_url: &str,
        credential: &Credential,
        provider: P,
        transport: T,
    ) -> OrbiterResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| OrbiterError::invalid_url(base_url, e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(OrbiterError::invalid_url(base_url, "URL cannot be a base"));
        }

        Ok(Self {
            base_url: parsed,
            headers: credential.to_header_map()?,
            provider,
            transport,
        })
    }

    /// Replaces the transport, keeping every other setting
    pub fn with_transport<U: Transport>(self, transport: U) -> Orbiter<P, U> {
        Orbiter {
            base_url: self.base_url,
            headers: self.headers,
            provider: self.provider,
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Builds the registration request without sending it
    pub fn build_registration_request(
        &self,
        device_token: impl Into<DeviceToken>,
        payload: &Payload,
    ) -> OrbiterResult<Request> {
        let token = device_token.into().normalize()?;
        self.registration_request(&token, payload.clone())
    }

    /// Builds the unregistration request without sending it
    pub fn build_unregistration_request(
        &self,
        device_token: impl Into<DeviceToken>,
    ) -> OrbiterResult<Request> {
        let token = device_token.into().normalize()?;
        self.unregistration_request(&token)
    }

    fn registration_request(&self, token: &str, payload: Payload) -> OrbiterResult<Request> {
        let endpoint = self.provider.registration_endpoint(token);
        let body = self.provider.registration_body(token, payload);
        request::build_registration_request(&self.base_url, &self.headers, &endpoint, &body)
    }

    fn unregistration_request(&self, token: &str) -> OrbiterResult<Request> {
        let endpoint = self.provider.unregistration_endpoint(token);
        request::build_unregistration_request(&self.base_url, &self.headers, &endpoint)
    }

    /// Registers a device token under an alias
    ///
    /// An absent or empty alias registers the token with an empty payload.
    pub async fn register_device_token_with_alias(
        &self,
        device_token: impl Into<DeviceToken>,
        alias: Option<&str>,
    ) -> OrbiterResult<Value> {
        self.register_device_token_with_payload(device_token, alias_payload(alias))
            .await
    }

    /// Registers a device token with an arbitrary payload
    ///
    /// # Returns
    /// The decoded response body (`Value::Null` when the provider sends none)
    pub async fn register_device_token_with_payload(
        &self,
        device_token: impl Into<DeviceToken>,
        payload: Payload,
    ) -> OrbiterResult<Value> {
        let token = device_token.into().normalize()?;
        let request = self.registration_request(&token, payload)?;

        tracing::debug!(
            provider = self.provider.name(),
            method = %request.method(),
            url = %request.url(),
            "Registering device token"
        );

        let result = self
            .transport
            .execute(request)
            .await
            .and_then(into_json);

        match &result {
            Ok(_) => tracing::info!(provider = self.provider.name(), "Device token registered"),
            Err(e) => tracing::warn!(
                provider = self.provider.name(),
                error = %e,
                status = ?e.status_code(),
                "Device token registration failed"
            ),
        }

        result
    }

    /// Unregisters a device token
    pub async fn unregister_device_token(
        &self,
        device_token: impl Into<DeviceToken>,
    ) -> OrbiterResult<()> {
        let token = device_token.into().normalize()?;
        let request = self.unregistration_request(&token)?;

        tracing::debug!(
            provider = self.provider.name(),
            method = %request.method(),
            url = %request.url(),
            "Unregistering device token"
        );

        let result = self
            .transport
            .execute(request)
            .await
            .and_then(ensure_success)
            .map(|_| ());

        match &result {
            Ok(()) => tracing::info!(provider = self.provider.name(), "Device token unregistered"),
            Err(e) => tracing::warn!(
                provider = self.provider.name(),
                error = %e,
                status = ?e.status_code(),
                "Device token unregistration failed"
            ),
        }

        result
    }
}

impl<P: StructuredPayload, T: Transport> Orbiter<P, T> {
    /// Registers a device token with typed fields
    ///
    /// Fields left unset on `registration` are omitted from the request body.
    pub async fn register_device_token(
        &self,
        device_token: impl Into<DeviceToken>,
        registration: &Registration,
    ) -> OrbiterResult<Value> {
        let payload = self.provider.structured_payload(registration);
        self.register_device_token_with_payload(device_token, payload)
            .await
    }
}

fn alias_payload(alias: Option<&str>) -> Payload {
    let mut payload = Payload::new();
    if let Some(alias) = alias.filter(|alias| !alias.is_empty()) {
        payload.insert("alias".to_string(), json!(alias));
    }
    payload
}

fn ensure_success(response: TransportResponse) -> OrbiterResult<TransportResponse> {
    if response.status.is_success() {
        Ok(response)
    } else {
        Err(OrbiterError::Status {
            status: response.status.as_u16(),
            body: response.body,
        })
    }
}

fn into_json(response: TransportResponse) -> OrbiterResult<Value> {
    let response = ensure_success(response)?;
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(value),
        Err(source) => Err(OrbiterError::Decode {
            body: response.body,
            source,
        }),
    }
}
