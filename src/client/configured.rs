//! Client selected by configuration.

use serde_json::Value;

use super::{Orbiter, parse_credential};
use crate::config::settings::{ProviderSettings, Settings};
use crate::error::OrbiterResult;
use crate::external::ReqwestTransport;
use crate::models::{Credential, DeviceToken, Payload};
use crate::providers::{GenericProvider, Parse, UrbanAirship};

/// One of the supported clients, chosen by `[provider] kind`
#[derive(Debug, Clone)]
pub enum AnyOrbiter {
    Generic(Orbiter<GenericProvider>),
    UrbanAirship(Orbiter<UrbanAirship>),
    Parse(Orbiter<Parse>),
}

impl AnyOrbiter {
    /// Builds the configured client with its own HTTP client from `[http]`
    pub fn from_settings(settings: &Settings) -> OrbiterResult<Self> {
        settings.validate()?;
        let transport = ReqwestTransport::from_settings(&settings.http)?;

        let client = match &settings.provider {
            ProviderSettings::Generic {
                base_url,
                username,
                password,
            } => {
                let credential = match (username, password) {
                    (Some(username), Some(password)) => Credential::basic(username, password),
                    _ => Credential::None,
                };
                AnyOrbiter::Generic(Orbiter::with_provider(
                    base_url,
                    &credential,
                    GenericProvider,
                    transport,
                )?)
            }
            ProviderSettings::UrbanAirship {
                base_url,
                application_key,
                application_secret,
            } => AnyOrbiter::UrbanAirship(Orbiter::with_provider(
                base_url,
                &Credential::basic(application_key, application_secret),
                UrbanAirship,
                transport,
            )?),
            ProviderSettings::Parse {
                base_url,
                application_id,
                rest_api_key,
            } => AnyOrbiter::Parse(Orbiter::with_provider(
                base_url,
                &parse_credential(application_id, rest_api_key),
                Parse,
                transport,
            )?),
        };

        tracing::info!(provider = client.provider_name(), "Push registration client configured");
        Ok(client)
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            AnyOrbiter::Generic(_) => "generic",
            AnyOrbiter::UrbanAirship(_) => "urban_airship",
            AnyOrbiter::Parse(_) => "parse",
        }
    }

    pub async fn register_device_token_with_alias(
        &self,
        device_token: impl Into<DeviceToken>,
        alias: Option<&str>,
    ) -> OrbiterResult<Value> {
        match self {
            AnyOrbiter::Generic(client) => {
                client.register_device_token_with_alias(device_token, alias).await
            }
            AnyOrbiter::UrbanAirship(client) => {
                client.register_device_token_with_alias(device_token, alias).await
            }
            AnyOrbiter::Parse(client) => {
                client.register_device_token_with_alias(device_token, alias).await
            }
        }
    }

    pub async fn register_device_token_with_payload(
        &self,
        device_token: impl Into<DeviceToken>,
        payload: Payload,
    ) -> OrbiterResult<Value> {
        match self {
            AnyOrbiter::Generic(client) => {
                client.register_device_token_with_payload(device_token, payload).await
            }
            AnyOrbiter::UrbanAirship(client) => {
                client.register_device_token_with_payload(device_token, payload).await
            }
            AnyOrbiter::Parse(client) => {
                client.register_device_token_with_payload(device_token, payload).await
            }
        }
    }

    pub async fn unregister_device_token(
        &self,
        device_token: impl Into<DeviceToken>,
    ) -> OrbiterResult<()> {
        match self {
            AnyOrbiter::Generic(client) => client.unregister_device_token(device_token).await,
            AnyOrbiter::UrbanAirship(client) => client.unregister_device_token(device_token).await,
            AnyOrbiter::Parse(client) => client.unregister_device_token(device_token).await,
        }
    }
}
