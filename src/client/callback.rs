//! Continuation-style entry points.
//!
//! Each `spawn_*` method returns immediately with the task handle and runs
//! the round trip on the current tokio runtime. When it completes, exactly
//! one of `on_success` / `on_failure` is called, exactly once. Input errors
//! such as an empty device token are delivered through `on_failure` as well.
//!
//! Without a runtime nothing is spawned: `on_failure` receives
//! [`OrbiterError::Runtime`] before the method returns `None`.

use std::future::Future;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::Orbiter;
use crate::error::{OrbiterError, OrbiterResult};
use crate::external::Transport;
use crate::models::{DeviceToken, Payload, Registration};
use crate::providers::{Provider, StructuredPayload};

fn dispatch<V, Fut, S, F>(operation: Fut, on_success: S, on_failure: F) -> Option<JoinHandle<()>>
where
    V: Send + 'static,
    Fut: Future<Output = OrbiterResult<V>> + Send + 'static,
    S: FnOnce(V) + Send + 'static,
    F: FnOnce(OrbiterError) + Send + 'static,
{
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(error) => {
            tracing::warn!(error = %error, "No tokio runtime for device token request");
            on_failure(OrbiterError::runtime(error.to_string()));
            return None;
        }
    };

    Some(handle.spawn(async move {
        match operation.await {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }))
}

impl<P, T> Orbiter<P, T>
where
    P: Provider + Clone + 'static,
    T: Transport + Clone + 'static,
{
    pub fn spawn_register_device_token_with_alias<S, F>(
        &self,
        device_token: impl Into<DeviceToken>,
        alias: Option<String>,
        on_success: S,
        on_failure: F,
    ) -> Option<JoinHandle<()>>
    where
        S: FnOnce(Value) + Send + 'static,
        F: FnOnce(OrbiterError) + Send + 'static,
    {
        let client = self.clone();
        let device_token = device_token.into();
        dispatch(
            async move {
                client
                    .register_device_token_with_alias(device_token, alias.as_deref())
                    .await
            },
            on_success,
            on_failure,
        )
    }

    pub fn spawn_register_device_token_with_payload<S, F>(
        &self,
        device_token: impl Into<DeviceToken>,
        payload: Payload,
        on_success: S,
        on_failure: F,
    ) -> Option<JoinHandle<()>>
    where
        S: FnOnce(Value) + Send + 'static,
        F: FnOnce(OrbiterError) + Send + 'static,
    {
        let client = self.clone();
        let device_token = device_token.into();
        dispatch(
            async move {
                client
                    .register_device_token_with_payload(device_token, payload)
                    .await
            },
            on_success,
            on_failure,
        )
    }

    pub fn spawn_unregister_device_token<S, F>(
        &self,
        device_token: impl Into<DeviceToken>,
        on_success: S,
        on_failure: F,
    ) -> Option<JoinHandle<()>>
    where
        S: FnOnce() + Send + 'static,
        F: FnOnce(OrbiterError) + Send + 'static,
    {
        let client = self.clone();
        let device_token = device_token.into();
        dispatch(
            async move { client.unregister_device_token(device_token).await },
            move |()| on_success(),
            on_failure,
        )
    }
}

impl<P, T> Orbiter<P, T>
where
    P: StructuredPayload + Clone + 'static,
    T: Transport + Clone + 'static,
{
    pub fn spawn_register_device_token<S, F>(
        &self,
        device_token: impl Into<DeviceToken>,
        registration: Registration,
        on_success: S,
        on_failure: F,
    ) -> Option<JoinHandle<()>>
    where
        S: FnOnce(Value) + Send + 'static,
        F: FnOnce(OrbiterError) + Send + 'static,
    {
        let client = self.clone();
        let device_token = device_token.into();
        dispatch(
            async move {
                client
                    .register_device_token(device_token, &registration)
                    .await
            },
            on_success,
            on_failure,
        )
    }
}
