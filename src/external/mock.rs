//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, Request, StatusCode};

use super::transport::{Transport, TransportResponse};
use crate::error::{OrbiterError, OrbiterResult};

/// What the mock saw for one request
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: reqwest::header::HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        let body = self.body.as_deref().expect("request has no body");
        serde_json::from_slice(body).expect("request body is not JSON")
    }
}

enum Scripted {
    Respond(StatusCode, String),
    Fail(String),
}

/// Replays scripted outcomes in order and records every request it receives
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(status, body.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request reached the transport")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> OrbiterResult<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().to_string(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|body| body.as_bytes())
                .map(<[u8]>::to_vec),
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Respond(status, body)) => Ok(TransportResponse::new(status, body)),
            Some(Scripted::Fail(message)) => Err(OrbiterError::transport(anyhow::anyhow!(message))),
            None => Err(OrbiterError::transport(anyhow::anyhow!(
                "mock transport has no scripted response"
            ))),
        }
    }
}
