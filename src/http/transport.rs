//! Transport collaborator
//!
//! The dispatcher never talks to the network directly; it hands a
//! [`TransportRequest`] to a [`Transport`] and gets back a status code plus
//! the raw body. [`ReqwestTransport`] is the production implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde_json::Value;

use crate::error::{FetchError, Result};

/// One fully assembled request, ready for the wire.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Raw outcome of one network call.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// The facility that performs the actual network call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, url: &str, request: TransportRequest) -> Result<TransportResponse>;
}

/// Knobs for the reqwest-backed transport. Timeouts live here; the dispatcher
/// itself implements none.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            timeout: Duration::from_secs(300),
            connect_timeout: Duration::from_secs(30),
            user_agent: Some(format!("fetchkit/{}", crate::VERSION)),
        }
    }
}

/// Transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with the given configuration
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(FetchError::Transport)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn call(&self, url: &str, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.client.request(request.method, url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(FetchError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(FetchError::Transport)?;

        Ok(TransportResponse { status, body })
    }
}
