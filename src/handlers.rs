//! Verb handlers
//!
//! [`Handlers`] binds a base URL, the collaborators, and optional
//! interceptors, and exposes one method per HTTP verb. Each verb's wire
//! method is fixed; callers cannot override it through [`Call`].

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::{do_request, Interceptors, RequestOptions};
use crate::token::TokenStore;
use crate::url::{build_url, UrlParams};

/// The fixed set of verbs a [`Handlers`] exposes.
pub const VERBS: [&str; 5] = ["del", "get", "patch", "post", "put"];

/// A request payload.
///
/// `Raw` passes through unchanged; `Json` is serialized to its string form
/// before dispatch.
#[derive(Debug, Clone)]
pub enum Body {
    Raw(String),
    Json(Value),
}

impl Body {
    fn into_wire(self) -> Result<String> {
        match self {
            Body::Raw(text) => Ok(text),
            Body::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

/// Per-call arguments for a verb handler.
#[derive(Debug, Default)]
pub struct Call {
    pub url: String,
    pub params: UrlParams,
    pub headers: HashMap<String, String>,
    pub body: Option<Body>,
}

impl Call {
    pub fn to(url: impl Into<String>) -> Self {
        Call {
            url: url.into(),
            ..Call::default()
        }
    }

    pub fn params(mut self, params: impl Into<UrlParams>) -> Self {
        self.params = params.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Verb-specific request handlers sharing one base URL.
pub struct Handlers {
    base_url: String,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    interceptors: Option<Interceptors>,
}

impl Handlers {
    /// Create handlers with the default reqwest transport and no token store.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_parts(base_url, transport, Arc::new(())))
    }

    /// Create handlers with explicit collaborators.
    pub fn with_parts(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Handlers {
            base_url: base_url.into(),
            transport,
            tokens,
            interceptors: None,
        }
    }

    /// Attach interceptors applied to every call made through these handlers.
    pub fn with_interceptors(mut self, interceptors: Interceptors) -> Self {
        self.interceptors = Some(interceptors);
        self
    }

    pub async fn get(&self, call: Call) -> Result<Value> {
        self.request(Method::GET, call).await
    }

    pub async fn post(&self, call: Call) -> Result<Value> {
        self.request(Method::POST, call).await
    }

    pub async fn put(&self, call: Call) -> Result<Value> {
        self.request(Method::PUT, call).await
    }

    pub async fn patch(&self, call: Call) -> Result<Value> {
        self.request(Method::PATCH, call).await
    }

    /// Issue a `DELETE` request.
    pub async fn del(&self, call: Call) -> Result<Value> {
        self.request(Method::DELETE, call).await
    }

    async fn request(&self, method: Method, call: Call) -> Result<Value> {
        let body = call.body.map(Body::into_wire).transpose()?;
        let url = build_url(&self.base_url, &call.url, &call.params);
        let options = RequestOptions {
            method: Some(method),
            headers: call.headers,
            body,
        };

        do_request(
            self.transport.as_ref(),
            self.tokens.as_ref(),
            &url,
            options,
            self.interceptors.as_ref(),
        )
        .await
    }
}
