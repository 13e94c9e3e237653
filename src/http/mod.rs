//! HTTP dispatch module
//!
//! This module provides the request pipeline: payload validation, default
//! header merging, the single network call, response interpretation, and
//! interceptor routing.

use std::collections::HashMap;

use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::http::auth::build_headers;
use crate::http::transport::{Transport, TransportRequest};
use crate::token::TokenStore;

pub mod auth;
pub mod transport;

/// Verbs that must carry a payload.
pub const BODY_REQUIRED_METHODS: [Method; 3] = [Method::PATCH, Method::POST, Method::PUT];

/// Per-request transport options. The body is already wire-ready; verb
/// handlers serialize structured payloads before dispatch.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Caller-supplied hooks applied to a request's outcome.
///
/// `transform_response` maps the decoded success value; `on_error` receives
/// the failure and either recovers with `Ok` or replaces it with its own
/// error. Without hooks, outcomes pass through unchanged.
#[derive(Default)]
pub struct Interceptors {
    pub transform_response: Option<TransformResponse>,
    pub on_error: Option<OnError>,
}

pub type TransformResponse = Box<dyn Fn(Value) -> Result<Value> + Send + Sync>;
pub type OnError = Box<dyn Fn(FetchError) -> Result<Value> + Send + Sync>;

impl Interceptors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform_response(
        mut self,
        hook: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.transform_response = Some(Box::new(hook));
        self
    }

    pub fn with_on_error(
        mut self,
        hook: impl Fn(FetchError) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }
}

/// Check that body-required verbs carry a non-empty payload.
///
/// Runs before any network call; this is the only validation in the system.
pub fn validate_request(options: &RequestOptions) -> Result<()> {
    let method = options.method.clone().unwrap_or(Method::GET);
    if !BODY_REQUIRED_METHODS.contains(&method) {
        return Ok(());
    }

    let missing = options.body.as_deref().map_or(true, str::is_empty);
    if missing {
        return Err(FetchError::MissingBody(method.as_str().to_lowercase()));
    }

    Ok(())
}

// Caller entries override generated defaults; header names compare
// case-insensitively so a caller `Content-Type` replaces the default
// `content-type`.
fn merge_headers(
    defaults: HashMap<String, String>,
    caller: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = defaults;
    for (key, value) in caller {
        merged.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Orchestrate one network call.
///
/// Validates the options, merges caller headers over the defaults from
/// [`build_headers`] (caller wins), issues exactly one call to the transport,
/// and interprets the outcome: a success status resolves to the decoded JSON
/// body, a failure status becomes [`FetchError::Http`] carrying the decoded
/// body. Configured interceptors then get the final say; see
/// [`Interceptors`]. A validation failure is returned before any network
/// traffic and never reaches `on_error`.
pub async fn do_request(
    transport: &dyn Transport,
    tokens: &dyn TokenStore,
    url: &str,
    options: RequestOptions,
    interceptors: Option<&Interceptors>,
) -> Result<Value> {
    validate_request(&options)?;

    let method = options.method.unwrap_or(Method::GET);
    let headers = merge_headers(build_headers(tokens), &options.headers);

    debug!("> {} {}", method, url);

    let outcome = dispatch(transport, url, method, headers, options.body).await;

    match outcome {
        Ok(data) => match interceptors.and_then(|hooks| hooks.transform_response.as_ref()) {
            Some(transform) => transform(data),
            None => Ok(data),
        },
        Err(error) => match interceptors.and_then(|hooks| hooks.on_error.as_ref()) {
            Some(on_error) => on_error(error),
            None => Err(error),
        },
    }
}

async fn dispatch(
    transport: &dyn Transport,
    url: &str,
    method: Method,
    headers: HashMap<String, String>,
    body: Option<String>,
) -> Result<Value> {
    let request = TransportRequest {
        method,
        headers,
        body,
    };

    let response = transport.call(url, request).await?;
    debug!("< {} {}", response.status, url);

    let data = response.json()?;
    if response.is_success() {
        Ok(data)
    } else {
        Err(FetchError::Http {
            status: response.status,
            body: data,
        })
    }
}
