//! fetchkit - a thin typed HTTP request helper
//!
//! This crate builds URLs with query parameters, attaches default headers
//! (JSON content type, bearer token from an injected store), issues one HTTP
//! call through an injected transport, and routes the outcome through
//! optional interceptor hooks. Requests are factored per HTTP verb via
//! [`Handlers`].

pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod token;
pub mod url;

pub use error::{FetchError, Result};
pub use handlers::{Body, Call, Handlers, VERBS};
pub use http::auth::build_headers;
pub use http::transport::{
    ReqwestTransport, Transport, TransportConfig, TransportRequest, TransportResponse,
};
pub use http::{do_request, validate_request, Interceptors, RequestOptions};
pub use token::{MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use url::{build_url, normalize_query_params, UrlParams};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
