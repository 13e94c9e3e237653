//! URL construction utilities
//!
//! Builds the final request URL from a base URL, a path, and optional query
//! parameters, which may arrive either pre-formatted or as key/value pairs.

use ::url::form_urlencoded;

/// Query parameters accepted by the URL builder.
///
/// A pre-formatted string is used as-is (a leading `?` is added when
/// missing); pairs are percent-encoded in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UrlParams {
    #[default]
    None,
    Raw(String),
    Pairs(Vec<(String, String)>),
}

impl From<&str> for UrlParams {
    fn from(raw: &str) -> Self {
        UrlParams::Raw(raw.to_string())
    }
}

impl From<String> for UrlParams {
    fn from(raw: String) -> Self {
        UrlParams::Raw(raw)
    }
}

impl From<Vec<(String, String)>> for UrlParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        UrlParams::Pairs(pairs)
    }
}

impl From<&[(&str, &str)]> for UrlParams {
    fn from(pairs: &[(&str, &str)]) -> Self {
        UrlParams::Pairs(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Normalize query parameters into a query string.
///
/// The result is either empty or starts with exactly one `?`.
pub fn normalize_query_params(params: &UrlParams) -> String {
    match params {
        UrlParams::None => String::new(),
        UrlParams::Raw(raw) if raw.is_empty() => String::new(),
        UrlParams::Raw(raw) if raw.starts_with('?') => raw.clone(),
        UrlParams::Raw(raw) => format!("?{}", raw),
        UrlParams::Pairs(pairs) if pairs.is_empty() => String::new(),
        UrlParams::Pairs(pairs) => {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, value) in pairs {
                serializer.append_pair(key, value);
            }
            format!("?{}", serializer.finish())
        }
    }
}

/// Build the final request URL.
///
/// Concatenates `base_url` and `path`, guarantees a single trailing slash on
/// the combined base, and appends the normalized query string.
pub fn build_url(base_url: &str, path: &str, params: &UrlParams) -> String {
    let mut url = format!("{}{}", base_url, path);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(&normalize_query_params(params));
    url
}
