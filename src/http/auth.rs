//! Default header assembly

use std::collections::HashMap;

use crate::token::{TokenStore, TOKEN_KEY};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Create bearer token header value
pub fn bearer(token: &str) -> String {
    format!("bearer {}", token)
}

/// Build the default headers for one request.
///
/// Always sets `content-type: application/json`. When the store holds a
/// non-empty token under [`TOKEN_KEY`], adds `Authorization: bearer <token>`;
/// an absent token simply omits the header.
pub fn build_headers(tokens: &dyn TokenStore) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), CONTENT_TYPE_JSON.to_string());

    match tokens.get(TOKEN_KEY) {
        Some(token) if !token.is_empty() => {
            headers.insert("Authorization".to_string(), bearer(&token));
        }
        _ => {}
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::{bearer, build_headers};
    use crate::token::{MemoryTokenStore, TOKEN_KEY};

    #[test]
    fn bearer_formats_token() {
        assert_eq!(bearer("abc"), "bearer abc");
    }

    #[test]
    fn headers_always_carry_json_content_type() {
        let headers = build_headers(&());
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert!(!headers.contains_key("Authorization"));
    }

    #[test]
    fn headers_include_bearer_token_when_present() {
        let mut store = MemoryTokenStore::new();
        store.insert(TOKEN_KEY, "secret");

        let headers = build_headers(&store);
        assert_eq!(
            headers.get("Authorization").map(String::as_str),
            Some("bearer secret")
        );
    }

    #[test]
    fn empty_token_omits_authorization() {
        let mut store = MemoryTokenStore::new();
        store.insert(TOKEN_KEY, "");

        let headers = build_headers(&store);
        assert!(!headers.contains_key("Authorization"));
    }
}
