use std::sync::Arc;

use fetchkit::{Call, Handlers, MemoryTokenStore, ReqwestTransport, TOKEN_KEY};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn handlers(base_url: &str, tokens: MemoryTokenStore) -> Handlers {
    let transport = Arc::new(ReqwestTransport::new().expect("transport should build"));
    Handlers::with_parts(base_url, transport, Arc::new(tokens))
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_json_content_type_sent_by_default() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let handlers = handlers(&server.uri(), MemoryTokenStore::new());
    handlers.get(Call::to("/headers")).await.expect("get");
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_bearer_token_sent_when_store_has_one() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers/"))
        .and(header("authorization", "bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut tokens = MemoryTokenStore::new();
    tokens.insert(TOKEN_KEY, "secret-token");

    let handlers = handlers(&server.uri(), tokens);
    handlers.get(Call::to("/headers")).await.expect("get");
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_caller_header_overrides_generated_default() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers/"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let handlers = handlers(&server.uri(), MemoryTokenStore::new());
    handlers
        .get(Call::to("/headers").header("Content-Type", "text/plain"))
        .await
        .expect("get");
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_custom_header_sent_alongside_defaults() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/headers/"))
        .and(header("X-Test-Header", "fetchkit"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let handlers = handlers(&server.uri(), MemoryTokenStore::new());
    handlers
        .get(Call::to("/headers").header("X-Test-Header", "fetchkit"))
        .await
        .expect("get");
}
