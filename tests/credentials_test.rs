use std::{
    fs,
    io::Cursor,
    sync::{Arc, Mutex},
};

use serde_json::json;
use spotkit::{
    AuthError,
    prompt::{CodeReceiver, StdinPrompt},
    spotify::{AccessTokenProvider, CredentialAuthenticator},
    types::{Credentials, Endpoints},
    utils::now_ts,
};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("client-id:client-secret")
const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

/// Hands out a fixed code and remembers the URLs it was shown.
#[derive(Clone, Default)]
struct FixedCode {
    code: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl CodeReceiver for FixedCode {
    fn receive_code(&mut self, authorize_url: &str, _state: Option<&str>) -> Result<String, AuthError> {
        self.seen
            .lock()
            .expect("lock")
            .push(authorize_url.to_string());
        Ok(self.code.clone())
    }
}

fn scope_file(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("scopes.txt");
    fs::write(&path, "user-read-private\nplaylist-read-private  user-follow-read\n")
        .expect("write scopes");
    path
}

async fn mount_authorize(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/authorize"))
        .and(query_param("response_type", "code"))
        .and(query_param("client_id", "client-id"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .expect(times)
        .mount(server)
        .await;
}

#[test]
fn test_missing_scope_file_is_fatal() {
    let temp = TempDir::new().expect("temp dir");
    let mut auth = CredentialAuthenticator::new(Credentials::new("client-id", "client-secret"))
        .with_scope_file(temp.path().join("missing.txt"))
        .with_receiver(FixedCode::default());

    let result = auth.get_access_token();

    assert!(matches!(result, Err(AuthError::ScopeFile { .. })));
    assert!(auth.token().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_first_call_runs_the_code_exchange() {
    let server = MockServer::start().await;
    mount_authorize(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=pasted-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "app-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().expect("temp dir");
    let scopes = scope_file(&temp);
    let receiver = FixedCode {
        code: "pasted-code".to_string(),
        ..FixedCode::default()
    };
    let seen = Arc::clone(&receiver.seen);
    let base = server.uri();

    let (first, second, expires_at) = tokio::task::spawn_blocking(move || {
        let mut auth = CredentialAuthenticator::new(Credentials::new("client-id", "client-secret"))
            .with_endpoints(Endpoints::with_base(&base))
            .with_scope_file(scopes)
            .with_receiver(receiver);
        let first = auth.get_access_token()?;
        // Served from memory, no second exchange
        let second = auth.get_access_token()?;
        let expires_at = auth.token().and_then(|t| t.expires_at);
        Ok::<_, AuthError>((first, second, expires_at))
    })
    .await
    .expect("join")
    .expect("token");

    assert_eq!(first, "app-token");
    assert_eq!(second, "app-token");
    let expires_at = expires_at.expect("stamped");
    assert!((expires_at - (now_ts() + 3600)).abs() <= 1);

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    let url = Url::parse(&seen[0]).expect("url");
    let scope = url
        .query_pairs()
        .find(|(k, _)| k == "scope")
        .map(|(_, v)| v.into_owned());
    assert_eq!(
        scope.as_deref(),
        Some("playlist-read-private user-follow-read user-read-private")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_token_triggers_a_new_exchange() {
    let server = MockServer::start().await;
    mount_authorize(&server, 2).await;
    // Already inside the 60s margin when issued
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "short-lived",
            "expires_in": 30
        })))
        .expect(2)
        .mount(&server)
        .await;

    let temp = TempDir::new().expect("temp dir");
    let scopes = scope_file(&temp);
    let receiver = FixedCode {
        code: "code".to_string(),
        ..FixedCode::default()
    };
    let seen = Arc::clone(&receiver.seen);
    let base = server.uri();

    tokio::task::spawn_blocking(move || {
        let mut auth = CredentialAuthenticator::new(Credentials::new("client-id", "client-secret"))
            .with_endpoints(Endpoints::with_base(&base))
            .with_scope_file(scopes)
            .with_receiver(receiver);
        auth.get_access_token()?;
        auth.access_token()
    })
    .await
    .expect("join")
    .expect("token");

    assert_eq!(seen.lock().expect("lock").len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_code_surfaces_as_http_error() {
    let server = MockServer::start().await;
    mount_authorize(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().expect("temp dir");
    let scopes = scope_file(&temp);
    let base = server.uri();

    let (result, has_token) = tokio::task::spawn_blocking(move || {
        // A pasted value with stray whitespace and garbage is sent as typed
        let prompt = StdinPrompt::with_io(Cursor::new("  not-a-code \n"), Vec::new());
        let mut auth = CredentialAuthenticator::new(Credentials::new("client-id", "client-secret"))
            .with_endpoints(Endpoints::with_base(&base))
            .with_scope_file(scopes)
            .with_receiver(prompt);
        let result = auth.get_access_token();
        (result, auth.token().is_some())
    })
    .await
    .expect("join");

    match result {
        Err(AuthError::Http { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("Invalid authorization code"));
        }
        other => panic!("expected http error, got {other:?}"),
    }
    assert!(!has_token);

    let requests = server.received_requests().await.expect("recording");
    let exchange = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("token request");
    let body = String::from_utf8_lossy(&exchange.body);
    assert!(body.contains("code=not-a-code"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authorize_endpoint_failure_stops_the_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authorize"))
        .respond_with(ResponseTemplate::new(400).set_body_string("INVALID_CLIENT"))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().expect("temp dir");
    let scopes = scope_file(&temp);
    let receiver = FixedCode::default();
    let seen = Arc::clone(&receiver.seen);
    let base = server.uri();

    let result = tokio::task::spawn_blocking(move || {
        CredentialAuthenticator::new(Credentials::new("client-id", "client-secret"))
            .with_endpoints(Endpoints::with_base(&base))
            .with_scope_file(scopes)
            .with_receiver(receiver)
            .get_access_token()
    })
    .await
    .expect("join");

    assert!(matches!(result, Err(AuthError::Http { .. })));
    assert!(seen.lock().expect("lock").is_empty());
}
