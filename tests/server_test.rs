use std::{
    net::TcpListener,
    thread,
    time::Duration,
};

use spotkit::{AuthError, prompt::CodeReceiver, server::CallbackServer};

fn free_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    addr.to_string()
}

fn deliver(url: &str) -> bool {
    let client = reqwest::blocking::Client::new();
    for _ in 0..50 {
        match client.get(url).send() {
            Ok(_) => return true,
            // Reached the listener, which may shut down before answering
            Err(e) if !e.is_connect() => return true,
            Err(_) => {}
        }
        thread::sleep(Duration::from_millis(100));
    }
    false
}

fn start(addr: &str, state: Option<&'static str>) -> thread::JoinHandle<Result<String, AuthError>> {
    let mut server = CallbackServer::new(addr)
        .expect("server")
        .with_browser(false)
        .with_timeout(Duration::from_secs(10));
    thread::spawn(move || server.receive_code("http://127.0.0.1/authorize", state))
}

#[test]
fn test_callback_returns_code() {
    let addr = free_address();
    let handle = start(&addr, Some("xyz"));

    assert!(deliver(&format!("http://{addr}/callback?code=abc&state=xyz")));

    let code = handle.join().expect("join").expect("code");
    assert_eq!(code, "abc");
}

#[test]
fn test_callback_accepts_trailing_slash() {
    let addr = free_address();
    let handle = start(&addr, None);

    assert!(deliver(&format!("http://{addr}/callback/?code=slash")));

    assert_eq!(handle.join().expect("join").expect("code"), "slash");
}

#[test]
fn test_callback_state_mismatch() {
    let addr = free_address();
    let handle = start(&addr, Some("expected"));

    assert!(deliver(&format!("http://{addr}/callback?code=abc&state=forged")));

    let result = handle.join().expect("join");
    assert!(matches!(result, Err(AuthError::CodeCapture(reason)) if reason.contains("state")));
}

#[test]
fn test_callback_denied() {
    let addr = free_address();
    let handle = start(&addr, None);

    assert!(deliver(&format!("http://{addr}/callback?error=access_denied")));

    let result = handle.join().expect("join");
    assert!(matches!(result, Err(AuthError::CodeCapture(reason)) if reason.contains("access_denied")));
}

#[test]
fn test_callback_timeout() {
    let addr = free_address();
    let mut server = CallbackServer::new(&addr)
        .expect("server")
        .with_browser(false)
        .with_timeout(Duration::from_millis(500));

    let result = server.receive_code("http://127.0.0.1/authorize", None);
    assert!(matches!(result, Err(AuthError::CodeCapture(_))));
}

#[test]
fn test_invalid_address() {
    assert!(matches!(
        CallbackServer::new("not an address"),
        Err(AuthError::Config(_))
    ));
}

#[tokio::test]
async fn test_receive_code_inside_runtime_is_refused() {
    let addr = free_address();
    let mut server = CallbackServer::new(&addr)
        .expect("server")
        .with_browser(false)
        .with_timeout(Duration::from_millis(500));

    let result = server.receive_code("http://127.0.0.1/authorize", None);
    assert!(matches!(result, Err(AuthError::CodeCapture(reason)) if reason.contains("runtime")));
}
