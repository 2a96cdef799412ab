use axum::{Extension, Router, routing::get};
use std::{
    net::SocketAddr,
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{api, error::AuthError, prompt::CodeReceiver, types::PendingCode, warning};

/// Catches the authorization redirect on a local listener.
///
/// The redirect URI registered with Spotify must point at this listener's
/// `/callback` route. Unlike the stdin prompt this waits at most `timeout`.
#[derive(Debug, Clone)]
pub struct CallbackServer {
    addr: SocketAddr,
    timeout: Duration,
    open_browser: bool,
}

impl CallbackServer {
    pub fn new(addr: &str) -> Result<Self, AuthError> {
        let addr = SocketAddr::from_str(addr)
            .map_err(|e| AuthError::Config(format!("invalid server address {addr}: {e}")))?;
        Ok(CallbackServer {
            addr,
            timeout: Duration::from_secs(120),
            open_browser: true,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    async fn serve_until_code(
        &self,
        authorize_url: &str,
        state: Option<&str>,
    ) -> Result<String, AuthError> {
        let shared_state = Arc::new(Mutex::new(PendingCode {
            expected_state: state.map(str::to_string),
            result: None,
        }));

        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .map_err(|e| AuthError::CodeCapture(format!("cannot bind {}: {e}", self.addr)))?;
        let app = router(Arc::clone(&shared_state));
        let server = tokio::spawn(async move { axum::serve(listener, app).await });
        debug!(addr = %self.addr, "callback server listening");

        if !self.open_browser || webbrowser::open(authorize_url).is_err() {
            warning!(
                "Please navigate to the following URL to authorize:\n{}",
                authorize_url
            );
        }

        let result = wait_for_code(shared_state, self.timeout).await;
        server.abort();

        match result {
            Some(Ok(code)) => Ok(code),
            Some(Err(reason)) => Err(AuthError::CodeCapture(reason)),
            None => Err(AuthError::CodeCapture(format!(
                "no callback received within {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

impl CodeReceiver for CallbackServer {
    /// Runs the listener on a private runtime, so it must be called from
    /// synchronous code. Inside a tokio runtime it fails with
    /// [`AuthError::CodeCapture`] without binding anything.
    fn receive_code(
        &mut self,
        authorize_url: &str,
        state: Option<&str>,
    ) -> Result<String, AuthError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(AuthError::CodeCapture(
                "callback server cannot block inside a tokio runtime".into(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.serve_until_code(authorize_url, state))
    }
}

pub fn router(state: Arc<Mutex<PendingCode>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/callback/", get(api::callback))
        .layer(Extension(state))
}

async fn wait_for_code(
    shared_state: Arc<Mutex<PendingCode>>,
    max_wait: Duration,
) -> Option<Result<String, String>> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(result) = &lock.result {
            return Some(result.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    None
}
