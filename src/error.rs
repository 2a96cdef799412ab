use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while obtaining, refreshing, storing or using tokens.
///
/// Nothing here is retried internally. A cache file that is missing or
/// unreadable is not an error at all: it is reported as "no cached token".
#[derive(Debug, Error)]
pub enum AuthError {
    /// A non-2xx answer from the token, authorize or resource endpoints.
    #[error("request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The scope list used by the authorization-code flow could not be read.
    #[error("cannot read scope file {}: {source}", .path.display())]
    ScopeFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Refused to persist a token that was never stamped with `expires_at`.
    #[error("token has no expires_at and cannot be persisted")]
    Unstamped,

    #[error("no usable token available, authorize first")]
    NotAuthenticated,

    /// The authorization code could not be captured from the user.
    #[error("authorization code capture failed: {0}")]
    CodeCapture(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// HTTP status of the failed request, if the failure was an HTTP one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AuthError::Http { status, .. } => Some(*status),
            AuthError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
