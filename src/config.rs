//! Configuration management for spotkit.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Defaults (where applicable)
//!
//! Every value ends up in an explicit [`Settings`] that is handed to the
//! authenticators at construction; nothing is read from process-wide state
//! after that.

use std::{env, fmt, fs, path::PathBuf, str::FromStr, time::Duration};

use crate::{
    error::AuthError,
    management::TokenStore,
    spotify::DEFAULT_SCOPE_FILE,
    types::{Credentials, DEFAULT_REDIRECT_URI, Endpoints},
};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Directory holding the `.env` file and the default token cache.
///
/// - Linux: `~/.local/share/spotkit`
/// - macOS: `~/Library/Application Support/spotkit`
/// - Windows: `%LOCALAPPDATA%/spotkit`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotkit");
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is fine, the
/// environment alone may carry the configuration; a malformed one is an
/// error. Variables already set in the environment win.
pub fn load_env() -> Result<(), AuthError> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| AuthError::Config(format!("cannot load {}: {e}", path.display())))
}

/// Everything needed to construct the authenticators and the API client.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    /// `SPOTIFY_REDIRECT_URI`; must match the app registration.
    pub redirect_uri: String,
    pub scope: Option<String>,
    pub state: Option<String>,
    pub token_cache: PathBuf,
    pub scope_file: PathBuf,
    /// Bind address of the local callback server.
    pub server_address: String,
    pub api_timeout: Option<Duration>,
    /// Read for completeness; no request is ever retried.
    pub max_retries: u32,
    pub endpoints: Endpoints,
}

impl Settings {
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        // Unset and empty variables are both treated as absent.
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| AuthError::Config(format!("{key} must be set")))
        };

        let api_timeout = match optional("SPOTIFY_API_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(parse_number(
                "SPOTIFY_API_TIMEOUT_SECS",
                &secs,
            )?)),
            None => None,
        };
        let max_retries = match optional("SPOTIFY_MAX_RETRIES") {
            Some(value) => parse_number("SPOTIFY_MAX_RETRIES", &value)?,
            None => DEFAULT_MAX_RETRIES,
        };

        Ok(Settings {
            credentials: Credentials::new(
                required("SPOTIFY_CLIENT_ID")?,
                required("SPOTIFY_CLIENT_SECRET")?,
            ),
            redirect_uri: optional("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            scope: optional("SPOTIFY_SCOPE"),
            state: optional("SPOTIFY_STATE"),
            token_cache: optional("SPOTIFY_TOKEN_CACHE")
                .map(PathBuf::from)
                .unwrap_or_else(TokenStore::default_path),
            scope_file: optional("SPOTIFY_SCOPE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCOPE_FILE)),
            server_address: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            api_timeout,
            max_retries,
            endpoints: Endpoints::default(),
        })
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, AuthError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AuthError::Config(format!("{key} is not a number: {e}")))
}
