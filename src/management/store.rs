use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::AuthError, types::TokenRecord};

/// JSON file holding a single [`TokenRecord`].
///
/// The store has no policy of its own: it does not validate scopes, check
/// expiry or refresh anything. It also never deletes the file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    /// Default cache location under the platform data directory.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotkit/cache/token.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the cached record. A missing or undecodable file means the
    /// client was never authenticated.
    pub fn load(&self) -> Option<TokenRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no token cache");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "token cache is not a token record");
                None
            }
        }
    }

    pub fn save(&self, record: &TokenRecord) -> Result<(), AuthError> {
        if record.expires_at.is_none() {
            return Err(AuthError::Unstamped);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "token cache written");
        Ok(())
    }
}
