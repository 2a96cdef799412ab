use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    pub fn tracks(&self, ids: &[&str], market: Option<&str>) -> Result<Value, AuthError> {
        self.get("tracks", Query::new().ids("ids", ids).opt("market", market))
    }

    pub fn audio_analysis(&self, id: &str) -> Result<Value, AuthError> {
        self.get(&format!("audio-analysis/{id}"), Query::new())
    }

    pub fn audio_features(&self, ids: &[&str]) -> Result<Value, AuthError> {
        self.get("audio-features", Query::new().ids("ids", ids))
    }
}
