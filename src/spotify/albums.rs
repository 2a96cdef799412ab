use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    pub fn albums(&self, ids: &[&str], market: Option<&str>) -> Result<Value, AuthError> {
        self.get("albums", Query::new().ids("ids", ids).opt("market", market))
    }

    pub fn album_tracks(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("market", market);
        self.get(&format!("albums/{id}/tracks"), query)
    }
}
