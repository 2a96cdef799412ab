use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    pub fn artists(&self, ids: &[&str]) -> Result<Value, AuthError> {
        self.get("artists", Query::new().ids("ids", ids))
    }

    pub fn artist_albums(
        &self,
        id: &str,
        include_groups: Option<&str>,
        country: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("include_groups", include_groups)
            .opt("country", country)
            .opt("limit", limit)
            .opt("offset", offset);
        self.get(&format!("artists/{id}/albums"), query)
    }

    pub fn artist_top_tracks(&self, id: &str, country: Option<&str>) -> Result<Value, AuthError> {
        self.get(
            &format!("artists/{id}/top-tracks"),
            Query::new().opt("country", country),
        )
    }

    pub fn related_artists(&self, id: &str) -> Result<Value, AuthError> {
        self.get(&format!("artists/{id}/related-artists"), Query::new())
    }
}
