use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    pub fn top_artists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<&str>,
    ) -> Result<Value, AuthError> {
        self.top("artists", limit, offset, time_range)
    }

    pub fn top_tracks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<&str>,
    ) -> Result<Value, AuthError> {
        self.top("tracks", limit, offset, time_range)
    }

    fn top(
        &self,
        kind: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        time_range: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("time_range", time_range);
        self.get(&format!("me/top/{kind}"), query)
    }
}
