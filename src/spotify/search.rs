use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    /// `kind` is a comma separated list such as `"album,track"`.
    pub fn search(
        &self,
        q: &str,
        kind: &str,
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
        include_external: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .set("q", q)
            .set("type", kind)
            .opt("market", market)
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("include_external", include_external);
        self.get("search", query)
    }
}
