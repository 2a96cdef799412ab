use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, Query},
};

impl ApiClient {
    /// All categories, or a single one when `category_id` is given.
    pub fn categories(
        &self,
        category_id: Option<&str>,
        country: Option<&str>,
        locale: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        let query = Query::new().opt("country", country).opt("locale", locale);
        match category_id {
            Some(id) => self.get(&format!("browse/categories/{id}"), query),
            None => self.get(
                "browse/categories",
                query.opt("limit", limit).opt("offset", offset),
            ),
        }
    }

    pub fn category_playlists(
        &self,
        category_id: &str,
        country: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("country", country)
            .opt("limit", limit)
            .opt("offset", offset);
        self.get(&format!("browse/categories/{category_id}/playlists"), query)
    }

    pub fn featured_playlists(
        &self,
        locale: Option<&str>,
        country: Option<&str>,
        timestamp: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("locale", locale)
            .opt("country", country)
            .opt("timestamp", timestamp)
            .opt("limit", limit)
            .opt("offset", offset);
        self.get("browse/featured-playlists", query)
    }

    pub fn new_releases(
        &self,
        country: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("country", country)
            .opt("limit", limit)
            .opt("offset", offset);
        self.get("browse/new-releases", query)
    }

    /// `tunables` carries the `min_*`, `max_*` and `target_*` attributes.
    pub fn recommendations(
        &self,
        limit: Option<u32>,
        market: Option<&str>,
        seed_artists: Option<&str>,
        seed_genres: Option<&str>,
        seed_tracks: Option<&str>,
        tunables: &[(&'static str, String)],
    ) -> Result<Value, AuthError> {
        let mut query = Query::new()
            .opt("limit", limit)
            .opt("market", market)
            .opt("seed_artists", seed_artists)
            .opt("seed_genres", seed_genres)
            .opt("seed_tracks", seed_tracks);
        for (key, value) in tunables {
            query = query.set(*key, value);
        }
        self.get("recommendations", query)
    }
}
