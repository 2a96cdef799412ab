use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, ApiResponse, Query},
};

impl ApiClient {
    pub fn saved_albums_contains(&self, ids: &[&str]) -> Result<Value, AuthError> {
        self.get("me/albums/contains", Query::new().ids("ids", ids))
    }

    pub fn saved_tracks_contains(&self, ids: &[&str]) -> Result<Value, AuthError> {
        self.get("me/tracks/contains", Query::new().ids("ids", ids))
    }

    pub fn saved_albums(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("market", market);
        self.get("me/albums", query)
    }

    pub fn saved_tracks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("market", market);
        self.get("me/tracks", query)
    }

    pub fn save_albums(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        self.put(
            "me/albums",
            "save_albums_for_current_user",
            Query::new().ids("ids", ids),
            None,
        )
    }

    pub fn save_tracks(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        self.put(
            "me/tracks",
            "save_tracks_for_current_user",
            Query::new().ids("ids", ids),
            None,
        )
    }

    pub fn remove_saved_albums(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        self.delete(
            "me/albums",
            "remove_user_saved_albums",
            Query::new().ids("ids", ids),
            None,
        )
    }

    pub fn remove_saved_tracks(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        self.delete(
            "me/tracks",
            "remove_user_saved_tracks",
            Query::new().ids("ids", ids),
            None,
        )
    }
}
