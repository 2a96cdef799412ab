use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, ApiResponse, Query},
};

impl ApiClient {
    pub fn user_follows_artists(&self, ids: &[&str]) -> Result<Value, AuthError> {
        let query = Query::new().set("type", "artist").ids("ids", ids);
        self.get("me/following/contains", query)
    }

    pub fn user_follows_users(&self, ids: &[&str]) -> Result<Value, AuthError> {
        let query = Query::new().set("type", "user").ids("ids", ids);
        self.get("me/following/contains", query)
    }

    /// Whether the given users follow `playlist_id`.
    pub fn users_follow_playlist(
        &self,
        playlist_id: &str,
        ids: &[&str],
    ) -> Result<Value, AuthError> {
        self.get(
            &format!("playlists/{playlist_id}/followers/contains"),
            Query::new().ids("ids", ids),
        )
    }

    pub fn follow_artists(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        let query = Query::new().set("type", "artist").ids("ids", ids);
        self.put("me/following", "follow_artist", query, None)
    }

    pub fn follow_users(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        let query = Query::new().set("type", "user").ids("ids", ids);
        self.put("me/following", "follow_user", query, None)
    }

    pub fn follow_playlist(&self, playlist_id: &str, public: bool) -> Result<ApiResponse, AuthError> {
        self.put(
            &format!("playlists/{playlist_id}/followers"),
            "follow_playlist",
            Query::new().set("public", public),
            None,
        )
    }

    pub fn user_followed_artists(
        &self,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("after", after)
            .set("type", "artist");
        self.get("me/following", query)
    }

    pub fn unfollow_artists(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        let query = Query::new().ids("ids", ids).set("type", "artist");
        self.delete("me/following", "unfollow_artist", query, None)
    }

    pub fn unfollow_users(&self, ids: &[&str]) -> Result<ApiResponse, AuthError> {
        let query = Query::new().ids("ids", ids).set("type", "user");
        self.delete("me/following", "unfollow_user", query, None)
    }

    pub fn unfollow_playlist(&self, playlist_id: &str) -> Result<ApiResponse, AuthError> {
        self.delete(
            &format!("playlists/{playlist_id}/followers"),
            "unfollow_playlist",
            Query::new(),
            None,
        )
    }
}
