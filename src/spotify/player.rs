use serde_json::Value;

use crate::{
    error::AuthError,
    spotify::{ApiClient, ApiResponse, Query},
};

impl ApiClient {
    pub fn available_devices(&self) -> Result<Value, AuthError> {
        self.get("me/player/devices", Query::new())
    }

    /// `Value::Null` when nothing is playing (the API answers 204).
    pub fn current_playback(&self, market: Option<&str>) -> Result<Value, AuthError> {
        self.get("me/player", Query::new().opt("market", market))
    }

    pub fn recently_played(
        &self,
        limit: Option<u32>,
        after: Option<i64>,
        before: Option<i64>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("limit", limit)
            .opt("after", after)
            .opt("before", before);
        self.get("me/player/recently-played", query)
    }

    pub fn currently_playing(&self, market: Option<&str>) -> Result<Value, AuthError> {
        self.get(
            "me/player/currently-playing",
            Query::new().opt("market", market),
        )
    }

    pub fn pause(&self, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().opt("device_id", device_id);
        self.put("me/player/pause", "pause", query, None)
    }

    pub fn play(&self, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().opt("device_id", device_id);
        self.put("me/player/play", "play", query, None)
    }

    pub fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new()
            .set("position_ms", position_ms)
            .opt("device_id", device_id);
        self.put("me/player/seek", "seek", query, None)
    }

    /// `state` is one of `track`, `context` or `off`.
    pub fn repeat(&self, state: &str, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().set("state", state).opt("device_id", device_id);
        self.put("me/player/repeat", "repeat", query, None)
    }

    pub fn volume(
        &self,
        volume_percent: u8,
        device_id: Option<&str>,
    ) -> Result<ApiResponse, AuthError> {
        let query = Query::new()
            .set("volume_percent", volume_percent)
            .opt("device_id", device_id);
        self.put("me/player/volume", "volume", query, None)
    }

    pub fn shuffle(&self, state: bool, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().set("state", state).opt("device_id", device_id);
        self.put("me/player/shuffle", "shuffle", query, None)
    }

    pub fn next_track(&self, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().opt("device_id", device_id);
        self.post("me/player/next", "next_track", query, None)
    }

    pub fn previous_track(&self, device_id: Option<&str>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().opt("device_id", device_id);
        self.post("me/player/previous", "previous_track", query, None)
    }

    pub fn transfer(&self, device_ids: &[&str], play: Option<bool>) -> Result<ApiResponse, AuthError> {
        let query = Query::new().ids("device_ids", device_ids).opt("play", play);
        self.put("me/player", "transfer", query, None)
    }
}
