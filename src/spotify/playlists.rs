use std::{fs, path::Path};

use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value, json};

use crate::{
    error::AuthError,
    spotify::{ApiClient, ApiResponse, Payload, Query},
    types::{CreatePlaylistRequest, PlaylistDetails},
};

/// Which occurrences of tracks to remove from a playlist. Ids are bare track
/// ids; they are sent as `spotify:track:<id>` URIs.
#[derive(Debug, Clone, Copy)]
pub enum TrackRemoval<'a> {
    /// Every occurrence of each track.
    All(&'a [&'a str]),
    /// Only the listed positions of each track.
    Positions(&'a [(&'a str, &'a [u32])]),
}

fn track_uri(id: &str) -> String {
    format!("spotify:track:{id}")
}

impl ApiClient {
    pub fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<ApiResponse, AuthError> {
        self.post(
            &format!("users/{user_id}/playlists"),
            "create_playlist",
            Query::new(),
            Some(Payload::Json(serde_json::to_value(request)?)),
        )
    }

    pub fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[&str],
        position: Option<u32>,
    ) -> Result<ApiResponse, AuthError> {
        let query = Query::new().ids("uris", uris).opt("position", position);
        self.post(
            &format!("playlists/{playlist_id}/tracks"),
            "add_track_to_playlist",
            query,
            None,
        )
    }

    pub fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Result<ApiResponse, AuthError> {
        self.put(
            &format!("playlists/{playlist_id}"),
            "change_playlist_details",
            Query::new(),
            Some(Payload::Json(serde_json::to_value(details)?)),
        )
    }

    pub fn my_playlists(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Value, AuthError> {
        let query = Query::new().opt("limit", limit).opt("offset", offset);
        self.get("me/playlists", query)
    }

    /// Playlists of `user_id`, or of the current user when `None`.
    pub fn user_playlists(
        &self,
        user_id: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, AuthError> {
        match user_id {
            Some(user_id) => {
                let query = Query::new().opt("limit", limit).opt("offset", offset);
                self.get(&format!("users/{user_id}/playlists"), query)
            }
            None => self.my_playlists(limit, offset),
        }
    }

    pub fn playlist_cover_image(&self, playlist_id: &str) -> Result<Value, AuthError> {
        self.get(&format!("playlists/{playlist_id}/images"), Query::new())
    }

    pub fn playlist(
        &self,
        playlist_id: &str,
        fields: Option<&str>,
        market: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new().opt("fields", fields).opt("market", market);
        self.get(&format!("playlists/{playlist_id}"), query)
    }

    pub fn playlist_tracks(
        &self,
        playlist_id: &str,
        fields: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<Value, AuthError> {
        let query = Query::new()
            .opt("fields", fields)
            .opt("limit", limit)
            .opt("offset", offset)
            .opt("market", market);
        self.get(&format!("playlists/{playlist_id}/tracks"), query)
    }

    pub fn remove_playlist_tracks(
        &self,
        playlist_id: &str,
        removal: TrackRemoval<'_>,
        snapshot_id: Option<&str>,
    ) -> Result<ApiResponse, AuthError> {
        let (tracks, mut request): (Vec<Value>, &str) = match removal {
            TrackRemoval::All(ids) => (
                ids.iter().map(|id| json!({ "uri": track_uri(id) })).collect(),
                "remove_all_occurrences_of_specific_tracks",
            ),
            TrackRemoval::Positions(entries) => (
                entries
                    .iter()
                    .map(|(id, positions)| json!({ "uri": track_uri(id), "positions": positions }))
                    .collect(),
                "remove_specific_occurrence_of_track",
            ),
        };

        let mut body = Map::new();
        body.insert("tracks".to_string(), Value::Array(tracks));
        if let Some(snapshot_id) = snapshot_id {
            body.insert("snapshot_id".to_string(), json!(snapshot_id));
            request = "remove_specific_occurrence_of_track_in_specific_playlist_snapshot";
        }

        self.delete(
            &format!("playlists/{playlist_id}/tracks"),
            request,
            Query::new(),
            Some(Payload::Json(Value::Object(body))),
        )
    }

    pub fn reorder_playlist_tracks(
        &self,
        playlist_id: &str,
        range_start: u32,
        insert_before: u32,
        range_length: u32,
        snapshot_id: Option<&str>,
    ) -> Result<ApiResponse, AuthError> {
        let mut body = json!({
            "range_start": range_start,
            "insert_before": insert_before,
            "range_length": range_length,
        });
        if let Some(snapshot_id) = snapshot_id {
            body["snapshot_id"] = json!(snapshot_id);
        }
        self.put(
            &format!("playlists/{playlist_id}/tracks"),
            "reorder_playlist_tracks",
            Query::new(),
            Some(Payload::Json(body)),
        )
    }

    /// Replaces the playlist contents with the given track ids.
    pub fn replace_playlist_tracks(
        &self,
        playlist_id: &str,
        ids: &[&str],
    ) -> Result<ApiResponse, AuthError> {
        let uris: Vec<String> = ids.iter().map(|id| track_uri(id)).collect();
        self.put(
            &format!("playlists/{playlist_id}/tracks"),
            "replace_playlist_tracks",
            Query::new(),
            Some(Payload::Json(json!({ "uris": uris }))),
        )
    }

    /// Uploads a JPEG cover, sent base64 encoded as the API requires.
    pub fn upload_custom_playlist_cover_image(
        &self,
        playlist_id: &str,
        image_path: &Path,
    ) -> Result<ApiResponse, AuthError> {
        let image = fs::read(image_path)?;
        self.put(
            &format!("playlists/{playlist_id}/images"),
            "upload_custom_playlist_cover_image",
            Query::new(),
            Some(Payload::Text {
                content_type: "image/jpeg",
                body: STANDARD.encode(image),
            }),
        )
    }
}
