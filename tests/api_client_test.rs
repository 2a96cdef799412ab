use pretty_assertions::assert_eq;
use serde_json::json;
use spotkit::{
    AuthError,
    spotify::{AccessTokenProvider, ApiClient, ApiResponse, TrackRemoval},
    types::{CreatePlaylistRequest, PlaylistDetails},
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct StaticToken(&'static str);

impl AccessTokenProvider for StaticToken {
    fn access_token(&mut self) -> Result<String, AuthError> {
        Ok(self.0.to_string())
    }
}

struct NoToken;

impl AccessTokenProvider for NoToken {
    fn access_token(&mut self) -> Result<String, AuthError> {
        Err(AuthError::NotAuthenticated)
    }
}

// Built inside spawn_blocking: the blocking client must not be created or
// dropped on an async worker.
fn client(base: &str) -> ApiClient {
    ApiClient::new("bearer-token").with_api_url(format!("{base}/v1"))
}

#[test]
fn test_connect_keeps_only_the_bearer_string() {
    let client = ApiClient::connect(&mut StaticToken("abc")).expect("client");
    assert_eq!(client.access_token(), "abc");

    let result = ApiClient::connect(&mut NoToken);
    assert!(matches!(result, Err(AuthError::NotAuthenticated)));
}

#[test]
fn test_empty_response_display() {
    let response = ApiResponse::Empty {
        request: "pause".to_string(),
    };
    assert!(response.is_empty());
    assert_eq!(response.to_string(), "REQUEST pause OK!");
    assert_eq!(response.into_json(), serde_json::Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_sends_bearer_and_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("authorization", "Bearer bearer-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wizzler",
            "display_name": "Wizzler",
            "country": "SE",
            "product": "premium"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let base = server.uri();
    let (raw, profile) = tokio::task::spawn_blocking(move || {
        let api = client(&base);
        let raw = api.me()?;
        let profile = api.current_user()?;
        Ok::<_, AuthError>((raw, profile))
    })
    .await
    .expect("join")
    .expect("profile");

    assert_eq!(raw["id"], "wizzler");
    assert_eq!(profile.id, "wizzler");
    assert_eq!(profile.display_name.as_deref(), Some("Wizzler"));
    assert_eq!(profile.email, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unset_parameters_are_left_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "daft punk"))
        .and(query_param("type", "artist,album"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "artists": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    tokio::task::spawn_blocking(move || {
        let api = client(&base);
        api.search("daft punk", "artist,album", None, Some(5), None, None)
    })
    .await
    .expect("join")
    .expect("search");

    let requests = server.received_requests().await.expect("recording");
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("market"));
    assert!(!query.contains("offset"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_body_yields_named_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/me/player/pause"))
        .and(query_param("device_id", "kitchen"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/me/following"))
        .and(query_param("type", "artist"))
        .and(query_param("ids", "a1,a2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let (pause, follow) = tokio::task::spawn_blocking(move || {
        let api = client(&base);
        let pause = api.pause(Some("kitchen"))?;
        let follow = api.follow_artists(&["a1", "a2"])?;
        Ok::<_, AuthError>((pause, follow))
    })
    .await
    .expect("join")
    .expect("calls");

    assert_eq!(pause.to_string(), "REQUEST pause OK!");
    assert_eq!(follow.to_string(), "REQUEST follow_artist OK!");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me/player/devices"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "The access token expired" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let result = tokio::task::spawn_blocking(move || client(&base).available_devices())
        .await
        .expect("join");

    let err = result.expect_err("401");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.to_string().contains("The access token expired"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_playlist_bodies_are_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/users/wizzler/playlists"))
        .and(body_json(json!({
            "name": "Weekly",
            "description": "new releases",
            "public": false,
            "collaborative": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "pl1" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/playlists/pl1"))
        .and(body_json(json!({ "name": "Renamed" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({
            "tracks": [{ "uri": "spotify:track:t1", "positions": [0, 3] }],
            "snapshot_id": "snap"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "snapshot_id": "snap2" })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let (created, renamed, removed) = tokio::task::spawn_blocking(move || {
        let api = client(&base);
        let created = api.create_playlist(
            "wizzler",
            &CreatePlaylistRequest {
                name: "Weekly".to_string(),
                description: "new releases".to_string(),
                public: false,
                collaborative: false,
            },
        )?;
        let renamed = api.change_playlist_details(
            "pl1",
            &PlaylistDetails {
                name: Some("Renamed".to_string()),
                ..PlaylistDetails::default()
            },
        )?;
        let positions: &[u32] = &[0, 3];
        let removed = api.remove_playlist_tracks(
            "pl1",
            TrackRemoval::Positions(&[("t1", positions)]),
            Some("snap"),
        )?;
        Ok::<_, AuthError>((created, renamed, removed))
    })
    .await
    .expect("join")
    .expect("calls");

    assert_eq!(created.into_json()["id"], "pl1");
    assert_eq!(renamed.to_string(), "REQUEST change_playlist_details OK!");
    assert_eq!(removed.into_json()["snapshot_id"], "snap2");
}
