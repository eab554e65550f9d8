use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tunenest::spotify::SpotifyClient;

#[derive(Default)]
struct MockSpotify {
    token_requests: AtomicU32,
    /// Number of upcoming API calls answered with 401.
    reject_next: AtomicU32,
    /// Id count of every audio-features request.
    feature_batches: Mutex<Vec<usize>>,
}

type Mock = Arc<MockSpotify>;

async fn token(State(mock): State<Mock>) -> Json<serde_json::Value> {
    let n = mock.token_requests.fetch_add(1, Ordering::SeqCst) + 1;
    // slow enough for concurrent callers to pile up behind the first request
    tokio::time::sleep(Duration::from_millis(50)).await;
    Json(json!({
        "access_token": format!("token-{n}"),
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

fn authorized(mock: &MockSpotify, headers: &HeaderMap) -> bool {
    if mock
        .reject_next
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return false;
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer token-"))
}

async fn track(State(mock): State<Mock>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&mock, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id != "t1" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "id": "t1",
        "name": "Song",
        "artists": [{ "id": "a1", "name": "Artist" }],
        "album": { "id": "al1", "name": "Album", "images": [] },
        "external_urls": { "spotify": "https://open.spotify.com/track/t1" },
        "preview_url": null,
        "popularity": 42
    }))
    .into_response()
}

async fn audio_features(
    State(mock): State<Mock>,
    Query(params): Query<std::collections::HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&mock, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let ids: Vec<&str> = params
        .get("ids")
        .map(|ids| ids.split(',').collect())
        .unwrap_or_default();
    mock.feature_batches.lock().unwrap().push(ids.len());
    if ids.len() > 50 {
        return (StatusCode::BAD_REQUEST, "too many ids requested").into_response();
    }

    let features: Vec<serde_json::Value> = ids
        .into_iter()
        .map(|id| {
            if id == "noanalysis" {
                serde_json::Value::Null
            } else {
                json!({ "id": id, "tempo": 120.0, "key": 0, "mode": 1 })
            }
        })
        .collect();
    Json(json!({ "audio_features": features })).into_response()
}

async fn rate_limited() -> Response {
    (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "3")]).into_response()
}

async fn spawn_mock() -> (SpotifyClient, Mock) {
    let mock = Mock::default();
    let app = Router::new()
        .route("/token", post(token))
        .route("/v1/tracks/{id}", get(track))
        .route("/v1/audio-features", get(audio_features))
        .route("/v1/artists/{id}", get(rate_limited))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = SpotifyClient::new(
        reqwest::Client::new(),
        &format!("http://{addr}/v1"),
        &format!("http://{addr}/token"),
        "client",
        "secret",
    );
    (client, mock)
}

#[tokio::test]
async fn test_token_is_reused_across_requests() {
    let (client, mock) = spawn_mock().await;

    let track = client.track("t1", "US").await.unwrap();
    assert_eq!(track.name.as_deref(), Some("Song"));
    client.track("t1", "JP").await.unwrap();

    assert_eq!(mock.token_requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_first_use_fetches_one_token() {
    let (client, mock) = spawn_mock().await;
    let client = Arc::new(client);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.track("t1", "US").await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(mock.token_requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_token_is_replaced() {
    let (client, mock) = spawn_mock().await;
    client.track("t1", "US").await.unwrap();

    mock.reject_next.store(1, Ordering::SeqCst);
    let err = client.track("t1", "US").await.unwrap_err();
    assert!(err.is_transient());

    client.track("t1", "US").await.unwrap();
    assert_eq!(mock.token_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_missing_track_is_not_found() {
    let (client, _mock) = spawn_mock().await;

    assert!(client.track("t2", "US").await.unwrap_err().is_not_found());
    // never sent upstream
    assert!(client.track("../t1", "US").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_audio_features_batches_and_skips_nulls() {
    let (client, mock) = spawn_mock().await;

    let mut ids: Vec<String> = (0..120).map(|i| format!("t{i}")).collect();
    ids.push("noanalysis".to_string());
    ids.push("bad id".to_string());

    let features = client.audio_features(&ids).await.unwrap();

    assert_eq!(features.len(), 120);
    assert_eq!(features["t119"].tempo, Some(120.0));
    assert!(!features.contains_key("noanalysis"));
    // 121 valid ids, at most 50 per request
    assert_eq!(*mock.feature_batches.lock().unwrap(), vec![50, 50, 21]);
}

#[tokio::test]
async fn test_rate_limit_is_transient() {
    let (client, _mock) = spawn_mock().await;

    let err = client.artist("a1").await.unwrap_err();
    assert!(err.is_transient());
    assert!(err.to_string().contains("retry after 3s"));
}
