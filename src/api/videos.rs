use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::TuneNestError;

use super::context::{SharedState, request_market};

#[derive(Debug, Default, Deserialize)]
pub struct VideoQuery {
    pub track: Option<String>,
    pub artist: Option<String>,
}

pub async fn youtube(
    Query(query): Query<VideoQuery>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Response {
    if let Err(e) = request_market(&headers, &state) {
        return e.into_response();
    }

    let track = query.track.unwrap_or_default();
    let artist = query.artist.unwrap_or_default();

    match state.library.video_for(&track, &artist).await {
        Ok(video_id) => Json(json!({ "video_id": video_id })).into_response(),
        Err(TuneNestError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "No video found").into_response()
        }
        Err(e) => e.into_response(),
    }
}
