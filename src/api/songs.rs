use axum::{Extension, Json, extract::Path, http::HeaderMap};

use crate::{Res, types::SongDetail};

use super::context::{SharedState, request_market};

pub async fn song(
    Path(id): Path<String>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<SongDetail>> {
    let market = request_market(&headers, &state)?;
    let detail = state.library.song_detail(&id, market).await?;
    Ok(Json(detail))
}
