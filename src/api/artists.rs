use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::{
    Res,
    types::{ArtistOverview, ReleaseKind, ReleasePage},
};

use super::context::{SharedState, request_market};

#[derive(Debug, Default, Deserialize)]
pub struct ReleasesQuery {
    #[serde(rename = "type")]
    pub kind: Option<ReleaseKind>,
    pub page: Option<u32>,
}

pub async fn artist(
    Path(id): Path<String>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<ArtistOverview>> {
    let market = request_market(&headers, &state)?;
    Ok(Json(state.library.artist_overview(&id, market).await?))
}

pub async fn releases(
    Path(id): Path<String>,
    Query(query): Query<ReleasesQuery>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<ReleasePage>> {
    let market = request_market(&headers, &state)?;
    let page = state
        .library
        .artist_releases(
            &id,
            query.kind.unwrap_or_default(),
            query.page.unwrap_or(1),
            market,
        )
        .await?;
    Ok(Json(page))
}
