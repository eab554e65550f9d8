use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::{
    Res,
    types::{CatalogGroups, PlaylistView, SortDirective, SortField, SortOrder},
};

use super::context::{SharedState, request_market};

/// Viral 50 - Japan, shown on the landing page.
pub const DEFAULT_PLAYLIST_ID: &str = "37i9dQZEVXbINTEnbFeb8d";

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistQuery {
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl PlaylistQuery {
    fn directive(&self) -> Option<SortDirective> {
        self.sort.map(|field| SortDirective {
            field,
            order: self.order.unwrap_or_default(),
        })
    }
}

pub async fn playlist(
    Path(id): Path<String>,
    Query(query): Query<PlaylistQuery>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<PlaylistView>> {
    let market = request_market(&headers, &state)?;
    let view = state
        .library
        .playlist(&id, market, query.directive())
        .await?;
    Ok(Json(view))
}

pub async fn index(
    query: Query<PlaylistQuery>,
    headers: HeaderMap,
    state: Extension<SharedState>,
) -> Res<Json<PlaylistView>> {
    playlist(Path(DEFAULT_PLAYLIST_ID.to_string()), query, headers, state).await
}

pub async fn catalog(
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<CatalogGroups>> {
    request_market(&headers, &state)?;
    Ok(Json(state.library.catalog()))
}
