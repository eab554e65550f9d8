use axum::{Extension, Json, extract::Query, http::HeaderMap};
use serde::Deserialize;

use crate::{
    Res,
    types::{SearchKind, SearchResults},
};

use super::context::{SharedState, request_market};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(rename = "type")]
    pub kind: Option<SearchKind>,
}

pub async fn search(
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
    Extension(state): Extension<SharedState>,
) -> Res<Json<SearchResults>> {
    let market = request_market(&headers, &state)?;
    let results = state
        .library
        .search(&query.q, query.kind.unwrap_or(SearchKind::Track), market)
        .await?;
    Ok(Json(results))
}
