use crate::{
    Res, TuneNestError,
    types::{SearchKind, SearchResponse, SearchResults},
};

use super::SpotifyClient;

const SEARCH_LIMIT: u32 = 20;

impl SpotifyClient {
    /// Searches the catalog for one kind of entity (`GET /search`).
    pub async fn search(&self, query: &str, kind: SearchKind, market: &str) -> Res<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TuneNestError::NotFound("empty search".to_string()));
        }

        let res: SearchResponse = self
            .get_json(
                &format!("search {query}"),
                "/search",
                &[
                    ("q", query.to_string()),
                    ("type", kind.to_string()),
                    ("limit", SEARCH_LIMIT.to_string()),
                    ("market", market.to_string()),
                ],
            )
            .await?;

        Ok(res.into())
    }
}
