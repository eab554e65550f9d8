use crate::{
    Res,
    types::{ArtistDetails, Page, Paging, ReleaseKind, ReleaseSummary},
};

use super::SpotifyClient;

/// Largest page the artist albums endpoint serves.
pub const RELEASE_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves artist details (`GET /artists/{id}`): name, genres,
    /// popularity, followers and images.
    pub async fn artist(&self, id: &str) -> Res<ArtistDetails> {
        let id = self.checked_id("artist", id)?;
        self.get_json(&format!("artist {id}"), &format!("/artists/{id}"), &[])
            .await
    }

    /// Retrieves one page of an artist's releases of a single kind.
    ///
    /// Uses `/artists/{id}/albums` with `include_groups` set to the release
    /// kind, so albums, singles and compilations are paginated separately.
    pub async fn artist_releases(
        &self,
        id: &str,
        kind: ReleaseKind,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<ReleaseSummary>> {
        let id = self.checked_id("artist", id)?;
        let paging: Paging<ReleaseSummary> = self
            .get_json(
                &format!("artist {id}"),
                &format!("/artists/{id}/albums"),
                &[
                    ("include_groups", kind.to_string()),
                    ("offset", offset.to_string()),
                    ("limit", limit.clamp(1, RELEASE_PAGE_LIMIT).to_string()),
                    ("market", market.to_string()),
                ],
            )
            .await?;

        Ok(paging.into())
    }
}
