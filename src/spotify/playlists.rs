use crate::{
    Res,
    types::{Page, Paging, PlaylistItem, PlaylistSummary},
};

use super::SpotifyClient;

/// Largest page the playlist items endpoint serves.
pub const PLAYLIST_PAGE_LIMIT: u32 = 100;

impl SpotifyClient {
    /// Retrieves playlist metadata without its items.
    pub async fn playlist(&self, id: &str, market: &str) -> Res<PlaylistSummary> {
        let id = self.checked_id("playlist", id)?;
        self.get_json(
            &format!("playlist {id}"),
            &format!("/playlists/{id}"),
            &[
                ("market", market.to_string()),
                (
                    "fields",
                    "id,name,description,images,external_urls,tracks.total".to_string(),
                ),
            ],
        )
        .await
    }

    /// Retrieves one page of playlist items (`GET /playlists/{id}/tracks`).
    pub async fn playlist_tracks(
        &self,
        id: &str,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<PlaylistItem>> {
        let id = self.checked_id("playlist", id)?;
        let paging: Paging<PlaylistItem> = self
            .get_json(
                &format!("playlist {id}"),
                &format!("/playlists/{id}/tracks"),
                &[
                    ("offset", offset.to_string()),
                    ("limit", limit.clamp(1, PLAYLIST_PAGE_LIMIT).to_string()),
                    ("market", market.to_string()),
                    ("additional_types", "track".to_string()),
                ],
            )
            .await?;

        Ok(paging.into())
    }
}
