//! The upstream facade.
//!
//! Everything the pipeline needs from external services goes through the
//! [`Upstream`] trait, so the catalog, lyrics and video clients can be swapped
//! for the memoizing decorator or an in-memory fake without touching callers.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res,
    config::Settings,
    musixmatch::MusixmatchClient,
    spotify::SpotifyClient,
    types::{
        ArtistDetails, FeaturesById, Page, PlaylistItem, PlaylistSummary, RawTrack, ReleaseKind,
        ReleaseSummary, SearchKind, SearchResults,
    },
    youtube::YouTubeClient,
};

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_track(&self, id: &str, market: &str) -> Res<RawTrack>;

    /// Audio features keyed by track id. Ids without features are absent from
    /// the map; that is not an error.
    async fn get_audio_features(&self, ids: &[String]) -> Res<FeaturesById>;

    async fn get_artist(&self, id: &str) -> Res<ArtistDetails>;

    async fn get_artist_releases(
        &self,
        id: &str,
        kind: ReleaseKind,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<ReleaseSummary>>;

    /// Number of releases of one kind, derived from a one-item page.
    async fn count_artist_releases(&self, id: &str, kind: ReleaseKind, market: &str) -> Res<u64> {
        let page = self.get_artist_releases(id, kind, 0, 1, market).await?;
        Ok(page.total.unwrap_or(page.items.len() as u64))
    }

    async fn get_playlist(&self, id: &str, market: &str) -> Res<PlaylistSummary>;

    async fn get_playlist_tracks(
        &self,
        id: &str,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<PlaylistItem>>;

    async fn search(&self, query: &str, kind: SearchKind, market: &str) -> Res<SearchResults>;

    /// Raw lyrics body for a lyrics-service track id.
    async fn get_lyrics(&self, lyrics_track_id: u64) -> Res<String>;

    async fn find_lyrics_track_id(&self, artist: &str, title: &str) -> Res<u64>;

    /// Best matching video id for a free-text query.
    async fn search_video(&self, query: &str) -> Res<String>;
}

/// The production [`Upstream`]: one HTTP client per external service, all
/// sharing a single `reqwest::Client` connection pool.
pub struct HttpUpstream {
    spotify: SpotifyClient,
    youtube: YouTubeClient,
    musixmatch: Option<MusixmatchClient>,
}

impl HttpUpstream {
    pub fn new(settings: &Settings) -> Self {
        let http = Client::new();

        Self {
            spotify: SpotifyClient::new(
                http.clone(),
                &settings.spotify_api_url,
                &settings.spotify_token_url,
                &settings.spotify_client_id,
                &settings.spotify_client_secret,
            ),
            youtube: YouTubeClient::new(
                http.clone(),
                &settings.youtube_api_url,
                &settings.youtube_api_key,
            ),
            musixmatch: settings
                .musixmatch_api_key
                .as_ref()
                .map(|key| MusixmatchClient::new(http, &settings.musixmatch_api_url, key)),
        }
    }

    pub fn shared(settings: &Settings) -> Arc<dyn Upstream> {
        Arc::new(Self::new(settings))
    }

    fn lyrics(&self) -> Res<&MusixmatchClient> {
        self.musixmatch
            .as_ref()
            .ok_or_else(|| crate::TuneNestError::NotFound("lyrics service".to_string()))
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get_track(&self, id: &str, market: &str) -> Res<RawTrack> {
        self.spotify.track(id, market).await
    }

    async fn get_audio_features(&self, ids: &[String]) -> Res<FeaturesById> {
        self.spotify.audio_features(ids).await
    }

    async fn get_artist(&self, id: &str) -> Res<ArtistDetails> {
        self.spotify.artist(id).await
    }

    async fn get_artist_releases(
        &self,
        id: &str,
        kind: ReleaseKind,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<ReleaseSummary>> {
        self.spotify
            .artist_releases(id, kind, offset, limit, market)
            .await
    }

    async fn get_playlist(&self, id: &str, market: &str) -> Res<PlaylistSummary> {
        self.spotify.playlist(id, market).await
    }

    async fn get_playlist_tracks(
        &self,
        id: &str,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<PlaylistItem>> {
        self.spotify
            .playlist_tracks(id, offset, limit, market)
            .await
    }

    async fn search(&self, query: &str, kind: SearchKind, market: &str) -> Res<SearchResults> {
        self.spotify.search(query, kind, market).await
    }

    async fn get_lyrics(&self, lyrics_track_id: u64) -> Res<String> {
        self.lyrics()?.lyrics(lyrics_track_id).await
    }

    async fn find_lyrics_track_id(&self, artist: &str, title: &str) -> Res<u64> {
        self.lyrics()?.match_track(artist, title).await
    }

    async fn search_video(&self, query: &str) -> Res<String> {
        self.youtube.search(query).await
    }
}
