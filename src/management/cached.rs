use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    Res,
    types::{
        ArtistDetails, FeaturesById, Page, PlaylistItem, PlaylistSummary, RawTrack, ReleaseKind,
        ReleaseSummary, SearchKind, SearchResults,
    },
    upstream::Upstream,
};

use super::MemoCache;

/// Entry limits for each memoized lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacities {
    pub artists: usize,
    pub tracks: usize,
    pub audio_features: usize,
    pub releases: usize,
    pub release_counts: usize,
    pub searches: usize,
    pub lyrics: usize,
    pub lyrics_ids: usize,
    pub videos: usize,
}

impl Default for CacheCapacities {
    fn default() -> Self {
        Self {
            artists: 32,
            tracks: 128,
            audio_features: 64,
            releases: 64,
            release_counts: 64,
            searches: 64,
            lyrics: 128,
            lyrics_ids: 128,
            videos: 256,
        }
    }
}

type ReleaseKey = (String, ReleaseKind, u32, u32, String);

/// [`Upstream`] decorator memoizing the idempotent lookups.
///
/// Keys are the exact call arguments. Playlist metadata and playlist pages
/// pass straight through: editors change playlists, catalog entities do not.
/// Failed lookups are not cached, so a transient error is retried on the next
/// request instead of being served from memory.
pub struct CachedUpstream {
    inner: Arc<dyn Upstream>,
    artists: MemoCache<String, ArtistDetails>,
    tracks: MemoCache<(String, String), RawTrack>,
    audio_features: MemoCache<Vec<String>, FeaturesById>,
    releases: MemoCache<ReleaseKey, Page<ReleaseSummary>>,
    release_counts: MemoCache<(String, ReleaseKind, String), u64>,
    searches: MemoCache<(String, SearchKind, String), SearchResults>,
    lyrics: MemoCache<u64, String>,
    lyrics_ids: MemoCache<(String, String), u64>,
    videos: MemoCache<String, String>,
}

impl CachedUpstream {
    pub fn new(inner: Arc<dyn Upstream>, capacities: CacheCapacities) -> Self {
        Self {
            inner,
            artists: MemoCache::new(capacities.artists),
            tracks: MemoCache::new(capacities.tracks),
            audio_features: MemoCache::new(capacities.audio_features),
            releases: MemoCache::new(capacities.releases),
            release_counts: MemoCache::new(capacities.release_counts),
            searches: MemoCache::new(capacities.searches),
            lyrics: MemoCache::new(capacities.lyrics),
            lyrics_ids: MemoCache::new(capacities.lyrics_ids),
            videos: MemoCache::new(capacities.videos),
        }
    }

    pub fn shared(inner: Arc<dyn Upstream>, capacities: CacheCapacities) -> Arc<dyn Upstream> {
        Arc::new(Self::new(inner, capacities))
    }
}

#[async_trait]
impl Upstream for CachedUpstream {
    async fn get_track(&self, id: &str, market: &str) -> Res<RawTrack> {
        self.tracks
            .get_or_try_insert_with((id.to_string(), market.to_string()), || {
                self.inner.get_track(id, market)
            })
            .await
    }

    async fn get_audio_features(&self, ids: &[String]) -> Res<FeaturesById> {
        self.audio_features
            .get_or_try_insert_with(ids.to_vec(), || self.inner.get_audio_features(ids))
            .await
    }

    async fn get_artist(&self, id: &str) -> Res<ArtistDetails> {
        self.artists
            .get_or_try_insert_with(id.to_string(), || self.inner.get_artist(id))
            .await
    }

    async fn get_artist_releases(
        &self,
        id: &str,
        kind: ReleaseKind,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<ReleaseSummary>> {
        let key = (id.to_string(), kind, offset, limit, market.to_string());
        self.releases
            .get_or_try_insert_with(key, || {
                self.inner
                    .get_artist_releases(id, kind, offset, limit, market)
            })
            .await
    }

    async fn count_artist_releases(&self, id: &str, kind: ReleaseKind, market: &str) -> Res<u64> {
        let key = (id.to_string(), kind, market.to_string());
        self.release_counts
            .get_or_try_insert_with(key, || {
                self.inner.count_artist_releases(id, kind, market)
            })
            .await
    }

    async fn get_playlist(&self, id: &str, market: &str) -> Res<PlaylistSummary> {
        self.inner.get_playlist(id, market).await
    }

    async fn get_playlist_tracks(
        &self,
        id: &str,
        offset: u32,
        limit: u32,
        market: &str,
    ) -> Res<Page<PlaylistItem>> {
        self.inner
            .get_playlist_tracks(id, offset, limit, market)
            .await
    }

    async fn search(&self, query: &str, kind: SearchKind, market: &str) -> Res<SearchResults> {
        let key = (query.to_string(), kind, market.to_string());
        self.searches
            .get_or_try_insert_with(key, || self.inner.search(query, kind, market))
            .await
    }

    async fn get_lyrics(&self, lyrics_track_id: u64) -> Res<String> {
        self.lyrics
            .get_or_try_insert_with(lyrics_track_id, || {
                self.inner.get_lyrics(lyrics_track_id)
            })
            .await
    }

    async fn find_lyrics_track_id(&self, artist: &str, title: &str) -> Res<u64> {
        self.lyrics_ids
            .get_or_try_insert_with((artist.to_string(), title.to_string()), || {
                self.inner.find_lyrics_track_id(artist, title)
            })
            .await
    }

    async fn search_video(&self, query: &str) -> Res<String> {
        self.videos
            .get_or_try_insert_with(query.to_string(), || self.inner.search_video(query))
            .await
    }
}
