use std::{sync::Arc, time::Duration};

use crate::{
    Res,
    config::{self, Settings},
    retry::with_retry,
    types::{
        ArtistDetails, ArtistOverview, CatalogGroups, FeaturesById, PlaylistView, RawTrack,
        ReleaseCount, ReleaseKind, ReleasePage, SearchKind, SearchResults, SongDetail,
        SortDirective,
    },
    upstream::{HttpUpstream, Upstream},
    utils,
};

use super::{CachedUpstream, CatalogManager, enrichment, pager};

/// Items requested per playlist page; the endpoint maximum.
pub const PLAYLIST_PAGE_SIZE: u32 = 100;

/// Releases per UI page; one UI page is one upstream page.
pub const RELEASES_PER_PAGE: u32 = 10;

/// Tunables of the pipeline that are not upstream credentials.
#[derive(Debug, Clone)]
pub struct LibraryOptions {
    pub playlist_cap: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            playlist_cap: config::DEFAULT_PLAYLIST_CAP,
            max_retries: config::DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(config::DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl From<&Settings> for LibraryOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            playlist_cap: settings.playlist_cap,
            max_retries: settings.max_retries,
            retry_delay: settings.retry_delay,
        }
    }
}

/// The enrichment pipeline behind every page and command.
///
/// Constructed once per process and shared behind an `Arc`; it holds the
/// (usually cache-decorated) upstream facade and the playlist catalog.
pub struct Library {
    upstream: Arc<dyn Upstream>,
    catalog: CatalogManager,
    options: LibraryOptions,
}

impl Library {
    pub fn new(
        upstream: Arc<dyn Upstream>,
        catalog: CatalogManager,
        options: LibraryOptions,
    ) -> Self {
        Self {
            upstream,
            catalog,
            options,
        }
    }

    /// Wires the HTTP clients, the memoizing cache and the catalog file.
    pub async fn from_settings(settings: &Settings) -> Res<Self> {
        let upstream = CachedUpstream::shared(HttpUpstream::shared(settings), settings.cache);
        let catalog = CatalogManager::load(&settings.playlists_file).await?;
        Ok(Self::new(upstream, catalog, LibraryOptions::from(settings)))
    }

    pub fn options(&self) -> &LibraryOptions {
        &self.options
    }

    pub fn catalog(&self) -> CatalogGroups {
        self.catalog.groups()
    }

    /// Enriched tracks of a playlist, capped at the configured maximum.
    ///
    /// A playlist listed in the catalog with a malformed label fails with a
    /// `Configuration` error before anything is fetched.
    pub async fn playlist(
        &self,
        id: &str,
        market: &str,
        sort: Option<SortDirective>,
    ) -> Res<PlaylistView> {
        let entry = self.catalog.entry(id).transpose()?;
        let summary = self.upstream.get_playlist(id, market).await?;

        let cap = self.options.playlist_cap;
        let fetched = pager::fetch_all(PLAYLIST_PAGE_SIZE, cap, |offset, limit| {
            self.upstream.get_playlist_tracks(id, offset, limit, market)
        })
        .await?;

        let raw_tracks: Vec<RawTrack> = fetched
            .items
            .into_iter()
            .filter_map(|item| item.track)
            .collect();

        let ids: Vec<String> = raw_tracks.iter().filter_map(|t| t.id.clone()).collect();
        let features = if ids.is_empty() {
            FeaturesById::new()
        } else {
            self.upstream.get_audio_features(&ids).await?
        };

        let mut tracks = enrichment::enrich(&raw_tracks, &features);
        enrichment::sort_tracks(&mut tracks, sort);

        let (name, category) = match entry {
            Some(entry) => (entry.name, Some(entry.category)),
            None => (summary.name, None),
        };

        Ok(PlaylistView {
            id: summary.id,
            name,
            category,
            artwork_url: utils::artwork_or_placeholder(&summary.images),
            external_url: summary.external_urls.spotify,
            tracks,
            truncated: fetched.truncated,
            cap: self.options.playlist_cap,
        })
    }

    /// Track, audio features and lyrics of one song, retried as a unit.
    pub async fn song_detail(&self, id: &str, market: &str) -> Res<SongDetail> {
        with_retry(self.options.max_retries, self.options.retry_delay, || {
            self.fetch_song_detail(id, market)
        })
        .await
    }

    async fn fetch_song_detail(&self, id: &str, market: &str) -> Res<SongDetail> {
        let raw = self.upstream.get_track(id, market).await?;
        let features = self.upstream.get_audio_features(&[id.to_string()]).await?;

        let track = enrichment::enrich_one(&raw, features.get(id))
            .map_err(|reason| crate::TuneNestError::DataQuality(format!("track {id}: {reason}")))?;

        let lyrics = match self.lyrics_for(&track.artist, &track.name).await {
            Ok(body) => Some(body),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        Ok(SongDetail { track, lyrics })
    }

    async fn lyrics_for(&self, artist: &str, title: &str) -> Res<String> {
        let lyrics_id = self.upstream.find_lyrics_track_id(artist, title).await?;
        let body = self.upstream.get_lyrics(lyrics_id).await?;
        Ok(utils::lyrics_line_breaks(&utils::trim_lyrics(&body)))
    }

    pub async fn artist(&self, id: &str) -> Res<ArtistDetails> {
        self.upstream.get_artist(id).await
    }

    /// Artist details with the number of releases of every kind.
    pub async fn artist_overview(&self, id: &str, market: &str) -> Res<ArtistOverview> {
        let artist = self.artist(id).await?;
        let mut release_counts = Vec::with_capacity(ReleaseKind::ALL.len());
        for kind in ReleaseKind::ALL {
            let count = self.release_count(id, kind, market).await?;
            release_counts.push(ReleaseCount { kind, count });
        }
        Ok(ArtistOverview {
            artist,
            release_counts,
        })
    }

    pub async fn artist_releases(
        &self,
        id: &str,
        kind: ReleaseKind,
        page: u32,
        market: &str,
    ) -> Res<ReleasePage> {
        let upstream = self.upstream.as_ref();
        pager::release_page(upstream, id, kind, page, RELEASES_PER_PAGE, market).await
    }

    pub async fn release_count(&self, id: &str, kind: ReleaseKind, market: &str) -> Res<u64> {
        self.upstream.count_artist_releases(id, kind, market).await
    }

    /// Video id for a track, searched as `"<track> <artist>"`.
    pub async fn video_for(&self, track: &str, artist: &str) -> Res<String> {
        let query = utils::video_query(track, artist);
        if query.is_empty() {
            return Err(crate::TuneNestError::NotFound("video for empty query".to_string()));
        }
        self.upstream.search_video(&query).await
    }

    pub async fn search(&self, query: &str, kind: SearchKind, market: &str) -> Res<SearchResults> {
        self.upstream.search(query, kind, market).await
    }
}
