#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    },
};

use async_trait::async_trait;
use tunenest::{
    Res, TuneNestError,
    types::{
        ArtistDetails, AudioFeatures, ExternalUrls, FeaturesById, Followers, Image, Page,
        PlaylistItem, PlaylistSummary, RawAlbum, RawArtist, RawTrack, ReleaseKind, ReleaseSummary,
        SearchKind, SearchResults,
    },
    upstream::Upstream,
};

// Helper function to create a raw track
pub fn raw_track(id: &str, name: &str, artist: &str) -> RawTrack {
    RawTrack {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        artists: vec![RawArtist {
            id: Some(format!("{id}artist")),
            name: Some(artist.to_string()),
        }],
        album: Some(RawAlbum {
            id: Some(format!("{id}album")),
            name: Some(format!("{name} (Single)")),
            images: vec![Image {
                url: format!("https://img.example/{id}.jpg"),
                width: Some(640),
                height: Some(640),
            }],
        }),
        external_urls: ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{id}")),
        },
        preview_url: None,
        popularity: Some(50),
    }
}

// Helper function to create audio features
pub fn features(id: &str, tempo: f64, key: i32, mode: i32) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        tempo: Some(tempo),
        key: Some(key),
        mode: Some(mode),
        acousticness: Some(0.12),
        danceability: Some(0.8),
        energy: Some(0.66),
        instrumentalness: Some(0.0),
        valence: Some(0.5),
    }
}

pub fn release(id: &str, name: &str) -> ReleaseSummary {
    ReleaseSummary {
        id: id.to_string(),
        name: name.to_string(),
        album_type: "album".to_string(),
        release_date: "2024-01-01".to_string(),
        total_tracks: 10,
        images: Vec::new(),
        external_urls: ExternalUrls::default(),
    }
}

/// In-memory [`Upstream`] with per-operation call counters.
#[derive(Default)]
pub struct FakeUpstream {
    pub tracks: HashMap<String, RawTrack>,
    pub features: FeaturesById,
    pub playlist_name: String,
    pub playlist_items: Vec<PlaylistItem>,
    pub releases: Vec<ReleaseSummary>,
    /// Raw lyrics body returned for every matched track.
    pub lyrics: Option<String>,
    pub video_id: Option<String>,
    /// Number of leading `get_track` calls that fail with a transient error.
    pub track_failures: u32,
    /// When set, `get_audio_features` always fails with a transient error.
    pub features_down: bool,
    pub calls: Mutex<HashMap<&'static str, u32>>,
    pub page_requests: Mutex<Vec<(u32, u32)>>,
    /// Transient `get_track` failures served so far.
    pub failed_tracks: AtomicU32,
}

impl FakeUpstream {
    pub fn with_playlist(items: Vec<RawTrack>) -> Self {
        Self {
            playlist_name: "Fake Playlist".to_string(),
            playlist_items: items
                .into_iter()
                .map(|track| PlaylistItem { track: Some(track) })
                .collect(),
            ..Self::default()
        }
    }

    pub fn numbered_playlist(count: usize) -> Self {
        Self::with_playlist(
            (0..count)
                .map(|i| raw_track(&format!("t{i}"), &format!("Track {i}"), "Artist"))
                .collect(),
        )
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self, operation: &str) -> u32 {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
    }

    fn transient(message: &str) -> TuneNestError {
        TuneNestError::transient("fake", message)
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn get_track(&self, id: &str, _market: &str) -> Res<RawTrack> {
        self.record("get_track");
        if self.failed_tracks.load(Ordering::SeqCst) < self.track_failures {
            self.failed_tracks.fetch_add(1, Ordering::SeqCst);
            return Err(Self::transient("track lookup failed"));
        }
        self.tracks
            .get(id)
            .cloned()
            .ok_or_else(|| TuneNestError::NotFound(format!("track {id}")))
    }

    async fn get_audio_features(&self, ids: &[String]) -> Res<FeaturesById> {
        self.record("get_audio_features");
        if self.features_down {
            return Err(Self::transient("features unavailable"));
        }
        Ok(ids
            .iter()
            .filter_map(|id| self.features.get(id).map(|f| (id.clone(), f.clone())))
            .collect())
    }

    async fn get_artist(&self, id: &str) -> Res<ArtistDetails> {
        self.record("get_artist");
        if id == "missing" {
            return Err(TuneNestError::NotFound(format!("artist {id}")));
        }
        Ok(ArtistDetails {
            id: id.to_string(),
            name: format!("Artist {id}"),
            genres: vec!["j-pop".to_string()],
            popularity: Some(70),
            followers: Followers { total: 1000 },
            images: Vec::new(),
            external_urls: ExternalUrls::default(),
        })
    }

    async fn get_artist_releases(
        &self,
        _id: &str,
        _kind: ReleaseKind,
        offset: u32,
        limit: u32,
        _market: &str,
    ) -> Res<Page<ReleaseSummary>> {
        self.record("get_artist_releases");
        self.page_requests.lock().unwrap().push((offset, limit));
        let start = (offset as usize).min(self.releases.len());
        let end = (start + limit as usize).min(self.releases.len());
        Ok(Page {
            items: self.releases[start..end].to_vec(),
            total: Some(self.releases.len() as u64),
            has_more: end < self.releases.len(),
        })
    }

    async fn get_playlist(&self, id: &str, _market: &str) -> Res<PlaylistSummary> {
        self.record("get_playlist");
        Ok(PlaylistSummary {
            id: id.to_string(),
            name: self.playlist_name.clone(),
            description: None,
            images: Vec::new(),
            external_urls: ExternalUrls::default(),
            tracks: None,
        })
    }

    async fn get_playlist_tracks(
        &self,
        _id: &str,
        offset: u32,
        limit: u32,
        _market: &str,
    ) -> Res<Page<PlaylistItem>> {
        self.record("get_playlist_tracks");
        self.page_requests.lock().unwrap().push((offset, limit));
        let start = (offset as usize).min(self.playlist_items.len());
        let end = (start + limit as usize).min(self.playlist_items.len());
        Ok(Page {
            items: self.playlist_items[start..end].to_vec(),
            total: Some(self.playlist_items.len() as u64),
            has_more: end < self.playlist_items.len(),
        })
    }

    async fn search(&self, query: &str, _kind: SearchKind, _market: &str) -> Res<SearchResults> {
        self.record("search");
        Ok(SearchResults {
            tracks: self
                .tracks
                .values()
                .filter(|t| t.name.as_deref().is_some_and(|n| n.contains(query)))
                .cloned()
                .collect(),
            ..SearchResults::default()
        })
    }

    async fn get_lyrics(&self, _lyrics_track_id: u64) -> Res<String> {
        self.record("get_lyrics");
        self.lyrics
            .clone()
            .ok_or_else(|| TuneNestError::NotFound("lyrics".to_string()))
    }

    async fn find_lyrics_track_id(&self, _artist: &str, _title: &str) -> Res<u64> {
        self.record("find_lyrics_track_id");
        match self.lyrics {
            Some(_) => Ok(42),
            None => Err(TuneNestError::NotFound("lyrics track".to_string())),
        }
    }

    async fn search_video(&self, query: &str) -> Res<String> {
        self.record("search_video");
        match &self.video_id {
            Some(id) => Ok(id.clone()),
            None => Err(TuneNestError::NotFound(format!("video for {query}"))),
        }
    }
}
