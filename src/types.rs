use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

// Raw catalog records. Every field is optional so a single malformed record
// can be dropped by the enrichment pipeline instead of failing the whole page.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAlbum {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    pub album: Option<RawAlbum>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub preview_url: Option<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<RawTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of an upstream collection, independent of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub has_more: bool,
}

impl<T> From<Paging<T>> for Page<T> {
    fn from(paging: Paging<T>) -> Self {
        Page {
            has_more: paging.next.is_some(),
            total: paging.total,
            items: paging.items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub tempo: Option<f64>,
    pub key: Option<i32>,
    pub mode: Option<i32>,
    pub acousticness: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub valence: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

pub type FeaturesById = std::collections::HashMap<String, AudioFeatures>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Number of releases an artist has of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseCount {
    pub kind: ReleaseKind,
    pub count: u64,
}

/// Artist page: details plus release counts per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistOverview {
    #[serde(flatten)]
    pub artist: ArtistDetails,
    pub release_counts: Vec<ReleaseCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub id: String,
    pub name: String,
    pub album_type: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub tracks: Option<PlaylistTracksRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<Option<RawTrack>>>,
    pub artists: Option<Paging<Option<ArtistDetails>>>,
    pub albums: Option<Paging<Option<ReleaseSummary>>>,
    pub playlists: Option<Paging<Option<PlaylistSummary>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub tracks: Vec<RawTrack>,
    pub artists: Vec<ArtistDetails>,
    pub albums: Vec<ReleaseSummary>,
    pub playlists: Vec<PlaylistSummary>,
}

impl From<SearchResponse> for SearchResults {
    fn from(res: SearchResponse) -> Self {
        fn flatten<T>(paging: Option<Paging<Option<T>>>) -> Vec<T> {
            paging
                .map(|p| p.items.into_iter().flatten().collect())
                .unwrap_or_default()
        }

        SearchResults {
            tracks: flatten(res.tracks),
            artists: flatten(res.artists),
            albums: flatten(res.albums),
            playlists: flatten(res.playlists),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Track,
    Artist,
    Album,
    Playlist,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchKind::Track => "track",
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
        };
        f.write_str(s)
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(SearchKind::Track),
            "artist" => Ok(SearchKind::Artist),
            "album" => Ok(SearchKind::Album),
            "playlist" => Ok(SearchKind::Playlist),
            other => Err(format!("unknown search type: {other}")),
        }
    }
}

/// Release partition of an artist catalog (`include_groups` on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseKind {
    #[default]
    Album,
    Single,
    Compilation,
    AppearsOn,
}

impl ReleaseKind {
    pub const ALL: [ReleaseKind; 4] = [
        ReleaseKind::Album,
        ReleaseKind::Single,
        ReleaseKind::Compilation,
        ReleaseKind::AppearsOn,
    ];
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReleaseKind::Album => "album",
            ReleaseKind::Single => "single",
            ReleaseKind::Compilation => "compilation",
            ReleaseKind::AppearsOn => "appears_on",
        };
        f.write_str(s)
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "album" => Ok(ReleaseKind::Album),
            "single" => Ok(ReleaseKind::Single),
            "compilation" => Ok(ReleaseKind::Compilation),
            "appears_on" => Ok(ReleaseKind::AppearsOn),
            other => Err(format!("unknown release type: {other}")),
        }
    }
}

// Musixmatch envelope: `body` is an empty list instead of an object on errors.

#[derive(Debug, Clone, Deserialize)]
pub struct MusixmatchEnvelope {
    pub message: MusixmatchMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MusixmatchMessage {
    pub header: MusixmatchHeader,
    #[serde(default)]
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MusixmatchHeader {
    pub status_code: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherBody {
    pub track: MatcherTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherTrack {
    pub track_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsBody {
    pub lyrics: LyricsPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsPayload {
    pub lyrics_body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchResponse {
    #[serde(default)]
    pub items: Vec<VideoSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchItem {
    pub id: VideoId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Audio metrics of an enriched track. Percentages are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackFeatures {
    pub tempo: Option<f64>,
    pub key: Option<i32>,
    pub mode: Option<i32>,
    pub acousticness: Option<u8>,
    pub danceability: Option<u8>,
    pub energy: Option<u8>,
    pub instrumentalness: Option<u8>,
    pub valence: Option<u8>,
}

/// A display-ready track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub artwork_url: String,
    pub external_url: Option<String>,
    pub preview_url: Option<String>,
    pub features: Option<TrackFeatures>,
    /// Tempo in BPM rounded for display, or `"unknown"`.
    pub tempo_label: String,
    /// Camelot label such as `"8B"`, or `"N/A"`.
    pub camelot: String,
    pub color: String,
}

impl Track {
    pub fn tempo(&self) -> Option<f64> {
        self.features.as_ref().and_then(|f| f.tempo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[serde(alias = "bpm")]
    Tempo,
    #[serde(alias = "camelot")]
    Key,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tempo" | "bpm" => Ok(SortField::Tempo),
            "key" | "camelot" => Ok(SortField::Key),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub order: SortOrder,
}

/// Result of a capped bulk fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistView {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub artwork_url: String,
    pub external_url: Option<String>,
    pub tracks: Vec<Track>,
    pub truncated: bool,
    pub cap: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleasePage {
    pub artist_id: String,
    pub kind: ReleaseKind,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub items: Vec<ReleaseSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDetail {
    pub track: Track,
    /// Lyrics with line breaks converted for display; `None` when the lyrics
    /// service has no match or is not configured.
    pub lyrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogGroups {
    pub groups: BTreeMap<String, Vec<CatalogEntry>>,
    pub errors: Vec<CatalogIssue>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub bpm: String,
    pub key: String,
}

#[derive(Tabled)]
pub struct ReleaseTableRow {
    pub date: String,
    pub name: String,
    pub tracks: u32,
}

#[derive(Tabled)]
pub struct CatalogTableRow {
    pub category: String,
    pub name: String,
    pub id: String,
}
