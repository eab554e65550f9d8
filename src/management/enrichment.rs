//! Turns raw catalog records into display-ready tracks.

use std::cmp::Ordering;

use crate::{
    camelot,
    types::{
        AudioFeatures, FeaturesById, RawTrack, SortDirective, SortField, SortOrder, Track,
        TrackFeatures,
    },
    utils, warning,
};

fn features_of(raw: &AudioFeatures) -> TrackFeatures {
    TrackFeatures {
        tempo: raw.tempo.filter(|t| t.is_finite()),
        key: raw.key,
        mode: raw.mode,
        acousticness: utils::percent(raw.acousticness),
        danceability: utils::percent(raw.danceability),
        energy: utils::percent(raw.energy),
        instrumentalness: utils::percent(raw.instrumentalness),
        valence: utils::percent(raw.valence),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Builds one track, or explains which required field is missing.
///
/// Required: id, name and a named primary artist. Audio features are
/// optional; without them the tempo reads `"unknown"` and the key `"N/A"`.
pub fn enrich_one(raw: &RawTrack, features: Option<&AudioFeatures>) -> Result<Track, String> {
    let id = non_empty(&raw.id).ok_or("missing id")?;
    let name = non_empty(&raw.name).ok_or("missing name")?;
    let artist = raw
        .artists
        .first()
        .and_then(|a| non_empty(&a.name))
        .ok_or("missing artist")?;

    let artwork_url = raw
        .album
        .as_ref()
        .map(|album| utils::artwork_or_placeholder(&album.images))
        .unwrap_or_else(|| utils::PLACEHOLDER_ARTWORK.to_string());

    let features = features.map(features_of);
    let camelot = features
        .as_ref()
        .map(|f| camelot::camelot_key_opt(f.key, f.mode))
        .unwrap_or(camelot::UNKNOWN_KEY);

    Ok(Track {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        artwork_url,
        external_url: raw.external_urls.spotify.clone(),
        preview_url: raw.preview_url.clone(),
        tempo_label: utils::tempo_label(features.as_ref().and_then(|f| f.tempo)),
        features,
        camelot: camelot.to_string(),
        color: camelot::color_for(camelot).to_string(),
    })
}

/// Joins raw tracks with their audio features, keeping upstream order.
///
/// Records missing a required field are dropped with a warning; the rest of
/// the batch is unaffected.
pub fn enrich(raw_tracks: &[RawTrack], features_by_id: &FeaturesById) -> Vec<Track> {
    raw_tracks
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let features = raw.id.as_ref().and_then(|id| features_by_id.get(id));
            match enrich_one(raw, features) {
                Ok(track) => Some(track),
                Err(reason) => {
                    warning!("Dropping track at position {}: {}", index, reason);
                    None
                }
            }
        })
        .collect()
}

fn compare(a: &Track, b: &Track, field: SortField) -> Ordering {
    match field {
        SortField::Tempo => {
            // unknown tempo sorts below any measured tempo
            let a = a.tempo().unwrap_or(f64::NEG_INFINITY);
            let b = b.tempo().unwrap_or(f64::NEG_INFINITY);
            a.total_cmp(&b)
        }
        SortField::Key => camelot::sort_key(&a.camelot).cmp(&camelot::sort_key(&b.camelot)),
    }
}

/// Stable sort by tempo or by Camelot position. `None` keeps upstream order.
pub fn sort_tracks(tracks: &mut [Track], directive: Option<SortDirective>) {
    let Some(directive) = directive else {
        return;
    };

    match directive.order {
        SortOrder::Asc => tracks.sort_by(|a, b| compare(a, b, directive.field)),
        SortOrder::Desc => tracks.sort_by(|a, b| compare(b, a, directive.field)),
    }
}
