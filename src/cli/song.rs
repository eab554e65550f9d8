use crate::{error, info, management::Library, warning};

use super::playlist::spinner;

pub async fn song(library: &Library, id: &str, market: &str) {
    let pb = spinner(&format!("Fetching song {id}..."));
    let result = library.song_detail(id, market).await;
    pb.finish_and_clear();

    let detail = match result {
        Ok(detail) => detail,
        Err(e) => error!("Cannot load song {}. Err: {}", id, e),
    };

    let track = &detail.track;
    info!("{} - {}", track.artist, track.name);
    info!("BPM: {}  Key: {} ({})", track.tempo_label, track.camelot, track.color);

    if let Some(features) = &track.features {
        let show = |v: Option<u8>| v.map(|v| format!("{v}%")).unwrap_or_else(|| "-".to_string());
        info!(
            "Acoustic {}  Dance {}  Energy {}  Instrumental {}  Valence {}",
            show(features.acousticness),
            show(features.danceability),
            show(features.energy),
            show(features.instrumentalness),
            show(features.valence)
        );
    }

    match &detail.lyrics {
        Some(lyrics) => println!("\n{}", lyrics.replace("<br>", "\n")),
        None => warning!("No lyrics available"),
    }
}
