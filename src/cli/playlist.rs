use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::Library,
    success,
    types::{SortDirective, TrackTableRow},
    warning,
};

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub async fn playlist(library: &Library, id: &str, market: &str, sort: Option<SortDirective>) {
    let pb = spinner(&format!("Fetching playlist {id}..."));
    let result = library.playlist(id, market, sort).await;
    pb.finish_and_clear();

    let view = match result {
        Ok(view) => view,
        Err(e) => error!("Cannot load playlist {}. Err: {}", id, e),
    };

    match &view.category {
        Some(category) => info!("{} / {}", category, view.name),
        None => info!("{}", view.name),
    }

    let rows: Vec<TrackTableRow> = view
        .tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artist: t.artist.clone(),
            bpm: t.tempo_label.clone(),
            key: t.camelot.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));

    if view.truncated {
        warning!(
            "Playlist has more than {} tracks, only the first {} are shown",
            view.cap,
            view.cap
        );
    } else {
        success!("{} tracks", view.tracks.len());
    }
}
