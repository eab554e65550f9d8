use tabled::Table;

use crate::{
    error, info,
    management::Library,
    types::{ReleaseKind, ReleaseTableRow},
    warning,
};

use super::playlist::spinner;

pub async fn list_releases(
    library: &Library,
    artist_id: &str,
    kind: ReleaseKind,
    page: u32,
    market: &str,
) {
    let pb = spinner(&format!("Fetching {kind} releases..."));
    let result = library.artist_releases(artist_id, kind, page, market).await;
    pb.finish_and_clear();

    let releases = match result {
        Ok(releases) => releases,
        Err(e) => error!("Cannot load releases for artist {}. Err: {}", artist_id, e),
    };

    if releases.items.is_empty() {
        warning!(
            "No {} releases on page {} ({} pages in total)",
            kind,
            releases.page,
            releases.total_pages
        );
        return;
    }

    let rows: Vec<ReleaseTableRow> = releases
        .items
        .into_iter()
        .map(|r| ReleaseTableRow {
            date: r.release_date,
            name: r.name,
            tracks: r.total_tracks,
        })
        .collect();

    println!("{}", Table::new(rows));
    info!(
        "Page {}/{} ({} {} releases)",
        releases.page, releases.total_pages, releases.total_items, kind
    );
}
