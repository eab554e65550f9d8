use crate::types::Image;

/// Artwork shown for tracks and playlists without any image.
pub const PLACEHOLDER_ARTWORK: &str = "/static/img/no-artwork.png";

/// Marks the end of usable lyrics; the service appends a disclaimer after it.
pub const LYRICS_DELIMITER: &str = "\n*******";

/// Spotify ids are 22 base62 characters. Anything else cannot exist upstream.
pub fn is_catalog_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 64 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// First image URL, or [`PLACEHOLDER_ARTWORK`].
pub fn artwork_or_placeholder(images: &[Image]) -> String {
    images
        .iter()
        .map(|i| i.url.trim())
        .find(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_ARTWORK)
        .to_string()
}

/// Cuts a lyrics body at [`LYRICS_DELIMITER`] and drops trailing whitespace.
pub fn trim_lyrics(body: &str) -> String {
    let usable = match body.find(LYRICS_DELIMITER) {
        Some(end) => &body[..end],
        None => body,
    };
    usable.trim_end().to_string()
}

/// Converts newlines to `<br>` for display.
pub fn lyrics_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

/// Converts a `0.0..=1.0` metric into a `0..=100` percentage.
pub fn percent(value: Option<f64>) -> Option<u8> {
    value
        .filter(|v| v.is_finite())
        .map(|v| (v * 100.0).round().clamp(0.0, 100.0) as u8)
}

/// Tempo for display: whole BPM, or `"unknown"`.
pub fn tempo_label(tempo: Option<f64>) -> String {
    match tempo {
        Some(t) if t.is_finite() && t > 0.0 => format!("{}", t.round() as u32),
        _ => "unknown".to_string(),
    }
}

/// `ceil(total_items / per_page)`; zero items means zero pages.
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page as u64).min(u32::MAX as u64) as u32
}

/// Search phrase used for the video lookup of a track.
pub fn video_query(track: &str, artist: &str) -> String {
    format!("{} {}", track.trim(), artist.trim()).trim().to_string()
}
