//! Camelot wheel notation for harmonic mixing.
//!
//! Spotify reports a track's key as a pitch class (`0` = C ... `11` = B) and a
//! mode (`1` = major, `0` = minor). DJs use the Camelot wheel instead: twelve
//! positions, `A` for minor keys and `B` for major keys, where neighbouring
//! labels mix cleanly.

/// Label returned for keys that cannot be placed on the wheel.
pub const UNKNOWN_KEY: &str = "N/A";

/// Color used for labels outside the wheel.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

/// Sort value for labels outside the wheel; they trail an ascending list.
pub const UNKNOWN_SORT_KEY: u32 = u32::MAX;

// Indexed by pitch class.
const MINOR: [&str; 12] = [
    "5A", "12A", "7A", "2A", "9A", "4A", "11A", "6A", "1A", "8A", "3A", "10A",
];
const MAJOR: [&str; 12] = [
    "8B", "3B", "10B", "5B", "12B", "7B", "2B", "9B", "4B", "11B", "6B", "1B",
];

// Indexed by wheel position - 1.
const MINOR_COLORS: [&str; 12] = [
    "#00E5CC", "#3CEE81", "#86F24F", "#DDF145", "#FDD655", "#FFB16D", "#FF9687", "#FF88A8",
    "#F38CCF", "#CF95F0", "#A9A7FE", "#6FC4FB",
];
const MAJOR_COLORS: [&str; 12] = [
    "#01EDCA", "#56F18B", "#9EF362", "#E5F356", "#FFDD6B", "#FFBE84", "#FFA69B", "#FF9FBA",
    "#F7A2DB", "#DCA9F8", "#BFB9FF", "#8CD2FD",
];

/// Maps a pitch class and mode to its Camelot label.
///
/// Returns [`UNKNOWN_KEY`] for a pitch class outside `0..=11` (Spotify uses
/// `-1` when no key was detected) or a mode other than `0`/`1`.
///
/// # Example
///
/// ```
/// assert_eq!(camelot_key(0, 1), "8B"); // C major
/// assert_eq!(camelot_key(9, 0), "8A"); // A minor
/// assert_eq!(camelot_key(-1, 1), "N/A");
/// ```
pub fn camelot_key(pitch_class: i32, mode: i32) -> &'static str {
    let Ok(index) = usize::try_from(pitch_class) else {
        return UNKNOWN_KEY;
    };
    if index >= 12 {
        return UNKNOWN_KEY;
    }

    match mode {
        0 => MINOR[index],
        1 => MAJOR[index],
        _ => UNKNOWN_KEY,
    }
}

/// Like [`camelot_key`] but for optional upstream values.
pub fn camelot_key_opt(pitch_class: Option<i32>, mode: Option<i32>) -> &'static str {
    match (pitch_class, mode) {
        (Some(pitch_class), Some(mode)) => camelot_key(pitch_class, mode),
        _ => UNKNOWN_KEY,
    }
}

/// Splits a label like `"11B"` into its wheel position and letter.
fn parse_label(label: &str) -> Option<(u32, char)> {
    let label = label.trim();
    let letter = label.chars().last()?.to_ascii_uppercase();
    if letter != 'A' && letter != 'B' {
        return None;
    }

    let digits = &label[..label.len() - 1];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u32 = digits.parse().ok()?;
    if !(1..=12).contains(&number) {
        return None;
    }

    Some((number, letter))
}

/// Display color for a Camelot label, [`FALLBACK_COLOR`] if it is not one.
pub fn color_for(label: &str) -> &'static str {
    match parse_label(label) {
        Some((number, 'A')) => MINOR_COLORS[(number - 1) as usize],
        Some((number, _)) => MAJOR_COLORS[(number - 1) as usize],
        None => FALLBACK_COLOR,
    }
}

/// Ordering value along the wheel: `position * 2`, plus one for `B`.
///
/// `1A < 1B < 2A < ... < 12B`. Labels that do not parse get
/// [`UNKNOWN_SORT_KEY`].
pub fn sort_key(label: &str) -> u32 {
    match parse_label(label) {
        Some((number, 'B')) => number * 2 + 1,
        Some((number, _)) => number * 2,
        None => UNKNOWN_SORT_KEY,
    }
}
