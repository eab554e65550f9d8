//! # CLI Module
//!
//! Command implementations behind the `tunenest` binary. Each command receives
//! the already-constructed [`crate::management::Library`], runs one pipeline
//! operation and prints the result as a table or a short report. Failures are
//! fatal here: a command that cannot produce its output exits with code 1.
//!
//! ## Commands
//!
//! - [`serve`] - Starts the HTTP server.
//! - [`playlist`] - Enriched playlist tracks, optionally sorted by BPM or key.
//! - [`song`] - One track with audio features and lyrics.
//! - [`list_releases`] - One page of an artist's releases.
//! - [`catalog`] - Configured playlists grouped by category.
//!
//! ## Usage Patterns
//!
//! ```bash
//! tunenest serve
//! tunenest playlist 37i9dQZEVXbINTEnbFeb8d --sort key --order desc
//! tunenest song 4uLU6hMCjMI75M1A2tKUQC
//! tunenest releases 4NHQUGzhtTLFvgF5SZesLK --type single --page 2
//! tunenest catalog
//! ```

mod catalog;
mod playlist;
mod releases;
mod serve;
mod song;

pub use catalog::catalog;
pub use playlist::playlist;
pub use releases::list_releases;
pub use serve::serve;
pub use song::song;
