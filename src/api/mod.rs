//! # API Module
//!
//! HTTP handlers for the TuneNest web surface. Every endpoint answers JSON
//! (rendering pages from it is the front end's job) except failures, which are
//! plain-text bodies with a status code chosen by the error category.
//!
//! ## Endpoints
//!
//! - [`health`] - Liveness and version.
//! - [`index`] / [`playlist`] - Enriched playlist tracks, optionally sorted by
//!   tempo or Camelot key (`?sort=tempo|key&order=asc|desc`).
//! - [`catalog`] - Configured playlists grouped by category, with the entries
//!   whose label is malformed.
//! - [`song`] - Track detail with audio features and lyrics.
//! - [`artist`] / [`releases`] - Artist details and paginated releases
//!   (`?type=album|single|compilation|appears_on&page=N`).
//! - [`youtube`] - Video id for `?track=..&artist=..`.
//! - [`search`] - Catalog search (`?q=..&type=track|artist|album|playlist`).
//!
//! ## Request Context
//!
//! Each handler first runs [`context::request_market`]: the `CF-IPCountry`
//! header is checked against the allow-list and `Accept-Language` selects the
//! catalog market.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use tunenest::api::{health, playlist};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/playlists/{id}", get(playlist));
//! ```

mod artists;
pub mod context;
mod error;
mod health;
mod playlists;
mod search;
mod songs;
mod videos;

pub use artists::artist;
pub use artists::releases;
pub use context::AppState;
pub use context::SharedState;
pub use health::health;
pub use playlists::DEFAULT_PLAYLIST_ID;
pub use playlists::catalog;
pub use playlists::index;
pub use playlists::playlist;
pub use search::search;
pub use songs::song;
pub use videos::youtube;
