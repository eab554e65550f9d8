//! # Spotify Integration Module
//!
//! This module is the catalog half of the upstream facade: playlists, tracks,
//! audio features, artists, releases and search, all read through the Spotify
//! Web API with an application (client-credentials) token.
//!
//! ## Architecture
//!
//! ```text
//! Library (pipeline)
//!          ↓
//! CachedUpstream (memoization)
//!          ↓
//! HttpUpstream
//!     ├── SpotifyClient (this module)
//!     ├── YouTubeClient
//!     └── MusixmatchClient
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token lifecycle: fetched lazily on first
//!   use, refreshed four minutes before it expires, dropped on a 401 or 403.
//! - [`tracks`] - Single tracks and batched audio features (50 ids per call).
//! - [`playlists`] - Playlist metadata and offset/limit pages of items.
//! - [`artists`] - Artist details and release pages filtered by release type.
//! - [`search`] - Catalog search by kind.
//!
//! ## Error Handling
//!
//! Every endpoint returns [`crate::Res`]. Status codes are classified once in
//! [`SpotifyClient::get_json`]: 404 becomes `NotFound`, rate limits, server
//! errors and undecodable bodies become `UpstreamTransient`. No endpoint
//! retries on its own; the song-detail path decides about retries.
//!
//! ## Thread Safety
//!
//! One `SpotifyClient` is shared by every request handler. The token sits
//! behind an async mutex which is held while a new token is requested, so a
//! burst of concurrent first requests performs a single token exchange.

pub mod artists;
pub mod auth;
pub mod playlists;
pub mod search;
pub mod tracks;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{Res, TuneNestError, utils, warning};

use auth::TokenManager;

pub(crate) const SERVICE: &str = "spotify";

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(
        http: Client,
        api_url: &str,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens: Mutex::new(TokenManager::new(token_url, client_id, client_secret)),
        }
    }

    /// Rejects ids that could not be Spotify base62 ids before they end up in
    /// a request path.
    fn checked_id<'a>(&self, what: &str, id: &'a str) -> Res<&'a str> {
        if utils::is_catalog_id(id) {
            Ok(id)
        } else {
            Err(TuneNestError::NotFound(format!("{what} {id}")))
        }
    }

    /// Performs an authorized GET and decodes the JSON body.
    ///
    /// `what` names the requested entity for error messages.
    async fn get_json<T: DeserializeOwned>(
        &self,
        what: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Res<T> {
        let token = {
            let mut tokens = self.tokens.lock().await;
            tokens.get_valid_token(&self.http).await?
        };

        let response = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.tokens.lock().await.invalidate();
            return Err(TuneNestError::transient(
                SERVICE,
                format!("{what}: access token rejected"),
            ));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            warning!("Spotify rate limit hit, retry after {} seconds", retry_after);
            return Err(TuneNestError::transient(
                SERVICE,
                format!("{what}: rate limited, retry after {retry_after}s"),
            ));
        }

        if !status.is_success() {
            return Err(TuneNestError::from_status(SERVICE, what, status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TuneNestError::from_reqwest(SERVICE, e))
    }
}
