//! Configuration management for TuneNest.
//!
//! This module loads configuration values from environment variables and an
//! optional `.env` file in the local data directory, and freezes them into a
//! [`Settings`] value at startup. Nothing downstream reads the environment
//! directly; the settings are handed to the services that need them.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{Res, TuneNestError, management::CacheCapacities};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_MUSIXMATCH_API_URL: &str = "https://api.musixmatch.com/ws/1.1";
pub const DEFAULT_PLAYLIST_CAP: usize = 500;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

/// Returns the TuneNest directory inside the platform local data directory.
///
/// - Linux: `~/.local/share/tunenest`
/// - macOS: `~/Library/Application Support/tunenest`
/// - Windows: `%LOCALAPPDATA%/tunenest`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunenest");
    path
}

/// Loads environment variables from `tunenest/.env` in the local data directory.
///
/// Creates the directory if it does not exist yet. A missing `.env` file is not
/// an error: deployments usually inject the variables directly.
///
/// # Errors
///
/// Returns a `Configuration` error if the directory cannot be created or the
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| TuneNestError::Configuration(format!("{}: {e}", dir.display())))?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| TuneNestError::Configuration(format!("{}: {e}", path.display())))?;
    }

    Ok(())
}

/// Immutable runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_address: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub youtube_api_key: String,
    pub youtube_api_url: String,
    /// Lyrics are disabled when no key is configured.
    pub musixmatch_api_key: Option<String>,
    pub musixmatch_api_url: String,
    pub playlists_file: PathBuf,
    pub playlist_cap: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Upper-case ISO country codes; empty allows every country.
    pub allowed_countries: Vec<String>,
    pub cache: CacheCapacities,
}

impl Settings {
    /// Builds the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when a required credential
    /// (`SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `YOUTUBE_API_KEY`) is
    /// missing or when a numeric variable cannot be parsed.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| TuneNestError::Configuration(format!("{key} must be set")))
        };

        let server_address = match (get("SERVER_ADDRESS"), get("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => format!("0.0.0.0:{}", parse_number::<u16>("PORT", &port)?),
            (None, None) => DEFAULT_SERVER_ADDRESS.to_string(),
        };

        let playlist_cap = match get("TUNENEST_PLAYLIST_CAP") {
            Some(v) => parse_number("TUNENEST_PLAYLIST_CAP", &v)?,
            None => DEFAULT_PLAYLIST_CAP,
        };
        if playlist_cap == 0 {
            return Err(TuneNestError::Configuration(
                "TUNENEST_PLAYLIST_CAP must be greater than zero".to_string(),
            ));
        }

        let max_retries = match get("TUNENEST_MAX_RETRIES") {
            Some(v) => parse_number("TUNENEST_MAX_RETRIES", &v)?,
            None => DEFAULT_MAX_RETRIES,
        };

        let retry_delay_ms = match get("TUNENEST_RETRY_DELAY_MS") {
            Some(v) => parse_number("TUNENEST_RETRY_DELAY_MS", &v)?,
            None => DEFAULT_RETRY_DELAY_MS,
        };

        let allowed_countries = get("TUNENEST_ALLOWED_COUNTRIES")
            .map(|v| {
                v.split(',')
                    .map(|c| c.trim().to_ascii_uppercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            server_address,
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_api_url: get("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            spotify_token_url: get("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string()),
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            youtube_api_url: get("YOUTUBE_API_URL")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string()),
            musixmatch_api_key: get("MUSIXMATCH_API_KEY"),
            musixmatch_api_url: get("MUSIXMATCH_API_URL")
                .unwrap_or_else(|| DEFAULT_MUSIXMATCH_API_URL.to_string()),
            playlists_file: get("TUNENEST_PLAYLISTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir().join("playlists.json")),
            playlist_cap,
            max_retries,
            retry_delay: Duration::from_millis(retry_delay_ms),
            allowed_countries,
            cache: CacheCapacities::default(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Res<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| TuneNestError::Configuration(format!("{key} must be a number, got {value:?}")))
}
