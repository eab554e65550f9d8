//! TuneNest library
//!
//! This library renders Spotify playlist, artist, album and track data enriched
//! with harmonic-mixing annotations (Camelot keys), lyrics and video lookups. It
//! contains the upstream clients, the memoizing cache layer, the paginated bulk
//! fetcher, the track enrichment pipeline and the HTTP/CLI surfaces built on top.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the JSON web surface
//! - `camelot` - Camelot wheel lookup tables
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every layer
//! - `locale` - Market and country selection from request headers
//! - `management` - Caching, pagination, enrichment and the library service
//! - `musixmatch` - Lyrics service client
//! - `retry` - Fixed-delay retry orchestration
//! - `server` - axum router and server bootstrap
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `upstream` - The upstream facade trait and its HTTP implementation
//! - `utils` - Utility functions and helpers
//! - `youtube` - Video search client
//!
//! # Example
//!
//! ```
//! use tunenest::{config, management::Library};
//!
//! #[tokio::main]
//! async fn main() -> tunenest::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let library = Library::from_settings(&settings).await?;
//!     let view = library.playlist("37i9dQZEVXbINTEnbFeb8d", "JP", None).await?;
//!     println!("{} tracks", view.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod camelot;
pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod management;
pub mod musixmatch;
pub mod retry;
pub mod server;
pub mod spotify;
pub mod types;
pub mod upstream;
pub mod utils;
pub mod youtube;

pub use error::TuneNestError;

/// A convenient Result type alias for operations that may fail.
///
/// Every layer reports failures through [`TuneNestError`] so callers can branch
/// on the failure category (not found, transient, configuration, ...) instead
/// of inspecting messages.
///
/// # Example
///
/// ```
/// use tunenest::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, TuneNestError>;

/// Prints an informational message with a blue bullet point.
///
/// The line is prefixed with the local wall-clock time so server output can be
/// followed request by request.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// info!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Catalog loaded with {} playlists", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for startup failures (missing credentials, unusable server
/// address, unreadable catalog file) where the process must not keep running.
/// Request-level failures are returned as [`TuneNestError`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: malformed upstream records that were dropped,
/// catalog entries that cannot be rendered, failed attempts inside a retry loop.
///
/// # Example
///
/// ```
/// warning!("Dropping playlist item without id at position {}", index);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
