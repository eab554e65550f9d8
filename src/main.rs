use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunenest::{
    cli,
    config::{self, Settings},
    error,
    locale::DEFAULT_MARKET,
    management::Library,
    types::{ReleaseKind, SortDirective, SortField, SortOrder},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP server
    Serve,

    /// Show the enriched tracks of a playlist
    Playlist(PlaylistOptions),

    /// Show one song with audio features and lyrics
    Song(SongOptions),

    /// List one page of an artist's releases
    Releases(ReleasesOptions),

    /// List the configured playlists by category
    Catalog,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist id
    pub id: String,

    /// Sort by `tempo` (alias `bpm`) or `key` (alias `camelot`)
    #[clap(long, value_parser = str::parse::<SortField>)]
    pub sort: Option<SortField>,

    /// Sort order, `asc` or `desc`
    #[clap(long, value_parser = str::parse::<SortOrder>, default_value = "asc")]
    pub order: SortOrder,

    /// Market (ISO country code)
    #[clap(long, default_value = DEFAULT_MARKET)]
    pub market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SongOptions {
    /// Track id
    pub id: String,

    /// Market (ISO country code)
    #[clap(long, default_value = DEFAULT_MARKET)]
    pub market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ReleasesOptions {
    /// Artist id
    pub artist_id: String,

    /// Release type: album, single, compilation or appears_on
    #[clap(long = "type", value_parser = str::parse::<ReleaseKind>, default_value = "album")]
    pub kind: ReleaseKind,

    /// Page number, starting at 1
    #[clap(long, default_value_t = 1)]
    pub page: u32,

    /// Market (ISO country code)
    #[clap(long, default_value = DEFAULT_MARKET)]
    pub market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn library(settings: &Settings) -> Library {
    match Library::from_settings(settings).await {
        Ok(library) => library,
        Err(e) => error!("Cannot initialize. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Serve => cli::serve(&settings, library(&settings).await).await,
        Command::Playlist(opt) => {
            let sort = opt.sort.map(|field| SortDirective {
                field,
                order: opt.order,
            });
            cli::playlist(&library(&settings).await, &opt.id, &opt.market, sort).await
        }
        Command::Song(opt) => cli::song(&library(&settings).await, &opt.id, &opt.market).await,
        Command::Releases(opt) => {
            cli::list_releases(
                &library(&settings).await,
                &opt.artist_id,
                opt.kind,
                opt.page,
                &opt.market,
            )
            .await
        }
        Command::Catalog => cli::catalog(&library(&settings).await),
        Command::Completions(_) => {}
    }
}
