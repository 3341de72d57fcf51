use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flicker_core::{OmdbClient, TmdbClient, UreqTransport};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod settings;

use settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "flicker",
    about = "Look up movies and series on OMDb and TMDb",
    version
)]
struct Cli {
    /// Settings file (TOML); FLICKER_* environment variables override it
    #[arg(long, short, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Print the whole response object as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a title on OMDb
    Search {
        /// Title to look up
        title: String,
        /// Four-digit release year
        #[arg(long, short)]
        year: Option<String>,
        /// movie, series or episode
        #[arg(long = "type", short = 't')]
        media_type: Option<String>,
    },
    /// Fetch a movie from TMDb by numeric id
    Tmdb {
        /// TMDb movie id
        id: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("failed to read settings from {}", cli.config.display()))?;

    let mut out = std::io::stdout().lock();
    match &cli.command {
        Command::Search {
            title,
            year,
            media_type,
        } => {
            let config = settings.into_config().context("invalid configuration")?;
            debug!(endpoint = config.endpoint(), timeout = ?config.timeout(), "configuration loaded");
            let client = OmdbClient::from_config(&config);
            commands::search(
                &client,
                title,
                year.as_deref(),
                media_type.as_deref(),
                cli.json,
                &mut out,
            )
        }
        Command::Tmdb { id } => {
            let tmdb = settings.tmdb_config().context("invalid TMDb configuration")?;
            let timeout = settings.timeout().context("invalid configuration")?;
            debug!(endpoint = tmdb.endpoint(), timeout = ?timeout, "configuration loaded");
            let client = TmdbClient::new(tmdb, UreqTransport::new(timeout));
            commands::tmdb(&client, *id, cli.json, &mut out)
        }
    }
}
