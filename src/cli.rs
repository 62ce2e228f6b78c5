//! Command-line interface for album-browser.
//!
//! Without a subcommand the TUI is launched. `search` runs one catalog query
//! and prints the results, which is handy for checking connectivity.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::logging;
use crate::model::{Album, CatalogApi, DeezerClient, MAX_RESULTS};

/// Album Browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the OS config directory)
    #[arg(short, long, env = "ALBUM_BROWSER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog API base URL
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Quiet period in milliseconds before typed text is searched
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Text placed in the search box at startup
    #[arg(short, long)]
    pub query: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for albums once and print the results
    Search {
        /// Text to search for
        query: String,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    ///
    /// Also returns warnings from loading, to be logged once a subscriber exists.
    pub fn resolve_config(&self) -> (Config, Vec<String>) {
        let (mut config, warnings) = config::load(self.config.as_deref());
        self.apply_overrides(&mut config);
        (config, warnings)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_base_url {
            config.api.base_url = url.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.search.debounce_ms = ms;
        }
        if let Some(query) = &self.query {
            config.search.initial_query = query.clone();
        }
    }
}

/// Run the requested subcommand, if any.
///
/// Returns `Ok(true)` when a command ran and the TUI should not start.
pub async fn run_command(args: &Cli, config: &Config, warnings: &[String]) -> anyhow::Result<bool> {
    let Some(command) = &args.command else {
        return Ok(false);
    };

    logging::init_stderr_logging(&config.logging)?;
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    match command {
        Commands::Search { query } => cmd_search(config, query).await?,
    }

    Ok(true)
}

async fn cmd_search(config: &Config, query: &str) -> anyhow::Result<()> {
    let client = DeezerClient::new(&config.api)?;
    let albums = client.search_albums(query).await?;

    if albums.is_empty() {
        println!("No albums found.");
        return Ok(());
    }

    for album in albums.iter().take(MAX_RESULTS) {
        println!("{}", format_album_line(album));
    }
    tracing::info!(query = %query, count = albums.len().min(MAX_RESULTS), "Printed search results");
    Ok(())
}

fn format_album_line(album: &Album) -> String {
    format!(
        "{:>12}  {} - {} ({})",
        album.id,
        album.artist,
        album.title,
        album.release_date_display()
    )
}
