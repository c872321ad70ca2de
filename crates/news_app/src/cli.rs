//! Command-line interface for the news client.
//!
//! Every flag is optional and overrides the matching field of the config file.

use std::path::PathBuf;

use clap::Parser;
use news_core::SortBy;

use crate::platform::logging::LogDestination;

/// Browse and search news from a terminal.
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a RON config file (defaults to ./news_client.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the news API, e.g. http://localhost:8080
    #[arg(long)]
    pub base_url: Option<String>,

    /// Category shown at startup
    #[arg(long)]
    pub category: Option<String>,

    /// Sort order: publishedAt, relevance or popularity
    #[arg(long)]
    pub sort: Option<SortBy>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}
