use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use news_core::{SortBy, ViewState, DEFAULT_CATEGORY};
use news_engine::FetchSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;
use crate::cli::Cli;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "news_client.ron";

/// Client settings read from a RON file, then overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub default_category: String,
    pub default_sort: SortBy,
    pub log_level: String,
    pub log_destination: LogDestination,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: fetch.base_url,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            default_category: DEFAULT_CATEGORY.to_string(),
            default_sort: SortBy::default(),
            log_level: "info".to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

impl ClientConfig {
    /// Load `path`, or `./news_client.ron` when no path is given.
    /// Only the implicit default file may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading config file {}", path.display()));
            }
        };

        ron::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(category) = &cli.category {
            self.default_category = category.clone();
        }
        if let Some(sort) = cli.sort {
            self.default_sort = sort;
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .ok()
            .with_context(|| format!("invalid log level {:?}", self.log_level))
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }

    pub fn initial_state(&self) -> ViewState {
        ViewState::with_filters(self.default_category.clone(), self.default_sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"(base_url: "https://news.example.com", default_sort: popularity, log_destination: both)"#
        )
        .unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://news.example.com");
        assert_eq!(config.default_sort, SortBy::Popularity);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.default_category, "technology");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ron");
        let err = ClientConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(base_url: 42)").unwrap();
        let err = ClientConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("parsing config file"));
    }

    #[test]
    fn cli_overrides_file_values() {
        let cli = Cli {
            category: Some("science".to_string()),
            sort: Some(SortBy::Relevance),
            log_level: Some("debug".to_string()),
            ..Cli::default()
        };
        let config = ClientConfig::default().apply_cli(&cli);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

        let state = config.initial_state();
        assert_eq!(state.category(), "science");
        assert_eq!(state.sort_by(), SortBy::Relevance);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn fetch_settings_follow_config() {
        let config = ClientConfig {
            request_timeout_secs: 5,
            max_bytes: 1024,
            ..ClientConfig::default()
        };
        let settings = config.fetch_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.max_bytes, 1024);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = ClientConfig {
            log_level: "loud".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.level_filter().is_err());
    }
}
