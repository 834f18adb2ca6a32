// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    page_size: u32,
    search_limit: u32,
    search_debounce: Duration,
    query_timeout: Duration,
    featured_categories: usize,
    filter_chips: usize,
    session_file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_PAGE_SIZE: u32 = 6;
const DEFAULT_SEARCH_LIMIT: u32 = 10;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FEATURED_CATEGORIES: usize = 3;
const DEFAULT_FILTER_CHIPS: usize = 5;
const DEFAULT_SESSION_FILE: &str = ".kawara-session.json";

impl AppConfig {
    /// Build configuration from environment variables, with sensible
    /// defaults for everything. Reads a dotenv file when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let page_size = parse_or(&lookup, "KAWARA_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let search_limit = parse_or(&lookup, "KAWARA_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT)?;
        let debounce_ms = parse_or(
            &lookup,
            "KAWARA_SEARCH_DEBOUNCE_MS",
            DEFAULT_SEARCH_DEBOUNCE_MS,
        )?;
        let timeout_secs = parse_or(
            &lookup,
            "KAWARA_QUERY_TIMEOUT_SECS",
            DEFAULT_QUERY_TIMEOUT_SECS,
        )?;
        let featured_categories = parse_or(
            &lookup,
            "KAWARA_FEATURED_CATEGORIES",
            DEFAULT_FEATURED_CATEGORIES,
        )?;
        let filter_chips = parse_or(&lookup, "KAWARA_FILTER_CHIPS", DEFAULT_FILTER_CHIPS)?;
        let session_file = lookup("KAWARA_SESSION_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        if page_size == 0 {
            return Err(ConfigError::Invalid("KAWARA_PAGE_SIZE must be >= 1".into()));
        }
        if search_limit == 0 {
            return Err(ConfigError::Invalid(
                "KAWARA_SEARCH_LIMIT must be >= 1".into(),
            ));
        }
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "KAWARA_QUERY_TIMEOUT_SECS must be >= 1".into(),
            ));
        }

        Ok(Self {
            page_size,
            search_limit,
            search_debounce: Duration::from_millis(debounce_ms),
            query_timeout: Duration::from_secs(timeout_secs),
            featured_categories,
            filter_chips,
            session_file,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_limit(&self) -> u32 {
        self.search_limit
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    pub fn featured_categories(&self) -> usize {
        self.featured_categories
    }

    pub fn filter_chips(&self) -> usize {
        self.filter_chips
    }

    pub fn session_file(&self) -> &PathBuf {
        &self.session_file
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} is not a valid number: {raw}"))),
    }
}
