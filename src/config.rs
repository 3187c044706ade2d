use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const CARDS_VAR: &str = "CARTASHOP_CARDS";
pub const STORAGE_VAR: &str = "CARTASHOP_STORAGE";
pub const DISPLAY_CAP_VAR: &str = "CARTASHOP_DISPLAY_CAP";

const DEFAULT_CARDS: &str = "cards.json";
const DEFAULT_STORAGE_DIR: &str = ".cartashop";
const DEFAULT_DISPLAY_CAP: usize = 100;

#[derive(Debug, Error, PartialEq)]
#[error("Invalid configuration: {0}")]
pub struct ConfigError(String);

impl ConfigError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    InMemory,
    FileSystem(PathBuf),
    Redis(String),
}

impl StorageConfig {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("memory") {
            StorageConfig::InMemory
        } else if value.starts_with("redis://") || value.starts_with("rediss://") {
            StorageConfig::Redis(value.to_string())
        } else {
            StorageConfig::FileSystem(PathBuf::from(value))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog path or `http(s)://` URL.
    pub cards: String,
    pub storage: StorageConfig,
    /// Most rows a single listing prints.
    pub display_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards: String::from(DEFAULT_CARDS),
            storage: StorageConfig::FileSystem(PathBuf::from(DEFAULT_STORAGE_DIR)),
            display_cap: DEFAULT_DISPLAY_CAP,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Unset and blank variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let display_cap = match read(DISPLAY_CAP_VAR) {
            None => defaults.display_cap,
            Some(value) => value.parse::<usize>().map_err(|why| {
                ConfigError::new(format!("{DISPLAY_CAP_VAR}={value:?} is not a count: {why}"))
            })?,
        };

        Ok(Self {
            cards: read(CARDS_VAR).unwrap_or(defaults.cards),
            storage: read(STORAGE_VAR).map_or(defaults.storage, |value| StorageConfig::parse(&value)),
            display_cap,
        })
    }
}
