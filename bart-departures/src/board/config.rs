//! Board configuration.

use std::path::PathBuf;

use crate::bart::{BartConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::{InvalidStationAbbr, StationAbbr};

/// Station shown when `BART_STATION` is unset (Montgomery St.).
pub const DEFAULT_STATION: &str = "MONT";

/// Number of departures shown when `BART_DISPLAY_COUNT` is unset.
pub const DEFAULT_DISPLAY_COUNT: usize = 10;

/// Public API key used when `BART_API_KEY` is unset.
pub const DEFAULT_API_KEY: &str = "QQBH-5GHH-9HTT-DWE9";

pub const ENV_STATION: &str = "BART_STATION";
pub const ENV_DISPLAY_COUNT: &str = "BART_DISPLAY_COUNT";
pub const ENV_API_KEY: &str = "BART_API_KEY";
pub const ENV_BASE_URL: &str = "BART_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "BART_TIMEOUT_SECS";
pub const ENV_MOCK_DIR: &str = "BART_MOCK_DIR";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?}: {source}")]
    InvalidStation {
        var: &'static str,
        value: String,
        source: InvalidStationAbbr,
    },

    #[error("{var}={value:?}: expected a non-negative integer")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}

/// Everything the board needs to fetch and print departures.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Station whose departures are shown.
    pub station: StationAbbr,

    /// Maximum number of departures printed.
    pub display_count: usize,

    /// BART API key.
    pub api_key: String,

    /// API base URL.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Serve saved responses from this directory instead of calling the API.
    pub mock_dir: Option<PathBuf>,
}

impl BoardConfig {
    /// Create a config for a station, with defaults for everything else.
    pub fn new(station: StationAbbr) -> Self {
        Self {
            station,
            display_count: DEFAULT_DISPLAY_COUNT,
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mock_dir: None,
        }
    }

    pub fn with_display_count(mut self, n: usize) -> Self {
        self.display_count = n;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_mock_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mock_dir = Some(dir.into());
        self
    }

    /// Read configuration from `BART_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let station = get(ENV_STATION).unwrap_or_else(|| DEFAULT_STATION.to_string());
        let station =
            StationAbbr::parse(station.trim()).map_err(|source| ConfigError::InvalidStation {
                var: ENV_STATION,
                value: station.clone(),
                source,
            })?;

        let mut config = Self::new(station);

        if let Some(value) = get(ENV_DISPLAY_COUNT) {
            let count = parse_positive(ENV_DISPLAY_COUNT, &value)?;
            config.display_count =
                usize::try_from(count).map_err(|_| ConfigError::InvalidNumber {
                    var: ENV_DISPLAY_COUNT,
                    value,
                })?;
        }

        if let Some(value) = get(ENV_API_KEY) {
            config.api_key = value;
        }

        if let Some(value) = get(ENV_BASE_URL) {
            config.base_url = value;
        }

        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_positive(ENV_TIMEOUT_SECS, &value)?;
        }

        if let Some(value) = get(ENV_MOCK_DIR) {
            config.mock_dir = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    /// Client configuration derived from this board configuration.
    pub fn bart_config(&self) -> BartConfig {
        BartConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_secs)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    let n: u64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })?;

    if n == 0 {
        return Err(ConfigError::Zero { var });
    }

    Ok(n)
}
