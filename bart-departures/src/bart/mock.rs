//! Mock BART client for running without network access.
//!
//! Loads saved ETD responses from JSON files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::{ResponseSnapshot, StationAbbr};

use super::convert::convert_etd_response;
use super::error::BartError;
use super::types::EtdResponse;

/// Mock BART client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockBartClient {
    /// Saved responses, keyed by station abbreviation.
    boards: HashMap<StationAbbr, EtdResponse>,
}

impl MockBartClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{ABBR}.json` (e.g., `MONT.json`, `24TH.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, BartError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            BartError::MockData(format!("failed to read directory {data_dir:?}: {e}"))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| BartError::MockData(format!("failed to read directory entry: {e}")))?
                .path();

            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| BartError::MockData(format!("invalid filename: {path:?}")))?;

            let abbr = StationAbbr::parse(stem).map_err(|_| {
                BartError::MockData(format!("invalid station abbreviation in filename: {stem}"))
            })?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| BartError::MockData(format!("failed to read {path:?}: {e}")))?;

            let response: EtdResponse = serde_json::from_str(&json).map_err(|e| BartError::Json {
                message: format!("{path:?}: {e}"),
                body: None,
            })?;

            boards.insert(abbr, response);
        }

        if boards.is_empty() {
            return Err(BartError::MockData(format!(
                "no mock board files found in {data_dir:?}"
            )));
        }

        debug!(count = boards.len(), dir = ?data_dir, "loaded mock boards");

        Ok(Self { boards })
    }

    /// Get the departure board for a station.
    ///
    /// Mirrors `BartClient::get_departures`; the data is static.
    pub fn get_departures(&self, station: &StationAbbr) -> Result<ResponseSnapshot, BartError> {
        let response = self.boards.get(station).ok_or_else(|| {
            let mut available: Vec<&str> = self.boards.keys().map(|a| a.as_str()).collect();
            available.sort_unstable();
            BartError::MockData(format!(
                "no mock data for station {station}. Available: {available:?}"
            ))
        })?;

        Ok(convert_etd_response(response)?)
    }

    /// List stations available in the mock data.
    pub fn available_stations(&self) -> Vec<StationAbbr> {
        self.boards.keys().copied().collect()
    }
}
