//! BART API HTTP client.
//!
//! Issues `etd.aspx` queries and converts the response to domain types.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{ResponseSnapshot, StationAbbr};

use super::convert::convert_etd_response;
use super::error::BartError;
use super::types::EtdResponse;

/// Default base URL for the BART legacy API.
pub const DEFAULT_BASE_URL: &str = "https://api.bart.gov/api";

/// Command for real-time estimated departures.
pub const ETD_COMMAND: &str = "etd";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the BART client.
#[derive(Debug, Clone)]
pub struct BartConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production BART)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BartConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// BART API client.
#[derive(Debug, Clone)]
pub struct BartClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BartClient {
    /// Create a new BART client with the given configuration.
    pub fn new(config: BartConfig) -> Result<Self, BartError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Get the departure board for a station.
    pub async fn get_departures(
        &self,
        station: &StationAbbr,
    ) -> Result<ResponseSnapshot, BartError> {
        let response = self.query(ETD_COMMAND, station).await?;
        let snapshot = convert_etd_response(&response)?;

        debug!(
            station = %station,
            groups = snapshot.groups.len(),
            estimates = snapshot.estimate_count(),
            "converted departure board"
        );

        Ok(snapshot)
    }

    /// Run an `etd.aspx` command for a station and return the raw response.
    ///
    /// Fails on transport errors, non-2xx statuses, undecodable bodies, and
    /// errors the API reports inside an otherwise successful response.
    pub async fn query(
        &self,
        command: &str,
        station: &StationAbbr,
    ) -> Result<EtdResponse, BartError> {
        let url = format!("{}/etd.aspx", self.base_url);

        debug!(%url, command, station = %station, "requesting departures");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("cmd", command),
                ("orig", station.as_str()),
                ("key", self.api_key.as_str()),
                ("json", "y"),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(BartError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BartError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: EtdResponse = serde_json::from_str(&body).map_err(|e| BartError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        if let Some(text) = parsed.root.error_text() {
            warn!(error = %text, "API reported an error");

            if text.to_ascii_lowercase().contains("invalid key") {
                return Err(BartError::Unauthorized);
            }

            return Err(BartError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(parsed)
    }
}
