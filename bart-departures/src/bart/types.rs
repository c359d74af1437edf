//! BART API response DTOs.
//!
//! These types map directly to the JSON the `etd.aspx` endpoint returns
//! with `json=y`. BART sends every scalar as a string and omits fields
//! rather than sending nulls, so anything not needed for the board is
//! optional.

use serde::Deserialize;

/// Top-level ETD response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EtdResponse {
    pub root: EtdRoot,
}

/// The `root` object of an ETD response.
#[derive(Debug, Clone, Deserialize)]
pub struct EtdRoot {
    /// Snapshot date, usually `MM/DD/YYYY`.
    pub date: Option<String>,

    /// Snapshot time, e.g. `04:24:03 PM PDT`.
    pub time: Option<String>,

    /// Stations on this board. Only the first is used for single-station queries.
    #[serde(default)]
    pub station: Vec<StationEtd>,

    /// Free-form message block. Empty string normally; an object carrying
    /// `error` or `warning` otherwise.
    pub message: Option<serde_json::Value>,
}

impl EtdRoot {
    /// Error text reported in-band by the API, if any.
    ///
    /// BART answers bad keys and unknown stations with HTTP 200 and a
    /// `message.error` entry, either a string or `{ "text": ..., "details": ... }`.
    pub fn error_text(&self) -> Option<String> {
        let error = self.message.as_ref()?.get("error")?;

        match error {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(obj) => {
                let text = obj.get("text").and_then(|v| v.as_str()).unwrap_or("");
                let details = obj.get("details").and_then(|v| v.as_str());
                match details {
                    Some(d) if !d.is_empty() => Some(format!("{text}: {d}")),
                    _ => Some(text.to_string()),
                }
            }
            other => Some(other.to_string()),
        }
    }
}

/// ETD entries for one station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationEtd {
    /// Station name, e.g. "Montgomery St.".
    pub name: Option<String>,

    /// Station abbreviation, e.g. "MONT".
    pub abbr: Option<String>,

    /// Destination groups. Absent when no trains are running.
    pub etd: Option<Vec<Etd>>,
}

/// All estimates toward one destination.
#[derive(Debug, Clone, Deserialize)]
pub struct Etd {
    pub destination: Option<String>,

    pub abbreviation: Option<String>,

    /// "1" if this is a limited service.
    pub limited: Option<String>,

    #[serde(default)]
    pub estimate: Vec<Estimate>,
}

/// A single departure estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct Estimate {
    /// Minutes until departure, or "Leaving".
    pub minutes: Option<String>,

    pub platform: Option<String>,

    /// "North" or "South".
    pub direction: Option<String>,

    /// Train length in cars.
    pub length: Option<String>,

    /// Route colour name, e.g. "YELLOW".
    pub color: Option<String>,

    pub hexcolor: Option<String>,

    pub bikeflag: Option<String>,

    /// Delay in seconds.
    pub delay: Option<String>,

    pub cancelflag: Option<String>,

    pub dynamicflag: Option<String>,
}
