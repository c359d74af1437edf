//! Conversion from BART DTOs to domain types.
//!
//! Every lookup the board depends on is checked here, so a response with
//! an unexpected shape becomes a named error instead of a panic later.

use crate::domain::{DestinationGroup, Minutes, ResponseSnapshot};

use super::types::{Estimate, Etd, EtdResponse};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The response lists no stations
    #[error("no station in response")]
    MissingStation,

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An estimate's minutes were neither a number nor "Leaving"
    #[error("invalid minutes for {destination}: {value:?}")]
    InvalidMinutes { destination: String, value: String },
}

/// Convert an ETD response into a snapshot of its first station.
///
/// Date and time are kept as sent; only the fields the board prints or
/// sorts on are required.
pub fn convert_etd_response(response: &EtdResponse) -> Result<ResponseSnapshot, ConversionError> {
    let root = &response.root;

    let station = root.station.first().ok_or(ConversionError::MissingStation)?;

    let date = root
        .date
        .clone()
        .ok_or(ConversionError::MissingField("date"))?;

    let time = root
        .time
        .clone()
        .ok_or(ConversionError::MissingField("time"))?;

    let station_name = station
        .name
        .clone()
        .ok_or(ConversionError::MissingField("name"))?;

    let groups = station
        .etd
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_etd)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResponseSnapshot {
        date,
        time,
        station_name,
        groups,
    })
}

/// Convert one destination group, normalising each estimate's minutes.
fn convert_etd(etd: &Etd) -> Result<DestinationGroup, ConversionError> {
    let destination = etd
        .destination
        .clone()
        .ok_or(ConversionError::MissingField("destination"))?;

    let estimates = etd
        .estimate
        .iter()
        .map(|e| convert_minutes(e, &destination))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DestinationGroup {
        destination,
        abbreviation: etd.abbreviation.clone(),
        estimates,
    })
}

fn convert_minutes(estimate: &Estimate, destination: &str) -> Result<Minutes, ConversionError> {
    let raw = estimate
        .minutes
        .as_deref()
        .ok_or(ConversionError::MissingField("minutes"))?;

    Minutes::parse(raw).map_err(|_| ConversionError::InvalidMinutes {
        destination: destination.to_string(),
        value: raw.to_string(),
    })
}
