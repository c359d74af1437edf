//! The departure board: configuration, data source and console output.

mod config;
mod render;
mod source;

use std::io::Write;

use crate::bart::BartError;

pub use config::{
    BoardConfig, ConfigError, DEFAULT_API_KEY, DEFAULT_DISPLAY_COUNT, DEFAULT_STATION,
    ENV_API_KEY, ENV_BASE_URL, ENV_DISPLAY_COUNT, ENV_MOCK_DIR, ENV_STATION, ENV_TIMEOUT_SECS,
};
pub use render::{
    NO_TRAINS, SEPARATOR, format_row, shortage_notice, write_departures, write_header,
};
pub use source::DepartureSource;

/// Errors that stop the board from being shown.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bart(#[from] BartError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch the board for the configured station and print it.
///
/// Nothing is written unless the fetch succeeds.
pub async fn run<W: Write>(
    config: &BoardConfig,
    source: &DepartureSource,
    out: &mut W,
) -> Result<(), BoardError> {
    let snapshot = source.fetch(&config.station).await?;

    write_header(&snapshot, out)?;
    let departures = snapshot.departures();
    write_departures(&departures, config.display_count, out)?;
    out.flush()?;

    Ok(())
}
