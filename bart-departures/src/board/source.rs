//! Where departure boards come from: the live API or saved files.

use tracing::info;

use crate::bart::{BartClient, BartError, MockBartClient};
use crate::domain::{ResponseSnapshot, StationAbbr};

use super::config::BoardConfig;

/// A source of departure boards.
#[derive(Debug, Clone)]
pub enum DepartureSource {
    /// Query the BART API.
    Live(BartClient),

    /// Serve saved responses from disk.
    Mock(MockBartClient),
}

impl DepartureSource {
    /// Pick the mock source if `mock_dir` is set, the live API otherwise.
    pub fn from_config(config: &BoardConfig) -> Result<Self, BartError> {
        match &config.mock_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "using mock departure data");
                Ok(DepartureSource::Mock(MockBartClient::new(dir)?))
            }
            None => Ok(DepartureSource::Live(BartClient::new(config.bart_config())?)),
        }
    }

    /// Fetch the current board for a station.
    pub async fn fetch(&self, station: &StationAbbr) -> Result<ResponseSnapshot, BartError> {
        match self {
            DepartureSource::Live(client) => client.get_departures(station).await,
            DepartureSource::Mock(client) => client.get_departures(station),
        }
    }
}
