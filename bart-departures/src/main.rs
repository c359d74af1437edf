use std::process::ExitCode;

use tracing::error;

use bart_departures::board::{self, BoardConfig, BoardError, DepartureSource};
use bart_departures::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match show_board().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to show departure board");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn show_board() -> Result<(), BoardError> {
    let config = BoardConfig::from_env()?;
    let source = DepartureSource::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    board::run(&config, &source, &mut out).await
}
