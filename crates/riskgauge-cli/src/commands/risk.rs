use std::process::ExitCode;

use riskgauge_app::{RiskRequestController, UiState};
use riskgauge_core::{PredictionClient, Ticker};

use crate::cli::RiskArgs;
use crate::error::CliError;
use crate::surface::TerminalSurface;

pub async fn run(args: &RiskArgs, client: PredictionClient) -> Result<ExitCode, CliError> {
    // Reject unusable input up front so the silent empty-input guard inside
    // the controller never swallows a CLI invocation.
    let ticker = Ticker::parse(&args.ticker)?;

    let mut controller = RiskRequestController::new(client, TerminalSurface::new());
    controller.submit(ticker.as_str()).await;

    match controller.state() {
        UiState::Error(_) => Ok(ExitCode::from(3)),
        _ => Ok(ExitCode::SUCCESS),
    }
}
