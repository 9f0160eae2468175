use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use riskgauge_app::RiskRequestController;
use riskgauge_core::PredictionClient;

use crate::error::CliError;
use crate::surface::TerminalSurface;

/// Interactive loop: every entered line is a submit trigger.
///
/// The controller's own guards apply: blank lines do nothing and a line
/// entered while a request is outstanding cannot occur here because the
/// loop only reads again after the previous submit settles.
pub async fn run(client: PredictionClient) -> Result<ExitCode, CliError> {
    let mut controller = RiskRequestController::new(client, TerminalSurface::new());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        eprint!("ticker> ");
        io::stderr().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        controller.submit(input).await;
    }

    Ok(ExitCode::SUCCESS)
}
