use std::process::ExitCode;

use riskgauge_core::{PredictionClient, Ticker};

use crate::cli::ReturnArgs;
use crate::error::CliError;

pub async fn run(args: &ReturnArgs, client: &PredictionClient) -> Result<ExitCode, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let forecast = client.predict_return(&ticker).await?;

    println!("ticker          : {}", forecast.ticker);
    println!(
        "next-day return : {:+.4}%",
        forecast.predicted_next_day_return * 100.0
    );

    Ok(ExitCode::SUCCESS)
}
