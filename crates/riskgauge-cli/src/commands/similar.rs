use std::process::ExitCode;

use riskgauge_core::{PredictionClient, RiskClass, Ticker};

use crate::cli::SimilarArgs;
use crate::error::CliError;

pub async fn run(args: &SimilarArgs, client: &PredictionClient) -> Result<ExitCode, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let preference = args
        .prefer
        .as_deref()
        .map(|raw| raw.parse::<RiskClass>())
        .transpose()?;

    let picks = client.recommend_similar(&ticker, preference).await?;

    println!("similar to {}:", picks.input_ticker);
    if picks.recommendations.is_empty() {
        println!("  (no matches)");
    }
    for pick in &picks.recommendations {
        println!("  {:<8}{}", pick.ticker, pick.risk_class);
    }

    Ok(ExitCode::SUCCESS)
}
