use std::process::ExitCode;

use riskgauge_core::PredictionClient;

use crate::error::CliError;

pub async fn run(client: &PredictionClient) -> Result<ExitCode, CliError> {
    let metrics = client.metrics().await?;

    println!("evaluated : {}", metrics.timestamp);
    println!("regression");
    println!("  RMSE      : {:.4}", metrics.regression.rmse);
    println!("  MAE       : {:.4}", metrics.regression.mae);
    println!("  R2        : {:.4}", metrics.regression.r2);
    println!("classification");
    println!("  accuracy  : {:.4}", metrics.classification.accuracy);
    println!("  F1        : {:.4}", metrics.classification.f1);
    println!("  precision : {:.4}", metrics.classification.precision);
    println!("  recall    : {:.4}", metrics.classification.recall);

    Ok(ExitCode::SUCCESS)
}
