mod metrics;
mod ret;
mod risk;
mod similar;
mod watch;

use std::process::ExitCode;
use std::sync::Arc;

use riskgauge_core::{PredictionClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("RISKGAUGE_BASE_URL").ok())
        .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

    let client = PredictionClient::new(Arc::new(ReqwestHttpClient::new()), base_url)
        .with_timeout_ms(cli.timeout_ms);

    match &cli.command {
        Command::Risk(args) => risk::run(args, client).await,
        Command::Return(args) => ret::run(args, &client).await,
        Command::Similar(args) => similar::run(args, &client).await,
        Command::Metrics => metrics::run(&client).await,
        Command::Watch => watch::run(client).await,
    }
}
