//! CLI argument definitions for riskgauge.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `risk` | Predict the risk tier for a ticker |
//! | `return` | Predict the next-day return for a ticker |
//! | `similar` | Recommend tickers similar to one |
//! | `metrics` | Show the service's latest model-evaluation metrics |
//! | `watch` | Interactive mode: one prediction per input line |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `http://127.0.0.1:8000` | Prediction service base URL |
//! | `--timeout-ms` | `10000` | Request timeout in ms |

use clap::{Args, Parser, Subcommand};

/// riskgauge - stock risk prediction client
///
/// Submits tickers to a risk-prediction service and renders the structured
/// result: risk tier, volatility, confidence, and the probability
/// distribution across tiers.
#[derive(Debug, Parser)]
#[command(
    name = "riskgauge",
    author,
    version,
    about = "Stock risk prediction client"
)]
pub struct Cli {
    /// Base URL of the prediction service.
    ///
    /// Falls back to the RISKGAUGE_BASE_URL environment variable, then to
    /// http://127.0.0.1:8000.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict the risk tier for a ticker.
    ///
    /// # Examples
    ///
    ///   riskgauge risk AAPL
    ///   riskgauge risk aapl --base-url http://predictor:8000
    Risk(RiskArgs),

    /// Predict the next trading day's return for a ticker.
    ///
    /// # Examples
    ///
    ///   riskgauge return MSFT
    Return(ReturnArgs),

    /// Recommend tickers similar to the given one.
    ///
    /// # Examples
    ///
    ///   riskgauge similar AAPL
    ///   riskgauge similar AAPL --prefer low
    Similar(SimilarArgs),

    /// Show evaluation metrics from the service's latest training run.
    ///
    /// # Examples
    ///
    ///   riskgauge metrics
    Metrics,

    /// Interactive mode: each input line triggers a risk prediction.
    ///
    /// Blank lines are ignored; type 'quit' or press Ctrl-D to exit.
    Watch,
}

/// Arguments for the `risk` command.
#[derive(Debug, Args)]
pub struct RiskArgs {
    /// Market ticker (e.g., AAPL). Case and surrounding whitespace are
    /// normalized away.
    pub ticker: String,
}

/// Arguments for the `return` command.
#[derive(Debug, Args)]
pub struct ReturnArgs {
    /// Market ticker to forecast.
    pub ticker: String,
}

/// Arguments for the `similar` command.
#[derive(Debug, Args)]
pub struct SimilarArgs {
    /// Market ticker to find peers for.
    pub ticker: String,

    /// Restrict recommendations to one risk tier (low, medium, high).
    #[arg(long)]
    pub prefer: Option<String>,
}
