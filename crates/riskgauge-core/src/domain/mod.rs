//! Domain types for the riskgauge client.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Normalized stock ticker |
//! | [`RiskClass`] | Three-tier risk classification |
//! | [`RiskProbabilities`] | Per-tier probability distribution |
//! | [`RiskAssessment`] | Result of a successful risk prediction |
//! | [`ReturnForecast`] | Next-day return forecast |
//! | [`SimilarPicks`] | Similar-ticker recommendations |
//! | [`ModelMetrics`] | Latest model-evaluation metrics |

mod assessment;
mod ticker;

pub use assessment::{
    ClassificationMetrics, ModelMetrics, RegressionMetrics, ReturnForecast, RiskAssessment,
    RiskClass, RiskProbabilities, SimilarPick, SimilarPicks,
};
pub use ticker::Ticker;
