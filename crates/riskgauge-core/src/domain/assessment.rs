use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Three-tier risk classification assigned to a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    /// Map a service-reported label to a tier.
    ///
    /// The comparison is case-sensitive and anything the client does not
    /// recognize classifies as high risk.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            _ => Self::High,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// All tiers in ascending order of risk.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl Display for RiskClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse for user-supplied risk preferences.
impl FromStr for RiskClass {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::InvalidRiskPreference {
                value: value.to_owned(),
            }),
        }
    }
}

/// Per-tier probability distribution as reported by the service.
///
/// Values are expected to sum to 1 but the client does not validate or clamp
/// them; out-of-range data renders as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskProbabilities {
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Medium")]
    pub medium: f64,
    #[serde(rename = "High")]
    pub high: f64,
}

impl RiskProbabilities {
    pub const fn get(self, class: RiskClass) -> f64 {
        match class {
            RiskClass::Low => self.low,
            RiskClass::Medium => self.medium,
            RiskClass::High => self.high,
        }
    }
}

/// Structured result of a successful risk prediction.
///
/// Immutable once constructed; the controller replaces it wholesale on the
/// next request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_class: RiskClass,
    pub volatility: f64,
    pub confidence_score: f64,
    pub recommendation: String,
    pub probabilities: RiskProbabilities,
}

/// Next-day return forecast from `/predict_return`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnForecast {
    pub ticker: String,
    pub predicted_next_day_return: f64,
}

/// Latest model-evaluation metrics from `/metrics`.
///
/// Produced by the service's most recent training run; the timestamp is an
/// opaque service-side string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub timestamp: String,
    pub regression: RegressionMetrics,
    pub classification: ClassificationMetrics,
}

/// Return-forecast quality scores, keyed the way the service reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
    #[serde(rename = "R2")]
    pub r2: f64,
}

/// Risk-classifier quality scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "F1")]
    pub f1: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
}

/// One similar-ticker recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarPick {
    pub ticker: String,
    pub risk_class: RiskClass,
}

/// Recommendations from `/recommend_similar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarPicks {
    pub input_ticker: String,
    pub recommendations: Vec<SimilarPick>,
}
