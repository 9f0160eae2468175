//! Response-shape validation for the prediction service.
//!
//! Pure functions over `(status, body)` pairs. Nothing here performs I/O and
//! nothing panics past the module boundary: every malformed or non-success
//! reply becomes a typed [`RequestFailure`].

use serde::Deserialize;

use crate::domain::{RiskAssessment, RiskClass, RiskProbabilities};
use crate::error::RequestFailure;

/// Wire shape of a successful `/predict_risk` reply.
///
/// Deserialization fails closed: a missing required field rejects the whole
/// body. Numeric ranges are deliberately not checked; the service's values
/// render as-is.
#[derive(Debug, Deserialize)]
struct RiskPayload {
    risk_class: String,
    volatility: f64,
    confidence_score: f64,
    recommendation: String,
    probabilities: RiskProbabilities,
}

/// Wire shape of a failure reply; `detail` is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Extract the service-reported failure message from a non-success body.
///
/// Falls back to the fixed literal when the body is empty, unparseable, or
/// carries no non-empty `detail` field.
pub(crate) fn failure_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| String::from(RequestFailure::FALLBACK_MESSAGE))
}

/// Validate a raw service reply into a typed assessment or a typed failure.
pub fn validate(status: u16, body: &str) -> Result<RiskAssessment, RequestFailure> {
    if !is_success(status) {
        return Err(RequestFailure::service(failure_detail(body)));
    }

    let payload: RiskPayload =
        serde_json::from_str(body).map_err(|_| RequestFailure::malformed())?;

    Ok(RiskAssessment {
        risk_class: RiskClass::from_label(&payload.risk_class),
        volatility: payload.volatility,
        confidence_score: payload.confidence_score,
        recommendation: payload.recommendation,
        probabilities: payload.probabilities,
    })
}
