use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Validation errors for riskgauge domain inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,

    #[error("invalid risk preference '{value}', expected one of low, medium, high")]
    InvalidRiskPreference { value: String },
}

/// Which stage of a prediction request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The call itself could not complete (connectivity, timeout).
    Network,
    /// The call completed with a non-success status.
    Service,
    /// The reply body did not parse as the expected structure.
    Malformed,
}

impl FailureKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Service => "service",
            Self::Malformed => "malformed",
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-presentable failure produced by any step of a prediction request.
///
/// All failure paths normalize into one message string; the kind is kept for
/// callers that branch on the stage that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    kind: FailureKind,
    message: String,
}

impl RequestFailure {
    /// Literal fallback shown when the service reports no usable detail.
    pub const FALLBACK_MESSAGE: &'static str = "Prediction failed";

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Service,
            message: message.into(),
        }
    }

    /// Structural parse failure; the message is fixed to the generic
    /// fallback so partial service data never leaks into the error surface.
    pub fn malformed() -> Self {
        Self {
            kind: FailureKind::Malformed,
            message: String::from(Self::FALLBACK_MESSAGE),
        }
    }

    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
