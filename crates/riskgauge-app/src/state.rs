use riskgauge_core::{RequestFailure, RiskAssessment};

/// Presentation state of the request lifecycle.
///
/// Exactly one variant is active at a time. `Idle`, `Success`, and `Error`
/// are re-entrant via a new submit; `Busy` blocks further submits instead of
/// queueing them. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Busy,
    Success(RiskAssessment),
    Error(RequestFailure),
}

impl UiState {
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Whether a new submit is accepted from this state.
    pub const fn accepts_submit(&self) -> bool {
        !self.is_busy()
    }
}
