//! End-to-end request lifecycle orchestration.

use riskgauge_core::{PredictionClient, Ticker};

use crate::render;
use crate::state::UiState;
use crate::surface::RenderSurface;

/// Drives the full interaction lifecycle once per user trigger.
///
/// Owns the single [`UiState`] value and the rendering surface. `submit` is
/// the sole entry point; both an activation gesture and an Enter keypress
/// map to it.
pub struct RiskRequestController<S: RenderSurface> {
    client: PredictionClient,
    surface: S,
    state: UiState,
}

impl<S: RenderSurface> RiskRequestController<S> {
    pub fn new(client: PredictionClient, surface: S) -> Self {
        Self {
            client,
            surface,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Submit a raw ticker input and settle the request to completion.
    ///
    /// Empty input (after trimming) is a guard, not an error: no state
    /// transition, no request. A submit while busy is rejected here as well,
    /// independent of the disabled control, so single-flight holds even for
    /// programmatic callers.
    pub async fn submit(&mut self, raw_input: &str) {
        let ticker = match Ticker::parse(raw_input) {
            Ok(ticker) => ticker,
            Err(_) => return,
        };

        if !self.state.accepts_submit() {
            return;
        }

        self.state = UiState::Busy;

        // The scope guard restores the interactive affordances on every exit
        // path, mirroring the unconditional cleanup step of the lifecycle.
        let mut busy = BusyScope::enter(&mut self.surface);

        match self.client.predict_risk(&ticker).await {
            Ok(assessment) => {
                busy.surface()
                    .show_assessment(&render::assessment_view(&ticker, &assessment));
                self.state = UiState::Success(assessment);
            }
            Err(failure) => {
                busy.surface().show_error(failure.message());
                self.state = UiState::Error(failure);
            }
        }
    }
}

/// Scoped busy acquisition.
///
/// Entering disables the activation control, shows the busy indicator, and
/// hides stale result and error panels; dropping re-enables the control and
/// hides the indicator, whatever path exits `submit`.
struct BusyScope<'a, S: RenderSurface> {
    surface: &'a mut S,
}

impl<'a, S: RenderSurface> BusyScope<'a, S> {
    fn enter(surface: &'a mut S) -> Self {
        surface.set_control_enabled(false);
        surface.set_busy_indicator(true);
        surface.hide_result();
        surface.hide_error();
        Self { surface }
    }

    fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: RenderSurface> Drop for BusyScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_control_enabled(true);
        self.surface.set_busy_indicator(false);
    }
}
