//! # riskgauge-app
//!
//! The request lifecycle state machine for the riskgauge client.
//!
//! ## Data flow
//!
//! A user trigger reaches [`RiskRequestController::submit`], which validates
//! and normalizes the input, moves the single owned [`UiState`] through
//! idle → busy → success/error, delegates the remote call to
//! `riskgauge-core`, and drives a [`RenderSurface`] with display-ready
//! values from [`render`].
//!
//! ## Ownership
//!
//! The controller exclusively owns both the state value and the surface;
//! nothing else mutates either. The surface is a trait so the desktop page,
//! a terminal, or a recording test double can all sit behind it.

pub mod controller;
pub mod render;
pub mod state;
pub mod surface;

pub use controller::RiskRequestController;
pub use render::{assessment_view, format_percent, AssessmentView, TierBar, TierClass};
pub use state::UiState;
pub use surface::{RecordingSurface, RenderSurface, SurfaceEvent};
