//! # riskgauge-core
//!
//! Core contracts for the riskgauge risk-prediction client.
//!
//! This crate provides:
//!
//! - **Domain types** for tickers, risk assessments, return forecasts, and
//!   similar-ticker recommendations
//! - **HTTP transport abstraction** with a production reqwest client and an
//!   offline no-op client
//! - **Response validation** turning a raw `(status, body)` reply into a
//!   typed result or a typed failure
//! - **Prediction service client** covering the `/predict_risk`,
//!   `/predict_return`, `/recommend_similar`, and `/metrics` endpoints
//!
//! ## Error Handling
//!
//! Every request path funnels into [`RequestFailure`], a single
//! user-presentable failure with a [`FailureKind`] describing whether the
//! transport, the service, or the response shape was at fault:
//!
//! ```rust
//! use riskgauge_core::{FailureKind, RequestFailure};
//!
//! fn describe(failure: &RequestFailure) -> &'static str {
//!     match failure.kind() {
//!         FailureKind::Network => "could not reach the service",
//!         FailureKind::Service => "the service rejected the request",
//!         FailureKind::Malformed => "the service reply was unreadable",
//!     }
//! }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod validator;

pub use client::PredictionClient;
pub use domain::{
    ClassificationMetrics, ModelMetrics, RegressionMetrics, ReturnForecast, RiskAssessment,
    RiskClass, RiskProbabilities, SimilarPick, SimilarPicks, Ticker,
};
pub use error::{FailureKind, RequestFailure, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use validator::validate;
