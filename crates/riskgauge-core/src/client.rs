//! Typed client for the risk-prediction service.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{
    ModelMetrics, ReturnForecast, RiskAssessment, RiskClass, SimilarPick, SimilarPicks, Ticker,
};
use crate::error::RequestFailure;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::validator;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client for the prediction service's three endpoints.
///
/// Owns a transport behind the [`HttpClient`] seam so tests can script
/// replies without a network.
#[derive(Clone)]
pub struct PredictionClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl PredictionClient {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http_client,
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /predict_risk` for a single ticker.
    pub async fn predict_risk(&self, ticker: &Ticker) -> Result<RiskAssessment, RequestFailure> {
        let response = self.post_ticker("predict_risk", ticker).await?;
        validator::validate(response.status, &response.body)
    }

    /// `POST /predict_return` for a single ticker.
    pub async fn predict_return(&self, ticker: &Ticker) -> Result<ReturnForecast, RequestFailure> {
        let response = self.post_ticker("predict_return", ticker).await?;
        if !response.is_success() {
            return Err(RequestFailure::service(validator::failure_detail(
                &response.body,
            )));
        }

        serde_json::from_str(&response.body).map_err(|_| RequestFailure::malformed())
    }

    /// `GET /recommend_similar` with an optional risk preference.
    pub async fn recommend_similar(
        &self,
        ticker: &Ticker,
        preference: Option<RiskClass>,
    ) -> Result<SimilarPicks, RequestFailure> {
        let mut url = format!(
            "{}/recommend_similar?ticker={}",
            self.base_url,
            urlencoding::encode(ticker.as_str())
        );
        if let Some(preference) = preference {
            url.push_str("&risk_preference=");
            url.push_str(&urlencoding::encode(preference.as_str()));
        }

        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self.execute(request).await?;
        if !response.is_success() {
            return Err(RequestFailure::service(validator::failure_detail(
                &response.body,
            )));
        }

        let payload: SimilarPayload =
            serde_json::from_str(&response.body).map_err(|_| RequestFailure::malformed())?;

        Ok(SimilarPicks {
            input_ticker: payload.input_ticker,
            recommendations: payload
                .recommendations
                .into_iter()
                .map(|pick| SimilarPick {
                    risk_class: RiskClass::from_label(&pick.risk_class),
                    ticker: pick.ticker,
                })
                .collect(),
        })
    }

    /// `GET /metrics`: evaluation scores from the latest training run.
    ///
    /// The service answers 404 with a `detail` body when no run has been
    /// recorded yet.
    pub async fn metrics(&self) -> Result<ModelMetrics, RequestFailure> {
        let request =
            HttpRequest::get(format!("{}/metrics", self.base_url)).with_timeout_ms(self.timeout_ms);
        let response = self.execute(request).await?;
        if !response.is_success() {
            return Err(RequestFailure::service(validator::failure_detail(
                &response.body,
            )));
        }

        serde_json::from_str(&response.body).map_err(|_| RequestFailure::malformed())
    }

    async fn post_ticker(
        &self,
        endpoint: &str,
        ticker: &Ticker,
    ) -> Result<HttpResponse, RequestFailure> {
        let body = serde_json::json!({ "ticker": ticker.as_str() }).to_string();
        let request = HttpRequest::post(format!("{}/{}", self.base_url, endpoint))
            .with_header("content-type", "application/json")
            .with_body(body)
            .with_timeout_ms(self.timeout_ms);

        self.execute(request).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailure> {
        self.http_client
            .execute(request)
            .await
            .map_err(|error| RequestFailure::network(error.message()))
    }
}

/// Wire shape of `/recommend_similar`; `risk_class` arrives as a bare label.
#[derive(Debug, Deserialize)]
struct SimilarPayload {
    input_ticker: String,
    recommendations: Vec<SimilarWirePick>,
}

#[derive(Debug, Deserialize)]
struct SimilarWirePick {
    ticker: String,
    risk_class: String,
}
