//! Behavior tests for the typed prediction-service client.

use riskgauge_core::HttpMethod;
use riskgauge_tests::{FailureKind, PredictionClient, RiskClass, ScriptedHttpClient, Ticker};

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("valid ticker")
}

#[tokio::test]
async fn when_base_url_has_a_trailing_slash_then_endpoints_are_joined_cleanly() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"ticker":"AAPL","predicted_next_day_return":0.0042}"#,
    );
    let client = PredictionClient::new(transport.clone(), "http://predictor.test///");

    client
        .predict_return(&ticker("AAPL"))
        .await
        .expect("forecast should parse");

    assert_eq!(
        transport.recorded_requests()[0].url,
        "http://predictor.test/predict_return"
    );
}

#[tokio::test]
async fn when_requesting_a_return_forecast_then_the_wire_shape_parses() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"ticker":"MSFT","predicted_next_day_return":-0.0131}"#,
    );
    let client = PredictionClient::new(transport, "http://predictor.test");

    let forecast = client
        .predict_return(&ticker("msft"))
        .await
        .expect("forecast should parse");

    assert_eq!(forecast.ticker, "MSFT");
    assert_eq!(forecast.predicted_next_day_return, -0.0131);
}

#[tokio::test]
async fn when_recommendations_are_requested_then_query_parameters_are_encoded() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"input_ticker":"AAPL","recommendations":[{"ticker":"MSFT","risk_class":"Low"}]}"#,
    );
    let client = PredictionClient::new(transport.clone(), "http://predictor.test");

    client
        .recommend_similar(&ticker("AAPL"), Some(RiskClass::Medium))
        .await
        .expect("recommendations should parse");

    let request = &transport.recorded_requests()[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url,
        "http://predictor.test/recommend_similar?ticker=AAPL&risk_preference=Medium"
    );
}

#[tokio::test]
async fn when_no_preference_is_given_then_the_parameter_is_omitted() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"input_ticker":"AAPL","recommendations":[]}"#,
    );
    let client = PredictionClient::new(transport.clone(), "http://predictor.test");

    let picks = client
        .recommend_similar(&ticker("AAPL"), None)
        .await
        .expect("recommendations should parse");

    assert!(picks.recommendations.is_empty());
    assert_eq!(
        transport.recorded_requests()[0].url,
        "http://predictor.test/recommend_similar?ticker=AAPL"
    );
}

#[tokio::test]
async fn when_recommendation_labels_are_unknown_then_they_classify_as_high() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"input_ticker":"TSLA","recommendations":[
            {"ticker":"NIO","risk_class":"Extreme"},
            {"ticker":"F","risk_class":"Low"}]}"#,
    );
    let client = PredictionClient::new(transport, "http://predictor.test");

    let picks = client
        .recommend_similar(&ticker("TSLA"), None)
        .await
        .expect("recommendations should parse");

    assert_eq!(picks.recommendations[0].risk_class, RiskClass::High);
    assert_eq!(picks.recommendations[1].risk_class, RiskClass::Low);
}

#[tokio::test]
async fn when_metrics_are_requested_then_the_latest_evaluation_parses() {
    let transport = ScriptedHttpClient::respond(
        200,
        r#"{"timestamp":"2026-08-01T09:30:00",
            "regression":{"RMSE":0.021,"MAE":0.014,"R2":0.62},
            "classification":{"Accuracy":0.81,"F1":0.79,"Precision":0.8,"Recall":0.78}}"#,
    );
    let client = PredictionClient::new(transport.clone(), "http://predictor.test");

    let metrics = client.metrics().await.expect("metrics should parse");

    assert_eq!(metrics.regression.r2, 0.62);
    assert_eq!(metrics.classification.accuracy, 0.81);
    assert_eq!(
        transport.recorded_requests()[0].url,
        "http://predictor.test/metrics"
    );
}

#[tokio::test]
async fn when_no_training_run_exists_then_metrics_reports_the_service_detail() {
    let transport = ScriptedHttpClient::respond(404, r#"{"detail":"No experiments found"}"#);
    let client = PredictionClient::new(transport, "http://predictor.test");

    let failure = client.metrics().await.expect_err("must fail");
    assert_eq!(failure.kind(), FailureKind::Service);
    assert_eq!(failure.message(), "No experiments found");
}

#[tokio::test]
async fn when_any_endpoint_gets_a_non_success_status_then_detail_propagates() {
    let transport = ScriptedHttpClient::respond(503, r#"{"detail":"Models not loaded"}"#);
    let client = PredictionClient::new(transport, "http://predictor.test");

    let risk = client.predict_risk(&ticker("AAPL")).await.expect_err("must fail");
    let ret = client
        .predict_return(&ticker("AAPL"))
        .await
        .expect_err("must fail");
    let similar = client
        .recommend_similar(&ticker("AAPL"), None)
        .await
        .expect_err("must fail");

    for failure in [risk, ret, similar] {
        assert_eq!(failure.kind(), FailureKind::Service);
        assert_eq!(failure.message(), "Models not loaded");
    }
}

#[tokio::test]
async fn when_the_transport_cannot_complete_then_every_endpoint_reports_network() {
    let transport = ScriptedHttpClient::fail("request timeout: deadline exceeded");
    let client = PredictionClient::new(transport, "http://predictor.test");

    let failure = client
        .predict_risk(&ticker("AAPL"))
        .await
        .expect_err("must fail");

    assert_eq!(failure.kind(), FailureKind::Network);
    assert_eq!(failure.message(), "request timeout: deadline exceeded");
}
