use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::assessment_router;

fn post_analyze(payload: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/assessment/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn analyze_route_returns_a_full_report() {
    let router = assessment_router(Arc::new(engine(0, "Deliberate Analyst")));

    let response = router
        .oneshot(post_analyze(serde_json::to_value(survey()).unwrap()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["readiness_score"], 100);
    assert_eq!(
        payload["result"]["cognitive_profile"],
        "Balanced Cognitive State"
    );
    assert_eq!(payload["result"]["decision_style"], "Deliberate Analyst");
    assert_eq!(payload["readiness_band"], "strong");
    assert_eq!(payload["chart"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn analyze_route_rejects_undeclared_labels() {
    let router = assessment_router(Arc::new(engine(0, "ignored")));

    let mut payload = serde_json::to_value(survey()).unwrap();
    payload["work_interfere"] = json!("Constantly");

    let response = router
        .oneshot(post_analyze(payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_route_rejects_out_of_range_numerics() {
    let router = assessment_router(Arc::new(engine(0, "ignored")));

    let mut payload = serde_json::to_value(survey()).unwrap();
    payload["daily_screen_time_min"] = json!(1200);

    let response = router
        .oneshot(post_analyze(payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("daily_screen_time_min"), "got: {message}");
}

#[tokio::test]
async fn schema_route_describes_the_form_contract() {
    let router = assessment_router(Arc::new(engine(0, "ignored")));

    let response = router
        .oneshot(
            Request::get("/api/v1/assessment/schema")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["categorical"]["work_interfere"],
        json!(["Never", "Rarely", "Sometimes", "Often"])
    );
    assert_eq!(payload["numeric"]["daily_screen_time_min"]["min"], 30);
    assert_eq!(payload["numeric"]["daily_screen_time_min"]["max"], 900);
    assert_eq!(payload["defaults"]["anxiety_level"], 4);
}
