//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, ScheduleQuery, SummaryResponse};
use crate::config::ScenarioConfig;
use crate::finance::Repayment;

/// Returns the scenario inputs and financial summary.
///
/// `GET /summary` → 200 + `SummaryResponse` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        inputs: state.scenario.clone(),
        summary: state.evaluation.summary,
    })
}

/// Returns repayment rows, optionally filtered by loan year range.
///
/// `GET /schedule` → 200 + `Vec<Repayment>` JSON
/// `GET /schedule?from=N&to=M` → filtered range (inclusive)
/// `GET /schedule?from=4&to=2` → 400 + `ErrorResponse`
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(1);
    let to = query.to.unwrap_or(u32::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!(
                "`from` ({from}) must be <= `to` ({to})"
            ))),
        ));
    }

    let rows: Vec<Repayment> = state
        .evaluation
        .schedule
        .iter()
        .filter(|r| r.year >= from && r.year <= to)
        .copied()
        .collect();

    Ok(Json(rows))
}

/// Evaluates a posted scenario.
///
/// `POST /evaluate` with a `ScenarioConfig` JSON body (omitted fields take
/// baseline defaults) → 200 + `Evaluation` JSON.
/// Range violations → 400; inputs the financial core rejects → 422.
pub async fn post_evaluate(Json(scenario): Json<ScenarioConfig>) -> impl IntoResponse {
    let errors = scenario.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("{} invalid field(s)", details.len()),
                details,
            }),
        ));
    }

    scenario.evaluate().map(Json).map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(e.to_string())),
        )
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;

    fn make_test_state() -> Arc<AppState> {
        let scenario = ScenarioConfig::grace_period();
        let evaluation = scenario.evaluate().expect("preset should evaluate");
        Arc::new(AppState {
            scenario,
            evaluation,
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn summary_returns_200() {
        let (status, json) = get_json("/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.get("inputs").is_some());
        assert_eq!(json["summary"]["total_repayment"], 345_000.0);
    }

    #[tokio::test]
    async fn schedule_returns_all_years() {
        let (status, json) = get_json("/schedule").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().expect("schedule should be a JSON array");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["year"], 1);
        assert_eq!(rows[0]["payment"], 0.0);
        assert_eq!(rows[4]["payment"], 115_000.0);
    }

    #[tokio::test]
    async fn schedule_range_query() {
        let (status, json) = get_json("/schedule?from=2&to=4").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().expect("schedule should be a JSON array");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["year"], 2);
        assert_eq!(rows[2]["year"], 4);
    }

    #[tokio::test]
    async fn schedule_invalid_range_returns_400() {
        let (status, json) = get_json("/schedule?from=4&to=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn evaluate_partial_body_uses_defaults() {
        let (status, json) = post_json(r#"{"loan": {"grace_years": 2}}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"]["total_repayment"], 345_000.0);
        assert_eq!(json["schedule"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn evaluate_out_of_range_returns_400() {
        let (status, json) =
            post_json(r#"{"loan": {"term_years": 3, "grace_years": 3}}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let details = json["details"].as_array().expect("details should be a JSON array");
        assert!(!details.is_empty());
    }

    #[tokio::test]
    async fn evaluate_overflowing_loan_returns_422() {
        let (status, json) =
            post_json(r#"{"loan": {"amount": 1e308, "interest_rate": 0.2}}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error = json["error"].as_str().expect("error should be a string");
        assert!(error.contains("principal"), "error={error}");
    }
}
