use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::AnswerRecord;
use super::scenarios::{scenario_library, ScenarioSummary};
use super::service::{ScreeningService, ScreeningServiceError};

/// Router builder exposing the screening endpoints.
pub fn screening_router(service: Arc<ScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/self-petition/evaluate", post(evaluate_handler))
        .route("/api/v1/self-petition/scenarios", get(scenarios_handler))
        .route("/api/v1/self-petition/self-test", post(self_test_handler))
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<ScreeningService>>,
    axum::Json(answers): axum::Json<AnswerRecord>,
) -> Response {
    match service.screen(&answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(ScreeningServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
                "missing_fields": violation.missing_fields(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn scenarios_handler() -> axum::Json<Vec<ScenarioSummary>> {
    axum::Json(
        scenario_library()
            .iter()
            .map(|scenario| scenario.summary())
            .collect(),
    )
}

pub(crate) async fn self_test_handler(
    State(service): State<Arc<ScreeningService>>,
) -> Response {
    let report = service.self_test();
    let status = if report.all_passed() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, axum::Json(report)).into_response()
}
