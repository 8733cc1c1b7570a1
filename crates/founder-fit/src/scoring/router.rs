use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assessor::AssessorTransport;
use super::domain::{Idea, IdeaId, Member};
use super::repository::ScoreRepository;
use super::service::{IdeaScoringService, ScoringError};
use super::validation::InputViolation;

/// Body accepted by the score endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub idea: Idea,
    #[serde(default)]
    pub roster: Vec<Member>,
}

/// Router builder exposing the evaluate and read endpoints for idea scores.
pub fn scoring_router<R, T>(service: Arc<IdeaScoringService<R, T>>) -> Router
where
    R: ScoreRepository + 'static,
    T: AssessorTransport + 'static,
{
    Router::new()
        .route(
            "/api/v1/ideas/:idea_id/score",
            get(score_handler::<R, T>).post(evaluate_handler::<R, T>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<R, T>(
    State(service): State<Arc<IdeaScoringService<R, T>>>,
    Path(idea_id): Path<String>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    R: ScoreRepository + 'static,
    T: AssessorTransport + 'static,
{
    if request.idea.id.0 != idea_id {
        let mismatch = InputViolation::IdeaIdMismatch {
            path: idea_id,
            payload: request.idea.id.0.clone(),
        };
        return error_response(ScoringError::InputValidation(vec![mismatch]));
    }

    match service.evaluate(&request.idea, &request.roster).await {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<R, T>(
    State(service): State<Arc<IdeaScoringService<R, T>>>,
    Path(idea_id): Path<String>,
) -> Response
where
    R: ScoreRepository + 'static,
    T: AssessorTransport + 'static,
{
    match service.get(&IdeaId(idea_id)) {
        Ok(Some(result)) => (StatusCode::OK, axum::Json(result)).into_response(),
        Ok(None) => (StatusCode::OK, axum::Json(serde_json::Value::Null)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: ScoringError) -> Response {
    let status = status_for(&error);
    let payload = match &error {
        ScoringError::InputValidation(violations) => json!({
            "error": error.to_string(),
            "violations": violations.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
        _ => json!({
            "error": error.to_string(),
        }),
    };
    (status, axum::Json(payload)).into_response()
}

pub(crate) fn status_for(error: &ScoringError) -> StatusCode {
    match error {
        ScoringError::InputValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScoringError::MalformedAssessorResponse { .. } => StatusCode::BAD_GATEWAY,
        ScoringError::AssessorTransport(_) => StatusCode::SERVICE_UNAVAILABLE,
        ScoringError::Configuration(_) | ScoringError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
