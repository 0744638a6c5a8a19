use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSubmission, ParticipantId};
use super::report::InsightFilter;
use super::repository::{RepositoryError, ScorecardRepository};
use super::service::{AssessmentService, AssessmentServiceError, TeamNarrative};

/// Router builder exposing HTTP endpoints for intake and reporting.
pub fn assessment_router<R, F>(service: Arc<AssessmentService<R, F>>) -> Router
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/submissions",
            post(submit_handler::<R, F>),
        )
        .route(
            "/api/v1/assessments/participants/:participant_id/report",
            get(report_handler::<R, F>),
        )
        .route(
            "/api/v1/assessments/team/report",
            post(team_report_handler::<R, F>),
        )
        .with_state(service)
}

/// Roster payload for the team report endpoint.
#[derive(Debug, Deserialize)]
pub struct TeamReportRequest {
    pub participant_ids: Vec<String>,
    #[serde(default)]
    pub narrative: Option<TeamNarrative>,
}

pub(crate) async fn submit_handler<R, F>(
    State(service): State<Arc<AssessmentService<R, F>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = service.scorecard_view(&record);
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Submission(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R, F>(
    State(service): State<Arc<AssessmentService<R, F>>>,
    Path(participant_id): Path<String>,
) -> Response
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    let id = ParticipantId(participant_id);
    match service.participant_report(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "participant_id": id.0,
                "error": "no completed submission for participant",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn team_report_handler<R, F>(
    State(service): State<Arc<AssessmentService<R, F>>>,
    axum::Json(request): axum::Json<TeamReportRequest>,
) -> Response
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    let participant_ids: Vec<ParticipantId> = request
        .participant_ids
        .into_iter()
        .map(ParticipantId)
        .collect();

    match service.team_report(&participant_ids, request.narrative) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
