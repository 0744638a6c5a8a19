use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use teampulse::assessments::{
    assessment_router, AssessmentService, InsightFilter, KeywordInsightFilter, ScorecardRepository,
    Section,
};

#[derive(Debug, Deserialize)]
pub(crate) struct NarrativeHighlightsRequest {
    pub(crate) section: Section,
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NarrativeHighlightsResponse {
    pub(crate) section: Section,
    pub(crate) section_label: &'static str,
    pub(crate) highlights: Vec<String>,
}

pub(crate) fn with_assessment_routes<R, F>(
    service: Arc<AssessmentService<R, F>>,
) -> axum::Router
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessments/narrative/highlights",
            axum::routing::post(narrative_highlights_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless preview of the narrative distillation the team report applies,
/// so drafting tools can iterate on prose before filing it.
pub(crate) async fn narrative_highlights_endpoint(
    Json(payload): Json<NarrativeHighlightsRequest>,
) -> Json<NarrativeHighlightsResponse> {
    let NarrativeHighlightsRequest { section, text } = payload;

    let filter = KeywordInsightFilter::default();
    let highlights = filter.highlights(&text, section);

    Json(NarrativeHighlightsResponse {
        section,
        section_label: section.label(),
        highlights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn narrative_highlights_endpoint_distills_section_prose() {
        let request = NarrativeHighlightsRequest {
            section: Section::Culture,
            text: "The team communicates openly about misses. Parking is scarce downtown. \
                   Trust runs high across the group."
                .to_string(),
        };

        let Json(body) = narrative_highlights_endpoint(Json(request)).await;

        assert_eq!(body.section, Section::Culture);
        assert_eq!(body.section_label, "Team Culture");
        assert_eq!(
            body.highlights,
            [
                "The team communicates openly about misses.",
                "Trust runs high across the group.",
            ]
        );
    }

    #[tokio::test]
    async fn narrative_highlights_endpoint_drops_off_section_prose() {
        let request = NarrativeHighlightsRequest {
            section: Section::Values,
            text: "The team communicates openly about roadmap changes.".to_string(),
        };

        let Json(body) = narrative_highlights_endpoint(Json(request)).await;

        assert_eq!(body.section_label, "Working Values");
        assert!(body.highlights.is_empty());
    }
}
