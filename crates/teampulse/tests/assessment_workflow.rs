//! Integration specifications for the assessment intake, scoring, and reporting workflow.
//!
//! Scenarios focus on end-to-end behavior delivered through the public service facade and HTTP
//! router so we can validate intake, reporting, and routing without reaching into private
//! modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, TimeZone, Utc};

    use teampulse::assessments::{
        Answer, AssessmentService, AssessmentSubmission, KeywordInsightFilter, ParticipantId,
        QuestionCatalog, RepositoryError, ScorecardRecord, ScorecardRepository, ScoringConfig,
        SCALE_MAX, SCALE_MIN,
    };

    pub(super) fn completed(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    /// Answers every catalog question so the effective agreement level is
    /// uniform across axes; reverse-scored items get the mirrored raw value.
    pub(super) fn level_answers(level: u8) -> Vec<Answer> {
        QuestionCatalog::standard()
            .questions()
            .iter()
            .map(|question| Answer {
                question_id: question.id.to_string(),
                value: if question.reverse_scored {
                    SCALE_MIN + SCALE_MAX - level
                } else {
                    level
                },
            })
            .collect()
    }

    pub(super) fn submission(participant: &str, level: u8) -> AssessmentSubmission {
        submission_at(participant, level, completed(9))
    }

    pub(super) fn submission_at(
        participant: &str,
        level: u8,
        completed_at: DateTime<Utc>,
    ) -> AssessmentSubmission {
        AssessmentSubmission {
            participant_id: participant.to_string(),
            answers: level_answers(level),
            completed_at: Some(completed_at),
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<ParticipantId, Vec<ScorecardRecord>>>>,
    }

    impl ScorecardRepository for MemoryRepository {
        fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard
                .values()
                .flatten()
                .any(|existing| existing.submission_id == record.submission_id)
            {
                return Err(RepositoryError::Conflict);
            }
            guard
                .entry(record.scorecard.participant_id.clone())
                .or_default()
                .push(record.clone());
            Ok(record)
        }

        fn latest_for_participant(
            &self,
            participant_id: &ParticipantId,
        ) -> Result<Option<ScorecardRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard
                .get(participant_id)
                .and_then(|records| {
                    records
                        .iter()
                        .max_by_key(|record| record.scorecard.completed_at)
                })
                .cloned())
        }
    }

    pub(super) fn build_service() -> (
        AssessmentService<MemoryRepository, KeywordInsightFilter>,
        Arc<MemoryRepository>,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let filter = Arc::new(KeywordInsightFilter::default());
        let service =
            AssessmentService::new(repository.clone(), filter, ScoringConfig::default());
        (service, repository)
    }

    pub(super) use MemoryRepository as Repository;
}

mod intake {
    use super::common::*;
    use teampulse::assessments::{
        Answer, AssessmentServiceError, Band, ParticipantId, ScorecardRepository,
        SubmissionViolation, TraitAxis,
    };

    #[test]
    fn submissions_are_scored_and_persisted() {
        let (service, repository) = build_service();

        let record = service
            .submit(submission("ana.alvarez", 6))
            .expect("submission succeeds");

        assert!(record.submission_id.0.starts_with("scr-"));
        assert_eq!(record.scorecard.scores.get(TraitAxis::Collaboration), 83);

        let stored = repository
            .latest_for_participant(&ParticipantId("ana.alvarez".to_string()))
            .expect("repo fetch")
            .expect("record present");
        assert_eq!(stored.submission_id, record.submission_id);
        assert_eq!(stored.scorecard.scores, record.scorecard.scores);
    }

    #[test]
    fn acknowledgement_view_bands_every_axis() {
        let (service, _) = build_service();

        let record = service
            .submit(submission("ana.alvarez", 6))
            .expect("submission succeeds");
        let view = service.scorecard_view(&record);

        assert_eq!(view.sections.len(), 3);
        assert!(view
            .sections
            .iter()
            .flat_map(|section| section.traits.iter())
            .all(|entry| {
                entry.score == 83 && entry.band == Band::Higher && entry.band_label == "Higher"
            }));
        assert!(view.low_coverage_axes.is_empty());
    }

    #[test]
    fn invalid_answers_never_reach_storage() {
        let (service, repository) = build_service();
        let mut bad_submission = submission("ana.alvarez", 6);
        bad_submission.answers[0] = Answer {
            question_id: "openness_new_ideas".to_string(),
            value: 9,
        };

        match service.submit(bad_submission) {
            Err(AssessmentServiceError::Submission(SubmissionViolation::ValueOutOfRange {
                question_id,
                value,
            })) => {
                assert_eq!(question_id, "openness_new_ideas");
                assert_eq!(value, 9);
            }
            other => panic!("expected out-of-range rejection, got {other:?}"),
        }

        let stored = repository
            .latest_for_participant(&ParticipantId("ana.alvarez".to_string()))
            .expect("repo fetch");
        assert!(stored.is_none());
    }
}

mod reporting {
    use super::common::*;
    use teampulse::assessments::{
        AssessmentServiceError, Band, ParticipantId, RepositoryError, Section, TeamNarrative,
    };

    #[test]
    fn participant_report_reflects_the_latest_submission() {
        let (service, _) = build_service();

        service
            .submit(submission_at("pat.lee", 2, completed(14)))
            .expect("first submission");
        service
            .submit(submission_at("pat.lee", 6, completed(10)))
            .expect("second submission");

        let report = service
            .participant_report(&ParticipantId("pat.lee".to_string()))
            .expect("report");

        assert_eq!(report.completed_at, completed(14));
        let ocean = &report.sections[0];
        assert_eq!(ocean.section, Section::Ocean);
        assert!(ocean
            .traits
            .iter()
            .all(|entry| entry.score == 17 && entry.band == Band::Lower));
        assert!(report
            .insights
            .iter()
            .any(|insight| insight.contains("proven routines")));
        assert!(report
            .recommendations
            .iter()
            .any(|recommendation| recommendation.id == "improve_team_collaboration"));
    }

    #[test]
    fn unknown_participants_are_not_found() {
        let (service, _) = build_service();

        match service.participant_report(&ParticipantId("ghost".to_string())) {
            Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
            other => panic!("expected missing participant, got {other:?}"),
        }
    }

    #[test]
    fn team_report_aggregates_and_distills_narrative() {
        let (service, _) = build_service();
        service
            .submit(submission("ana.alvarez", 6))
            .expect("first submission");
        service
            .submit(submission("ben.okafor", 2))
            .expect("second submission");

        let roster = [
            ParticipantId("ana.alvarez".to_string()),
            ParticipantId("ben.okafor".to_string()),
            ParticipantId("ghost".to_string()),
        ];
        let narrative = TeamNarrative {
            section: Section::Culture,
            text: "The team communicates openly about mistakes. Budgets are tight this year. \
                   Trust runs high between engineers and product."
                .to_string(),
        };

        let report = service
            .team_report(&roster, Some(narrative))
            .expect("team report");

        assert_eq!(report.valid_submissions, 2);
        assert!(report
            .sections
            .iter()
            .flat_map(|section| section.traits.iter())
            .all(|entry| entry.score == 50));
        assert!(report.insights.is_empty());
        let ids: Vec<&str> = report
            .recommendations
            .iter()
            .map(|recommendation| recommendation.id)
            .collect();
        assert_eq!(ids, ["improve_team_collaboration"]);
        assert_eq!(
            report.narrative_highlights,
            [
                "The team communicates openly about mistakes.",
                "Trust runs high between engineers and product.",
            ]
        );
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use teampulse::assessments::{
        assessment_router, Answer, AssessmentService, KeywordInsightFilter, ScoringConfig,
    };
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let repository = Arc::new(Repository::default());
        let filter = Arc::new(KeywordInsightFilter::default());
        let service = Arc::new(AssessmentService::new(
            repository,
            filter,
            ScoringConfig::default(),
        ));
        assessment_router(service)
    }

    fn post_json(uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(payload).expect("serialize payload"),
            ))
            .expect("request")
    }

    #[tokio::test]
    async fn post_submissions_returns_scorecard_acknowledgement() {
        let router = build_router();
        let payload = serde_json::to_value(submission("ana.alvarez", 5)).expect("serialize");

        let response = router
            .clone()
            .oneshot(post_json("/api/v1/assessments/submissions", &payload))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let acknowledgement: Value = serde_json::from_slice(&body).expect("json");
        assert!(acknowledgement.get("submission_id").is_some());
        assert_eq!(
            acknowledgement.get("participant_id").and_then(Value::as_str),
            Some("ana.alvarez"),
        );
        assert_eq!(
            acknowledgement
                .get("sections")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(3),
        );
    }

    #[tokio::test]
    async fn post_submissions_rejects_unknown_questions() {
        let router = build_router();
        let mut bad_submission = submission("ana.alvarez", 5);
        bad_submission.answers.push(Answer {
            question_id: "coffee_quality".to_string(),
            value: 4,
        });
        let payload = serde_json::to_value(bad_submission).expect("serialize");

        let response = router
            .clone()
            .oneshot(post_json("/api/v1/assessments/submissions", &payload))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let error = payload
            .get("error")
            .and_then(Value::as_str)
            .expect("error message");
        assert!(error.contains("unknown question"));
    }

    #[tokio::test]
    async fn full_journey_from_submission_to_team_report() {
        let router = build_router();

        for (participant, level) in [("ana.alvarez", 6), ("ben.okafor", 4)] {
            let payload = serde_json::to_value(submission(participant, level)).expect("serialize");
            let response = router
                .clone()
                .oneshot(post_json("/api/v1/assessments/submissions", &payload))
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/assessments/participants/ana.alvarez/report")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let report: Value = serde_json::from_slice(&body).expect("json");
        let insights = report
            .get("insights")
            .and_then(Value::as_array)
            .expect("insights array");
        assert!(!insights.is_empty());
        let recommendations = report
            .get("recommendations")
            .and_then(Value::as_array)
            .expect("recommendations array");
        assert!(recommendations.iter().any(|recommendation| {
            recommendation.get("id").and_then(Value::as_str)
                == Some("encourage_experimentation")
        }));

        let team_request = json!({
            "participant_ids": ["ana.alvarez", "ben.okafor"],
            "narrative": {
                "section": "values",
                "text": "Learning new skills is funded every quarter.",
            },
        });
        let response = router
            .clone()
            .oneshot(post_json("/api/v1/assessments/team/report", &team_request))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let team_report: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            team_report.get("valid_submissions").and_then(Value::as_u64),
            Some(2),
        );
        assert_eq!(team_report["sections"][0]["traits"][0]["score"], json!(67));
        assert_eq!(
            team_report.get("narrative_highlights"),
            Some(&json!(["Learning new skills is funded every quarter."])),
        );
    }

    #[tokio::test]
    async fn report_for_unknown_participant_is_not_found() {
        let router = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/assessments/participants/ghost/report")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            payload.get("participant_id").and_then(Value::as_str),
            Some("ghost"),
        );
        assert_eq!(
            payload.get("error").and_then(Value::as_str),
            Some("no completed submission for participant"),
        );
    }
}
