use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessments::catalog::QuestionCatalog;
use crate::assessments::domain::{
    Answer, AssessmentSubmission, ParticipantId, Section, TraitAxis, TraitScores, SCALE_MAX,
    SCALE_MIN,
};
use crate::assessments::intake::SubmissionGuard;
use crate::assessments::report::InsightFilter;
use crate::assessments::repository::{RepositoryError, ScorecardRecord, ScorecardRepository};
use crate::assessments::router::assessment_router;
use crate::assessments::scoring::{ScoringConfig, ScoringEngine};
use crate::assessments::service::AssessmentService;

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

pub(super) fn guard() -> SubmissionGuard {
    SubmissionGuard::default()
}

pub(super) fn completed(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn answer(question_id: &str, value: u8) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        value,
    }
}

/// Answers every catalog question so the effective value on each axis is
/// `level`, compensating for reverse-scored items.
pub(super) fn level_answers(level: u8) -> Vec<Answer> {
    catalog()
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

/// Score set with every axis at `base`, then the listed overrides applied.
pub(super) fn score_set(base: u8, overrides: &[(TraitAxis, u8)]) -> TraitScores {
    let mut scores =
        TraitScores::from_pairs(TraitAxis::ordered().into_iter().map(|axis| (axis, base)));
    for (axis, score) in overrides {
        scores.set(*axis, *score);
    }
    scores
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, RecordingFilter>,
    Arc<MemoryRepository>,
    Arc<RecordingFilter>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let narrative = Arc::new(RecordingFilter::default());
    let service =
        AssessmentService::new(repository.clone(), narrative.clone(), scoring_config());
    (service, repository, narrative)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ParticipantId, Vec<ScorecardRecord>>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> usize {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .values()
            .map(Vec::len)
            .sum()
    }
}

impl ScorecardRepository for MemoryRepository {
    fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let duplicate = guard
            .values()
            .flatten()
            .any(|stored| stored.submission_id == record.submission_id);
        if duplicate {
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
        let guard = self.records.lock().expect("repository mutex poisoned");
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

/// Narrative filter double that records every call and returns a canned
/// highlight.
#[derive(Default, Clone)]
pub(super) struct RecordingFilter {
    calls: Arc<Mutex<Vec<(Section, String)>>>,
}

impl RecordingFilter {
    pub(super) fn calls(&self) -> Vec<(Section, String)> {
        self.calls.lock().expect("filter mutex poisoned").clone()
    }
}

impl InsightFilter for RecordingFilter {
    fn highlights(&self, text: &str, section: Section) -> Vec<String> {
        self.calls
            .lock()
            .expect("filter mutex poisoned")
            .push((section, text.to_string()));
        vec!["Canned highlight.".to_string()]
    }
}

pub(super) struct ConflictRepository;

impl ScorecardRepository for ConflictRepository {
    fn insert(&self, _record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn latest_for_participant(
        &self,
        _participant_id: &ParticipantId,
    ) -> Result<Option<ScorecardRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ScorecardRepository for UnavailableRepository {
    fn insert(&self, _record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn latest_for_participant(
        &self,
        _participant_id: &ParticipantId,
    ) -> Result<Option<ScorecardRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository, RecordingFilter>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
