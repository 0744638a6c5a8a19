use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AssessmentSubmission, ParticipantId, SCALE_MAX, SCALE_MIN};

/// Validation errors raised by the submission guard.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionViolation {
    #[error("participant id is empty")]
    MissingParticipant,
    #[error("submission contains no answers")]
    EmptySubmission,
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),
    #[error("answer for {question_id} must be between 1 and 7 (found {value})")]
    ValueOutOfRange { question_id: String, value: u8 },
    #[error("duplicate answer for question {0}")]
    DuplicateAnswer(String),
}

/// Guard responsible for producing validated `AnswerSheet` instances.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    catalog: Arc<QuestionCatalog>,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::with_catalog(Arc::new(QuestionCatalog::standard()))
    }
}

impl SubmissionGuard {
    pub fn with_catalog(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Check an inbound submission against the catalog and the answer scale.
    pub fn sheet_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AnswerSheet, SubmissionViolation> {
        let participant = submission.participant_id.trim();
        if participant.is_empty() {
            return Err(SubmissionViolation::MissingParticipant);
        }

        if submission.answers.is_empty() {
            return Err(SubmissionViolation::EmptySubmission);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(submission.answers.len());
        for answer in &submission.answers {
            if self.catalog.question(&answer.question_id).is_none() {
                return Err(SubmissionViolation::UnknownQuestion(
                    answer.question_id.clone(),
                ));
            }

            if answer.value < SCALE_MIN || answer.value > SCALE_MAX {
                return Err(SubmissionViolation::ValueOutOfRange {
                    question_id: answer.question_id.clone(),
                    value: answer.value,
                });
            }

            if !seen.insert(answer.question_id.as_str()) {
                return Err(SubmissionViolation::DuplicateAnswer(
                    answer.question_id.clone(),
                ));
            }
        }

        Ok(AnswerSheet {
            participant_id: ParticipantId(participant.to_string()),
            answers: submission.answers,
            completed_at: submission.completed_at.unwrap_or_else(Utc::now),
        })
    }
}

/// A validated submission ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSheet {
    participant_id: ParticipantId,
    answers: Vec<Answer>,
    completed_at: DateTime<Utc>,
}

impl AnswerSheet {
    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
