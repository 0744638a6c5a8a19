use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentSubmission, ParticipantId, Section, SubmissionId};
use super::intake::{SubmissionGuard, SubmissionViolation};
use super::report::views::{ParticipantReport, RecommendationView, ScorecardView, TeamReport};
use super::report::{generate_insights, generate_recommendations, section_views, InsightFilter};
use super::repository::{RepositoryError, ScorecardRecord, ScorecardRepository};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::team::aggregate_team;

/// Service composing the submission guard, scoring engine, repository, and
/// narrative filter.
pub struct AssessmentService<R, F> {
    guard: Arc<SubmissionGuard>,
    catalog: Arc<QuestionCatalog>,
    repository: Arc<R>,
    narrative: Arc<F>,
    engine: Arc<ScoringEngine>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("scr-{id:06}"))
}

impl<R, F> AssessmentService<R, F>
where
    R: ScorecardRepository + 'static,
    F: InsightFilter + 'static,
{
    pub fn new(repository: Arc<R>, narrative: Arc<F>, config: ScoringConfig) -> Self {
        Self::with_catalog(
            Arc::new(QuestionCatalog::standard()),
            repository,
            narrative,
            config,
        )
    }

    pub fn with_catalog(
        catalog: Arc<QuestionCatalog>,
        repository: Arc<R>,
        narrative: Arc<F>,
        config: ScoringConfig,
    ) -> Self {
        let guard = Arc::new(SubmissionGuard::with_catalog(Arc::clone(&catalog)));
        let engine = Arc::new(ScoringEngine::new(config));

        Self {
            guard,
            catalog,
            repository,
            narrative,
            engine,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Validate, score, and store a submission, returning the stored record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<ScorecardRecord, AssessmentServiceError> {
        let sheet = self.guard.sheet_from_submission(submission)?;
        let scorecard = self.engine.score(&sheet, &self.catalog);

        let record = ScorecardRecord {
            submission_id: next_submission_id(),
            scorecard,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Acknowledgement projection of a stored record.
    pub fn scorecard_view(&self, record: &ScorecardRecord) -> ScorecardView {
        ScorecardView {
            submission_id: record.submission_id.clone(),
            participant_id: record.scorecard.participant_id.clone(),
            completed_at: record.scorecard.completed_at,
            sections: section_views(
                &record.scorecard.scores,
                self.engine.config().band_thresholds,
            ),
            low_coverage_axes: self.engine.low_coverage_axes(&record.scorecard.coverage),
        }
    }

    /// Full report for a participant, built from their latest scorecard.
    pub fn participant_report(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<ParticipantReport, AssessmentServiceError> {
        let record = self
            .repository
            .latest_for_participant(participant_id)?
            .ok_or(RepositoryError::NotFound)?;

        let scorecard = &record.scorecard;
        let insights = generate_insights(&scorecard.scores)
            .map(str::to_string)
            .collect();
        let recommendations = generate_recommendations(&scorecard.scores)
            .iter()
            .map(RecommendationView::from_recommendation)
            .collect();

        Ok(ParticipantReport {
            participant_id: scorecard.participant_id.clone(),
            completed_at: scorecard.completed_at,
            sections: section_views(&scorecard.scores, self.engine.config().band_thresholds),
            low_coverage_axes: self.engine.low_coverage_axes(&scorecard.coverage),
            insights,
            recommendations,
        })
    }

    /// Aggregate the latest scorecards for the listed roster and generate
    /// team-level guidance. Members without a scorecard are skipped, never
    /// treated as an error.
    pub fn team_report(
        &self,
        participant_ids: &[ParticipantId],
        narrative: Option<TeamNarrative>,
    ) -> Result<TeamReport, AssessmentServiceError> {
        let records = self.repository.latest_for_participants(participant_ids)?;
        let team = aggregate_team(
            records
                .iter()
                .map(|record| record.as_ref().map(ScorecardRecord::scores)),
        );

        let insights = generate_insights(&team.scores).map(str::to_string).collect();
        let recommendations = generate_recommendations(&team.scores)
            .iter()
            .map(RecommendationView::from_recommendation)
            .collect();

        let narrative_highlights = narrative
            .map(|request| self.narrative.highlights(&request.text, request.section))
            .unwrap_or_default();

        Ok(TeamReport {
            valid_submissions: team.valid_submissions,
            sections: section_views(&team.scores, self.engine.config().band_thresholds),
            insights,
            recommendations,
            narrative_highlights,
        })
    }

    /// Run prose through the narrative filter without touching storage.
    pub fn narrative_highlights(&self, text: &str, section: Section) -> Vec<String> {
        self.narrative.highlights(text, section)
    }
}

/// Free-form prose from the drafting assistant to fold into a team report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamNarrative {
    pub section: Section,
    pub text: String,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
