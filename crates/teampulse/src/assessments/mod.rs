//! Assessment intake, trait scoring, and report generation for team
//! personality and culture surveys.
//!
//! Scoring, banding, insight, and recommendation logic is deterministic and
//! side-effect free; persistence and narrative filtering sit behind the
//! [`repository::ScorecardRepository`] and [`report::InsightFilter`] seams so
//! the service can be exercised with test doubles.

pub mod catalog;
pub mod domain;
pub mod import;
pub(crate) mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub(crate) mod team;

#[cfg(test)]
mod tests;

pub use catalog::QuestionCatalog;
pub use domain::{
    Answer, AssessmentSubmission, ParticipantId, Question, Section, SubmissionId, TraitAxis,
    TraitCoverage, TraitScores, SCALE_MAX, SCALE_MIN,
};
pub use import::{SurveyImportError, SurveyImporter};
pub use intake::{AnswerSheet, SubmissionGuard, SubmissionViolation};
pub use report::views::{
    ParticipantReport, RecommendationView, ScorecardView, SectionScoresView, TeamReport,
    TraitScoreEntry,
};
pub use report::{
    generate_insights, generate_recommendations, InsightFilter, KeywordInsightFilter, Priority,
    Recommendation,
};
pub use repository::{RepositoryError, ScorecardRecord, ScorecardRepository};
pub use router::{assessment_router, TeamReportRequest};
pub use scoring::{
    classify_band, compute_scores, Band, BandThresholds, Scorecard, ScoringConfig, ScoringEngine,
};
pub use service::{AssessmentService, AssessmentServiceError, TeamNarrative};
pub use team::{aggregate_team, TeamScores};
