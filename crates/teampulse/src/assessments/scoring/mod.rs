mod bands;
mod calculator;
mod config;

pub use bands::{classify_band, Band, BandThresholds};
pub use calculator::compute_scores;
pub use config::ScoringConfig;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{ParticipantId, TraitAxis, TraitCoverage, TraitScores};
use super::intake::AnswerSheet;

/// Stateless scorer that applies the configured thresholds to validated
/// answer sheets.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, sheet: &AnswerSheet, catalog: &QuestionCatalog) -> Scorecard {
        let (scores, coverage) = calculator::score_with_coverage(sheet.answers(), catalog);

        Scorecard {
            participant_id: sheet.participant_id().clone(),
            completed_at: sheet.completed_at(),
            scores,
            coverage,
        }
    }

    pub fn band_for(&self, score: u8) -> Band {
        self.config.band_thresholds.classify(score)
    }

    /// Axes answered too thinly for their scores to be trusted.
    pub fn low_coverage_axes(&self, coverage: &TraitCoverage) -> Vec<TraitAxis> {
        coverage.axes_below(self.config.min_answers_per_axis)
    }
}

/// Scored output for one participant's validated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub participant_id: ParticipantId,
    pub completed_at: DateTime<Utc>,
    pub scores: TraitScores,
    pub coverage: TraitCoverage,
}
