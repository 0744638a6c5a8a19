use serde::{Deserialize, Serialize};

use super::bands::BandThresholds;

/// Tunables applied while turning answer sheets into scorecards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub band_thresholds: BandThresholds,
    /// Axes answered fewer times than this are flagged as low coverage.
    pub min_answers_per_axis: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            band_thresholds: BandThresholds::default(),
            min_answers_per_axis: 1,
        }
    }
}
