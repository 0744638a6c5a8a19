use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{TraitAxis, TraitScores};

/// Averaged team-level scores plus the count of contributing scorecards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    pub scores: TraitScores,
    pub valid_submissions: usize,
}

/// Average per-axis scores across a roster, skipping members without a
/// scorecard. The mean is arithmetic, rounded to nearest, and does not
/// depend on input order.
///
/// With nothing to aggregate every axis stays 0 and `valid_submissions` is
/// 0; callers decide whether that counts as a report.
pub fn aggregate_team<'a, I>(score_sets: I) -> TeamScores
where
    I: IntoIterator<Item = Option<&'a TraitScores>>,
{
    let mut sums: BTreeMap<TraitAxis, u32> = BTreeMap::new();
    let mut valid_submissions = 0usize;

    for scores in score_sets.into_iter().flatten() {
        valid_submissions += 1;
        for (axis, score) in scores.iter() {
            *sums.entry(axis).or_insert(0) += u32::from(score);
        }
    }

    let mut scores = TraitScores::zeroed();
    if valid_submissions > 0 {
        for (axis, sum) in sums {
            let mean = f64::from(sum) / valid_submissions as f64;
            scores.set(axis, mean.round() as u8);
        }
    }

    TeamScores {
        scores,
        valid_submissions,
    }
}
