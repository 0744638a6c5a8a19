use std::collections::BTreeMap;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{Answer, TraitAxis, TraitCoverage, TraitScores, SCALE_MAX, SCALE_MIN};

/// Normalize raw answers into per-axis 0..=100 scores.
///
/// Answers referencing question ids outside the catalog are skipped. Axes
/// with no catalog answer at all stay at 0.
pub fn compute_scores(answers: &[Answer], catalog: &QuestionCatalog) -> TraitScores {
    let (scores, _) = score_with_coverage(answers, catalog);
    scores
}

pub(crate) fn score_with_coverage(
    answers: &[Answer],
    catalog: &QuestionCatalog,
) -> (TraitScores, TraitCoverage) {
    let mut sums: BTreeMap<TraitAxis, u32> = BTreeMap::new();
    let mut coverage = TraitCoverage::default();

    for answer in answers {
        let question = match catalog.question(&answer.question_id) {
            Some(question) => question,
            None => continue,
        };

        let effective = if question.reverse_scored {
            (SCALE_MIN + SCALE_MAX).saturating_sub(answer.value)
        } else {
            answer.value
        };

        *sums.entry(question.axis).or_insert(0) += u32::from(effective);
        coverage.record(question.axis);
    }

    let mut scores = TraitScores::zeroed();
    for (axis, sum) in sums {
        let count = coverage.answered(axis);
        if count == 0 {
            continue;
        }
        let mean = f64::from(sum) / count as f64;
        scores.set(axis, rescale(mean));
    }

    (scores, coverage)
}

/// Linear map from the mean answer onto 0..=100, rounded to nearest.
fn rescale(mean: f64) -> u8 {
    let span = f64::from(SCALE_MAX - SCALE_MIN);
    let percent = (mean - f64::from(SCALE_MIN)) / span * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
