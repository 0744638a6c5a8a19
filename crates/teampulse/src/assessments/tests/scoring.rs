use super::common::*;
use crate::assessments::catalog::QuestionCatalog;
use crate::assessments::domain::{Question, Section, TraitAxis};
use crate::assessments::scoring::{
    classify_band, compute_scores, Band, BandThresholds, ScoringConfig, ScoringEngine,
};

#[test]
fn full_agreement_on_plain_items_scores_one_hundred() {
    let catalog = openness_pair_catalog(false);
    let scores = compute_scores(&[answer("q1", 7), answer("q2", 7)], &catalog);

    assert_eq!(scores.get(TraitAxis::Openness), 100);
}

#[test]
fn full_disagreement_on_reversed_items_scores_one_hundred() {
    let catalog = openness_pair_catalog(true);
    let scores = compute_scores(&[answer("q1", 1), answer("q2", 1)], &catalog);

    assert_eq!(scores.get(TraitAxis::Openness), 100);
}

#[test]
fn neutral_answers_land_on_the_midpoint() {
    let scores = compute_scores(&level_answers(4), &catalog());

    for axis in TraitAxis::ordered() {
        assert_eq!(scores.get(axis), 50, "axis {axis:?}");
    }
}

#[test]
fn scores_map_linearly_onto_the_percent_scale() {
    let expected = [(1, 0), (2, 17), (3, 33), (4, 50), (5, 67), (6, 83), (7, 100)];

    for (level, score) in expected {
        let scores = compute_scores(&level_answers(level), &catalog());
        assert_eq!(scores.get(TraitAxis::Growth), score, "level {level}");
    }
}

#[test]
fn reverse_scored_items_invert_the_raw_value() {
    let scores = compute_scores(&[answer("openness_familiar_routines", 1)], &catalog());
    assert_eq!(scores.get(TraitAxis::Openness), 100);

    let inverted = compute_scores(&[answer("openness_familiar_routines", 7)], &catalog());
    assert_eq!(inverted.get(TraitAxis::Openness), 0);
}

#[test]
fn axis_means_round_to_the_nearest_point() {
    let answers = [
        answer("openness_new_ideas", 6),
        answer("openness_familiar_routines", 1),
    ];
    let scores = compute_scores(&answers, &catalog());

    assert_eq!(scores.get(TraitAxis::Openness), 92);
}

#[test]
fn unanswered_axes_stay_at_zero() {
    let scores = compute_scores(&[answer("growth_encouraged_learning", 7)], &catalog());

    assert_eq!(scores.get(TraitAxis::Growth), 100);
    assert_eq!(scores.get(TraitAxis::Openness), 0);
}

#[test]
fn unknown_question_ids_are_skipped() {
    let answers = [answer("openness_new_ideas", 7), answer("retired_question", 1)];
    let scores = compute_scores(&answers, &catalog());

    assert_eq!(scores.get(TraitAxis::Openness), 100);
}

#[test]
fn engine_carries_identity_onto_the_scorecard() {
    let sheet = guard()
        .sheet_from_submission(submission("ana", 6))
        .expect("submission passes the guard");

    let scorecard = engine().score(&sheet, &catalog());

    assert_eq!(scorecard.participant_id.0, "ana");
    assert_eq!(scorecard.completed_at, completed(9));
    assert_eq!(scorecard.scores.get(TraitAxis::Integrity), 83);
}

#[test]
fn engine_flags_thinly_answered_axes() {
    let mut submission = submission("ana", 5);
    submission
        .answers
        .retain(|answer| answer.question_id.starts_with("openness"));

    let sheet = guard()
        .sheet_from_submission(submission)
        .expect("submission passes the guard");
    let scorecard = engine().score(&sheet, &catalog());
    let flagged = engine().low_coverage_axes(&scorecard.coverage);

    assert!(!flagged.contains(&TraitAxis::Openness));
    assert_eq!(flagged.len(), TraitAxis::ordered().len() - 1);
    assert_eq!(scorecard.coverage.answered(TraitAxis::Openness), 2);
    assert_eq!(scorecard.coverage.answered(TraitAxis::Growth), 0);
}

#[test]
fn minimum_coverage_is_configurable() {
    let engine = ScoringEngine::new(ScoringConfig {
        min_answers_per_axis: 3,
        ..ScoringConfig::default()
    });

    let sheet = guard()
        .sheet_from_submission(submission("ana", 5))
        .expect("submission passes the guard");
    let scorecard = engine.score(&sheet, &catalog());

    assert_eq!(
        engine.low_coverage_axes(&scorecard.coverage).len(),
        TraitAxis::ordered().len()
    );
}

#[test]
fn standard_cut_points_split_the_scale() {
    assert_eq!(classify_band(0), Band::Lower);
    assert_eq!(classify_band(39), Band::Lower);
    assert_eq!(classify_band(40), Band::Balanced);
    assert_eq!(classify_band(70), Band::Balanced);
    assert_eq!(classify_band(71), Band::Higher);
    assert_eq!(classify_band(100), Band::Higher);
}

#[test]
fn bands_never_regress_as_scores_climb() {
    let mut previous = classify_band(0);
    for score in 0..=100u8 {
        let band = classify_band(score);
        assert!(band_rank(band) >= band_rank(previous), "score {score}");
        previous = band;
    }
}

#[test]
fn custom_cut_points_move_the_boundaries() {
    let thresholds = BandThresholds {
        lower_below: 30,
        higher_above: 60,
    };

    assert_eq!(thresholds.classify(29), Band::Lower);
    assert_eq!(thresholds.classify(30), Band::Balanced);
    assert_eq!(thresholds.classify(60), Band::Balanced);
    assert_eq!(thresholds.classify(61), Band::Higher);
}

#[test]
fn engine_bands_scores_with_its_configured_thresholds() {
    let engine = ScoringEngine::new(ScoringConfig {
        band_thresholds: BandThresholds {
            lower_below: 50,
            higher_above: 80,
        },
        ..ScoringConfig::default()
    });

    assert_eq!(engine.band_for(49), Band::Lower);
    assert_eq!(engine.band_for(80), Band::Balanced);
    assert_eq!(engine.band_for(81), Band::Higher);
}

fn openness_pair_catalog(reverse_scored: bool) -> QuestionCatalog {
    QuestionCatalog::new(vec![
        Question {
            id: "q1",
            text: "First openness item.",
            section: Section::Ocean,
            axis: TraitAxis::Openness,
            reverse_scored,
        },
        Question {
            id: "q2",
            text: "Second openness item.",
            section: Section::Ocean,
            axis: TraitAxis::Openness,
            reverse_scored,
        },
    ])
}

fn band_rank(band: Band) -> u8 {
    match band {
        Band::Lower => 0,
        Band::Balanced => 1,
        Band::Higher => 2,
    }
}
