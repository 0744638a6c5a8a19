use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{ParticipantId, Section, SubmissionId, TraitAxis, TraitScores};
use super::super::scoring::{Band, BandThresholds};
use super::recommendations::{Priority, Recommendation};

/// One axis row in a rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct TraitScoreEntry {
    pub axis: TraitAxis,
    pub axis_label: &'static str,
    pub score: u8,
    pub band: Band,
    pub band_label: &'static str,
}

/// Axis rows grouped under their survey section, in canonical order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionScoresView {
    pub section: Section,
    pub section_label: &'static str,
    pub traits: Vec<TraitScoreEntry>,
}

/// Public projection of one recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub priority_label: &'static str,
}

impl RecommendationView {
    pub(crate) fn from_recommendation(recommendation: &Recommendation) -> Self {
        Self {
            id: recommendation.id,
            title: recommendation.title,
            description: recommendation.description,
            priority: recommendation.priority,
            priority_label: recommendation.priority.label(),
        }
    }
}

/// Acknowledgement payload returned right after intake.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardView {
    pub submission_id: SubmissionId,
    pub participant_id: ParticipantId,
    pub completed_at: DateTime<Utc>,
    pub sections: Vec<SectionScoresView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_coverage_axes: Vec<TraitAxis>,
}

/// Full individual report: banded scores plus generated guidance.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantReport {
    pub participant_id: ParticipantId,
    pub completed_at: DateTime<Utc>,
    pub sections: Vec<SectionScoresView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_coverage_axes: Vec<TraitAxis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationView>,
}

/// Aggregated report across the latest scorecards of a roster.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub valid_submissions: usize,
    pub sections: Vec<SectionScoresView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub narrative_highlights: Vec<String>,
}

/// Group every axis score under its section, banding each one.
pub(crate) fn section_views(
    scores: &TraitScores,
    thresholds: BandThresholds,
) -> Vec<SectionScoresView> {
    Section::ordered()
        .into_iter()
        .map(|section| SectionScoresView {
            section,
            section_label: section.label(),
            traits: TraitAxis::ordered()
                .into_iter()
                .filter(|axis| axis.section() == section)
                .map(|axis| {
                    let score = scores.get(axis);
                    let band = thresholds.classify(score);
                    TraitScoreEntry {
                        axis,
                        axis_label: axis.label(),
                        score,
                        band,
                        band_label: band.label(),
                    }
                })
                .collect(),
        })
        .collect()
}
