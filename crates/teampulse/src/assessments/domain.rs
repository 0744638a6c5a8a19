use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest answer on the agreement scale.
pub const SCALE_MIN: u8 = 1;
/// Highest answer on the agreement scale.
pub const SCALE_MAX: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Ocean,
    Culture,
    Values,
}

impl Section {
    pub const fn ordered() -> [Self; 3] {
        [Self::Ocean, Self::Culture, Self::Values]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ocean => "Personality (OCEAN)",
            Self::Culture => "Team Culture",
            Self::Values => "Working Values",
        }
    }
}

/// One measured dimension of personality, culture, or working values.
///
/// The declaration order is the canonical order used everywhere scores are
/// rendered or iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitAxis {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
    PowerDistance,
    Collaboration,
    Adaptability,
    Recognition,
    Innovation,
    Integrity,
    CustomerFocus,
    Growth,
}

impl TraitAxis {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
            Self::PowerDistance,
            Self::Collaboration,
            Self::Adaptability,
            Self::Recognition,
            Self::Innovation,
            Self::Integrity,
            Self::CustomerFocus,
            Self::Growth,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
            Self::PowerDistance => "Power Distance",
            Self::Collaboration => "Collaboration",
            Self::Adaptability => "Adaptability",
            Self::Recognition => "Recognition",
            Self::Innovation => "Innovation",
            Self::Integrity => "Integrity",
            Self::CustomerFocus => "Customer Focus",
            Self::Growth => "Growth",
        }
    }

    pub const fn section(self) -> Section {
        match self {
            Self::Openness
            | Self::Conscientiousness
            | Self::Extraversion
            | Self::Agreeableness
            | Self::Neuroticism => Section::Ocean,
            Self::PowerDistance | Self::Collaboration | Self::Adaptability | Self::Recognition => {
                Section::Culture
            }
            Self::Innovation | Self::Integrity | Self::CustomerFocus | Self::Growth => {
                Section::Values
            }
        }
    }
}

/// Immutable description of one survey question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub section: Section,
    pub axis: TraitAxis,
    pub reverse_scored: bool,
}

/// Identifier wrapper for assessment participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

/// Identifier wrapper for stored scorecards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// One answered question on the 1..=7 agreement scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: u8,
}

/// Raw inbound submission before intake validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub participant_id: String,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Normalized 0..=100 score for every recognized trait axis.
///
/// Axes nothing was answered for sit at 0; pair with [`TraitCoverage`] to
/// tell an unanswered axis apart from a genuinely low one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores(BTreeMap<TraitAxis, u8>);

impl TraitScores {
    pub fn zeroed() -> Self {
        let mut scores = BTreeMap::new();
        for axis in TraitAxis::ordered() {
            scores.insert(axis, 0);
        }
        Self(scores)
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (TraitAxis, u8)>,
    {
        let mut scores = Self::zeroed();
        for (axis, score) in pairs {
            scores.set(axis, score);
        }
        scores
    }

    pub fn get(&self, axis: TraitAxis) -> u8 {
        self.0.get(&axis).copied().unwrap_or(0)
    }

    pub fn set(&mut self, axis: TraitAxis, score: u8) {
        self.0.insert(axis, score);
    }

    /// Iterate `(axis, score)` pairs in canonical axis order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitAxis, u8)> + '_ {
        TraitAxis::ordered().into_iter().map(|axis| (axis, self.get(axis)))
    }
}

/// Per-axis count of answered questions backing a score set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCoverage(BTreeMap<TraitAxis, usize>);

impl TraitCoverage {
    pub fn answered(&self, axis: TraitAxis) -> usize {
        self.0.get(&axis).copied().unwrap_or(0)
    }

    pub(crate) fn record(&mut self, axis: TraitAxis) {
        *self.0.entry(axis).or_insert(0) += 1;
    }

    /// Axes answered fewer than `minimum` times, in canonical order.
    pub fn axes_below(&self, minimum: usize) -> Vec<TraitAxis> {
        TraitAxis::ordered()
            .into_iter()
            .filter(|axis| self.answered(*axis) < minimum)
            .collect()
    }
}
