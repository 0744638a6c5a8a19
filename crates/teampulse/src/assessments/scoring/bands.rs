use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Lower,
    Balanced,
    Higher,
}

impl Band {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lower => "Lower",
            Self::Balanced => "Balanced",
            Self::Higher => "Higher",
        }
    }
}

/// Cut points splitting the 0..=100 score range into three bands.
///
/// Scores strictly below `lower_below` classify as lower, scores strictly
/// above `higher_above` as higher, and everything between (both cut points
/// included) as balanced. Every possible score lands in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub lower_below: u8,
    pub higher_above: u8,
}

impl BandThresholds {
    pub const fn classify(self, score: u8) -> Band {
        if score < self.lower_below {
            Band::Lower
        } else if score > self.higher_above {
            Band::Higher
        } else {
            Band::Balanced
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            lower_below: 40,
            higher_above: 70,
        }
    }
}

/// Classify a score with the standard 40/70 cut points.
pub fn classify_band(score: u8) -> Band {
    BandThresholds::default().classify(score)
}
