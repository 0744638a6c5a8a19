use serde::Serialize;

use super::super::domain::{TraitAxis, TraitScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Actionable guidance emitted when a rule's requirement holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

/// Score condition gating one recommendation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Requirement {
    Above(TraitAxis, u8),
    Below(TraitAxis, u8),
    AllOf(&'static [Requirement]),
}

impl Requirement {
    pub(crate) fn satisfied_by(&self, scores: &TraitScores) -> bool {
        match self {
            Requirement::Above(axis, threshold) => scores.get(*axis) > *threshold,
            Requirement::Below(axis, threshold) => scores.get(*axis) < *threshold,
            Requirement::AllOf(requirements) => requirements
                .iter()
                .all(|requirement| requirement.satisfied_by(scores)),
        }
    }
}

pub(crate) struct RecommendationRule {
    pub(crate) requirement: Requirement,
    pub(crate) recommendation: Recommendation,
}

/// Evaluate every rule against the scores. Unlike insights, all satisfied
/// rules fire, and the output preserves rule table order rather than
/// sorting by priority.
pub fn generate_recommendations(scores: &TraitScores) -> Vec<Recommendation> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| rule.requirement.satisfied_by(scores))
        .map(|rule| rule.recommendation.clone())
        .collect()
}

pub(crate) const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Agreeableness, 60),
        recommendation: Recommendation {
            id: "improve_team_collaboration",
            title: "Improve Team Collaboration",
            description: "Run regular retrospectives and agree on explicit norms for raising and resolving disagreements.",
            priority: Priority::High,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Extraversion, 50),
        recommendation: Recommendation {
            id: "enhance_communication_channels",
            title: "Enhance Communication Channels",
            description: "Favor written, asynchronous updates so quieter members contribute on equal footing.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Conscientiousness, 40),
        recommendation: Recommendation {
            id: "introduce_structured_planning",
            title: "Introduce Structured Planning",
            description: "Adopt a lightweight planning cadence with named owners and visible deadlines for every commitment.",
            priority: Priority::High,
        },
    },
    RecommendationRule {
        requirement: Requirement::Above(TraitAxis::Neuroticism, 70),
        recommendation: Recommendation {
            id: "support_stress_management",
            title: "Support Stress Management",
            description: "Reduce priority churn, protect focus time, and make workload concerns safe to raise early.",
            priority: Priority::High,
        },
    },
    RecommendationRule {
        requirement: Requirement::AllOf(&[
            Requirement::Above(TraitAxis::Extraversion, 70),
            Requirement::Below(TraitAxis::Conscientiousness, 45),
        ]),
        recommendation: Recommendation {
            id: "channel_energy_into_delivery",
            title: "Channel Energy into Delivery",
            description: "Pair the team's social momentum with short written plans so enthusiasm converts into finished work.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Above(TraitAxis::Openness, 70),
        recommendation: Recommendation {
            id: "encourage_experimentation",
            title: "Encourage Experimentation",
            description: "Give the appetite for new ideas an outlet through time-boxed spikes with clear success criteria.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Openness, 40),
        recommendation: Recommendation {
            id: "broaden_learning_opportunities",
            title: "Broaden Learning Opportunities",
            description: "Introduce new tools and practices through low-stakes demos before asking anyone to change how they work.",
            priority: Priority::Low,
        },
    },
    RecommendationRule {
        requirement: Requirement::Above(TraitAxis::PowerDistance, 70),
        recommendation: Recommendation {
            id: "flatten_decision_making",
            title: "Flatten Decision-Making",
            description: "Delegate reversible decisions to the people closest to the work and record who owns what.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Adaptability, 40),
        recommendation: Recommendation {
            id: "practice_change_management",
            title: "Practice Change Management",
            description: "Stage process changes gradually, explain the rationale, and leave room for feedback before locking them in.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Recognition, 40),
        recommendation: Recommendation {
            id: "invest_in_recognition",
            title: "Invest in Recognition Rituals",
            description: "Build specific, regular appreciation into existing ceremonies so contributions stop going unnoticed.",
            priority: Priority::Low,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::CustomerFocus, 40),
        recommendation: Recommendation {
            id: "reconnect_with_customers",
            title: "Reconnect Teams with Customers",
            description: "Bring user evidence into planning sessions and rotate members through support or research calls.",
            priority: Priority::Medium,
        },
    },
    RecommendationRule {
        requirement: Requirement::Below(TraitAxis::Growth, 40),
        recommendation: Recommendation {
            id: "map_growth_paths",
            title: "Map Growth Paths",
            description: "Agree on a development goal per person and revisit progress in one-on-ones before attrition decides for you.",
            priority: Priority::Low,
        },
    },
];
