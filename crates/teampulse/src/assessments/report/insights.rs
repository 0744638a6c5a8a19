use super::super::domain::{TraitAxis, TraitScores};

/// Score range gate for one insight rule.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trigger {
    Above(u8),
    Below(u8),
}

impl Trigger {
    pub(crate) fn matches(self, score: u8) -> bool {
        match self {
            Trigger::Above(threshold) => score > threshold,
            Trigger::Below(threshold) => score < threshold,
        }
    }
}

pub(crate) struct InsightRule {
    pub(crate) axis: TraitAxis,
    pub(crate) trigger: Trigger,
    pub(crate) text: &'static str,
}

/// Walk the rule table in canonical axis order, yielding at most one
/// observation per axis. The first rule that matches an axis wins; axes in
/// the balanced middle contribute nothing.
///
/// The returned sequence is lazy and borrows the scores; calling again
/// restarts it from the first axis.
pub fn generate_insights(scores: &TraitScores) -> impl Iterator<Item = &'static str> + '_ {
    TraitAxis::ordered().into_iter().filter_map(|axis| {
        let score = scores.get(axis);
        INSIGHT_RULES
            .iter()
            .find(|rule| rule.axis == axis && rule.trigger.matches(score))
            .map(|rule| rule.text)
    })
}

pub(crate) const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        axis: TraitAxis::Openness,
        trigger: Trigger::Above(70),
        text: "Strong appetite for novel ideas; channel it into structured discovery work.",
    },
    InsightRule {
        axis: TraitAxis::Openness,
        trigger: Trigger::Below(40),
        text: "Preference for proven routines; introduce change in small, reversible steps.",
    },
    InsightRule {
        axis: TraitAxis::Conscientiousness,
        trigger: Trigger::Above(70),
        text: "Disciplined planning and follow-through; watch for over-engineering lightweight work.",
    },
    InsightRule {
        axis: TraitAxis::Conscientiousness,
        trigger: Trigger::Below(40),
        text: "Plans tend to drift; visible owners and lightweight checklists will steady delivery.",
    },
    InsightRule {
        axis: TraitAxis::Extraversion,
        trigger: Trigger::Above(70),
        text: "High social energy; workshops and group formats will land well.",
    },
    InsightRule {
        axis: TraitAxis::Extraversion,
        trigger: Trigger::Below(40),
        text: "Focused solo work is preferred; default to async updates over large meetings.",
    },
    InsightRule {
        axis: TraitAxis::Agreeableness,
        trigger: Trigger::Above(70),
        text: "Highly accommodating group; make room for healthy disagreement so concerns surface early.",
    },
    InsightRule {
        axis: TraitAxis::Agreeableness,
        trigger: Trigger::Below(40),
        text: "Friction surfaces quickly; working agreements and facilitation are worth the investment.",
    },
    InsightRule {
        axis: TraitAxis::Neuroticism,
        trigger: Trigger::Above(70),
        text: "Pressure is felt acutely; stabilize priorities and shield the team from churn.",
    },
    InsightRule {
        axis: TraitAxis::Neuroticism,
        trigger: Trigger::Below(40),
        text: "Steady under pressure; the team can absorb ambitious goals.",
    },
    InsightRule {
        axis: TraitAxis::PowerDistance,
        trigger: Trigger::Above(70),
        text: "Deference to hierarchy runs deep; decisions may stall waiting for sign-off.",
    },
    InsightRule {
        axis: TraitAxis::PowerDistance,
        trigger: Trigger::Below(40),
        text: "Decision-making is flat; document ownership so accountability stays clear.",
    },
    InsightRule {
        axis: TraitAxis::Collaboration,
        trigger: Trigger::Above(70),
        text: "Swarming on problems comes naturally; protect individual deep-work time as well.",
    },
    InsightRule {
        axis: TraitAxis::Collaboration,
        trigger: Trigger::Below(40),
        text: "Work happens in silos; shared goals that span groups will pull people together.",
    },
    InsightRule {
        axis: TraitAxis::Adaptability,
        trigger: Trigger::Above(70),
        text: "Change is absorbed without drama; evolving scope is safe here.",
    },
    InsightRule {
        axis: TraitAxis::Adaptability,
        trigger: Trigger::Below(40),
        text: "Process changes meet resistance; stage transitions gradually with clear rationale.",
    },
    InsightRule {
        axis: TraitAxis::Recognition,
        trigger: Trigger::Above(70),
        text: "Appreciation flows freely and fuels engagement.",
    },
    InsightRule {
        axis: TraitAxis::Recognition,
        trigger: Trigger::Below(40),
        text: "Contributions feel invisible; build specific, regular recognition into team rituals.",
    },
    InsightRule {
        axis: TraitAxis::Innovation,
        trigger: Trigger::Above(70),
        text: "Experimentation is prized; pair it with clear success criteria.",
    },
    InsightRule {
        axis: TraitAxis::Innovation,
        trigger: Trigger::Below(40),
        text: "Safe choices dominate; carve out explicit budget for unproven approaches.",
    },
    InsightRule {
        axis: TraitAxis::Integrity,
        trigger: Trigger::Above(70),
        text: "Commitments are dependable currency on this team.",
    },
    InsightRule {
        axis: TraitAxis::Integrity,
        trigger: Trigger::Below(40),
        text: "Follow-through on commitments is inconsistent; make agreements explicit and visible.",
    },
    InsightRule {
        axis: TraitAxis::CustomerFocus,
        trigger: Trigger::Above(70),
        text: "Customer impact anchors decisions; keep that lens on internal tooling debates too.",
    },
    InsightRule {
        axis: TraitAxis::CustomerFocus,
        trigger: Trigger::Below(40),
        text: "Customer outcomes lose out to internal concerns; bring user evidence into planning.",
    },
    InsightRule {
        axis: TraitAxis::Growth,
        trigger: Trigger::Above(70),
        text: "Learning is woven into the role; create venues to showcase new skills.",
    },
    InsightRule {
        axis: TraitAxis::Growth,
        trigger: Trigger::Below(40),
        text: "People see little room to grow; map development paths before attrition does.",
    },
];
