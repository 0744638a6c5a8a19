use std::collections::HashMap;

use super::domain::{Question, Section, TraitAxis};

#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<&'static str, usize>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn new(questions: Vec<Question>) -> Self {
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(index, question)| (question.id, index))
            .collect();
        Self { questions, by_id }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|index| &self.questions[*index])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_for_section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn questions_for_axis(&self, axis: TraitAxis) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.axis == axis)
            .collect()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "openness_new_ideas",
            text: "I enjoy exploring new ideas and unconventional approaches.",
            section: Section::Ocean,
            axis: TraitAxis::Openness,
            reverse_scored: false,
        },
        Question {
            id: "openness_familiar_routines",
            text: "I prefer sticking to familiar routines over trying new methods.",
            section: Section::Ocean,
            axis: TraitAxis::Openness,
            reverse_scored: true,
        },
        Question {
            id: "conscientiousness_follow_through",
            text: "I plan my work carefully and follow through on the details.",
            section: Section::Ocean,
            axis: TraitAxis::Conscientiousness,
            reverse_scored: false,
        },
        Question {
            id: "conscientiousness_loose_ends",
            text: "I often leave tasks unfinished or scramble near deadlines.",
            section: Section::Ocean,
            axis: TraitAxis::Conscientiousness,
            reverse_scored: true,
        },
        Question {
            id: "extraversion_energized_by_people",
            text: "Working closely with other people energizes me.",
            section: Section::Ocean,
            axis: TraitAxis::Extraversion,
            reverse_scored: false,
        },
        Question {
            id: "extraversion_prefers_quiet",
            text: "I prefer working quietly on my own for most of the day.",
            section: Section::Ocean,
            axis: TraitAxis::Extraversion,
            reverse_scored: true,
        },
        Question {
            id: "agreeableness_assumes_good_intent",
            text: "I find it easy to trust teammates and assume good intent.",
            section: Section::Ocean,
            axis: TraitAxis::Agreeableness,
            reverse_scored: false,
        },
        Question {
            id: "agreeableness_frequent_friction",
            text: "I frequently find myself in friction with colleagues.",
            section: Section::Ocean,
            axis: TraitAxis::Agreeableness,
            reverse_scored: true,
        },
        Question {
            id: "neuroticism_overwhelmed_by_change",
            text: "I feel tense or overwhelmed when priorities change quickly.",
            section: Section::Ocean,
            axis: TraitAxis::Neuroticism,
            reverse_scored: false,
        },
        Question {
            id: "neuroticism_calm_under_pressure",
            text: "I stay calm under pressure, even when the stakes are high.",
            section: Section::Ocean,
            axis: TraitAxis::Neuroticism,
            reverse_scored: true,
        },
        Question {
            id: "power_distance_top_down",
            text: "Important decisions here should flow top-down from senior leaders.",
            section: Section::Culture,
            axis: TraitAxis::PowerDistance,
            reverse_scored: false,
        },
        Question {
            id: "power_distance_open_challenge",
            text: "Anyone on the team can openly challenge a leader's decision.",
            section: Section::Culture,
            axis: TraitAxis::PowerDistance,
            reverse_scored: true,
        },
        Question {
            id: "collaboration_swarming",
            text: "We regularly pair up or swarm on hard problems rather than working alone.",
            section: Section::Culture,
            axis: TraitAxis::Collaboration,
            reverse_scored: false,
        },
        Question {
            id: "collaboration_silos",
            text: "Most work here happens in silos with little cross-team contact.",
            section: Section::Culture,
            axis: TraitAxis::Collaboration,
            reverse_scored: true,
        },
        Question {
            id: "adaptability_smooth_changes",
            text: "When plans change, the team adjusts quickly and without drama.",
            section: Section::Culture,
            axis: TraitAxis::Adaptability,
            reverse_scored: false,
        },
        Question {
            id: "adaptability_change_resistance",
            text: "Process changes usually meet strong resistance on this team.",
            section: Section::Culture,
            axis: TraitAxis::Adaptability,
            reverse_scored: true,
        },
        Question {
            id: "recognition_work_noticed",
            text: "Good work gets noticed and appreciated here.",
            section: Section::Culture,
            axis: TraitAxis::Recognition,
            reverse_scored: false,
        },
        Question {
            id: "recognition_self_promotion",
            text: "Contributions go unnoticed unless you promote them yourself.",
            section: Section::Culture,
            axis: TraitAxis::Recognition,
            reverse_scored: true,
        },
        Question {
            id: "innovation_time_to_experiment",
            text: "We make time to experiment even when delivery pressure is high.",
            section: Section::Values,
            axis: TraitAxis::Innovation,
            reverse_scored: false,
        },
        Question {
            id: "innovation_safe_choices",
            text: "We usually pick the safe, proven option over a novel one.",
            section: Section::Values,
            axis: TraitAxis::Innovation,
            reverse_scored: true,
        },
        Question {
            id: "integrity_keeps_promises",
            text: "People here do what they say they will do.",
            section: Section::Values,
            axis: TraitAxis::Integrity,
            reverse_scored: false,
        },
        Question {
            id: "integrity_cut_corners",
            text: "Corners get cut when nobody is watching.",
            section: Section::Values,
            axis: TraitAxis::Integrity,
            reverse_scored: true,
        },
        Question {
            id: "customer_focus_first_question",
            text: "Customer impact is the first question we ask when making decisions.",
            section: Section::Values,
            axis: TraitAxis::CustomerFocus,
            reverse_scored: false,
        },
        Question {
            id: "customer_focus_internal_politics",
            text: "Internal politics matter more than customer outcomes here.",
            section: Section::Values,
            axis: TraitAxis::CustomerFocus,
            reverse_scored: true,
        },
        Question {
            id: "growth_encouraged_learning",
            text: "I am encouraged to spend time learning new skills.",
            section: Section::Values,
            axis: TraitAxis::Growth,
            reverse_scored: false,
        },
        Question {
            id: "growth_dead_end",
            text: "My role has little room to grow or develop.",
            section: Section::Values,
            axis: TraitAxis::Growth,
            reverse_scored: true,
        },
    ]
}
