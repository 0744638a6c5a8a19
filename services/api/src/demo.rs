use crate::infra::InMemoryScorecardRepository;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use teampulse::assessments::{
    Answer, AssessmentService, AssessmentSubmission, Band, KeywordInsightFilter, ParticipantId,
    ParticipantReport, QuestionCatalog, ScorecardView, ScoringConfig, Section, SurveyImporter,
    TeamNarrative, TeamReport, TraitAxis, SCALE_MAX, SCALE_MIN,
};
use teampulse::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional survey export CSV to drive the demo instead of sample profiles
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Skip the narrative distillation portion of the demo output
    #[arg(long)]
    pub(crate) skip_narrative: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TeamReportArgs {
    /// Survey export CSV with one row per answered question; scores a
    /// built-in sample team when omitted
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Print each member's banded scorecard alongside the team view
    #[arg(long)]
    pub(crate) list_members: bool,
}

/// Free-form prose a drafting assistant might hand over; the filter keeps
/// only the culture-relevant sentences.
const DEMO_NARRATIVE: &str = "The team communicates well in small groups but rarely across \
     silos. Coffee in the office kitchen runs out by ten. Feedback between design and \
     engineering lands late and lands hard.";

pub(crate) fn run_team_report(args: TeamReportArgs) -> Result<(), AppError> {
    let TeamReportArgs {
        answers_csv,
        list_members,
    } = args;

    let service = build_demo_service();
    let submissions = match answers_csv {
        Some(path) => {
            let imported = SurveyImporter::from_path(path, service.catalog())?;
            println!("Imported {} submissions", imported.len());
            imported
        }
        None => {
            let samples = sample_submissions(service.catalog());
            println!("Scoring the built-in sample team ({} members)", samples.len());
            samples
        }
    };
    if submissions.is_empty() {
        println!("Survey export contained no complete submissions");
        return Ok(());
    }

    let mut roster = Vec::new();
    for submission in submissions {
        let participant_id = submission.participant_id.clone();
        match service.submit(submission) {
            Ok(record) => {
                if list_members {
                    render_scorecard(&service.scorecard_view(&record));
                }
                roster.push(ParticipantId(participant_id));
            }
            Err(err) => println!("- {} rejected: {}", participant_id, err),
        }
    }

    let report = match service.team_report(&roster, None) {
        Ok(report) => report,
        Err(err) => {
            println!("Team report unavailable: {}", err);
            return Ok(());
        }
    };
    render_team_report(&report, roster.len());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answers_csv,
        skip_narrative,
    } = args;

    println!(
        "Team assessment demo (run {})",
        Local::now().format("%Y-%m-%d")
    );
    let service = build_demo_service();

    let submissions = match answers_csv {
        Some(path) => {
            let imported = SurveyImporter::from_path(path, service.catalog())?;
            println!("Data source: survey export ({} submissions)", imported.len());
            imported
        }
        None => {
            println!("Data source: sample profiles (no survey export provided)");
            sample_submissions(service.catalog())
        }
    };

    let mut roster = Vec::new();
    println!("\nIntake");
    for submission in submissions {
        let participant_id = submission.participant_id.clone();
        match service.submit(submission) {
            Ok(record) => {
                let view = service.scorecard_view(&record);
                let higher = band_count(&view, Band::Higher);
                let lower = band_count(&view, Band::Lower);
                println!(
                    "- {} -> {} ({} axes higher / {} lower)",
                    participant_id, record.submission_id.0, higher, lower
                );
                roster.push(ParticipantId(participant_id));
            }
            Err(err) => println!("- {} rejected: {}", participant_id, err),
        }
    }

    if let Some(first) = roster.first() {
        match service.participant_report(first) {
            Ok(report) => render_participant_report(&report),
            Err(err) => println!("Participant report unavailable: {}", err),
        }
    }

    let narrative = if skip_narrative {
        None
    } else {
        Some(TeamNarrative {
            section: Section::Culture,
            text: DEMO_NARRATIVE.to_string(),
        })
    };

    match service.team_report(&roster, narrative) {
        Ok(report) => render_team_report(&report, roster.len()),
        Err(err) => println!("Team report unavailable: {}", err),
    }

    Ok(())
}

fn build_demo_service() -> AssessmentService<InMemoryScorecardRepository, KeywordInsightFilter> {
    let repository = Arc::new(InMemoryScorecardRepository::default());
    let narrative_filter = Arc::new(KeywordInsightFilter::default());
    AssessmentService::new(repository, narrative_filter, ScoringConfig::default())
}

fn band_count(view: &ScorecardView, band: Band) -> usize {
    view.sections
        .iter()
        .flat_map(|section| section.traits.iter())
        .filter(|entry| entry.band == band)
        .count()
}

/// Deterministic sample roster so the demo renders varied bands, insights,
/// and recommendations without a survey export.
fn sample_submissions(catalog: &QuestionCatalog) -> Vec<AssessmentSubmission> {
    vec![
        profile_submission(catalog, "maya.chen", |axis| match axis {
            TraitAxis::Openness | TraitAxis::Extraversion | TraitAxis::Innovation => 7,
            TraitAxis::Neuroticism | TraitAxis::PowerDistance => 2,
            TraitAxis::Conscientiousness => 4,
            _ => 6,
        }),
        profile_submission(catalog, "jonas.weber", |axis| match axis {
            TraitAxis::Conscientiousness | TraitAxis::Integrity => 7,
            TraitAxis::Openness
            | TraitAxis::Extraversion
            | TraitAxis::Adaptability
            | TraitAxis::Innovation => 3,
            TraitAxis::Neuroticism => 2,
            _ => 5,
        }),
        profile_submission(catalog, "priya.nair", |axis| match axis {
            TraitAxis::Neuroticism => 6,
            TraitAxis::Extraversion
            | TraitAxis::Adaptability
            | TraitAxis::Recognition
            | TraitAxis::Growth => 2,
            TraitAxis::Agreeableness | TraitAxis::Collaboration => 3,
            _ => 4,
        }),
    ]
}

fn profile_submission(
    catalog: &QuestionCatalog,
    participant: &str,
    level_for: impl Fn(TraitAxis) -> u8,
) -> AssessmentSubmission {
    let answers = catalog
        .questions()
        .iter()
        .map(|question| {
            let level = level_for(question.axis);
            Answer {
                question_id: question.id.to_string(),
                value: if question.reverse_scored {
                    SCALE_MIN + SCALE_MAX - level
                } else {
                    level
                },
            }
        })
        .collect();

    AssessmentSubmission {
        participant_id: participant.to_string(),
        answers,
        completed_at: None,
    }
}

fn render_scorecard(view: &ScorecardView) {
    println!(
        "\nScorecard {} ({})",
        view.participant_id.0, view.submission_id.0
    );
    for section in &view.sections {
        println!("{}", section.section_label);
        for entry in &section.traits {
            println!("- {}: {} ({})", entry.axis_label, entry.score, entry.band_label);
        }
    }
    if !view.low_coverage_axes.is_empty() {
        println!("Thin coverage:");
        for axis in &view.low_coverage_axes {
            println!("- {}", axis.label());
        }
    }
}

fn render_participant_report(report: &ParticipantReport) {
    println!("\nParticipant report: {}", report.participant_id.0);
    println!(
        "Completed: {}",
        report.completed_at.format("%Y-%m-%d %H:%M UTC")
    );

    for section in &report.sections {
        println!("\n{}", section.section_label);
        for entry in &section.traits {
            println!("- {}: {} ({})", entry.axis_label, entry.score, entry.band_label);
        }
    }

    if !report.low_coverage_axes.is_empty() {
        println!("\nThin coverage:");
        for axis in &report.low_coverage_axes {
            println!("- {}", axis.label());
        }
    }

    if report.insights.is_empty() {
        println!("\nInsights: none (balanced profile)");
    } else {
        println!("\nInsights");
        for insight in &report.insights {
            println!("- {}", insight);
        }
    }

    if report.recommendations.is_empty() {
        println!("\nRecommended actions: none");
    } else {
        println!("\nRecommended actions");
        for recommendation in &report.recommendations {
            println!(
                "- [{}] {}: {}",
                recommendation.priority_label, recommendation.title, recommendation.description
            );
        }
    }
}

fn render_team_report(report: &TeamReport, roster_size: usize) {
    println!("\nTeam report");
    println!(
        "Valid submissions: {}/{}",
        report.valid_submissions, roster_size
    );

    for section in &report.sections {
        println!("\n{}", section.section_label);
        for entry in &section.traits {
            println!("- {}: {} ({})", entry.axis_label, entry.score, entry.band_label);
        }
    }

    if report.insights.is_empty() {
        println!("\nInsights: none (balanced team profile)");
    } else {
        println!("\nInsights");
        for insight in &report.insights {
            println!("- {}", insight);
        }
    }

    if report.recommendations.is_empty() {
        println!("\nRecommended actions: none");
    } else {
        println!("\nRecommended actions");
        for recommendation in &report.recommendations {
            println!(
                "- [{}] {}: {}",
                recommendation.priority_label, recommendation.title, recommendation.description
            );
        }
    }

    if report.narrative_highlights.is_empty() {
        println!("\nNarrative highlights: none");
    } else {
        println!("\nNarrative highlights");
        for highlight in &report.narrative_highlights {
            println!("- {}", highlight);
        }
    }
}
