mod normalizer;
mod parser;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AssessmentSubmission, SCALE_MAX, SCALE_MIN};
use super::intake::SubmissionViolation;
use normalizer::normalize_label;

#[derive(Debug)]
pub enum SurveyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Submission(SubmissionViolation),
}

impl std::fmt::Display for SurveyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyImportError::Io(err) => write!(f, "failed to read survey export: {}", err),
            SurveyImportError::Csv(err) => write!(f, "invalid survey CSV data: {}", err),
            SurveyImportError::Submission(err) => {
                write!(f, "survey export contains an invalid submission: {}", err)
            }
        }
    }
}

impl std::error::Error for SurveyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyImportError::Io(err) => Some(err),
            SurveyImportError::Csv(err) => Some(err),
            SurveyImportError::Submission(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SurveyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SurveyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<SubmissionViolation> for SurveyImportError {
    fn from(err: SubmissionViolation) -> Self {
        Self::Submission(err)
    }
}

/// Reads long-format survey exports (one row per answered question) and
/// groups them into one submission per participant.
pub struct SurveyImporter;

#[derive(Default)]
struct ParticipantRows {
    answers: Vec<Answer>,
    answered: HashSet<&'static str>,
    submitted_at: Option<DateTime<Utc>>,
}

impl SurveyImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<Vec<AssessmentSubmission>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<Vec<AssessmentSubmission>, SurveyImportError> {
        let questions = question_lookup(catalog);
        let mut participants: BTreeMap<String, ParticipantRows> = BTreeMap::new();

        for record in parser::parse_records(reader)? {
            if record.participant.is_empty() {
                continue;
            }

            let question_id = match questions.get(record.normalized_question.as_str()) {
                Some(question_id) => *question_id,
                None => continue,
            };

            if record.value < SCALE_MIN || record.value > SCALE_MAX {
                return Err(SubmissionViolation::ValueOutOfRange {
                    question_id: question_id.to_string(),
                    value: record.value,
                }
                .into());
            }

            let entry = participants.entry(record.participant).or_default();
            if !entry.answered.insert(question_id) {
                continue;
            }

            entry.answers.push(Answer {
                question_id: question_id.to_string(),
                value: record.value,
            });

            if let Some(submitted) = record.submitted_at {
                entry.submitted_at = Some(match entry.submitted_at {
                    Some(existing) if existing >= submitted => existing,
                    _ => submitted,
                });
            }
        }

        Ok(participants
            .into_iter()
            .map(|(participant_id, rows)| AssessmentSubmission {
                participant_id,
                answers: rows.answers,
                completed_at: rows.submitted_at,
            })
            .collect())
    }
}

/// Survey tools export either our question ids or the full question text;
/// accept both, normalized.
fn question_lookup(catalog: &QuestionCatalog) -> HashMap<String, &'static str> {
    let mut lookup = HashMap::with_capacity(catalog.questions().len() * 2);
    for question in catalog.questions() {
        lookup.insert(normalize_label(question.id), question.id);
        lookup.insert(normalize_label(question.text), question.id);
    }
    lookup
}
