use serde::{Deserialize, Serialize};

use super::domain::{ParticipantId, SubmissionId, TraitScores};
use super::scoring::Scorecard;

/// Repository record pairing a stored scorecard with its submission id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRecord {
    pub submission_id: SubmissionId,
    pub scorecard: Scorecard,
}

impl ScorecardRecord {
    pub fn scores(&self) -> &TraitScores {
        &self.scorecard.scores
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Participants may submit more than once; `latest_for_participant` resolves
/// by `completed_at`, not by insertion order.
pub trait ScorecardRepository: Send + Sync {
    fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError>;
    fn latest_for_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Option<ScorecardRecord>, RepositoryError>;

    /// Latest record per roster entry, preserving roster order. Members who
    /// never submitted come back as `None` rather than an error.
    fn latest_for_participants(
        &self,
        participant_ids: &[ParticipantId],
    ) -> Result<Vec<Option<ScorecardRecord>>, RepositoryError> {
        participant_ids
            .iter()
            .map(|participant_id| self.latest_for_participant(participant_id))
            .collect()
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
