use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use teampulse::assessments::{
    BandThresholds, ParticipantId, RepositoryError, ScorecardRecord, ScorecardRepository,
    ScoringConfig,
};
use teampulse::config::ScoringSettings;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps every accepted scorecard so re-submissions coexist with history;
/// reads always resolve to the most recently completed one.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScorecardRepository {
    records: Arc<Mutex<HashMap<ParticipantId, Vec<ScorecardRecord>>>>,
}

impl ScorecardRepository for InMemoryScorecardRepository {
    fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .values()
            .flatten()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard
            .entry(record.scorecard.participant_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn latest_for_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Option<ScorecardRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(participant_id)
            .and_then(|records| {
                records
                    .iter()
                    .max_by_key(|record| record.scorecard.completed_at)
            })
            .cloned())
    }
}

pub(crate) fn scoring_config(settings: &ScoringSettings) -> ScoringConfig {
    ScoringConfig {
        band_thresholds: BandThresholds {
            lower_below: settings.lower_band_below,
            higher_above: settings.higher_band_above,
        },
        ..ScoringConfig::default()
    }
}
