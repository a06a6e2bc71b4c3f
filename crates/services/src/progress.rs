use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use quest_core::catalog;
use quest_core::model::{ProgressRecord, ProgressSummary, QuestId, QuestStatus};
use storage::repository::ProgressRepository;

use crate::error::SaveWarning;

/// Outcome of one progress transition.
///
/// `changed` is false for the idempotent no-op (re-completing a quest);
/// `warning` carries the advisory persistence failure when the
/// write-through save did not stick.
#[derive(Debug)]
pub struct ProgressUpdate {
    pub record: ProgressRecord,
    pub changed: bool,
    pub warning: Option<SaveWarning>,
}

/// Owns the single progress record and persists it on every change.
///
/// The record mutates only through the three transition methods; the
/// write-through save lives here, outside the state machine, so the core
/// model stays testable without a storage dependency.
pub struct ProgressService {
    record: Mutex<ProgressRecord>,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    /// Load the stored record, falling back to the default one.
    ///
    /// A missing record is the normal first-run path. An unreadable or
    /// unparsable record is logged and replaced with the default rather
    /// than failing startup; the old value is overwritten on the next
    /// transition.
    pub async fn load(repo: Arc<dyn ProgressRepository>) -> Self {
        let record = match repo.load_progress().await {
            Ok(Some(record)) => record,
            Ok(None) => ProgressRecord::default(),
            Err(err) => {
                warn!(error = %err, "could not load stored progress; starting fresh");
                ProgressRecord::default()
            }
        };
        Self {
            record: Mutex::new(record),
            repo,
        }
    }

    /// Mark a quest completed and persist the change.
    pub async fn complete_quest(&self, id: QuestId) -> ProgressUpdate {
        let (snapshot, changed) = {
            let mut guard = self.lock();
            let changed = guard.complete_quest(id);
            (guard.clone(), changed)
        };
        self.persist_if_changed(snapshot, changed).await
    }

    /// Count one prompt run and persist the change.
    pub async fn record_prompt_run(&self) -> ProgressUpdate {
        let snapshot = {
            let mut guard = self.lock();
            guard.record_prompt_run();
            guard.clone()
        };
        self.persist_if_changed(snapshot, true).await
    }

    /// Count one submitted use case and persist the change.
    pub async fn record_use_case_submission(&self) -> ProgressUpdate {
        let snapshot = {
            let mut guard = self.lock();
            guard.record_use_case_submission();
            guard.clone()
        };
        self.persist_if_changed(snapshot, true).await
    }

    /// Current record.
    #[must_use]
    pub fn snapshot(&self) -> ProgressRecord {
        self.lock().clone()
    }

    /// Derived display counters.
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.lock().summary()
    }

    /// Per-quest completion and unlock flags for a role+goal pathway,
    /// recomputed from the current record on every call.
    #[must_use]
    pub fn pathway_status(&self, role: &str, goal: &str) -> Vec<QuestStatus> {
        let record = self.snapshot();
        catalog::quests_for(role, goal).status(&record)
    }

    fn lock(&self) -> MutexGuard<'_, ProgressRecord> {
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn persist_if_changed(&self, snapshot: ProgressRecord, changed: bool) -> ProgressUpdate {
        let warning = if changed {
            match self.repo.save_progress(&snapshot).await {
                Ok(()) => None,
                Err(err) => {
                    warn!(error = %err, "progress save failed; in-memory state kept");
                    Some(SaveWarning(err))
                }
            }
        } else {
            None
        };
        ProgressUpdate {
            record: snapshot,
            changed,
            warning,
        }
    }
}
