use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::QuestId;

/// Number of quests in every pathway.
pub const TOTAL_QUESTS: u32 = 3;

/// Highest roadmap phase a record can reach.
pub const MAX_PHASE: u8 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("duplicate quest id in completed list: {0}")]
    DuplicateQuest(QuestId),

    #[error("quest id out of range: {0}")]
    QuestOutOfRange(QuestId),

    #[error("phase {0} exceeds the maximum of {MAX_PHASE}")]
    PhaseOutOfRange(u8),
}

/// The single persisted progress record for one installation.
///
/// Fields are private; the three transition methods below are the only
/// mutation paths. Serialization uses the camelCase key names that the
/// record has always been stored under, so existing saved state loads
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    quests_completed: Vec<QuestId>,
    prompts_run: u32,
    use_cases_submitted: u32,
    current_phase: u8,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            quests_completed: Vec::new(),
            prompts_run: 0,
            use_cases_submitted: 0,
            current_phase: 0,
        }
    }
}

impl ProgressRecord {
    /// Validate a record rehydrated from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the completed list carries duplicates or
    /// out-of-range ids, or if the stored phase exceeds `MAX_PHASE`.
    pub fn validated(self) -> Result<Self, ProgressError> {
        for (idx, id) in self.quests_completed.iter().enumerate() {
            if id.value() < 1 || id.value() > TOTAL_QUESTS {
                return Err(ProgressError::QuestOutOfRange(*id));
            }
            if self.quests_completed[..idx].contains(id) {
                return Err(ProgressError::DuplicateQuest(*id));
            }
        }
        if self.current_phase > MAX_PHASE {
            return Err(ProgressError::PhaseOutOfRange(self.current_phase));
        }
        Ok(self)
    }

    /// Mark a quest completed.
    ///
    /// Idempotent: returns `false` without touching the record when the
    /// quest is already in the completed list. On a new completion the
    /// phase is derived once, at mutation time, from the pre-insert count
    /// plus one; it is never re-scanned from the list afterward.
    pub fn complete_quest(&mut self, id: QuestId) -> bool {
        if self.quests_completed.contains(&id) {
            return false;
        }
        let completed_after = self.quests_completed.len().saturating_add(1);
        let phase = (completed_after / 2).min(usize::from(MAX_PHASE));
        self.quests_completed.push(id);
        self.current_phase = u8::try_from(phase).unwrap_or(MAX_PHASE);
        true
    }

    /// Count one prompt run. Always succeeds, even after all quests are
    /// done.
    pub fn record_prompt_run(&mut self) {
        self.prompts_run = self.prompts_run.saturating_add(1);
    }

    /// Count one submitted use case. Always succeeds.
    pub fn record_use_case_submission(&mut self) {
        self.use_cases_submitted = self.use_cases_submitted.saturating_add(1);
    }

    #[must_use]
    pub fn quests_completed(&self) -> &[QuestId] {
        &self.quests_completed
    }

    #[must_use]
    pub fn is_quest_completed(&self, id: QuestId) -> bool {
        self.quests_completed.contains(&id)
    }

    #[must_use]
    pub fn prompts_run(&self) -> u32 {
        self.prompts_run
    }

    #[must_use]
    pub fn use_cases_submitted(&self) -> u32 {
        self.use_cases_submitted
    }

    #[must_use]
    pub fn current_phase(&self) -> u8 {
        self.current_phase
    }

    /// Rounded percentage of quests completed.
    #[must_use]
    pub fn completion_percent(&self) -> u32 {
        let completed = u32::try_from(self.quests_completed.len()).unwrap_or(TOTAL_QUESTS);
        (completed * 100 + TOTAL_QUESTS / 2) / TOTAL_QUESTS
    }

    /// True once every quest in the pathway is completed.
    ///
    /// Advisory only: it drives a congratulatory display and never blocks
    /// further prompt runs or submissions.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.quests_completed.len() >= TOTAL_QUESTS as usize
    }

    /// Snapshot of the derived display counters.
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            quests_completed: u32::try_from(self.quests_completed.len()).unwrap_or(TOTAL_QUESTS),
            total_quests: TOTAL_QUESTS,
            prompts_run: self.prompts_run,
            use_cases_submitted: self.use_cases_submitted,
            completion_percent: self.completion_percent(),
            complete: self.is_complete(),
            current_phase: self.current_phase,
        }
    }
}

/// Read-only view of the record for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub quests_completed: u32,
    pub total_quests: u32,
    pub prompts_run: u32,
    pub use_cases_submitted: u32,
    pub completion_percent: u32,
    pub complete: bool,
    pub current_phase: u8,
}
