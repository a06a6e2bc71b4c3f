mod ids;
mod phase;
mod progress;
mod quest;
mod selection;
mod use_case;

pub use ids::{ParseIdError, QuestId, UseCaseId};
pub use phase::{ROADMAP_PHASES, RoadmapPhase, roadmap_phase};
pub use progress::{
    MAX_PHASE, ProgressError, ProgressRecord, ProgressSummary, TOTAL_QUESTS,
};
pub use quest::{LearningResource, Pathway, Quest, QuestKind, QuestStatus};
pub use selection::{GOAL_OPTIONS, ROLE_OPTIONS, SelectionOption, UserSelection};
pub use use_case::{UseCase, UseCaseDraft, UseCaseDraftError};
