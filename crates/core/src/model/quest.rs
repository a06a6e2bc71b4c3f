use crate::model::{ProgressRecord, QuestId};

/// The three kinds of quest every pathway contains, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    Learn,
    Try,
    Share,
}

impl QuestKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestKind::Learn => "learn",
            QuestKind::Try => "try",
            QuestKind::Share => "share",
        }
    }
}

/// External reference attached to a `Learn` quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    pub kind: String,
}

/// One step in a pathway. Generated fresh from the user's role and goal;
/// only the completion state persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    id: QuestId,
    kind: QuestKind,
    title: String,
    description: String,
    action: String,
    resource: Option<LearningResource>,
}

impl Quest {
    #[must_use]
    pub fn new(
        id: QuestId,
        kind: QuestKind,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
        resource: Option<LearningResource>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            action: action.into(),
            resource,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn resource(&self) -> Option<&LearningResource> {
        self.resource.as_ref()
    }
}

/// Completion and unlock flags for one quest, derived on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestStatus {
    pub id: QuestId,
    pub kind: QuestKind,
    pub completed: bool,
    pub unlocked: bool,
}

/// The ordered three-quest sequence for one role+goal selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pathway {
    quests: Vec<Quest>,
}

impl Pathway {
    #[must_use]
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Derive per-quest completion and unlock flags from the record.
    ///
    /// The unlock rule is positional, not id-based: the first quest is
    /// always unlocked, and every later quest unlocks once the quest
    /// directly before it is completed. This is recomputed from the
    /// current record on every call and never stored.
    #[must_use]
    pub fn status(&self, record: &ProgressRecord) -> Vec<QuestStatus> {
        self.quests
            .iter()
            .enumerate()
            .map(|(idx, quest)| {
                let unlocked = idx == 0
                    || record.is_quest_completed(self.quests[idx - 1].id());
                QuestStatus {
                    id: quest.id(),
                    kind: quest.kind(),
                    completed: record.is_quest_completed(quest.id()),
                    unlocked,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pathway() -> Pathway {
        Pathway::new(vec![
            Quest::new(QuestId::new(1), QuestKind::Learn, "L", "d", "a", None),
            Quest::new(QuestId::new(2), QuestKind::Try, "T", "d", "a", None),
            Quest::new(QuestId::new(3), QuestKind::Share, "S", "d", "a", None),
        ])
    }

    #[test]
    fn only_first_quest_unlocked_with_no_completions() {
        let statuses = pathway().status(&ProgressRecord::default());
        assert_eq!(
            statuses.iter().map(|s| s.unlocked).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert!(statuses.iter().all(|s| !s.completed));
    }

    #[test]
    fn completing_the_first_quest_unlocks_the_second() {
        let mut record = ProgressRecord::default();
        record.complete_quest(QuestId::new(1));
        let statuses = pathway().status(&record);
        assert_eq!(
            statuses.iter().map(|s| s.unlocked).collect::<Vec<_>>(),
            vec![true, true, false]
        );
    }

    #[test]
    fn completing_the_first_two_unlocks_all() {
        let mut record = ProgressRecord::default();
        record.complete_quest(QuestId::new(1));
        record.complete_quest(QuestId::new(2));
        let statuses = pathway().status(&record);
        assert!(statuses.iter().all(|s| s.unlocked));
    }

    #[test]
    fn unlock_is_positional_not_id_based() {
        // Completing quest 2 out of band does not unlock quest 2's slot;
        // only the quest before a position matters.
        let mut record = ProgressRecord::default();
        record.complete_quest(QuestId::new(2));
        let statuses = pathway().status(&record);
        assert_eq!(
            statuses.iter().map(|s| s.unlocked).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }
}
