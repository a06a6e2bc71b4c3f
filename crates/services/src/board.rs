use std::sync::{Mutex, MutexGuard};

use quest_core::catalog::seed_use_cases;
use quest_core::model::{UseCase, UseCaseDraft, UseCaseId};
use quest_core::Clock;

/// Author label stamped on every session submission.
const SUBMISSION_AUTHOR: &str = "You";

/// The single tag stamped on every session submission.
const SUBMISSION_TAG: &str = "new submission";

/// Tag filter for board listings. `parse("all")` maps the wire string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            TagFilter::All
        } else {
            TagFilter::Tag(raw.to_string())
        }
    }
}

struct BoardState {
    /// Session submissions, most recent first.
    submitted: Vec<UseCase>,
    last_id: i64,
}

/// The in-memory use case board: fixed seed entries plus submissions made
/// this session. Submissions reset on restart; only the submission
/// counter on the progress record persists.
pub struct UseCaseBoard {
    seeds: Vec<UseCase>,
    state: Mutex<BoardState>,
    clock: Clock,
}

impl UseCaseBoard {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let seeds = seed_use_cases();
        let last_id = seeds.iter().map(|uc| uc.id().value()).max().unwrap_or(0);
        Self {
            seeds,
            state: Mutex::new(BoardState {
                submitted: Vec::new(),
                last_id,
            }),
            clock,
        }
    }

    /// Entries matching the filter: seeds in fixed order, then session
    /// submissions newest-first, relative order preserved.
    #[must_use]
    pub fn list(&self, filter: &TagFilter) -> Vec<UseCase> {
        let guard = self.lock();
        self.seeds
            .iter()
            .chain(guard.submitted.iter())
            .filter(|uc| match filter {
                TagFilter::All => true,
                TagFilter::Tag(tag) => uc.has_tag(tag),
            })
            .cloned()
            .collect()
    }

    /// Distinct tags across the current board, first-seen order. Drives
    /// the filter buttons.
    #[must_use]
    pub fn available_tags(&self) -> Vec<String> {
        let guard = self.lock();
        let mut tags: Vec<String> = Vec::new();
        for uc in self.seeds.iter().chain(guard.submitted.iter()) {
            for tag in uc.tags() {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Add a submission to the front of the session list.
    ///
    /// The id is time-derived (milliseconds) and bumped past the last
    /// assigned id, so it never collides with the seed ids or an earlier
    /// submission even under a fixed test clock. The caller is expected
    /// to record the submission on the progress record; the board does
    /// not touch progress itself, and it accepts the draft as-is (field
    /// validation happens at the form boundary).
    pub fn submit(&self, draft: UseCaseDraft) -> UseCase {
        let mut guard = self.lock();
        let mut id = self.clock.now().timestamp_millis();
        if id <= guard.last_id {
            id = guard.last_id + 1;
        }
        guard.last_id = id;

        let use_case = UseCase::new(
            UseCaseId::new(id),
            draft.title,
            draft.description,
            draft.team,
            draft.impact,
            SUBMISSION_AUTHOR,
            vec![SUBMISSION_TAG.to_string()],
        );
        guard.submitted.insert(0, use_case.clone());
        use_case
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::time::fixed_now;

    fn draft(title: &str) -> UseCaseDraft {
        UseCaseDraft {
            title: title.to_string(),
            team: "IT".to_string(),
            description: "desc".to_string(),
            impact: "impact".to_string(),
        }
    }

    #[test]
    fn all_filter_returns_seeds_plus_submissions() {
        let board = UseCaseBoard::new(Clock::fixed(fixed_now()));
        assert_eq!(board.list(&TagFilter::All).len(), 5);

        board.submit(draft("First"));
        board.submit(draft("Second"));
        let all = board.list(&TagFilter::All);
        assert_eq!(all.len(), 7);
        // Seeds keep their fixed order up front; submissions follow,
        // newest first.
        assert_eq!(all[0].id().value(), 1);
        assert_eq!(all[5].title(), "Second");
        assert_eq!(all[6].title(), "First");
    }

    #[test]
    fn tag_filter_returns_only_matching_entries() {
        let board = UseCaseBoard::new(Clock::fixed(fixed_now()));
        let writing = board.list(&TagFilter::parse("writing"));
        let all = board.list(&TagFilter::All);
        assert!(writing.len() <= all.len());
        assert!(!writing.is_empty());
        assert!(writing.iter().all(|uc| uc.has_tag("writing")));
    }

    #[test]
    fn submissions_get_the_fixed_author_and_tag() {
        let board = UseCaseBoard::new(Clock::fixed(fixed_now()));
        let submitted = board.submit(draft("Mine"));
        assert_eq!(submitted.author(), "You");
        assert_eq!(submitted.tags(), ["new submission"]);

        let filtered = board.list(&TagFilter::parse("new submission"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Mine");
    }

    #[test]
    fn ids_never_collide_even_with_a_fixed_clock() {
        let board = UseCaseBoard::new(Clock::fixed(fixed_now()));
        let first = board.submit(draft("a"));
        let second = board.submit(draft("b"));
        let third = board.submit(draft("c"));

        assert_ne!(first.id(), second.id());
        assert_ne!(second.id(), third.id());
        assert!(first.id().value() > 5);
        assert!(second.id().value() > first.id().value());
    }

    #[test]
    fn available_tags_are_distinct_in_first_seen_order() {
        let board = UseCaseBoard::new(Clock::fixed(fixed_now()));
        let tags = board.available_tags();
        assert_eq!(tags[0], "automation");
        assert_eq!(tags[1], "writing");
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags.len(), deduped.len());
        assert!(!tags.contains(&"new submission".to_string()));

        board.submit(draft("Mine"));
        assert!(board
            .available_tags()
            .contains(&"new submission".to_string()));
    }
}
