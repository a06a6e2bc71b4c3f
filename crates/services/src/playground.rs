use std::fmt;
use std::sync::Arc;

use rand::seq::IndexedRandom;

use quest_core::catalog;
use quest_core::model::UserSelection;

use crate::credentials::CredentialService;
use crate::error::{PlaygroundError, TextGenError};
use crate::progress::{ProgressService, ProgressUpdate};
use crate::text_gen::TextGenClient;

/// Advisory tips shown after a response comes back.
pub const TIPS: [&str; 5] = [
    "Try being more specific about what you need",
    "Add context about your specific situation",
    "Ask for examples or step-by-step guidance",
    "Request the output in a specific format (bullet points, email, etc.)",
    "Include any constraints or requirements",
];

/// Picks an advisory tip. `Random` is the production behavior; `Fixed`
/// lets tests pin the choice.
#[derive(Debug, Clone, Copy)]
pub enum TipSelector {
    Random,
    Fixed(usize),
}

impl TipSelector {
    #[must_use]
    pub fn pick(&self) -> &'static str {
        match self {
            TipSelector::Random => TIPS
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(TIPS[0]),
            TipSelector::Fixed(idx) => TIPS[idx % TIPS.len()],
        }
    }
}

/// Identifier for one prompt request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displayable outcome of a prompt request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Generated(String),
    Failed(String),
}

/// In-flight bookkeeping for the prompt playground.
///
/// At most one outcome is displayed at a time and the latest request
/// wins: issuing a new request supersedes any in-flight one (without
/// aborting it), and a completion for a superseded request is dropped.
#[derive(Debug, Default)]
pub struct PromptSession {
    next_id: u64,
    in_flight: Option<RequestId>,
    latest: Option<RequestId>,
    outcome: Option<PromptOutcome>,
}

impl PromptSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id and mark it the latest. Any prior in-flight
    /// request keeps running but can no longer resolve.
    pub fn begin(&mut self) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.in_flight = Some(id);
        self.latest = Some(id);
        id
    }

    /// True while the latest request has not resolved. Drives disabling
    /// of re-submission in a front end.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record the outcome for a request. Returns false, leaving the
    /// displayed outcome untouched, when the request was superseded.
    pub fn resolve(&mut self, id: RequestId, outcome: PromptOutcome) -> bool {
        if self.latest != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(outcome);
        true
    }

    /// The outcome currently on display, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<&PromptOutcome> {
        self.outcome.as_ref()
    }
}

/// Outcome of a successful prompt run: the generated text plus the
/// progress update that recorded it.
#[derive(Debug)]
pub struct PromptRunOutcome {
    pub response: String,
    pub progress: ProgressUpdate,
}

/// Wires the credential cache, the text-generation client, and the
/// progress record together for the playground.
pub struct PlaygroundService {
    client: TextGenClient,
    credentials: Arc<CredentialService>,
    progress: Arc<ProgressService>,
    tips: TipSelector,
}

impl PlaygroundService {
    #[must_use]
    pub fn new(
        client: TextGenClient,
        credentials: Arc<CredentialService>,
        progress: Arc<ProgressService>,
        tips: TipSelector,
    ) -> Self {
        Self {
            client,
            credentials,
            progress,
            tips,
        }
    }

    /// Suggested prompt for the user's selection, shown when the
    /// playground opens.
    #[must_use]
    pub fn initial_prompt(&self, selection: &UserSelection) -> &'static str {
        catalog::starter_prompt(selection.role(), selection.goal())
    }

    /// An advisory tip to show beside a response.
    #[must_use]
    pub fn tip(&self) -> &'static str {
        self.tips.pick()
    }

    /// Run one prompt against the external API.
    ///
    /// The prompt run is counted on the progress record only when the
    /// request succeeds; every failure path leaves the counter untouched.
    ///
    /// # Errors
    ///
    /// Returns `PlaygroundError::TextGen` with `MissingCredential` when no
    /// credential is configured, or any other `TextGenError` from the
    /// client; `PlaygroundError::Credential` if the credential store is
    /// unreadable.
    pub async fn run_prompt(&self, prompt: &str) -> Result<PromptRunOutcome, PlaygroundError> {
        let credential = self
            .credentials
            .current()
            .await?
            .ok_or(TextGenError::MissingCredential)
            .map_err(PlaygroundError::TextGen)?;

        let response = self.client.run(prompt, &credential).await?;
        let progress = self.progress.record_prompt_run().await;

        Ok(PromptRunOutcome { response, progress })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_selector_is_deterministic() {
        let selector = TipSelector::Fixed(2);
        assert_eq!(selector.pick(), TIPS[2]);
        assert_eq!(selector.pick(), TIPS[2]);
        // Out-of-range indexes wrap instead of panicking.
        assert_eq!(TipSelector::Fixed(7).pick(), TIPS[2]);
    }

    #[test]
    fn random_selector_picks_a_known_tip() {
        for _ in 0..20 {
            assert!(TIPS.contains(&TipSelector::Random.pick()));
        }
    }

    #[test]
    fn session_starts_idle() {
        let session = PromptSession::new();
        assert!(!session.is_busy());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn resolving_the_latest_request_displays_its_outcome() {
        let mut session = PromptSession::new();
        let id = session.begin();
        assert!(session.is_busy());

        assert!(session.resolve(id, PromptOutcome::Generated("hi".into())));
        assert!(!session.is_busy());
        assert_eq!(
            session.outcome(),
            Some(&PromptOutcome::Generated("hi".into()))
        );
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut session = PromptSession::new();
        let first = session.begin();
        let second = session.begin();

        // The superseded request completes late; its outcome is ignored.
        assert!(!session.resolve(first, PromptOutcome::Generated("stale".into())));
        assert!(session.is_busy());
        assert!(session.outcome().is_none());

        assert!(session.resolve(second, PromptOutcome::Generated("fresh".into())));
        assert_eq!(
            session.outcome(),
            Some(&PromptOutcome::Generated("fresh".into()))
        );
    }

    #[test]
    fn stale_response_after_resolution_keeps_the_latest_outcome() {
        let mut session = PromptSession::new();
        let first = session.begin();
        let second = session.begin();
        session.resolve(second, PromptOutcome::Generated("fresh".into()));

        assert!(!session.resolve(first, PromptOutcome::Failed("late error".into())));
        assert_eq!(
            session.outcome(),
            Some(&PromptOutcome::Generated("fresh".into()))
        );
    }
}
