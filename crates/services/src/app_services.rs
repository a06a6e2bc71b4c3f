use std::sync::Arc;

use quest_core::model::{UseCase, UseCaseDraft};
use storage::repository::Storage;

use crate::board::UseCaseBoard;
use crate::credentials::CredentialService;
use crate::error::AppServicesError;
use crate::playground::{PlaygroundService, TipSelector};
use crate::progress::{ProgressService, ProgressUpdate};
use crate::text_gen::{TextGenClient, TextGenConfig};
use crate::Clock;

/// Assembles the app-facing services over one storage backend.
///
/// This is the single place where the persistence observer is wired up:
/// `ProgressService` is constructed over the progress repository once, at
/// process start, and every later transition writes through it.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    credentials: Arc<CredentialService>,
    playground: Arc<PlaygroundService>,
    board: Arc<UseCaseBoard>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: TextGenConfig,
        tips: TipSelector,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::with_storage(&storage, clock, config, tips).await)
    }

    /// Build services over in-memory storage, for tests and prototyping.
    pub async fn in_memory(clock: Clock, config: TextGenConfig, tips: TipSelector) -> Self {
        let storage = Storage::in_memory();
        Self::with_storage(&storage, clock, config, tips).await
    }

    /// Build services over an already-assembled storage backend.
    pub async fn with_storage(
        storage: &Storage,
        clock: Clock,
        config: TextGenConfig,
        tips: TipSelector,
    ) -> Self {
        let progress = Arc::new(ProgressService::load(Arc::clone(&storage.progress)).await);
        let credentials = Arc::new(CredentialService::new(Arc::clone(&storage.credentials)));
        let playground = Arc::new(PlaygroundService::new(
            TextGenClient::new(config),
            Arc::clone(&credentials),
            Arc::clone(&progress),
            tips,
        ));
        let board = Arc::new(UseCaseBoard::new(clock));

        Self {
            progress,
            credentials,
            playground,
            board,
        }
    }

    /// Put a draft on the board and count it on the progress record.
    ///
    /// The board itself never touches progress; this is the composition
    /// point that keeps the two in step.
    pub async fn submit_use_case(&self, draft: UseCaseDraft) -> (UseCase, ProgressUpdate) {
        let use_case = self.board.submit(draft);
        let update = self.progress.record_use_case_submission().await;
        (use_case, update)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn credentials(&self) -> Arc<CredentialService> {
        Arc::clone(&self.credentials)
    }

    #[must_use]
    pub fn playground(&self) -> Arc<PlaygroundService> {
        Arc::clone(&self.playground)
    }

    #[must_use]
    pub fn board(&self) -> Arc<UseCaseBoard> {
        Arc::clone(&self.board)
    }
}
