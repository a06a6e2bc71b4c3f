//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `TextGenClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGenError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("text generation failed: {message}")]
    Upstream { message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("malformed response from text generation API: {0}")]
    MalformedResponse(String),
}

/// Errors emitted while configuring `TextGenClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGenConfigError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

/// Errors emitted by `CredentialService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialError {
    #[error("credential cannot be empty")]
    Empty,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PlaygroundService::run_prompt`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaygroundError {
    #[error(transparent)]
    TextGen(#[from] TextGenError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Advisory notice that a write-through save failed.
///
/// The in-memory mutation always survives; this rides along on the
/// mutation outcome so a front end can warn that progress may not stick
/// across restarts.
#[derive(Debug, Error)]
#[error("progress could not be persisted: {0}")]
pub struct SaveWarning(#[source] pub StorageError);

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    TextGenConfig(#[from] TextGenConfigError),
}
