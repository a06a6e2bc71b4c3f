#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    CredentialRepository, InMemoryStore, ProgressRepository, Storage, StorageError,
    CREDENTIAL_KEY, PROGRESS_KEY,
};
pub use sqlite::{SqliteInitError, SqliteStore};
