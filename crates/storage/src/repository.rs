use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quest_core::model::ProgressRecord;

/// Key the serialized progress record is stored under.
///
/// The name predates this codebase; saved state from earlier builds keeps
/// loading as long as it never changes.
pub const PROGRESS_KEY: &str = "aiLearningProgress";

/// Key the plaintext API credential is stored under, independent of the
/// progress record.
pub const CREDENTIAL_KEY: &str = "openai_api_key";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Serialize a progress record to the stored JSON shape.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(record: &ProgressRecord) -> Result<String, StorageError> {
    serde_json::to_string(record).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode and validate a stored progress record.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the value does not parse or
/// fails record validation.
pub fn decode_progress(value: &str) -> Result<ProgressRecord, StorageError> {
    let record: ProgressRecord =
        serde_json::from_str(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
    record
        .validated()
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Repository contract for the single persisted progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for an unparsable stored
    /// value, or other storage errors. A missing entry is `Ok(None)`, not
    /// an error.
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Write the record under the fixed key, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Repository contract for the API credential.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Load the stored credential, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures; a missing credential is
    /// `Ok(None)`.
    async fn load_credential(&self) -> Result<Option<String>, StorageError>;

    /// Store the credential, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the credential cannot be stored.
    async fn save_credential(&self, credential: &str) -> Result<(), StorageError>;

    /// Remove the stored credential. Removing an absent credential is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn clear_credential(&self) -> Result<(), StorageError>;
}

/// Simple in-memory key-value store for testing and prototyping.
///
/// Holds the same serialized strings the SQLite backend stores, so
/// round-trips exercise the real codec.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a raw value under a key, bypassing the codec. Test helper for
    /// exercising unparsable stored state.
    pub fn put_raw(&self, key: &str, value: &str) {
        let mut guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryStore {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        match self.get(PROGRESS_KEY)? {
            Some(value) => decode_progress(&value).map(Some),
            None => Ok(None),
        }
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let value = encode_progress(record)?;
        self.put(PROGRESS_KEY, value)
    }
}

#[async_trait]
impl CredentialRepository for InMemoryStore {
    async fn load_credential(&self) -> Result<Option<String>, StorageError> {
        self.get(CREDENTIAL_KEY)
    }

    async fn save_credential(&self, credential: &str) -> Result<(), StorageError> {
        self.put(CREDENTIAL_KEY, credential.to_string())
    }

    async fn clear_credential(&self) -> Result<(), StorageError> {
        self.remove(CREDENTIAL_KEY)
    }
}

/// Aggregates the repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub credentials: Arc<dyn CredentialRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(store.clone());
        let credentials: Arc<dyn CredentialRepository> = Arc::new(store);
        Self {
            progress,
            credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::QuestId;

    #[tokio::test]
    async fn missing_progress_loads_as_none() {
        let store = InMemoryStore::new();
        assert!(store.load_progress().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn progress_round_trips_through_the_json_codec() {
        let store = InMemoryStore::new();
        let mut record = ProgressRecord::default();
        record.complete_quest(QuestId::new(1));
        record.complete_quest(QuestId::new(2));
        record.record_prompt_run();

        store.save_progress(&record).await.unwrap();
        let loaded = store.load_progress().await.unwrap().unwrap();
        assert_eq!(loaded, record);

        // Saving the loaded record again reproduces the identical value.
        store.save_progress(&loaded).await.unwrap();
        assert_eq!(store.load_progress().await.unwrap().unwrap(), record);
    }

    #[tokio::test]
    async fn unparsable_progress_is_a_serialization_error() {
        let store = InMemoryStore::new();
        store.put_raw(PROGRESS_KEY, "not json at all");
        let err = store.load_progress().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn stored_duplicates_fail_validation() {
        let store = InMemoryStore::new();
        store.put_raw(
            PROGRESS_KEY,
            r#"{"questsCompleted":[1,1],"promptsRun":0,"useCasesSubmitted":0,"currentPhase":0}"#,
        );
        let err = store.load_progress().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn credential_saves_loads_and_clears() {
        let store = InMemoryStore::new();
        assert!(store.load_credential().await.unwrap().is_none());

        store.save_credential("sk-test-123").await.unwrap();
        assert_eq!(
            store.load_credential().await.unwrap().as_deref(),
            Some("sk-test-123")
        );

        store.clear_credential().await.unwrap();
        assert!(store.load_credential().await.unwrap().is_none());
        // Clearing twice is fine.
        store.clear_credential().await.unwrap();
    }

    #[tokio::test]
    async fn credential_and_progress_use_separate_keys() {
        let store = InMemoryStore::new();
        store.save_credential("sk-abc").await.unwrap();
        assert!(store.load_progress().await.unwrap().is_none());

        store
            .save_progress(&ProgressRecord::default())
            .await
            .unwrap();
        assert_eq!(
            store.load_credential().await.unwrap().as_deref(),
            Some("sk-abc")
        );
    }
}
