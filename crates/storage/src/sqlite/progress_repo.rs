use async_trait::async_trait;

use quest_core::model::ProgressRecord;

use crate::repository::{
    decode_progress, encode_progress, ProgressRepository, StorageError, PROGRESS_KEY,
};

use super::SqliteStore;

#[async_trait]
impl ProgressRepository for SqliteStore {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        match self.get_value(PROGRESS_KEY).await? {
            Some(value) => decode_progress(&value).map(Some),
            None => Ok(None),
        }
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let value = encode_progress(record)?;
        self.put_value(PROGRESS_KEY, &value).await
    }
}
