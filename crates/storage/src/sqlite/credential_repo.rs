use async_trait::async_trait;

use crate::repository::{CredentialRepository, StorageError, CREDENTIAL_KEY};

use super::SqliteStore;

#[async_trait]
impl CredentialRepository for SqliteStore {
    async fn load_credential(&self) -> Result<Option<String>, StorageError> {
        self.get_value(CREDENTIAL_KEY).await
    }

    async fn save_credential(&self, credential: &str) -> Result<(), StorageError> {
        self.put_value(CREDENTIAL_KEY, credential).await
    }

    async fn clear_credential(&self) -> Result<(), StorageError> {
        self.remove_value(CREDENTIAL_KEY).await
    }
}
