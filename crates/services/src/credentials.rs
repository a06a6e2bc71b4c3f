use std::sync::{Arc, Mutex};

use storage::repository::CredentialRepository;

use crate::error::CredentialError;

/// Session cache over the stored API credential.
///
/// The credential is read from storage once per session and cached until
/// the user explicitly changes or clears it.
pub struct CredentialService {
    repo: Arc<dyn CredentialRepository>,
    cached: Mutex<Option<Option<String>>>,
}

impl CredentialService {
    #[must_use]
    pub fn new(repo: Arc<dyn CredentialRepository>) -> Self {
        Self {
            repo,
            cached: Mutex::new(None),
        }
    }

    /// The current credential, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Storage` if the first read of the
    /// session fails.
    pub async fn current(&self) -> Result<Option<String>, CredentialError> {
        if let Some(cached) = self.cached_value() {
            return Ok(cached);
        }
        let loaded = self.repo.load_credential().await?;
        *self.lock() = Some(loaded.clone());
        Ok(loaded)
    }

    /// Validate, persist, and cache a new credential.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Empty` for a blank credential, or
    /// `CredentialError::Storage` if persistence fails.
    pub async fn set(&self, credential: &str) -> Result<(), CredentialError> {
        let trimmed = credential.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }
        self.repo.save_credential(trimmed).await?;
        *self.lock() = Some(Some(trimmed.to_string()));
        Ok(())
    }

    /// Remove the credential from storage and the cache.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Storage` if the removal fails.
    pub async fn clear(&self) -> Result<(), CredentialError> {
        self.repo.clear_credential().await?;
        *self.lock() = Some(None);
        Ok(())
    }

    fn cached_value(&self) -> Option<Option<String>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Option<String>>> {
        self.cached.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryStore;

    #[tokio::test]
    async fn missing_credential_is_none() {
        let service = CredentialService::new(Arc::new(InMemoryStore::new()));
        assert!(service.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_trims_and_persists() {
        let store = Arc::new(InMemoryStore::new());
        let service = CredentialService::new(Arc::clone(&store) as _);
        service.set("  sk-abc  ").await.unwrap();
        assert_eq!(
            service.current().await.unwrap().as_deref(),
            Some("sk-abc")
        );

        let stored = storage::repository::CredentialRepository::load_credential(store.as_ref())
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some("sk-abc"));
    }

    #[tokio::test]
    async fn blank_credential_is_rejected() {
        let service = CredentialService::new(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            service.set("   ").await,
            Err(CredentialError::Empty)
        ));
    }

    #[tokio::test]
    async fn reads_are_cached_for_the_session() {
        let store = Arc::new(InMemoryStore::new());
        storage::repository::CredentialRepository::save_credential(store.as_ref(), "sk-first")
            .await
            .unwrap();

        let service = CredentialService::new(Arc::clone(&store) as _);
        assert_eq!(
            service.current().await.unwrap().as_deref(),
            Some("sk-first")
        );

        // A write that bypasses the service is not observed until the
        // cache is invalidated by an explicit set or clear.
        storage::repository::CredentialRepository::save_credential(store.as_ref(), "sk-second")
            .await
            .unwrap();
        assert_eq!(
            service.current().await.unwrap().as_deref(),
            Some("sk-first")
        );
    }

    #[tokio::test]
    async fn clear_removes_credential_everywhere() {
        let store = Arc::new(InMemoryStore::new());
        let service = CredentialService::new(Arc::clone(&store) as _);
        service.set("sk-abc").await.unwrap();
        service.clear().await.unwrap();

        assert!(service.current().await.unwrap().is_none());
        let stored = storage::repository::CredentialRepository::load_credential(store.as_ref())
            .await
            .unwrap();
        assert!(stored.is_none());
    }
}
