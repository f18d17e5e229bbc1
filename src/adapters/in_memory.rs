//! In-memory store adapters.
//!
//! Back the ports with a plain `RwLock` for tests and single-process use.
//! A poisoned lock is reported as an unavailable backend rather than
//! propagating the panic.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::Settings;
use crate::domain::session::CommitteeSession;
use crate::ports::{SessionStore, SettingsStore, StoreError};

/// Session store holding at most one snapshot in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Option<CommitteeSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<CommitteeSession>, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("session store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, session: &CommitteeSession) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("session store lock poisoned".to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("session store lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Settings store holding at most one value in memory.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    inner: RwLock<Option<Settings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<Option<Settings>, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("settings store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("settings store lock poisoned".to_string()))?;
        *guard = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delegates::DelegateDirectory;

    #[tokio::test]
    async fn session_store_round_trips_a_snapshot() {
        let store = InMemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());

        let session = CommitteeSession::new("General Assembly", DelegateDirectory::new());
        store.save(&session).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn settings_store_replaces_on_save() {
        let store = InMemorySettingsStore::new();
        assert!(store.load().await.unwrap().is_none());

        let mut settings = Settings::default();
        store.save(&settings).await.unwrap();

        settings.title = "Security Council".to_string();
        store.save(&settings).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.title, "Security Council");
    }
}
