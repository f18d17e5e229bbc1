use async_trait::async_trait;

use crate::config::Settings;

use super::StoreError;

/// Persistence seam for committee settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Loads the saved settings, if any.
    async fn load(&self) -> Result<Option<Settings>, StoreError>;

    /// Saves the settings, replacing any previous value.
    async fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}
