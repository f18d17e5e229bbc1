//! Port traits: the seams the application layer uses to reach storage.

mod session_store;
mod settings_store;

pub use session_store::SessionStore;
pub use settings_store::SettingsStore;

use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored data could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
