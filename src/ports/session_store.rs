use async_trait::async_trait;

use crate::domain::session::CommitteeSession;

use super::StoreError;

/// Persistence seam for the active session snapshot.
///
/// One session is active at a time; implementations hold at most one
/// snapshot and replace it wholesale on save.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the active session, if one was saved.
    async fn load(&self) -> Result<Option<CommitteeSession>, StoreError>;

    /// Saves the active session, replacing any previous snapshot.
    async fn save(&self, session: &CommitteeSession) -> Result<(), StoreError>;

    /// Discards the active session.
    async fn clear(&self) -> Result<(), StoreError>;
}
