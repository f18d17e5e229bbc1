//! The session service: loads state through the ports, runs domain commands,
//! and persists the result.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Settings, SettingsError};
use crate::domain::delegates::{presets, DelegateDirectory};
use crate::domain::foundation::{DelegateId, MotionId, Presence, SpeakerId};
use crate::domain::motions::{Motion, MotionInput, MotionKind};
use crate::domain::session::{CommitteeSession, SessionError};
use crate::ports::{SessionStore, SettingsStore, StoreError};

/// Errors surfaced by session commands.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("no active session")]
    NoActiveSession,

    #[error("'{key}' is not a known roster preset")]
    UnknownPreset { key: String },

    #[error("round robin motions are disabled in settings")]
    RoundRobinDisabled,

    #[error("motion extensions are disabled in settings")]
    ExtensionsDisabled,
}

/// Orchestrates committee-session commands.
///
/// Every command follows the same shape: load the snapshot from the session
/// store, run the domain operation, save the result. The service itself
/// holds no session state.
pub struct SessionService {
    sessions: Arc<dyn SessionStore>,
    settings: Arc<dyn SettingsStore>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { sessions, settings }
    }

    // ── Settings ─────────────────────────────────────────────────────────

    /// Returns the saved settings, or defaults when none are saved.
    pub async fn settings(&self) -> Result<Settings, ServiceError> {
        Ok(self.settings.load().await?.unwrap_or_default())
    }

    /// Validates and saves new settings.
    pub async fn update_settings(&self, settings: Settings) -> Result<(), ServiceError> {
        settings.validate()?;
        self.settings.save(&settings).await?;
        info!(title = %settings.title, "settings updated");
        Ok(())
    }

    // ── Session lifecycle ────────────────────────────────────────────────

    /// Opens a new session over the given roster and makes it active.
    ///
    /// Without an explicit title, the committee title from settings is used.
    pub async fn open_session(
        &self,
        title: Option<String>,
        delegates: DelegateDirectory,
    ) -> Result<CommitteeSession, ServiceError> {
        let title = match title {
            Some(title) => title,
            None => self.settings().await?.title,
        };
        let session = CommitteeSession::new(title, delegates);
        self.sessions.save(&session).await?;
        info!(
            title = %session.title(),
            delegates = session.delegates().len(),
            "session opened"
        );
        Ok(session)
    }

    /// Opens a new session from an embedded roster preset.
    pub async fn open_session_from_preset(
        &self,
        key: &str,
    ) -> Result<CommitteeSession, ServiceError> {
        let delegates = presets::load_preset(key).ok_or_else(|| ServiceError::UnknownPreset {
            key: key.to_string(),
        })?;
        self.open_session(None, delegates).await
    }

    /// Returns the active session, if one exists.
    pub async fn active_session(&self) -> Result<Option<CommitteeSession>, ServiceError> {
        Ok(self.sessions.load().await?)
    }

    /// Resets the active session for a fresh sitting.
    pub async fn reset_session(&self) -> Result<(), ServiceError> {
        let mut session = self.require_session().await?;
        session.reset();
        self.sessions.save(&session).await?;
        info!("session reset");
        Ok(())
    }

    /// Closes and discards the active session.
    pub async fn close_session(&self) -> Result<(), ServiceError> {
        self.sessions.clear().await?;
        info!("session closed");
        Ok(())
    }

    // ── Attendance ───────────────────────────────────────────────────────

    pub async fn set_presence(
        &self,
        id: &DelegateId,
        presence: Presence,
    ) -> Result<(), ServiceError> {
        let mut session = self.require_session().await?;
        session.set_presence(id, presence)?;
        self.sessions.save(&session).await?;
        debug!(delegate = %id, ?presence, "attendance updated");
        Ok(())
    }

    // ── Motions ──────────────────────────────────────────────────────────

    /// Validates raw form input and puts the motion on the floor.
    ///
    /// Motion kinds the chair has disabled in preferences are rejected
    /// before validation runs.
    pub async fn submit_motion(&self, input: &MotionInput) -> Result<MotionId, ServiceError> {
        let preferences = self.settings().await?.preferences;
        if input.kind == MotionKind::RoundRobin.as_str()
            && !preferences.enable_motion_round_robin
        {
            return Err(ServiceError::RoundRobinDisabled);
        }
        if input.is_extension && !preferences.enable_motion_ext {
            return Err(ServiceError::ExtensionsDisabled);
        }

        let mut session = self.require_session().await?;
        let id = session.submit_motion(input)?;
        self.sessions.save(&session).await?;
        info!(motion = %id, kind = %input.kind, "motion submitted");
        Ok(id)
    }

    pub async fn withdraw_motion(&self, id: &MotionId) -> Result<(), ServiceError> {
        let mut session = self.require_session().await?;
        session.withdraw_motion(id)?;
        self.sessions.save(&session).await?;
        info!(motion = %id, "motion withdrawn");
        Ok(())
    }

    /// Returns the floor's motions in priority order under the saved policy.
    pub async fn ordered_motions(&self) -> Result<Vec<Motion>, ServiceError> {
        let session = self.require_session().await?;
        let order = self.settings().await?.sort_order;
        let ordered = session.ordered_motions(&order)?;
        Ok(ordered.into_iter().cloned().collect())
    }

    /// Selects the highest-priority motion under the saved policy.
    pub async fn select_next_motion(&self) -> Result<Option<Motion>, ServiceError> {
        let mut session = self.require_session().await?;
        let order = self.settings().await?.sort_order;
        let selected = session.select_next_motion(&order)?.cloned();
        self.sessions.save(&session).await?;
        if let Some(motion) = &selected {
            info!(motion = %motion.id(), kind = %motion.kind().as_str(), "motion selected");
        } else {
            debug!("no motions on the floor");
        }
        Ok(selected)
    }

    // ── Speakers ─────────────────────────────────────────────────────────

    pub async fn add_speaker(&self, id: &DelegateId) -> Result<SpeakerId, ServiceError> {
        let mut session = self.require_session().await?;
        let speaker = session.add_speaker(id)?;
        self.sessions.save(&session).await?;
        debug!(delegate = %id, "speaker added");
        Ok(speaker)
    }

    /// Finishes the current speech, crediting the speaker's stats.
    pub async fn finish_speech(
        &self,
        duration_secs: u64,
    ) -> Result<Option<DelegateId>, ServiceError> {
        let mut session = self.require_session().await?;
        let spoke = session.finish_speech(duration_secs);
        self.sessions.save(&session).await?;
        if let Some(delegate) = &spoke {
            debug!(delegate = %delegate, duration_secs, "speech finished");
        }
        Ok(spoke)
    }

    async fn require_session(&self) -> Result<CommitteeSession, ServiceError> {
        self.sessions
            .load()
            .await?
            .ok_or(ServiceError::NoActiveSession)
    }
}
