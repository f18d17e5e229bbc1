//! The committee session aggregate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::delegates::{DelegateDirectory, DirectoryError};
use crate::domain::foundation::{DelegateId, MotionId, Presence, SpeakerId, Timestamp};
use crate::domain::motions::{
    compare_motions, validate_motion, validate_sort_order, Motion, MotionError, MotionInput,
    SortError, SortOrder,
};

use super::{SpeakersList, SpeakersError};

/// Errors raised by session commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Motion(#[from] MotionError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    Speakers(#[from] SpeakersError),

    #[error("motion '{id}' is not on the floor")]
    UnknownMotion { id: MotionId },

    #[error("delegate '{id}' is not present")]
    SpeakerNotPresent { id: DelegateId },
}

/// One sitting of a committee.
///
/// Owns the roster, the motions currently on the floor, the selected motion,
/// and the speakers list. Commands go through this aggregate so delegate
/// stats stay consistent with what happened on the floor.
///
/// # Invariants
///
/// - `selected` always names a motion in `motions`
/// - Speakers-list slots only reference delegations on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeSession {
    title: String,
    delegates: DelegateDirectory,
    motions: Vec<Motion>,
    selected: Option<MotionId>,
    speakers: SpeakersList,
    created_at: Timestamp,
}

impl CommitteeSession {
    /// Opens a new session over the given roster.
    pub fn new(title: impl Into<String>, delegates: DelegateDirectory) -> Self {
        Self {
            title: title.into(),
            delegates,
            motions: Vec::new(),
            selected: None,
            speakers: SpeakersList::new(),
            created_at: Timestamp::now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn delegates(&self) -> &DelegateDirectory {
        &self.delegates
    }

    pub fn speakers(&self) -> &SpeakersList {
        &self.speakers
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ── Attendance ───────────────────────────────────────────────────────

    /// Records a delegation's attendance.
    ///
    /// # Errors
    ///
    /// - `Directory` if the delegation is not on the roster
    pub fn set_presence(
        &mut self,
        id: &DelegateId,
        presence: Presence,
    ) -> Result<(), SessionError> {
        self.delegates.set_presence(id, presence)?;
        Ok(())
    }

    /// Enables or disables a delegation for this session.
    ///
    /// # Errors
    ///
    /// - `Directory` if the delegation is not on the roster
    pub fn set_enabled(&mut self, id: &DelegateId, enabled: bool) -> Result<(), SessionError> {
        self.delegates.set_enabled(id, enabled)?;
        Ok(())
    }

    // ── Motions ──────────────────────────────────────────────────────────

    /// Validates raw input and puts the motion on the floor.
    ///
    /// Bumps the proposing delegation's proposed-motions count.
    ///
    /// # Errors
    ///
    /// - `Motion` carrying the first validation failure
    pub fn submit_motion(&mut self, input: &MotionInput) -> Result<MotionId, SessionError> {
        let motion = validate_motion(input, &self.delegates)?;
        let id = *motion.id();
        if let Some(proposer) = self.delegates.get_mut(motion.delegate()) {
            proposer.stats_mut().record_proposed();
        }
        self.motions.push(motion);
        Ok(id)
    }

    /// Takes a motion off the floor, clearing the selection if it held it.
    ///
    /// # Errors
    ///
    /// - `UnknownMotion` if no motion has the ID
    pub fn withdraw_motion(&mut self, id: &MotionId) -> Result<Motion, SessionError> {
        let index = self
            .motions
            .iter()
            .position(|m| m.id() == id)
            .ok_or(SessionError::UnknownMotion { id: *id })?;
        if self.selected == Some(*id) {
            self.selected = None;
        }
        Ok(self.motions.remove(index))
    }

    /// Iterates motions in submission order.
    pub fn motions(&self) -> impl Iterator<Item = &Motion> {
        self.motions.iter()
    }

    pub fn motion(&self, id: &MotionId) -> Option<&Motion> {
        self.motions.iter().find(|m| m.id() == id)
    }

    /// Returns the floor's motions in priority order under the given policy.
    ///
    /// # Errors
    ///
    /// - `Sort` if the policy orders a kind by a property it cannot carry
    pub fn ordered_motions(&self, order: &SortOrder) -> Result<Vec<&Motion>, SessionError> {
        validate_sort_order(order)?;
        let mut ordered: Vec<&Motion> = self.motions.iter().collect();
        let compare = compare_motions(order);
        ordered.sort_by(|a, b| compare(a, b));
        Ok(ordered)
    }

    /// Selects the highest-priority motion on the floor.
    ///
    /// Bumps the proposer's accepted-motions count and returns the selected
    /// motion, or `None` when the floor is empty.
    ///
    /// # Errors
    ///
    /// - `Sort` if the ordering policy is invalid
    pub fn select_next_motion(
        &mut self,
        order: &SortOrder,
    ) -> Result<Option<&Motion>, SessionError> {
        let id = match self.ordered_motions(order)?.first() {
            Some(motion) => *motion.id(),
            None => return Ok(None),
        };
        self.selected = Some(id);
        let delegate = self
            .motion(&id)
            .map(|m| m.delegate().clone())
            .ok_or(SessionError::UnknownMotion { id })?;
        if let Some(proposer) = self.delegates.get_mut(&delegate) {
            proposer.stats_mut().record_accepted();
        }
        Ok(self.motion(&id))
    }

    /// Returns the currently selected motion.
    pub fn selected_motion(&self) -> Option<&Motion> {
        self.selected.and_then(|id| self.motion(&id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Speakers ─────────────────────────────────────────────────────────

    /// Adds a present delegation to the speakers list.
    ///
    /// # Errors
    ///
    /// - `Directory` if the delegation is not on the roster
    /// - `SpeakerNotPresent` if it is absent or disabled
    pub fn add_speaker(&mut self, id: &DelegateId) -> Result<SpeakerId, SessionError> {
        let delegate = self
            .delegates
            .get(id)
            .ok_or_else(|| DirectoryError::UnknownDelegate { id: id.clone() })?;
        if !delegate.is_enabled() || !delegate.is_present() {
            return Err(SessionError::SpeakerNotPresent { id: id.clone() });
        }
        Ok(self.speakers.add(id.clone()))
    }

    /// Finishes the current speech and credits the speaker's stats.
    ///
    /// Returns the delegation that spoke, or `None` when nobody holds the
    /// floor.
    pub fn finish_speech(&mut self, duration_secs: u64) -> Option<DelegateId> {
        let delegate = self.speakers.complete_current()?;
        if let Some(speaker) = self.delegates.get_mut(&delegate) {
            speaker.stats_mut().record_speech(duration_secs);
        }
        Some(delegate)
    }

    /// Removes a slot from the speakers list.
    ///
    /// # Errors
    ///
    /// - `Speakers` if no slot has the ID
    pub fn remove_speaker(&mut self, id: &SpeakerId) -> Result<(), SessionError> {
        self.speakers.remove(id)?;
        Ok(())
    }

    /// Moves a speakers-list slot to a new position.
    ///
    /// # Errors
    ///
    /// - `Speakers` if no slot has the ID
    pub fn reorder_speaker(&mut self, id: &SpeakerId, to: usize) -> Result<(), SessionError> {
        self.speakers.reorder(id, to)?;
        Ok(())
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Resets the session for a fresh sitting.
    ///
    /// Clears motions, selection, and speakers, and returns every delegation
    /// to not-present with zeroed stats. The roster itself is preserved.
    pub fn reset(&mut self) {
        self.motions.clear();
        self.selected = None;
        self.speakers.clear();
        self.delegates.reset_session();
    }
}
