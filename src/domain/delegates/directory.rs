//! DelegateDirectory: the ordered committee roster.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DelegateId, Presence};

use super::Delegate;

/// Errors raised by roster mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("delegate '{id}' is already on the roster")]
    DuplicateDelegate { id: DelegateId },

    #[error("delegate '{id}' is not on the roster")]
    UnknownDelegate { id: DelegateId },
}

/// The ordered roster of delegations for one assembly.
///
/// Populated at session start from a preset or manual entry, mutated by
/// attendance actions, and reset between sessions. The motion engines only
/// ever read it.
///
/// # Invariants
///
/// - Delegate IDs are unique
/// - Roster order is stable (insertion order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelegateDirectory {
    delegates: Vec<Delegate>,
}

impl DelegateDirectory {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from a list of delegates.
    ///
    /// # Errors
    ///
    /// - `DuplicateDelegate` if two entries share an ID
    pub fn from_delegates(delegates: Vec<Delegate>) -> Result<Self, DirectoryError> {
        let mut directory = Self::new();
        for delegate in delegates {
            directory.add(delegate)?;
        }
        Ok(directory)
    }

    /// Appends a delegate to the roster.
    ///
    /// # Errors
    ///
    /// - `DuplicateDelegate` if the ID is already taken
    pub fn add(&mut self, delegate: Delegate) -> Result<(), DirectoryError> {
        if self.get(delegate.id()).is_some() {
            return Err(DirectoryError::DuplicateDelegate {
                id: delegate.id().clone(),
            });
        }
        self.delegates.push(delegate);
        Ok(())
    }

    /// Removes a delegate from the roster.
    ///
    /// # Errors
    ///
    /// - `UnknownDelegate` if no delegate has the ID
    pub fn remove(&mut self, id: &DelegateId) -> Result<Delegate, DirectoryError> {
        let index = self
            .delegates
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| DirectoryError::UnknownDelegate { id: id.clone() })?;
        Ok(self.delegates.remove(index))
    }

    /// Returns the number of delegates on the roster.
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Iterates the roster in order.
    pub fn iter(&self) -> impl Iterator<Item = &Delegate> {
        self.delegates.iter()
    }

    /// Looks up a delegate by ID (linear; rosters are tens of entries).
    pub fn get(&self, id: &DelegateId) -> Option<&Delegate> {
        self.delegates.iter().find(|d| d.id() == id)
    }

    /// Looks up a delegate by ID for mutation.
    pub fn get_mut(&mut self, id: &DelegateId) -> Option<&mut Delegate> {
        self.delegates.iter_mut().find(|d| d.id() == id)
    }

    /// Finds an enabled delegate whose official name or alias matches the
    /// given free-text name, ignoring case.
    ///
    /// Disabled delegations are not part of this assembly and never match.
    pub fn find_by_name(&self, name: &str) -> Option<&Delegate> {
        self.delegates
            .iter()
            .filter(|d| d.is_enabled())
            .find(|d| d.name_matches(name))
    }

    /// Updates the attendance status of one delegate.
    ///
    /// # Errors
    ///
    /// - `UnknownDelegate` if no delegate has the ID
    pub fn set_presence(&mut self, id: &DelegateId, presence: Presence) -> Result<(), DirectoryError> {
        let delegate = self
            .get_mut(id)
            .ok_or_else(|| DirectoryError::UnknownDelegate { id: id.clone() })?;
        delegate.set_presence(presence);
        Ok(())
    }

    /// Enables or disables a delegation for this assembly.
    ///
    /// # Errors
    ///
    /// - `UnknownDelegate` if no delegate has the ID
    pub fn set_enabled(&mut self, id: &DelegateId, enabled: bool) -> Result<(), DirectoryError> {
        let delegate = self
            .get_mut(id)
            .ok_or_else(|| DirectoryError::UnknownDelegate { id: id.clone() })?;
        delegate.set_enabled(enabled);
        Ok(())
    }

    /// Iterates enabled delegations in roster order.
    pub fn enabled_delegates(&self) -> impl Iterator<Item = &Delegate> {
        self.delegates.iter().filter(|d| d.is_enabled())
    }

    /// Iterates enabled delegations currently in the room, in roster order.
    ///
    /// This is an explicit re-query; callers re-derive the list after
    /// attendance changes rather than subscribing to updates.
    pub fn present_delegates(&self) -> impl Iterator<Item = &Delegate> {
        self.delegates.iter().filter(|d| d.is_enabled() && d.is_present())
    }

    /// Resets every delegate's attendance and stats for a fresh session.
    pub fn reset_session(&mut self) {
        for delegate in &mut self.delegates {
            delegate.reset_session();
        }
    }
}
