//! The speakers list for the current debate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DelegateId, SpeakerId};

/// Errors raised by speakers-list mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeakersError {
    #[error("speaker '{id}' is not on the list")]
    UnknownSpeaker { id: SpeakerId },
}

/// One slot on the speakers list.
///
/// A delegation may hold several slots; each gets its own ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    id: SpeakerId,
    delegate: DelegateId,
    completed: bool,
}

impl Speaker {
    fn new(delegate: DelegateId) -> Self {
        Self {
            id: SpeakerId::new(),
            delegate,
            completed: false,
        }
    }

    pub fn id(&self) -> &SpeakerId {
        &self.id
    }

    pub fn delegate(&self) -> &DelegateId {
        &self.delegate
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// An ordered speakers list.
///
/// Completed slots keep their position so the chair can still see who has
/// spoken; the current speaker is the first uncompleted slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakersList {
    speakers: Vec<Speaker>,
}

impl SpeakersList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot for the given delegation and returns its ID.
    pub fn add(&mut self, delegate: DelegateId) -> SpeakerId {
        let speaker = Speaker::new(delegate);
        let id = *speaker.id();
        self.speakers.push(speaker);
        id
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    /// Iterates all slots in list order, completed ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.iter()
    }

    /// Returns the speaker currently holding the floor.
    pub fn current(&self) -> Option<&Speaker> {
        self.speakers.iter().find(|s| !s.completed)
    }

    /// Returns the speaker after the current one.
    pub fn next_up(&self) -> Option<&Speaker> {
        self.speakers.iter().filter(|s| !s.completed).nth(1)
    }

    /// Marks the current speaker as completed and returns their delegation.
    pub fn complete_current(&mut self) -> Option<DelegateId> {
        let speaker = self.speakers.iter_mut().find(|s| !s.completed)?;
        speaker.completed = true;
        Some(speaker.delegate.clone())
    }

    /// Removes a slot from the list.
    ///
    /// # Errors
    ///
    /// - `UnknownSpeaker` if no slot has the ID
    pub fn remove(&mut self, id: &SpeakerId) -> Result<Speaker, SpeakersError> {
        let index = self.position(id)?;
        Ok(self.speakers.remove(index))
    }

    /// Moves a slot to the given position, shifting the rest.
    ///
    /// Positions past the end move the slot to the back.
    ///
    /// # Errors
    ///
    /// - `UnknownSpeaker` if no slot has the ID
    pub fn reorder(&mut self, id: &SpeakerId, to: usize) -> Result<(), SpeakersError> {
        let from = self.position(id)?;
        let speaker = self.speakers.remove(from);
        let to = to.min(self.speakers.len());
        self.speakers.insert(to, speaker);
        Ok(())
    }

    /// Drops every completed slot, keeping the waiting ones in order.
    pub fn purge_completed(&mut self) {
        self.speakers.retain(|s| !s.completed);
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.speakers.clear();
    }

    fn position(&self, id: &SpeakerId) -> Result<usize, SpeakersError> {
        self.speakers
            .iter()
            .position(|s| s.id() == id)
            .ok_or(SpeakersError::UnknownSpeaker { id: *id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delegate(key: &str) -> DelegateId {
        DelegateId::new(key)
    }

    #[test]
    fn current_is_first_uncompleted_slot() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.add(delegate("FR"));

        assert_eq!(list.current().unwrap().delegate().as_str(), "US");
        assert_eq!(list.next_up().unwrap().delegate().as_str(), "FR");
    }

    #[test]
    fn complete_current_advances_the_floor() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.add(delegate("FR"));

        assert_eq!(list.complete_current(), Some(delegate("US")));
        assert_eq!(list.current().unwrap().delegate().as_str(), "FR");
        // Completed slot stays on the list.
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn complete_current_on_exhausted_list_is_none() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.complete_current();
        assert_eq!(list.complete_current(), None);
        assert!(list.current().is_none());
    }

    #[test]
    fn same_delegate_can_hold_multiple_slots() {
        let mut list = SpeakersList::new();
        let first = list.add(delegate("US"));
        let second = list.add(delegate("US"));
        assert_ne!(first, second);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn reorder_moves_a_slot() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.add(delegate("FR"));
        let id = list.add(delegate("GB"));

        list.reorder(&id, 0).unwrap();
        let order: Vec<_> = list.iter().map(|s| s.delegate().as_str()).collect();
        assert_eq!(order, ["GB", "US", "FR"]);
    }

    #[test]
    fn reorder_past_the_end_moves_to_back() {
        let mut list = SpeakersList::new();
        let id = list.add(delegate("US"));
        list.add(delegate("FR"));

        list.reorder(&id, 99).unwrap();
        let order: Vec<_> = list.iter().map(|s| s.delegate().as_str()).collect();
        assert_eq!(order, ["FR", "US"]);
    }

    #[test]
    fn remove_unknown_speaker_fails() {
        let mut list = SpeakersList::new();
        let missing = SpeakerId::new();
        assert_eq!(
            list.remove(&missing),
            Err(SpeakersError::UnknownSpeaker { id: missing })
        );
    }

    #[test]
    fn purge_drops_only_completed_slots() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.add(delegate("FR"));
        list.complete_current();

        list.purge_completed();
        let order: Vec<_> = list.iter().map(|s| s.delegate().as_str()).collect();
        assert_eq!(order, ["FR"]);
    }

    #[test]
    fn serializes_as_plain_array_with_camel_case_slots() {
        let mut list = SpeakersList::new();
        list.add(delegate("US"));
        list.complete_current();

        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["delegate"], "US");
        assert_eq!(json[0]["completed"], true);

        let back: SpeakersList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }
}
