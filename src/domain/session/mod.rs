//! The committee session aggregate and its speakers list.

mod aggregate;
mod speakers;

pub use aggregate::{CommitteeSession, SessionError};
pub use speakers::{Speaker, SpeakersError, SpeakersList};
