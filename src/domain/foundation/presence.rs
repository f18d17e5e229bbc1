//! Presence enum for roll-call attendance status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance status of a delegation, as recorded during roll call.
///
/// Serializes with the conventional roll-call abbreviations (`"NP"`, `"P"`,
/// `"PV"`), which is the persisted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Presence {
    /// Not present.
    #[default]
    #[serde(rename = "NP")]
    NotPresent,
    /// Present.
    #[serde(rename = "P")]
    Present,
    /// Present and voting (may not abstain on substantive votes).
    #[serde(rename = "PV")]
    PresentAndVoting,
}

impl Presence {
    /// Returns true if this status indicates the delegation is in the room.
    pub fn is_present(&self) -> bool {
        !matches!(self, Presence::NotPresent)
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Presence::NotPresent => "Not Present",
            Presence::Present => "Present",
            Presence::PresentAndVoting => "Present and Voting",
        };
        write!(f, "{}", s)
    }
}
