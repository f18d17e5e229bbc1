//! Shared domain primitives: identifiers, attendance status, time strings,
//! and timestamps.

mod ids;
mod presence;
mod timestamp;

pub mod time;

pub use ids::{DelegateId, MotionId, SpeakerId};
pub use presence::Presence;
pub use timestamp::Timestamp;
