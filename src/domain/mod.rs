//! Domain layer: pure committee-session logic with no I/O.

pub mod delegates;
pub mod foundation;
pub mod motions;
pub mod session;
