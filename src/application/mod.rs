//! Application layer: command orchestration over the domain and ports.

mod session_service;

pub use session_service::{ServiceError, SessionService};
