//! Storage adapters implementing the port traits.

mod in_memory;

pub use in_memory::{InMemorySessionStore, InMemorySettingsStore};
