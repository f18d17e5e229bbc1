//! Delegate roster: entities, the directory, presets, and participation
//! stats.

mod delegate;
mod directory;
mod stats;

pub mod presets;

pub use delegate::Delegate;
pub use directory::{DelegateDirectory, DirectoryError};
pub use stats::DelegateStats;
