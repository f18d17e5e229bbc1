//! Persisted committee settings.
//!
//! The settings shape is what the UI saves and restores between sittings:
//! the committee title, the motion ordering policy, and chair preferences.
//! Everything has a sensible default so a missing or partial settings blob
//! still yields a working committee.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::motions::{default_sort_order, validate_sort_order, SortError, SortOrder};

/// Errors raised by settings validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("committee title must not be empty")]
    EmptyTitle,

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Chair-facing feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Offer round-robin motions in the motion form.
    pub enable_motion_round_robin: bool,
    /// Offer the extension flag on caucus motions.
    pub enable_motion_ext: bool,
    /// Pause the main timer while a speaker's timer runs.
    pub pause_main_timer: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            enable_motion_round_robin: true,
            enable_motion_ext: true,
            pause_main_timer: true,
        }
    }
}

/// Persisted settings for one committee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub title: String,
    pub sort_order: SortOrder,
    pub preferences: Preferences,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "General Assembly".to_string(),
            sort_order: default_sort_order(),
            preferences: Preferences::default(),
        }
    }
}

impl Settings {
    /// Checks the settings for semantic problems serde cannot catch.
    ///
    /// # Errors
    ///
    /// - `EmptyTitle` if the title is blank
    /// - `Sort` if the ordering policy names an unsupported property
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.title.trim().is_empty() {
            return Err(SettingsError::EmptyTitle);
        }
        validate_sort_order(&self.sort_order)?;
        Ok(())
    }
}
