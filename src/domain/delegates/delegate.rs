//! Delegate entity: one delegation on the committee roster.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DelegateId, Presence};

use super::DelegateStats;

/// One delegation on the roster, with its naming, enablement, attendance
/// status, and accumulated participation stats.
///
/// # Invariants
///
/// - `id` is unique within a [`DelegateDirectory`](super::DelegateDirectory)
/// - `name` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    id: DelegateId,
    /// The official name of the delegation.
    name: String,
    /// Name aliases, used to widen lookup (never displayed).
    #[serde(default)]
    aliases: Vec<String>,
    /// Optional flag image URL, resolved by the UI layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flag_url: Option<String>,
    /// Whether the delegation participates in this assembly.
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    presence: Presence,
    #[serde(default)]
    stats: DelegateStats,
}

fn default_enabled() -> bool {
    true
}

impl Delegate {
    /// Creates an enabled, not-present delegate.
    pub fn new(id: DelegateId, name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            aliases,
            flag_url: None,
            enabled: true,
            presence: Presence::NotPresent,
            stats: DelegateStats::default(),
        }
    }

    /// Sets the flag URL, consuming and returning self.
    pub fn with_flag_url(mut self, url: impl Into<String>) -> Self {
        self.flag_url = Some(url.into());
        self
    }

    /// Returns the delegate's identifier.
    pub fn id(&self) -> &DelegateId {
        &self.id
    }

    /// Returns the official delegation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name aliases.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the flag URL, if any.
    pub fn flag_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    /// Returns whether the delegation participates in this assembly.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the delegation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the current attendance status.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Updates the attendance status.
    pub fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    /// Returns whether the delegation is in the room.
    pub fn is_present(&self) -> bool {
        self.presence.is_present()
    }

    /// Returns the participation stats.
    pub fn stats(&self) -> &DelegateStats {
        &self.stats
    }

    /// Returns the participation stats for mutation.
    pub fn stats_mut(&mut self) -> &mut DelegateStats {
        &mut self.stats
    }

    /// Resets attendance and stats for a fresh session, keeping naming and
    /// enablement intact.
    pub fn reset_session(&mut self) {
        self.presence = Presence::NotPresent;
        self.stats = DelegateStats::default();
    }

    /// Checks whether the given name refers to this delegation.
    ///
    /// Matches the official name or any alias, ignoring case and surrounding
    /// whitespace.
    pub fn name_matches(&self, name: &str) -> bool {
        let name = name.trim();
        eq_ignore_case(&self.name, name) || self.aliases.iter().any(|a| eq_ignore_case(a, name))
    }
}

/// Case-insensitive name equality (Unicode simple case folding via
/// lowercasing, which covers roster names; no locale collation).
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
