//! Built-in roster presets.
//!
//! Frequently used rosters ship with the crate so a committee can be staffed
//! in one step; the Security Council roster is provided as the default.

use once_cell::sync::Lazy;

use super::{Delegate, DelegateDirectory};

/// The key of the default preset.
pub const DEFAULT_PRESET_KEY: &str = "unsc";

static SECURITY_COUNCIL: Lazy<Vec<Delegate>> = Lazy::new(|| {
    serde_json::from_str(include_str!("presets/security_council.json"))
        .expect("embedded roster preset must be valid JSON")
});

/// All defined presets, as `(key, label)` pairs.
pub fn preset_keys() -> &'static [(&'static str, &'static str)] {
    &[("unsc", "United Nations Security Council")]
}

/// Builds a fresh directory from the preset with the given key.
///
/// Returns `None` for unknown keys.
pub fn load_preset(key: &str) -> Option<DelegateDirectory> {
    let delegates = match key {
        "unsc" => SECURITY_COUNCIL.clone(),
        _ => return None,
    };
    // Preset data is validated at build time; duplicate IDs cannot occur.
    DelegateDirectory::from_delegates(delegates).ok()
}
