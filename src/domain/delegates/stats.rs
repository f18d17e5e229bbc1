//! Per-delegate participation counters.

use serde::{Deserialize, Serialize};

/// Participation statistics accumulated for one delegation over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateStats {
    /// Number of motions proposed by this delegate.
    pub motions_proposed: u32,
    /// Number of motions accepted by this delegate.
    pub motions_accepted: u32,
    /// Number of times this delegate has gone up to speak.
    pub times_spoken: u32,
    /// Total duration this delegate has spoken, in seconds.
    pub duration_spoken: u64,
}

impl DelegateStats {
    /// Records a proposed motion.
    pub fn record_proposed(&mut self) {
        self.motions_proposed += 1;
    }

    /// Records an accepted motion.
    pub fn record_accepted(&mut self) {
        self.motions_accepted += 1;
    }

    /// Records a completed speech of the given duration.
    pub fn record_speech(&mut self, duration_secs: u64) {
        self.times_spoken += 1;
        self.duration_spoken += duration_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zeroed() {
        let stats = DelegateStats::default();
        assert_eq!(stats.motions_proposed, 0);
        assert_eq!(stats.motions_accepted, 0);
        assert_eq!(stats.times_spoken, 0);
        assert_eq!(stats.duration_spoken, 0);
    }

    #[test]
    fn record_speech_accumulates_count_and_duration() {
        let mut stats = DelegateStats::default();
        stats.record_speech(60);
        stats.record_speech(45);
        assert_eq!(stats.times_spoken, 2);
        assert_eq!(stats.duration_spoken, 105);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut stats = DelegateStats::default();
        stats.record_proposed();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["motionsProposed"], 1);
        assert_eq!(json["durationSpoken"], 0);
    }
}
