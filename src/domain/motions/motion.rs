//! Motion sum type and per-kind field definitions.
//!
//! The per-kind field tables here are the single source of truth for which
//! inputs each motion kind declares; `consistency` tests assert they stay in
//! lock-step with the variant definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DelegateId, MotionId};

/// The kinds of procedural motion a delegate can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionKind {
    #[serde(rename = "mod")]
    Moderated,
    #[serde(rename = "unmod")]
    Unmoderated,
    #[serde(rename = "rr")]
    RoundRobin,
    #[serde(rename = "other")]
    Other,
}

impl MotionKind {
    /// Returns all motion kinds in canonical order.
    pub fn all() -> &'static [MotionKind] {
        &[
            MotionKind::Moderated,
            MotionKind::Unmoderated,
            MotionKind::RoundRobin,
            MotionKind::Other,
        ]
    }

    /// Returns the wire literal for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Moderated => "mod",
            MotionKind::Unmoderated => "unmod",
            MotionKind::RoundRobin => "rr",
            MotionKind::Other => "other",
        }
    }

    /// Returns the display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            MotionKind::Moderated => "Moderated Caucus",
            MotionKind::Unmoderated => "Unmoderated Caucus",
            MotionKind::RoundRobin => "Round Robin",
            MotionKind::Other => "Other",
        }
    }

    /// Returns the kind-specific fields, in validation order.
    ///
    /// Base fields (`id`, `kind`, `delegate`) are common to every kind and
    /// listed in [`BASE_FIELDS`].
    pub fn fields(&self) -> &'static [Field] {
        match self {
            MotionKind::Moderated => &[
                Field::TotalTime,
                Field::SpeakingTime,
                Field::Topic,
                Field::IsExtension,
            ],
            MotionKind::Unmoderated => &[Field::TotalTime, Field::IsExtension],
            MotionKind::RoundRobin => &[Field::SpeakingTime, Field::Topic, Field::TotalSpeakers],
            MotionKind::Other => &[Field::TotalTime, Field::Topic],
        }
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MotionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mod" => Ok(MotionKind::Moderated),
            "unmod" => Ok(MotionKind::Unmoderated),
            "rr" => Ok(MotionKind::RoundRobin),
            "other" => Ok(MotionKind::Other),
            _ => Err(()),
        }
    }
}

/// Fields common to every motion kind, in validation order.
pub const BASE_FIELDS: [Field; 3] = [Field::Id, Field::Delegate, Field::Kind];

/// Every field a motion form can carry, across all kinds.
///
/// Used as the field path on validation errors so the form layer can
/// highlight the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Kind,
    Delegate,
    TotalTime,
    SpeakingTime,
    Topic,
    TotalSpeakers,
    IsExtension,
}

impl Field {
    /// Returns every field, across all kinds.
    pub fn all() -> &'static [Field] {
        &[
            Field::Id,
            Field::Kind,
            Field::Delegate,
            Field::TotalTime,
            Field::SpeakingTime,
            Field::Topic,
            Field::TotalSpeakers,
            Field::IsExtension,
        ]
    }

    /// Returns the human-readable label shown in form messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Kind => "Kind",
            Field::Delegate => "Delegate name",
            Field::TotalTime => "Total time",
            Field::SpeakingTime => "Speaking time",
            Field::Topic => "Topic",
            Field::TotalSpeakers => "Total speakers",
            Field::IsExtension => "Extension",
        }
    }

    /// Returns the wire key (camelCase, matching the persisted shape).
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Kind => "kind",
            Field::Delegate => "delegate",
            Field::TotalTime => "totalTime",
            Field::SpeakingTime => "speakingTime",
            Field::Topic => "topic",
            Field::TotalSpeakers => "totalSpeakers",
            Field::IsExtension => "isExtension",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated procedural motion.
///
/// Field presence is exactly determined by the variant; no motion carries
/// fields outside its kind's set. Times are integral seconds.
///
/// # Invariants
///
/// - `Moderated`: `total_time % speaking_time == 0` (enforced by
///   [`validate_motion`](super::validate_motion))
/// - All times are positive and within the safe-integer range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Motion {
    /// Moderated caucus: a fixed total time divided into per-speaker turns.
    #[serde(rename = "mod", rename_all = "camelCase")]
    Moderated {
        id: MotionId,
        delegate: DelegateId,
        total_time: u64,
        speaking_time: u64,
        topic: String,
        is_extension: bool,
    },
    /// Unmoderated caucus: unstructured debate for a fixed total time.
    #[serde(rename = "unmod", rename_all = "camelCase")]
    Unmoderated {
        id: MotionId,
        delegate: DelegateId,
        total_time: u64,
        is_extension: bool,
    },
    /// Round robin: fixed per-speaker time and speaker count.
    #[serde(rename = "rr", rename_all = "camelCase")]
    RoundRobin {
        id: MotionId,
        delegate: DelegateId,
        speaking_time: u64,
        topic: String,
        total_speakers: u32,
    },
    /// Anything else with a time and a topic.
    #[serde(rename = "other", rename_all = "camelCase")]
    Other {
        id: MotionId,
        delegate: DelegateId,
        total_time: u64,
        topic: String,
    },
}

impl Motion {
    /// Returns this motion's kind.
    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Moderated { .. } => MotionKind::Moderated,
            Motion::Unmoderated { .. } => MotionKind::Unmoderated,
            Motion::RoundRobin { .. } => MotionKind::RoundRobin,
            Motion::Other { .. } => MotionKind::Other,
        }
    }

    /// Returns this motion's ID.
    pub fn id(&self) -> &MotionId {
        match self {
            Motion::Moderated { id, .. }
            | Motion::Unmoderated { id, .. }
            | Motion::RoundRobin { id, .. }
            | Motion::Other { id, .. } => id,
        }
    }

    /// Returns the proposing delegate's ID.
    pub fn delegate(&self) -> &DelegateId {
        match self {
            Motion::Moderated { delegate, .. }
            | Motion::Unmoderated { delegate, .. }
            | Motion::RoundRobin { delegate, .. }
            | Motion::Other { delegate, .. } => delegate,
        }
    }

    /// Returns the stored total time in seconds, for kinds that carry one.
    pub fn total_time(&self) -> Option<u64> {
        match self {
            Motion::Moderated { total_time, .. }
            | Motion::Unmoderated { total_time, .. }
            | Motion::Other { total_time, .. } => Some(*total_time),
            Motion::RoundRobin { .. } => None,
        }
    }

    /// Returns the per-speaker time in seconds, for kinds that carry one.
    pub fn speaking_time(&self) -> Option<u64> {
        match self {
            Motion::Moderated { speaking_time, .. } | Motion::RoundRobin { speaking_time, .. } => {
                Some(*speaking_time)
            }
            Motion::Unmoderated { .. } | Motion::Other { .. } => None,
        }
    }

    /// Returns the topic, for kinds that carry one.
    pub fn topic(&self) -> Option<&str> {
        match self {
            Motion::Moderated { topic, .. }
            | Motion::RoundRobin { topic, .. }
            | Motion::Other { topic, .. } => Some(topic),
            Motion::Unmoderated { .. } => None,
        }
    }

    /// Returns the declared speaker count, for round robins.
    pub fn total_speakers(&self) -> Option<u32> {
        match self {
            Motion::RoundRobin { total_speakers, .. } => Some(*total_speakers),
            _ => None,
        }
    }

    /// Returns whether this motion extends a prior one.
    ///
    /// Only caucuses can be extensions; other kinds are never extensions.
    pub fn is_extension(&self) -> bool {
        match self {
            Motion::Moderated { is_extension, .. } | Motion::Unmoderated { is_extension, .. } => {
                *is_extension
            }
            Motion::RoundRobin { .. } | Motion::Other { .. } => false,
        }
    }

    /// Returns the derived number of speakers.
    ///
    /// Round robins declare it directly; moderated caucuses derive it as
    /// `total_time / speaking_time`. Undefined for other kinds.
    pub fn n_speakers(&self) -> Option<u64> {
        match self {
            Motion::RoundRobin { total_speakers, .. } => Some(u64::from(*total_speakers)),
            Motion::Moderated {
                total_time,
                speaking_time,
                ..
            } => total_time.checked_div(*speaking_time),
            Motion::Unmoderated { .. } | Motion::Other { .. } => None,
        }
    }

    /// Returns whether this motion structurally carries the given field.
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::Id | Field::Kind | Field::Delegate => true,
            Field::TotalTime => self.total_time().is_some(),
            Field::SpeakingTime => self.speaking_time().is_some(),
            Field::Topic => self.topic().is_some(),
            Field::TotalSpeakers => self.total_speakers().is_some(),
            Field::IsExtension => {
                matches!(self, Motion::Moderated { .. } | Motion::Unmoderated { .. })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: MotionKind) -> Motion {
        let id = MotionId::new();
        let delegate = DelegateId::new("US");
        match kind {
            MotionKind::Moderated => Motion::Moderated {
                id,
                delegate,
                total_time: 600,
                speaking_time: 60,
                topic: "Sanctions".to_string(),
                is_extension: false,
            },
            MotionKind::Unmoderated => Motion::Unmoderated {
                id,
                delegate,
                total_time: 300,
                is_extension: false,
            },
            MotionKind::RoundRobin => Motion::RoundRobin {
                id,
                delegate,
                speaking_time: 30,
                topic: "Opening remarks".to_string(),
                total_speakers: 12,
            },
            MotionKind::Other => Motion::Other {
                id,
                delegate,
                total_time: 120,
                topic: "Straw poll".to_string(),
            },
        }
    }

    #[test]
    fn kind_roundtrips_through_wire_literal() {
        for kind in MotionKind::all() {
            assert_eq!(kind.as_str().parse::<MotionKind>(), Ok(*kind));
        }
        assert!("caucus".parse::<MotionKind>().is_err());
    }

    #[test]
    fn kind_labels_are_human_readable() {
        assert_eq!(MotionKind::Moderated.label(), "Moderated Caucus");
        assert_eq!(MotionKind::RoundRobin.label(), "Round Robin");
        assert_eq!(format!("{}", MotionKind::Unmoderated), "Unmoderated Caucus");
    }

    // Keeps the per-kind field table in lock-step with the variant
    // definitions: every declared field must be structurally present, and
    // nothing outside the declared set may be.
    #[test]
    fn field_tables_match_variant_shapes() {
        for kind in MotionKind::all() {
            let motion = sample(*kind);
            for field in Field::all() {
                let declared =
                    BASE_FIELDS.contains(field) || kind.fields().contains(field);
                assert_eq!(
                    motion.has_field(*field),
                    declared,
                    "{:?} / {:?} mismatch between field table and variant",
                    kind,
                    field
                );
            }
        }
    }

    #[test]
    fn n_speakers_derives_from_times_for_moderated() {
        let motion = sample(MotionKind::Moderated);
        assert_eq!(motion.n_speakers(), Some(10));
    }

    #[test]
    fn n_speakers_uses_declared_count_for_round_robin() {
        let motion = sample(MotionKind::RoundRobin);
        assert_eq!(motion.n_speakers(), Some(12));
    }

    #[test]
    fn n_speakers_is_undefined_for_unmoderated_and_other() {
        assert_eq!(sample(MotionKind::Unmoderated).n_speakers(), None);
        assert_eq!(sample(MotionKind::Other).n_speakers(), None);
    }

    #[test]
    fn is_extension_is_false_for_non_caucus_kinds() {
        assert!(!sample(MotionKind::RoundRobin).is_extension());
        assert!(!sample(MotionKind::Other).is_extension());
    }

    #[test]
    fn serializes_with_kind_tag_and_camel_case_fields() {
        let motion = sample(MotionKind::Moderated);
        let json = serde_json::to_value(&motion).unwrap();
        assert_eq!(json["kind"], "mod");
        assert_eq!(json["totalTime"], 600);
        assert_eq!(json["speakingTime"], 60);
        assert_eq!(json["isExtension"], false);
        assert_eq!(json["delegate"], "US");
    }

    #[test]
    fn deserializes_each_kind_from_tagged_json() {
        for kind in MotionKind::all() {
            let motion = sample(*kind);
            let json = serde_json::to_string(&motion).unwrap();
            let back: Motion = serde_json::from_str(&json).unwrap();
            assert_eq!(back, motion);
        }
    }
}
