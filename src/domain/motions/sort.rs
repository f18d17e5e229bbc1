//! Motion ordering: configurable, deterministic priority sort.
//!
//! A [`SortOrder`] is an ordered list of buckets. Each motion lands in the
//! first bucket whose kind set contains its effective kind (`ext` when the
//! motion is an extension), and ties within a bucket are broken by that
//! bucket's property keys. The comparator is pure; the order is always passed
//! in explicitly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use super::{Motion, MotionKind};

/// A motion kind as seen by the sorter.
///
/// Extends [`MotionKind`] with `ext`: an extension sorts by its extension
/// status, not its underlying kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Mod,
    Unmod,
    Rr,
    Other,
    Ext,
}

impl SortKind {
    /// Returns the effective sort kind of a motion.
    pub fn of(motion: &Motion) -> SortKind {
        if motion.is_extension() {
            SortKind::Ext
        } else {
            motion.kind().into()
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SortKind::Mod => "mod",
            SortKind::Unmod => "unmod",
            SortKind::Rr => "rr",
            SortKind::Other => "other",
            SortKind::Ext => "ext",
        }
    }
}

impl From<MotionKind> for SortKind {
    fn from(kind: MotionKind) -> Self {
        match kind {
            MotionKind::Moderated => SortKind::Mod,
            MotionKind::Unmoderated => SortKind::Unmod,
            MotionKind::RoundRobin => SortKind::Rr,
            MotionKind::Other => SortKind::Other,
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A property motions can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortProperty {
    TotalTime,
    SpeakingTime,
    Topic,
    Delegate,
    NSpeakers,
}

impl SortProperty {
    fn as_str(&self) -> &'static str {
        match self {
            SortProperty::TotalTime => "totalTime",
            SortProperty::SpeakingTime => "speakingTime",
            SortProperty::Topic => "topic",
            SortProperty::Delegate => "delegate",
            SortProperty::NSpeakers => "nSpeakers",
        }
    }
}

impl fmt::Display for SortProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tie-break key: a property and a direction.
///
/// Descending is the house convention (longer and larger first), so
/// `ascending` defaults to false both in code and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderKey {
    pub property: SortProperty,
    #[serde(default)]
    pub ascending: bool,
}

impl SortOrderKey {
    /// A descending key for the given property.
    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            ascending: false,
        }
    }

    /// An ascending key for the given property.
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            ascending: true,
        }
    }
}

/// One bucket of a sort order: the kinds it captures and its tie-break keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub kind: Vec<SortKind>,
    pub order: Vec<SortOrderKey>,
}

/// A full ordering policy: buckets in precedence order.
///
/// Motions matching no bucket sort last, preserving their input order.
pub type SortOrder = Vec<SortEntry>;

/// The default ordering policy: extensions first, then round robins by
/// speaking time, unmoderated caucuses by total time, and moderated caucuses
/// by speaker count then total time (all descending).
pub fn default_sort_order() -> SortOrder {
    vec![
        SortEntry {
            kind: vec![SortKind::Ext],
            order: vec![],
        },
        SortEntry {
            kind: vec![SortKind::Rr],
            order: vec![SortOrderKey::desc(SortProperty::SpeakingTime)],
        },
        SortEntry {
            kind: vec![SortKind::Unmod],
            order: vec![SortOrderKey::desc(SortProperty::TotalTime)],
        },
        SortEntry {
            kind: vec![SortKind::Mod],
            order: vec![
                SortOrderKey::desc(SortProperty::NSpeakers),
                SortOrderKey::desc(SortProperty::TotalTime),
            ],
        },
    ]
}

/// Errors raised by sort-order configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("sort property '{property}' is not supported for kind '{kind}'")]
    UnsupportedSortProperty {
        kind: SortKind,
        property: SortProperty,
    },
}

/// Returns whether motions of `kind` can be ordered by `property`.
///
/// `ext` spans moderated and unmoderated extensions, so only the properties
/// both carry are supported for it.
pub fn kind_supports_property(kind: SortKind, property: SortProperty) -> bool {
    match kind {
        SortKind::Mod | SortKind::Rr => true,
        SortKind::Unmod | SortKind::Ext => matches!(
            property,
            SortProperty::TotalTime | SortProperty::Delegate
        ),
        SortKind::Other => matches!(
            property,
            SortProperty::TotalTime | SortProperty::Topic | SortProperty::Delegate
        ),
    }
}

/// Checks that every bucket only orders its kinds by properties they carry.
///
/// # Errors
///
/// - `UnsupportedSortProperty` naming the first offending pair
pub fn validate_sort_order(order: &SortOrder) -> Result<(), SortError> {
    for entry in order {
        for kind in &entry.kind {
            for key in &entry.order {
                if !kind_supports_property(*kind, key.property) {
                    return Err(SortError::UnsupportedSortProperty {
                        kind: *kind,
                        property: key.property,
                    });
                }
            }
        }
    }
    Ok(())
}

/// A motion's value under one sort property.
///
/// Numbers order numerically, text by code point. A given property always
/// yields the same variant, so cross-variant comparison never happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Number(u64),
    Text(&'a str),
}

fn sort_value(motion: &Motion, property: SortProperty) -> Option<SortValue<'_>> {
    match property {
        SortProperty::TotalTime => match motion {
            // A round robin's total time is derived from its parts.
            Motion::RoundRobin {
                speaking_time,
                total_speakers,
                ..
            } => Some(SortValue::Number(
                speaking_time.saturating_mul(u64::from(*total_speakers)),
            )),
            _ => motion.total_time().map(SortValue::Number),
        },
        SortProperty::SpeakingTime => motion.speaking_time().map(SortValue::Number),
        SortProperty::Topic => motion.topic().map(SortValue::Text),
        SortProperty::Delegate => Some(SortValue::Text(motion.delegate().as_str())),
        SortProperty::NSpeakers => motion.n_speakers().map(SortValue::Number),
    }
}

fn bucket<'a>(order: &'a SortOrder, motion: &Motion) -> (usize, Option<&'a SortEntry>) {
    let kind = SortKind::of(motion);
    order
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.kind.contains(&kind))
        .map_or((order.len(), None), |(index, entry)| (index, Some(entry)))
}

/// Builds a comparator over the given ordering policy.
///
/// # Panics
///
/// Panics if a tie-break key names a property the motion's kind does not
/// carry. That is a configuration bug; run [`validate_sort_order`] first (or
/// use [`sort_motions`], which does).
pub fn compare_motions(order: &SortOrder) -> impl Fn(&Motion, &Motion) -> Ordering + '_ {
    move |a, b| {
        let (index_a, entry_a) = bucket(order, a);
        let (index_b, _) = bucket(order, b);
        match index_a.cmp(&index_b) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        let Some(entry) = entry_a else {
            // Neither motion matched a bucket; stable sort keeps input order.
            return Ordering::Equal;
        };

        for key in &entry.order {
            let value_a = require_value(a, key.property);
            let value_b = require_value(b, key.property);
            let compared = if key.ascending {
                value_a.cmp(&value_b)
            } else {
                value_b.cmp(&value_a)
            };
            if compared != Ordering::Equal {
                return compared;
            }
        }
        Ordering::Equal
    }
}

fn require_value(motion: &Motion, property: SortProperty) -> SortValue<'_> {
    match sort_value(motion, property) {
        Some(value) => value,
        None => panic!(
            "{}",
            SortError::UnsupportedSortProperty {
                kind: SortKind::of(motion),
                property,
            }
        ),
    }
}

/// Sorts motions in place under the given policy.
///
/// The sort is stable: motions the policy does not distinguish keep their
/// submission order.
///
/// # Errors
///
/// - `UnsupportedSortProperty` if the policy is invalid; the slice is
///   untouched
pub fn sort_motions(motions: &mut [Motion], order: &SortOrder) -> Result<(), SortError> {
    validate_sort_order(order)?;
    motions.sort_by(compare_motions(order));
    Ok(())
}
