//! Motion validation: raw form input in, validated [`Motion`] out.

use thiserror::Error;

use crate::domain::delegates::DelegateDirectory;
use crate::domain::foundation::time::parse_time;
use crate::domain::foundation::DelegateId;

use super::{Field, Motion, MotionInput, MotionKind};

/// A validation failure for one motion form submission.
///
/// Validation is fail-fast: the first failing check wins and nothing else is
/// evaluated. `Display` renders the message shown next to the form, and
/// [`field`](MotionError::field) names the input it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("{} is a required field", .field.label())]
    RequiredField { field: Field },

    #[error("'{kind}' is not a valid motion kind")]
    InvalidKind { kind: String },

    #[error("{name} is not a delegate")]
    UnknownDelegate { name: String },

    #[error("{name} is not a present delegate")]
    DelegateNotPresent { name: String },

    #[error("{} is not a valid time string (mm:ss)", .field.label())]
    InvalidTimeFormat { field: Field },

    #[error("{} is not a valid number", .field.label())]
    InvalidNumber { field: Field },

    #[error("Total time cannot be evenly divided among speakers")]
    IndivisibleSpeakingTime,
}

impl MotionError {
    /// Returns the form field this error should be attached to.
    pub fn field(&self) -> Field {
        match self {
            MotionError::RequiredField { field }
            | MotionError::InvalidTimeFormat { field }
            | MotionError::InvalidNumber { field } => *field,
            MotionError::InvalidKind { .. } => Field::Kind,
            MotionError::UnknownDelegate { .. } | MotionError::DelegateNotPresent { .. } => {
                Field::Delegate
            }
            MotionError::IndivisibleSpeakingTime => Field::SpeakingTime,
        }
    }
}

/// Validates raw form input into a [`Motion`].
///
/// Checks run in a fixed order: delegate, kind, then the kind's declared
/// fields in field-table order. The first failure is returned; no partial
/// motion escapes. Fields the kind does not declare are ignored.
///
/// The directory is a read-only snapshot; the proposing delegate must be on
/// it, enabled, and present.
///
/// # Errors
///
/// See [`MotionError`] for the failure taxonomy.
pub fn validate_motion(
    input: &MotionInput,
    delegates: &DelegateDirectory,
) -> Result<Motion, MotionError> {
    let delegate = resolve_delegate(&input.delegate, delegates)?;
    let kind: MotionKind = input
        .kind
        .parse()
        .map_err(|()| MotionError::InvalidKind {
            kind: input.kind.clone(),
        })?;

    let id = input.id;
    match kind {
        MotionKind::Moderated => {
            let total_time = require_time(input.total_time.as_deref(), Field::TotalTime)?;
            let speaking_time = require_time(input.speaking_time.as_deref(), Field::SpeakingTime)?;
            let topic = require_topic(input.topic.as_deref())?;
            if total_time % speaking_time != 0 {
                return Err(MotionError::IndivisibleSpeakingTime);
            }
            Ok(Motion::Moderated {
                id,
                delegate,
                total_time,
                speaking_time,
                topic,
                is_extension: input.is_extension,
            })
        }
        MotionKind::Unmoderated => {
            let total_time = require_time(input.total_time.as_deref(), Field::TotalTime)?;
            Ok(Motion::Unmoderated {
                id,
                delegate,
                total_time,
                is_extension: input.is_extension,
            })
        }
        MotionKind::RoundRobin => {
            let speaking_time = require_time(input.speaking_time.as_deref(), Field::SpeakingTime)?;
            let topic = require_topic(input.topic.as_deref())?;
            let total_speakers =
                require_count(input.total_speakers.as_deref(), Field::TotalSpeakers)?;
            Ok(Motion::RoundRobin {
                id,
                delegate,
                speaking_time,
                topic,
                total_speakers,
            })
        }
        MotionKind::Other => {
            let total_time = require_time(input.total_time.as_deref(), Field::TotalTime)?;
            let topic = require_topic(input.topic.as_deref())?;
            Ok(Motion::Other {
                id,
                delegate,
                total_time,
                topic,
            })
        }
    }
}

fn resolve_delegate(
    name: &str,
    delegates: &DelegateDirectory,
) -> Result<DelegateId, MotionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MotionError::RequiredField {
            field: Field::Delegate,
        });
    }
    let delegate = delegates
        .find_by_name(name)
        .ok_or_else(|| MotionError::UnknownDelegate {
            name: name.to_string(),
        })?;
    if !delegate.is_present() {
        return Err(MotionError::DelegateNotPresent {
            name: name.to_string(),
        });
    }
    Ok(delegate.id().clone())
}

fn require_time(value: Option<&str>, field: Field) -> Result<u64, MotionError> {
    let raw = non_empty(value).ok_or(MotionError::RequiredField { field })?;
    match parse_time(raw) {
        Some(secs) if secs > 0 => Ok(secs),
        _ => Err(MotionError::InvalidTimeFormat { field }),
    }
}

fn require_topic(value: Option<&str>) -> Result<String, MotionError> {
    non_empty(value)
        .map(str::to_string)
        .ok_or(MotionError::RequiredField { field: Field::Topic })
}

fn require_count(value: Option<&str>, field: Field) -> Result<u32, MotionError> {
    let raw = non_empty(value).ok_or(MotionError::RequiredField { field })?;
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MotionError::InvalidNumber { field }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
