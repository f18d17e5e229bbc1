//! Raw motion input as captured from a form, before validation.

use serde::{Deserialize, Serialize};

use crate::domain::delegates::DelegateDirectory;
use crate::domain::foundation::time::stringify_time;
use crate::domain::foundation::MotionId;

use super::Motion;

/// An unvalidated motion as entered by the chair.
///
/// Every kind-specific field is an optional free-text string; which ones are
/// required, and how they parse, is decided by
/// [`validate_motion`](super::validate_motion) based on `kind`. The `id` is
/// generated when the form opens, so a default input already carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionInput {
    pub id: MotionId,
    pub kind: String,
    pub delegate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_speakers: Option<String>,
    pub is_extension: bool,
}

impl Motion {
    /// Converts a validated motion back into form input, for editing.
    ///
    /// Times are rendered through the shared colon format, and the delegate
    /// field carries the delegation's canonical name when the directory can
    /// resolve it (empty otherwise, leaving the field for re-entry).
    pub fn to_input(&self, delegates: Option<&DelegateDirectory>) -> MotionInput {
        let delegate = delegates
            .and_then(|dir| dir.get(self.delegate()))
            .map(|d| d.name().to_string())
            .unwrap_or_default();

        // Stored times are validated to the representable range.
        let render = |secs: u64| {
            stringify_time(secs).expect("validated motion times are within the representable range")
        };

        MotionInput {
            id: *self.id(),
            kind: self.kind().as_str().to_string(),
            delegate,
            total_time: self.total_time().map(render),
            speaking_time: self.speaking_time().map(render),
            topic: self.topic().map(str::to_string),
            total_speakers: self.total_speakers().map(|n| n.to_string()),
            is_extension: self.is_extension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delegates::Delegate;
    use crate::domain::foundation::DelegateId;

    fn directory() -> DelegateDirectory {
        DelegateDirectory::from_delegates(vec![Delegate::new(
            DelegateId::new("US"),
            "United States",
            vec!["USA".to_string()],
        )])
        .unwrap()
    }

    #[test]
    fn default_input_carries_a_generated_id() {
        let a = MotionInput::default();
        let b = MotionInput::default();
        assert_ne!(a.id, b.id);
        assert!(a.kind.is_empty());
        assert!(!a.is_extension);
    }

    #[test]
    fn to_input_renders_times_in_colon_format() {
        let motion = Motion::Moderated {
            id: MotionId::new(),
            delegate: DelegateId::new("US"),
            total_time: 600,
            speaking_time: 90,
            topic: "Sanctions".to_string(),
            is_extension: true,
        };

        let input = motion.to_input(Some(&directory()));
        assert_eq!(input.kind, "mod");
        assert_eq!(input.delegate, "United States");
        assert_eq!(input.total_time.as_deref(), Some("10:00"));
        assert_eq!(input.speaking_time.as_deref(), Some("01:30"));
        assert_eq!(input.topic.as_deref(), Some("Sanctions"));
        assert_eq!(input.total_speakers, None);
        assert!(input.is_extension);
    }

    #[test]
    fn to_input_leaves_delegate_empty_when_unresolvable() {
        let motion = Motion::Unmoderated {
            id: MotionId::new(),
            delegate: DelegateId::new("ZZ"),
            total_time: 300,
            is_extension: false,
        };

        assert_eq!(motion.to_input(Some(&directory())).delegate, "");
        assert_eq!(motion.to_input(None).delegate, "");
    }

    #[test]
    fn to_input_includes_round_robin_speaker_count() {
        let motion = Motion::RoundRobin {
            id: MotionId::new(),
            delegate: DelegateId::new("US"),
            speaking_time: 45,
            topic: "Opening remarks".to_string(),
            total_speakers: 15,
        };

        let input = motion.to_input(Some(&directory()));
        assert_eq!(input.kind, "rr");
        assert_eq!(input.speaking_time.as_deref(), Some("00:45"));
        assert_eq!(input.total_speakers.as_deref(), Some("15"));
        assert_eq!(input.total_time, None);
    }

    #[test]
    fn input_deserializes_from_camel_case_form_payload() {
        let json = r#"{
            "kind": "mod",
            "delegate": "usa",
            "totalTime": "10:00",
            "speakingTime": "1:00",
            "isExtension": false
        }"#;
        let input: MotionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind, "mod");
        assert_eq!(input.total_time.as_deref(), Some("10:00"));
        assert_eq!(input.topic, None);
    }
}
