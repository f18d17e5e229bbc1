//! Integration tests for the motion floor flow.
//!
//! These tests drive the stack the way the UI does:
//! 1. Open a session from a roster preset and take attendance
//! 2. Submit raw form input (JSON payloads) through the service
//! 3. Read the floor back in priority order and select the top motion
//!
//! Uses the in-memory adapters; no external dependencies.

use std::sync::Arc;

use dais::adapters::{InMemorySessionStore, InMemorySettingsStore};
use dais::application::SessionService;
use dais::domain::delegates::presets;
use dais::domain::foundation::{DelegateId, Presence};
use dais::domain::motions::{
    default_sort_order, validate_motion, MotionInput, MotionKind, SortKind,
};

fn service() -> SessionService {
    SessionService::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(InMemorySettingsStore::new()),
    )
}

async fn open_unsc_session(service: &SessionService) {
    let session = service.open_session_from_preset("unsc").await.unwrap();
    for delegate in session.delegates().iter() {
        service
            .set_presence(delegate.id(), Presence::PresentAndVoting)
            .await
            .unwrap();
    }
}

fn form_input(json: &str) -> MotionInput {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn floor_orders_extensions_then_rr_then_unmod_then_mod() {
    let service = service();
    open_unsc_session(&service).await;

    // Submitted in the opposite of their priority order.
    service
        .submit_motion(&form_input(
            r#"{"kind": "mod", "delegate": "China", "totalTime": "10:00",
                "speakingTime": "1:00", "topic": "Sanctions"}"#,
        ))
        .await
        .unwrap();
    service
        .submit_motion(&form_input(
            r#"{"kind": "rr", "delegate": "France", "speakingTime": "0:30",
                "topic": "Position statements", "totalSpeakers": "15"}"#,
        ))
        .await
        .unwrap();
    service
        .submit_motion(&form_input(
            r#"{"kind": "unmod", "delegate": "UK", "totalTime": "15:00"}"#,
        ))
        .await
        .unwrap();
    service
        .submit_motion(&form_input(
            r#"{"kind": "mod", "delegate": "usa", "totalTime": "5:00",
                "speakingTime": "1:00", "topic": "Extension", "isExtension": true}"#,
        ))
        .await
        .unwrap();

    let ordered = service.ordered_motions().await.unwrap();
    let kinds: Vec<_> = ordered.iter().map(SortKind::of).collect();
    assert_eq!(
        kinds,
        [SortKind::Ext, SortKind::Rr, SortKind::Unmod, SortKind::Mod]
    );

    let delegates: Vec<_> = ordered.iter().map(|m| m.delegate().as_str()).collect();
    assert_eq!(delegates, ["US", "FR", "GB", "CN"]);
}

#[tokio::test]
async fn selecting_the_top_motion_credits_its_proposer() {
    let service = service();
    open_unsc_session(&service).await;

    service
        .submit_motion(&form_input(
            r#"{"kind": "unmod", "delegate": "Japan", "totalTime": "20:00"}"#,
        ))
        .await
        .unwrap();
    service
        .submit_motion(&form_input(
            r#"{"kind": "mod", "delegate": "Malta", "totalTime": "12:00",
                "speakingTime": "1:30", "topic": "Humanitarian corridors"}"#,
        ))
        .await
        .unwrap();

    let selected = service.select_next_motion().await.unwrap().unwrap();
    assert_eq!(selected.kind(), MotionKind::Unmoderated);
    assert_eq!(selected.delegate(), &DelegateId::new("JP"));

    let session = service.active_session().await.unwrap().unwrap();
    let jp = session.delegates().get(&DelegateId::new("JP")).unwrap();
    assert_eq!(jp.stats().motions_proposed, 1);
    assert_eq!(jp.stats().motions_accepted, 1);
    let mt = session.delegates().get(&DelegateId::new("MT")).unwrap();
    assert_eq!(mt.stats().motions_accepted, 0);
}

#[tokio::test]
async fn rejected_input_never_reaches_the_floor() {
    let service = service();
    open_unsc_session(&service).await;

    let attempts = [
        r#"{"kind": "mod", "delegate": "Wakanda", "totalTime": "10:00",
            "speakingTime": "1:00", "topic": "T"}"#,
        r#"{"kind": "mod", "delegate": "China", "totalTime": "10:00",
            "speakingTime": "0:45", "topic": "T"}"#,
        r#"{"kind": "rr", "delegate": "France", "speakingTime": "0:30",
            "topic": "T", "totalSpeakers": "zero"}"#,
        r#"{"kind": "caucus", "delegate": "China"}"#,
    ];
    for attempt in attempts {
        assert!(service.submit_motion(&form_input(attempt)).await.is_err());
    }

    assert!(service.ordered_motions().await.unwrap().is_empty());
}

#[test]
fn validated_motions_survive_the_edit_round_trip() {
    let mut directory = presets::load_preset("unsc").unwrap();
    let roster: Vec<_> = directory.iter().map(|d| d.id().clone()).collect();
    for id in roster {
        directory.set_presence(&id, Presence::Present).unwrap();
    }

    let inputs = [
        r#"{"kind": "mod", "delegate": "prc", "totalTime": "10:00",
            "speakingTime": "1:00", "topic": "Sanctions"}"#,
        r#"{"kind": "unmod", "delegate": "Slovenia", "totalTime": "90",
            "isExtension": true}"#,
        r#"{"kind": "rr", "delegate": "rok", "speakingTime": "45",
            "topic": "Statements", "totalSpeakers": "15"}"#,
        r#"{"kind": "other", "delegate": "Switzerland", "totalTime": "2:00",
            "topic": "Straw poll"}"#,
    ];

    for raw in inputs {
        let motion = validate_motion(&form_input(raw), &directory).unwrap();
        let edited = motion.to_input(Some(&directory));
        let again = validate_motion(&edited, &directory).unwrap();
        assert_eq!(again, motion, "round trip changed {raw}");
    }
}

#[tokio::test]
async fn custom_sort_order_changes_the_floor() {
    let service = service();
    open_unsc_session(&service).await;

    service
        .submit_motion(&form_input(
            r#"{"kind": "unmod", "delegate": "Japan", "totalTime": "5:00"}"#,
        ))
        .await
        .unwrap();
    service
        .submit_motion(&form_input(
            r#"{"kind": "unmod", "delegate": "Malta", "totalTime": "20:00"}"#,
        ))
        .await
        .unwrap();

    // Default policy: longest unmod first.
    let ordered = service.ordered_motions().await.unwrap();
    assert_eq!(ordered[0].delegate(), &DelegateId::new("MT"));

    // Flip the unmod bucket to ascending.
    let mut settings = service.settings().await.unwrap();
    for entry in &mut settings.sort_order {
        for key in &mut entry.order {
            key.ascending = true;
        }
    }
    service.update_settings(settings).await.unwrap();

    let ordered = service.ordered_motions().await.unwrap();
    assert_eq!(ordered[0].delegate(), &DelegateId::new("JP"));

    assert_eq!(
        service.settings().await.unwrap().sort_order.len(),
        default_sort_order().len()
    );
}
