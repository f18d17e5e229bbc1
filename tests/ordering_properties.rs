//! Property tests for the time codec and the motion comparator.

use std::cmp::Ordering;

use proptest::prelude::*;

use dais::domain::foundation::time::{parse_time, stringify_time, MAX_SECONDS};
use dais::domain::foundation::{DelegateId, MotionId};
use dais::domain::motions::{compare_motions, default_sort_order, sort_motions, Motion};

fn delegate_strategy() -> impl Strategy<Value = DelegateId> {
    prop_oneof![Just("US"), Just("FR"), Just("GB"), Just("CN"), Just("RU")]
        .prop_map(DelegateId::new)
}

fn motion_strategy() -> impl Strategy<Value = Motion> {
    let moderated = (delegate_strategy(), 1u64..=120, 1u64..=30, any::<bool>()).prop_map(
        |(delegate, speaking_time, speakers, is_extension)| Motion::Moderated {
            id: MotionId::new(),
            delegate,
            total_time: speaking_time * speakers,
            speaking_time,
            topic: "Topic".to_string(),
            is_extension,
        },
    );
    let unmoderated = (delegate_strategy(), 1u64..=3600, any::<bool>()).prop_map(
        |(delegate, total_time, is_extension)| Motion::Unmoderated {
            id: MotionId::new(),
            delegate,
            total_time,
            is_extension,
        },
    );
    let round_robin = (delegate_strategy(), 1u64..=120, 1u32..=60).prop_map(
        |(delegate, speaking_time, total_speakers)| Motion::RoundRobin {
            id: MotionId::new(),
            delegate,
            speaking_time,
            topic: "Topic".to_string(),
            total_speakers,
        },
    );
    let other = (delegate_strategy(), 1u64..=3600).prop_map(|(delegate, total_time)| {
        Motion::Other {
            id: MotionId::new(),
            delegate,
            total_time,
            topic: "Topic".to_string(),
        }
    });
    prop_oneof![moderated, unmoderated, round_robin, other]
}

proptest! {
    #[test]
    fn stringify_then_parse_is_identity(secs in 0u64..=MAX_SECONDS) {
        let rendered = stringify_time(secs).unwrap();
        prop_assert_eq!(parse_time(&rendered), Some(secs));
    }

    #[test]
    fn comparator_is_antisymmetric(a in motion_strategy(), b in motion_strategy()) {
        let order = default_sort_order();
        let compare = compare_motions(&order);
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn comparator_is_transitive(
        a in motion_strategy(),
        b in motion_strategy(),
        c in motion_strategy(),
    ) {
        let order = default_sort_order();
        let compare = compare_motions(&order);
        if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn sorted_floor_is_ordered_under_the_comparator(
        mut motions in proptest::collection::vec(motion_strategy(), 0..20),
    ) {
        let order = default_sort_order();
        sort_motions(&mut motions, &order).unwrap();
        let compare = compare_motions(&order);
        for pair in motions.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn sorting_preserves_input_order_among_ties(
        totals in proptest::collection::vec(1u64..=5, 2..10),
    ) {
        // Delegations double as input-order markers.
        let mut motions: Vec<Motion> = totals
            .iter()
            .enumerate()
            .map(|(i, total_time)| Motion::Unmoderated {
                id: MotionId::new(),
                delegate: DelegateId::new(format!("D{i:02}")),
                total_time: *total_time,
                is_extension: false,
            })
            .collect();
        let order = default_sort_order();
        sort_motions(&mut motions, &order).unwrap();
        for pair in motions.windows(2) {
            if pair[0].total_time() == pair[1].total_time() {
                prop_assert!(pair[0].delegate() < pair[1].delegate());
            }
        }
    }
}
