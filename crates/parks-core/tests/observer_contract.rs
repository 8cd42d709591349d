//! Contract Test: Observation
//!
//! Constraints verified:
//! - Observers are notified after every successful append and patch
//! - A patch miss produces no notification
//! - Every subscriber sees the same events in mutation order

mod common;

use common::*;
use parks_core::{ParkId, ParkPatch, ParkStore, StoreEvent};
use tokio_stream::StreamExt;

#[test]
fn every_mutation_is_broadcast() {
    let store = seeded_store();
    let mut first = store.subscribe();
    let mut second = store.subscribe();

    let park = store.append(test_park());
    store.patch(&park.id, ParkPatch::new().rating(4.0));
    store.patch(&ParkId::from("missing"), ParkPatch::new().rating(4.0));

    let expected = vec![
        StoreEvent::Appended {
            id: park.id.clone(),
        },
        StoreEvent::Patched { id: park.id },
    ];
    assert_eq!(drain(&mut first), expected);
    assert_eq!(drain(&mut second), expected);
}

#[test]
fn reads_are_silent() {
    let store = seeded_store();
    let mut rx = store.subscribe();

    let _ = store.list();
    let _ = store.get(&ParkId::from("1"));
    let _ = store.len();

    assert!(drain(&mut rx).is_empty());
}

#[test]
fn late_subscribers_only_see_later_events() {
    let store = seeded_store();
    store.append(numbered_candidate(1));

    let mut rx = store.subscribe();
    let park = store.append(numbered_candidate(2));

    assert_eq!(drain(&mut rx), vec![StoreEvent::Appended { id: park.id }]);
}

#[tokio::test]
async fn observer_task_re_reads_store_on_change() {
    let store = seeded_store();
    let mut events = store.watch();

    let observer = {
        let store = store.clone();
        tokio::spawn(async move {
            let mut seen = Vec::new();
            while let Some(event) = events.next().await {
                // Re-render: read the full collection again
                seen.push((event, store.len()));
                if seen.len() == 2 {
                    break;
                }
            }
            seen
        })
    };

    let a = store.append(numbered_candidate(1));
    let b = store.append(numbered_candidate(2));

    let seen = tokio::time::timeout(std::time::Duration::from_secs(5), observer)
        .await
        .expect("observer finished")
        .expect("observer task panicked");

    assert_eq!(seen[0].0, StoreEvent::Appended { id: a.id });
    assert_eq!(seen[1].0, StoreEvent::Appended { id: b.id });
    assert!(seen.iter().all(|(_, len)| *len >= 6));
}

#[test]
fn lagging_subscriber_is_told_it_lagged() {
    let config = parks_core::StoreConfig {
        event_channel_capacity: 2,
        ..Default::default()
    };
    let store = parks_core::MemoryParkStore::from_config(&config).expect("valid config");
    let mut rx = store.subscribe();

    for n in 0..5 {
        store.append(numbered_candidate(n));
    }

    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Lagged(_))
    ));
    // The store itself is unaffected
    assert_eq!(store.len(), 10);
}
