//! Contract Test: Patch
//!
//! Constraints verified:
//! - Only the targeted record's set fields change
//! - Record order and count are preserved
//! - Unknown identifiers leave the collection unchanged

mod common;

use common::*;
use parks_core::{ParkId, ParkPatch, ParkStore};

#[test]
fn rating_patch_changes_only_rating() {
    let store = seeded_store();
    let appended = store.append(numbered_candidate(1));
    let before = store.list();

    let updated = store
        .patch(&ParkId::from("3"), ParkPatch::new().rating(5.0))
        .expect("seed park 3 exists");

    let after = store.list();
    assert_eq!(after.len(), before.len());

    for (old, new) in before.iter().zip(&after) {
        if old.id.as_str() == "3" {
            let mut expected = old.clone();
            expected.rating = 5.0;
            assert_eq!(new, &expected);
            assert_eq!(&updated, &expected);
        } else {
            assert_eq!(old, new);
        }
    }

    assert_eq!(store.get(&appended.id), Some(appended));
}

#[test]
fn unknown_id_is_a_silent_no_op() {
    let store = seeded_store();
    store.append(numbered_candidate(7));
    let before = store.list();

    let result = store.patch(
        &ParkId::from("does-not-exist"),
        ParkPatch::new().name("Nope").rating(1.0),
    );

    assert!(result.is_none());
    assert_eq!(store.list(), before);
}

#[test]
fn patch_keeps_identity_and_provenance() {
    let store = seeded_store();
    let park = store.append(numbered_candidate(3));

    let updated = store
        .patch(
            &park.id,
            ParkPatch::new()
                .name("Renamed")
                .features(["Beach"])
                .description("now with sand"),
        )
        .expect("appended park exists");

    assert_eq!(updated.id, park.id);
    assert_eq!(updated.added_by, park.added_by);
    assert_eq!(updated.date_added, park.date_added);
    assert_eq!(updated.address, park.address);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.features, vec!["Beach".to_string()]);

    // Position in insertion order unchanged
    assert_eq!(store.list().last(), Some(&updated));
}

#[test]
fn empty_patch_leaves_record_equal() {
    let store = seeded_store();
    let before = store.list();

    let updated = store.patch(&ParkId::from("1"), ParkPatch::new());

    assert_eq!(updated.as_ref(), before.first());
    assert_eq!(store.list(), before);
}
