//! Shared fixtures for the store contract tests

#![allow(dead_code)]

use parks_core::{MemoryParkStore, NewPark, Park, ParkId, StoreEvent};
use std::collections::HashMap;
use tokio::sync::broadcast;

/// A store holding exactly the five Windsor seed parks
pub fn seeded_store() -> MemoryParkStore {
    MemoryParkStore::with_windsor_seed()
}

/// The candidate used by the reference scenario
pub fn test_park() -> NewPark {
    NewPark::new("Test Park", "1 Main St")
        .with_rating(3.0)
        .with_description("")
}

/// A distinct candidate per index
pub fn numbered_candidate(n: usize) -> NewPark {
    NewPark::new(format!("Park {}", n), format!("{} Riverside Dr", n))
        .with_rating((n % 6) as f64)
        .with_features(["Fenced", "Parking"])
        .with_description(format!("Submitted park number {}", n))
}

/// Index records by identifier
pub fn by_id(parks: &[Park]) -> HashMap<ParkId, Park> {
    parks.iter().map(|p| (p.id.clone(), p.clone())).collect()
}

/// Assert that a stored record carries exactly the candidate's fields
pub fn assert_matches_candidate(park: &Park, candidate: &NewPark) {
    assert_eq!(park.name, candidate.name);
    assert_eq!(park.address, candidate.address);
    assert_eq!(park.rating, candidate.rating);
    assert_eq!(park.features, candidate.features);
    assert_eq!(park.description, candidate.description);
}

/// Drain every event currently buffered for `rx`
pub fn drain(rx: &mut broadcast::Receiver<StoreEvent>) -> Vec<StoreEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
