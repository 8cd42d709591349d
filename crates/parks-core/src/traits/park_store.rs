// # Park Store Trait
//
// Defines the interface every screen uses to read and mutate the park
// collection.
//
// ## Purpose
//
// The store is the single source of truth for the directory. Screens read
// the full collection on every render, the submission flow appends, and
// anything else that needs to change a record goes through `patch`.
//
// ## Observation
//
// Instead of framework-driven re-rendering, the store broadcasts a
// [`StoreEvent`] after each successful mutation. Observers either hold a
// raw `broadcast::Receiver` from `subscribe()` or consume the `watch()`
// stream.
//
// ## Usage
//
// ```rust
// use parks_core::{MemoryParkStore, NewPark, ParkPatch, ParkStore};
//
// let store = MemoryParkStore::with_windsor_seed();
// let park = store.append(NewPark::new("Test Park", "1 Main St").with_rating(3.0));
// store.patch(&park.id, ParkPatch::new().rating(5.0));
// assert_eq!(store.len(), 6);
// ```

use std::pin::Pin;
use tokio::sync::broadcast;
use tokio_stream::Stream;

use crate::model::{NewPark, Park, ParkId, ParkPatch};

/// Notification emitted after a successful store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new record was appended
    Appended {
        id: ParkId,
    },

    /// An existing record was patched
    Patched {
        id: ParkId,
    },
}

impl StoreEvent {
    /// Identifier of the record the event concerns
    pub fn id(&self) -> &ParkId {
        match self {
            StoreEvent::Appended { id } | StoreEvent::Patched { id } => id,
        }
    }
}

/// Trait for park store implementations
///
/// All operations run synchronously to completion and never fail.
/// Implementations must treat `append` and `patch` as a single critical
/// section so that concurrent writers never lose an update.
pub trait ParkStore: Send + Sync {
    /// All records, seed and appended, in insertion order
    fn list(&self) -> Vec<Park>;

    /// Look up a single record by identifier
    fn get(&self, id: &ParkId) -> Option<Park>;

    /// Number of records currently held
    fn len(&self) -> usize;

    /// Whether the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a candidate as a new user-submitted record
    ///
    /// Assigns a fresh identifier, stamps `addedBy` with the user sentinel
    /// and `dateAdded` with the current time. Existing records are left
    /// untouched.
    ///
    /// # Returns
    ///
    /// The record as stored.
    fn append(&self, candidate: NewPark) -> Park;

    /// Merge a partial update into the record matching `id`
    ///
    /// # Returns
    ///
    /// - `Some(Park)`: The record after the update
    /// - `None`: No record matches `id`; the collection is unchanged
    fn patch(&self, id: &ParkId, patch: ParkPatch) -> Option<Park>;

    /// Subscribe to store events
    ///
    /// Only events emitted after this call are received.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;

    /// Stream of store events
    ///
    /// Convenience wrapper over [`ParkStore::subscribe`]. Events missed
    /// because the observer lagged behind are skipped; call
    /// [`ParkStore::list`] to resynchronize.
    fn watch(&self) -> Pin<Box<dyn Stream<Item = StoreEvent> + Send + 'static>>;
}
