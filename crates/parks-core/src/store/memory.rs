// # Memory Park Store
//
// In-memory implementation of ParkStore.
//
// ## Purpose
//
// Holds the park collection for the lifetime of the process. Nothing is
// persisted; a restart begins again from the seed set.
//
// ## Concurrency
//
// The collection and the identifier generator live behind one `RwLock`.
// `append` and `patch` take the write lock for the whole mutation,
// including identifier assignment and event emission, so concurrent
// writers can never lose an update and observers see events in mutation
// order.

use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::model::{NewPark, Park, ParkId, ParkPatch, seed};
use crate::store::ids::IdGenerator;
use crate::traits::park_store::{ParkStore, StoreEvent};

#[derive(Debug)]
struct Inner {
    parks: Vec<Park>,
    ids: IdGenerator,
}

/// In-memory park store implementation
///
/// Cloning the store is cheap and every clone shares the same collection
/// and event channel.
///
/// # Example
///
/// ```rust
/// use parks_core::{MemoryParkStore, NewPark, ParkStore};
///
/// let store = MemoryParkStore::with_windsor_seed();
/// let mut events = store.subscribe();
///
/// let park = store.append(NewPark::new("Test Park", "1 Main St").with_rating(3.0));
///
/// assert_eq!(store.len(), 6);
/// assert!(park.is_user_submitted());
/// assert_eq!(events.try_recv().unwrap().id(), &park.id);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryParkStore {
    inner: Arc<RwLock<Inner>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryParkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_parks(Vec::new())
    }

    /// Create a store holding the five Windsor seed parks
    pub fn with_windsor_seed() -> Self {
        Self::with_parks(seed::windsor_parks())
    }

    /// Create a store holding `parks` in the given order
    pub fn with_parks(parks: Vec<Park>) -> Self {
        Self::build(parks, StoreConfig::default().event_channel_capacity)
    }

    /// Create a store from configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self, crate::Error> {
        config.validate()?;
        Ok(Self::build(config.seed.parks(), config.event_channel_capacity))
    }

    fn build(parks: Vec<Park>, event_channel_capacity: usize) -> Self {
        // Keep generated ids clear of any numeric seed ids.
        let floor = parks.iter().filter_map(|p| p.id.numeric()).max().unwrap_or(0);
        let (events, _) = broadcast::channel(event_channel_capacity.max(1));

        debug!("Park store created with {} seed record(s)", parks.len());

        Self {
            inner: Arc::new(RwLock::new(Inner {
                parks,
                ids: IdGenerator::starting_after(floor),
            })),
            events,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("Park store lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("Park store lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }
}

impl Default for MemoryParkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkStore for MemoryParkStore {
    fn list(&self) -> Vec<Park> {
        self.read().parks.clone()
    }

    fn get(&self, id: &ParkId) -> Option<Park> {
        self.read().parks.iter().find(|p| &p.id == id).cloned()
    }

    fn len(&self) -> usize {
        self.read().parks.len()
    }

    fn append(&self, candidate: NewPark) -> Park {
        let mut guard = self.write();
        let now = Utc::now();
        let id = guard.ids.next_at(now);
        let park = Park::from_candidate(id, candidate, now);
        guard.parks.push(park.clone());

        info!("Added park {} ({}), {} total", park.id, park.name, guard.parks.len());
        self.emit(StoreEvent::Appended {
            id: park.id.clone(),
        });

        park
    }

    fn patch(&self, id: &ParkId, patch: ParkPatch) -> Option<Park> {
        let mut guard = self.write();
        let Some(park) = guard.parks.iter_mut().find(|p| &p.id == id) else {
            debug!("Patch for unknown park {}, ignoring", id);
            return None;
        };

        patch.apply_to(park);
        let updated = park.clone();

        debug!("Patched park {}", id);
        self.emit(StoreEvent::Patched { id: id.clone() });

        Some(updated)
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn watch(&self) -> Pin<Box<dyn Stream<Item = StoreEvent> + Send + 'static>> {
        let stream = BroadcastStream::new(self.events.subscribe()).filter_map(|event| event.ok());
        Box::pin(stream)
    }
}
