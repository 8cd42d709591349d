// # parks-core
//
// Core library for the WindsorWolfPack dog park directory.
//
// ## Architecture Overview
//
// - **Park**: The single record type, with its append candidate and patch
// - **ParkStore**: Trait for the owner of the park collection
// - **MemoryParkStore**: Process-lifetime, in-memory store seeded at startup
// - **display**: Pure ordering and card transforms over `ParkStore::list`
// - **submission**: Presence checks applied before anything is appended
// - **handoff**: Record codec for the navigation boundary
//
// ## Design Principles
//
// 1. **Single owner**: All mutation goes through `append` and `patch`
// 2. **Total store**: Store operations cannot fail; errors live at the edges
// 3. **Explicit observation**: Mutations are broadcast as `StoreEvent`s
// 4. **Library-first**: Front ends hold no store logic of their own

pub mod config;
pub mod display;
pub mod error;
pub mod handoff;
pub mod model;
pub mod store;
pub mod submission;
pub mod traits;

// Re-export core types for convenience
pub use config::{DisplayConfig, ParksConfig, SeedSet, StoreConfig};
pub use display::{CollectionSummary, FeaturePreview, MarkerCategory, display_order};
pub use error::{Error, Result};
pub use model::{NewPark, Park, ParkId, ParkPatch, USER_SENTINEL};
pub use store::MemoryParkStore;
pub use submission::SubmissionForm;
pub use traits::{ParkStore, StoreEvent};
