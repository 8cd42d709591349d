// # Park Store Implementations
//
// This module provides the in-memory implementation of the ParkStore
// trait and the identifier generator it uses.

pub mod ids;
pub mod memory;

pub use ids::IdGenerator;
pub use memory::MemoryParkStore;
