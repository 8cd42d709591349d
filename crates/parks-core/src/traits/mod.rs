//! Core traits for the parks directory
//!
//! - [`ParkStore`]: Owner of the park collection

pub mod park_store;

pub use park_store::{ParkStore, StoreEvent};
