// # Record Model
//
// The park record, its append candidate and patch types, and the seed set.

pub mod park;
pub mod seed;

pub use park::{NewPark, Park, ParkId, ParkPatch, USER_SENTINEL};
