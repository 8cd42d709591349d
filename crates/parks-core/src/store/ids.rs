// # Identifier Generation
//
// Identifiers are decimal strings derived from the current time in
// milliseconds. When the clock has not advanced since the previous
// identifier (or has gone backwards) the previous value is bumped by one,
// so identifiers are strictly increasing within one generator.
//
// This is "practically unique", not cryptographically unique: two
// generators in different processes can hand out the same value.

use chrono::{DateTime, Utc};

use crate::model::ParkId;

/// Strictly increasing, timestamp-derived identifier source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator with no previously issued identifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that never issues a value `<= floor`
    ///
    /// Used to stay clear of the numeric identifiers of seed records.
    pub fn starting_after(floor: u64) -> Self {
        Self { last: floor }
    }

    /// Issue the next identifier for a record created at `now`
    pub fn next_at(&mut self, now: DateTime<Utc>) -> ParkId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let value = millis.max(self.last.saturating_add(1));
        self.last = value;
        ParkId::new(value.to_string())
    }
}
