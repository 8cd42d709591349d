//! Navigation hand-off codec
//!
//! The detail view receives a single record serialized by the list or
//! directory view. Decoding checks the payload against the record shape
//! before the view is allowed to use it.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Park;

/// Serialize a record for navigation
///
/// The record is checked with [`validate`] first. JSON has no encoding for
/// NaN or infinity, so a record `decode` would reject is refused here
/// instead of being written out.
pub fn encode(park: &Park) -> Result<String> {
    validate(park)?;
    Ok(serde_json::to_string(park)?)
}

/// Deserialize and validate a navigation payload
pub fn decode(payload: &str) -> Result<Park> {
    let park: Park = serde_json::from_str(payload)?;
    validate(&park)?;
    debug!("Decoded hand-off payload for park {}", park.id);
    Ok(park)
}

/// Check that a record has the shape the detail view relies on
pub fn validate(park: &Park) -> Result<()> {
    if park.id.as_str().trim().is_empty() {
        return Err(Error::invalid_record("id must not be empty"));
    }
    if park.name.trim().is_empty() {
        return Err(Error::invalid_record("name must not be empty"));
    }
    if park.address.trim().is_empty() {
        return Err(Error::invalid_record("address must not be empty"));
    }
    if !park.rating.is_finite() {
        return Err(Error::invalid_record("rating must be a finite number"));
    }
    if park.added_by.is_some() != park.date_added.is_some() {
        return Err(Error::invalid_record(
            "addedBy and dateAdded must be both present or both absent",
        ));
    }
    Ok(())
}
