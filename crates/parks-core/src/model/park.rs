// # Park Record
//
// The single entity of the directory.
//
// ## Provenance
//
// Seed parks carry neither `addedBy` nor `dateAdded`. Anything appended
// through the store carries `addedBy == USER_SENTINEL` and a creation
// timestamp. Neither field can be changed by a patch, so the provenance
// of a record is fixed for the lifetime of the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance marker stamped on every record appended through the store
pub const USER_SENTINEL: &str = "user";

/// Unique identifier of a park record
///
/// Assigned by the store at creation time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkId(String);

impl ParkId {
    /// Wrap an identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier, if it is a decimal number
    pub(crate) fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ParkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A dog park entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    /// Store-assigned identifier
    pub id: ParkId,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Average rating, nominally 0.0 to 5.0
    pub rating: f64,
    /// Free-text tags in display order
    pub features: Vec<String>,
    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,
    /// Provenance tag, absent for seed parks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    /// Creation timestamp, absent for seed parks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl Park {
    /// Build a seed record (no provenance, no timestamp)
    pub(crate) fn seed(
        id: &str,
        name: &str,
        address: &str,
        rating: f64,
        features: &[&str],
        description: &str,
    ) -> Self {
        Self {
            id: ParkId::from(id),
            name: name.to_string(),
            address: address.to_string(),
            rating,
            features: features.iter().map(|f| f.to_string()).collect(),
            description: description.to_string(),
            added_by: None,
            date_added: None,
        }
    }

    /// Materialize a candidate into a user-submitted record
    ///
    /// This is `pub(crate)` so that only the store can stamp identifiers
    /// and provenance onto records.
    pub(crate) fn from_candidate(id: ParkId, candidate: NewPark, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: candidate.name,
            address: candidate.address,
            rating: candidate.rating,
            features: candidate.features,
            description: candidate.description,
            added_by: Some(USER_SENTINEL.to_string()),
            date_added: Some(now),
        }
    }

    /// Whether this record was appended through the submission flow
    pub fn is_user_submitted(&self) -> bool {
        self.added_by.as_deref() == Some(USER_SENTINEL)
    }
}

/// Candidate record for [`crate::ParkStore::append`]
///
/// Carries every field of [`Park`] except the ones the store assigns.
/// The store performs no validation of its own; see
/// [`crate::submission::SubmissionForm`] for the presence checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPark {
    pub name: String,
    pub address: String,
    pub rating: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl NewPark {
    /// Create a candidate with the two required fields
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Replace the feature list
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single feature tag
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update merged into an existing record by [`crate::ParkStore::patch`]
///
/// Fields left as `None` are untouched. Identifier and provenance fields
/// cannot be patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParkPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the patch sets no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.rating.is_none()
            && self.features.is_none()
            && self.description.is_none()
    }

    /// Merge the set fields into `park`
    pub fn apply_to(&self, park: &mut Park) {
        if let Some(name) = &self.name {
            park.name = name.clone();
        }
        if let Some(address) = &self.address {
            park.address = address.clone();
        }
        if let Some(rating) = self.rating {
            park.rating = rating;
        }
        if let Some(features) = &self.features {
            park.features = features.clone();
        }
        if let Some(description) = &self.description {
            park.description = description.clone();
        }
    }
}
