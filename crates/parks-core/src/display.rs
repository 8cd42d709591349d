//! Pure presentation transforms over the park collection
//!
//! Everything here takes the output of [`crate::ParkStore::list`] and
//! never touches the store itself.

use std::cmp::Reverse;

use serde::Serialize;

use crate::model::Park;

/// Order records for presentation
///
/// User-submitted records come before seed records. Within each group,
/// records with a creation timestamp come newest first, and records that
/// share a timestamp come latest-inserted first. Records without a
/// timestamp follow in their original insertion order.
pub fn display_order(parks: &[Park]) -> Vec<Park> {
    let mut indexed: Vec<(usize, &Park)> = parks.iter().enumerate().collect();
    indexed.sort_by_key(|&(index, park)| {
        let index = index as isize;
        let tie = if park.date_added.is_some() { -index } else { index };
        (!park.is_user_submitted(), Reverse(park.date_added), tie)
    });
    indexed.into_iter().map(|(_, park)| park.clone()).collect()
}

/// Leading feature tags shown on a park card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturePreview<'a> {
    /// Tags shown, in display order
    pub shown: &'a [String],
    /// Number of tags not shown
    pub remaining: usize,
}

impl<'a> FeaturePreview<'a> {
    /// Take the first `limit` features of `park`
    pub fn of(park: &'a Park, limit: usize) -> Self {
        let split = park.features.len().min(limit);
        Self {
            shown: &park.features[..split],
            remaining: park.features.len() - split,
        }
    }

    /// The "+N more" label, if any features were cut
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more", self.remaining))
    }
}

/// Marker colouring used by the directory view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    /// Added through the submission flow
    UserSubmitted,
    /// Rated 4.5 or higher
    TopRated,
    /// Rated 4.0 or higher
    Good,
    /// Everything else
    Standard,
}

impl MarkerCategory {
    /// Categorize a single record
    pub fn of(park: &Park) -> Self {
        if park.is_user_submitted() {
            MarkerCategory::UserSubmitted
        } else if park.rating >= 4.5 {
            MarkerCategory::TopRated
        } else if park.rating >= 4.0 {
            MarkerCategory::Good
        } else {
            MarkerCategory::Standard
        }
    }

    /// Marker colour as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            MarkerCategory::UserSubmitted => "#FF6B6B",
            MarkerCategory::TopRated => "#2E8B57",
            MarkerCategory::Good => "#FFD700",
            MarkerCategory::Standard => "#87CEEB",
        }
    }
}

/// Counts shown in list and directory headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CollectionSummary {
    pub total: usize,
    pub user_submitted: usize,
    pub seed: usize,
}

impl CollectionSummary {
    /// Summarize a collection
    pub fn of(parks: &[Park]) -> Self {
        let user_submitted = parks.iter().filter(|p| p.is_user_submitted()).count();
        Self {
            total: parks.len(),
            user_submitted,
            seed: parks.len() - user_submitted,
        }
    }
}
