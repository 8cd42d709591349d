//! Submission form state and presence checks
//!
//! The store accepts any candidate it is given. Rejecting empty required
//! fields is the job of the submission flow, which lives here so that every
//! front end applies the same rules.

use crate::error::{Error, Result};
use crate::model::NewPark;

/// Feature tags offered by the submission form
pub const FEATURE_OPTIONS: [&str; 10] = [
    "Fenced",
    "Water Station",
    "Large Dogs",
    "Small Dogs",
    "Walking Trails",
    "Open Space",
    "Parking",
    "Beach",
    "Swimming",
    "Creek Access",
];

/// Rating applied when the submitter leaves the rating unset
pub const DEFAULT_RATING: f64 = 3.0;

/// In-progress park submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub name: String,
    pub address: String,
    pub description: String,
    /// Star rating, 0 means unset
    pub rating: u8,
    features: Vec<String>,
}

impl SubmissionForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the star rating, clamped to 0..=5
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.min(5);
    }

    /// Select `feature` if unselected, otherwise deselect it
    ///
    /// Selection order is kept.
    pub fn toggle_feature(&mut self, feature: &str) {
        if let Some(pos) = self.features.iter().position(|f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
        }
    }

    /// Currently selected features, in selection order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Reset the form to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turn the form into a store candidate
    ///
    /// Text fields are trimmed. An empty name or address is a
    /// [`Error::Validation`]. An unset rating becomes [`DEFAULT_RATING`].
    pub fn validate(&self) -> Result<NewPark> {
        let name = self.name.trim();
        let address = self.address.trim();

        if name.is_empty() || address.is_empty() {
            return Err(Error::validation(
                "Please enter at least a park name and address.",
            ));
        }

        let rating = match self.rating {
            0 => DEFAULT_RATING,
            stars => f64::from(stars),
        };

        Ok(NewPark::new(name, address)
            .with_rating(rating)
            .with_features(self.features.iter().cloned())
            .with_description(self.description.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_fields() {
        let form = SubmissionForm::new().with_name("   ").with_address("1 Main St");
        assert!(matches!(form.validate(), Err(Error::Validation(_))));

        let form = SubmissionForm::new().with_name("Test Park");
        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_trimmed_candidate_with_default_rating() {
        let form = SubmissionForm::new()
            .with_name("  Test Park ")
            .with_address(" 1 Main St")
            .with_description("  shady  ");

        let candidate = form.validate().unwrap();
        assert_eq!(candidate.name, "Test Park");
        assert_eq!(candidate.address, "1 Main St");
        assert_eq!(candidate.description, "shady");
        assert_eq!(candidate.rating, DEFAULT_RATING);
        assert!(candidate.features.is_empty());
    }

    #[test]
    fn test_explicit_rating_kept() {
        let mut form = SubmissionForm::new().with_name("A").with_address("B");
        form.set_rating(9);
        assert_eq!(form.rating, 5);
        assert_eq!(form.validate().unwrap().rating, 5.0);
    }

    #[test]
    fn test_toggle_feature_preserves_selection_order() {
        let mut form = SubmissionForm::new();
        form.toggle_feature("Parking");
        form.toggle_feature("Fenced");
        form.toggle_feature("Beach");
        form.toggle_feature("Fenced");

        assert_eq!(form.features(), &["Parking".to_string(), "Beach".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut form = SubmissionForm::new().with_name("A").with_address("B");
        form.toggle_feature(FEATURE_OPTIONS[0]);
        form.clear();
        assert_eq!(form, SubmissionForm::new());
    }
}
