//! Configuration types for the parks directory
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::{Park, seed};

/// Main parks configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParksConfig {
    /// Record store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ParksConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.store.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Records present at process start
    #[serde(default)]
    pub seed: SeedSet,

    /// Capacity of the store event broadcast channel
    ///
    /// Observers that fall further behind than this receive a lag
    /// notification instead of the missed events.
    ///
    /// Default: 64 events
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl StoreConfig {
    /// Validate the store configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.event_channel_capacity == 0 {
            return Err(crate::Error::config("Event channel capacity must be > 0"));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: SeedSet::default(),
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}

/// Named set of seed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSet {
    /// The five Windsor, ON dog parks
    #[default]
    Windsor,
    /// Start with an empty collection
    Empty,
}

impl SeedSet {
    /// Records this seed set contributes
    pub fn parks(&self) -> Vec<Park> {
        match self {
            SeedSet::Windsor => seed::windsor_parks(),
            SeedSet::Empty => Vec::new(),
        }
    }

    /// Get the seed set name
    pub fn name(&self) -> &'static str {
        match self {
            SeedSet::Windsor => "windsor",
            SeedSet::Empty => "empty",
        }
    }
}

impl FromStr for SeedSet {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windsor" => Ok(SeedSet::Windsor),
            "empty" | "none" => Ok(SeedSet::Empty),
            other => Err(crate::Error::config(format!(
                "Unknown seed set '{}'. Supported: windsor, empty",
                other
            ))),
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of feature tags shown on a park card before "+N more"
    #[serde(default = "default_feature_preview_limit")]
    pub feature_preview_limit: usize,
}

impl DisplayConfig {
    /// Validate the display configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.feature_preview_limit == 0 {
            return Err(crate::Error::config("Feature preview limit must be > 0"));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            feature_preview_limit: default_feature_preview_limit(),
        }
    }
}

fn default_event_channel_capacity() -> usize {
    64
}

fn default_feature_preview_limit() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ParksConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.seed, SeedSet::Windsor);
        assert_eq!(config.store.event_channel_capacity, 64);
        assert_eq!(config.display.feature_preview_limit, 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ParksConfig =
            serde_json::from_str(r#"{ "store": { "seed": "empty" } }"#).unwrap();

        assert_eq!(config.store.seed, SeedSet::Empty);
        assert_eq!(config.store.event_channel_capacity, 64);
        assert_eq!(config.display.feature_preview_limit, 3);
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = ParksConfig::new();
        config.store.event_channel_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = ParksConfig::new();
        config.display.feature_preview_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_set_parse() {
        assert_eq!("Windsor".parse::<SeedSet>().unwrap(), SeedSet::Windsor);
        assert_eq!("none".parse::<SeedSet>().unwrap(), SeedSet::Empty);
        assert!("toronto".parse::<SeedSet>().is_err());
        assert_eq!(SeedSet::Windsor.parks().len(), 5);
        assert!(SeedSet::Empty.parks().is_empty());
    }
}
