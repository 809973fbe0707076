//! A single named growth stage.

use serde::{Deserialize, Serialize};

/// A named phase of crop growth lasting a fixed number of days.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageDefinition {
    name: String,
    duration_days: u32,
}

impl StageDefinition {
    /// Creates a stage. Validity (non-blank name, positive duration) is
    /// checked when stages are assembled into a [`GrowthProfile`](crate::GrowthProfile).
    pub fn new(name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            name: name.into(),
            duration_days,
        }
    }

    /// Returns the stage name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stage length in days.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }
}
