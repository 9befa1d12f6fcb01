//! Planner settings section.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::defaults;
use super::error::ConfigLoadError;

/// Planner settings section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Maximum number of A* nodes to expand before giving up
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Tolerance for the segment intersection test: bounds both the
    /// parallelism check and the endpoint exclusion
    #[serde(default = "defaults::intersection_epsilon")]
    pub intersection_epsilon: f32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
            intersection_epsilon: defaults::intersection_epsilon(),
        }
    }
}

impl PlannerSettings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
