use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::constants::{BREAKFAST_ATTEMPT_CAP, DEFAULT_EATERS, DEFAULT_PORTIONS};

/// Runtime-configurable planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of synthetic eaters when no family members are registered.
    pub eaters: u32,
    /// Batch size for recipes that declare none.
    pub default_portions: f64,
    /// Breakfast fallback attempts per consumer.
    pub breakfast_attempt_cap: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            eaters: DEFAULT_EATERS,
            default_portions: DEFAULT_PORTIONS,
            breakfast_attempt_cap: BREAKFAST_ATTEMPT_CAP,
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file; absent keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override the eater count, clamped to at least one.
    pub fn with_eaters(mut self, eaters: Option<u32>) -> Self {
        if let Some(n) = eaters {
            self.eaters = n;
        }
        self.eaters = self.eaters.max(1);
        self
    }
}
