//! Planner configuration loaded from TOML.
//!
//! ```toml
//! [scoring]
//! mineral_concentration = 0.25
//! depth = 0.10
//! # unspecified weights keep their defaults; the total must stay 1.0
//!
//! [economics]
//! mineral_price_per_ton = 9500.0
//!
//! [scheduling]
//! budget_usd = 5000000.0
//! prioritize_by = "value"
//! ```
//!
//! Every section and field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::scheduler::PlanningParams;
use crate::scoring::{EconomicParams, ScoringWeights};

/// Scoring, economics, and scheduling settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub scoring: ScoringWeights,
    pub economics: EconomicParams,
    pub scheduling: PlanningParams,
}

impl PlannerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks every section.
    ///
    /// All-zero scoring weights are accepted; the scoring engine replaces
    /// them with equal weights.
    pub fn validate(&self) -> Result<()> {
        if !self.scoring.is_all_zero() {
            self.scoring.validate()?;
        }
        self.economics.validate()?;
        self.scheduling.validate()
    }
}
