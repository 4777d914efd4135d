//! Scheduling parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlannerError, Result};

/// Site ordering used by the greedy scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrioritizeBy {
    /// Highest raw mineral concentration first.
    #[default]
    Score,
    /// Highest estimated value first.
    Value,
}

impl PrioritizeBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for PrioritizeBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrioritizeBy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "value" => Ok(Self::Value),
            other => Err(PlannerError::invalid_parameter(
                "prioritize_by",
                format!("expected `score` or `value`, got `{other}`"),
            )),
        }
    }
}

/// Constraints and cost inputs for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningParams {
    /// Planning horizon in whole days from the start instant.
    pub time_window_days: u32,
    /// Total budget (USD).
    pub budget_usd: f64,
    /// Support vessel transit speed (knots).
    pub vessel_speed_knots: f64,
    /// Support vessel day rate (USD).
    pub vessel_day_rate: f64,
    pub prioritize_by: PrioritizeBy,
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            time_window_days: 180,
            budget_usd: 10_000_000.0,
            vessel_speed_knots: 12.0,
            vessel_day_rate: 75_000.0,
            prioritize_by: PrioritizeBy::Score,
        }
    }
}

impl PlanningParams {
    pub fn with_time_window(mut self, days: u32) -> Self {
        self.time_window_days = days;
        self
    }

    pub fn with_budget(mut self, usd: f64) -> Self {
        self.budget_usd = usd;
        self
    }

    pub fn with_vessel_speed(mut self, knots: f64) -> Self {
        self.vessel_speed_knots = knots;
        self
    }

    pub fn with_vessel_day_rate(mut self, usd: f64) -> Self {
        self.vessel_day_rate = usd;
        self
    }

    pub fn with_prioritize_by(mut self, prioritize_by: PrioritizeBy) -> Self {
        self.prioritize_by = prioritize_by;
        self
    }

    /// Rejects values the scheduler cannot plan with.
    pub fn validate(&self) -> Result<()> {
        if !self.budget_usd.is_finite() || self.budget_usd < 0.0 {
            return Err(PlannerError::invalid_parameter(
                "budget_usd",
                format!("must be a finite value >= 0, got {}", self.budget_usd),
            ));
        }
        if !self.vessel_speed_knots.is_finite() || self.vessel_speed_knots <= 0.0 {
            return Err(PlannerError::invalid_parameter(
                "vessel_speed_knots",
                format!("must be a finite value > 0, got {}", self.vessel_speed_knots),
            ));
        }
        if !self.vessel_day_rate.is_finite() || self.vessel_day_rate < 0.0 {
            return Err(PlannerError::invalid_parameter(
                "vessel_day_rate",
                format!("must be a finite value >= 0, got {}", self.vessel_day_rate),
            ));
        }
        Ok(())
    }
}
