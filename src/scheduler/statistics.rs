//! Mission plan summary statistics.
//!
//! | Statistic | Definition |
//! |-----------|-----------|
//! | Total cost | Σ mission cost |
//! | Budget utilization | total cost / budget × 100 (0 when budget ≤ 0) |
//! | Coverage | distinct sites surveyed / sites offered × 100 (0 when none offered) |
//! | Avg mission cost | total cost / missions (0 when no missions) |
//!
//! Monetary and percentage values are rounded to two decimals.

use serde::Serialize;
use std::collections::HashSet;

use crate::models::Mission;
use crate::scoring::round2;

/// Summary of a mission plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStatistics {
    pub total_missions: usize,
    pub total_cost_usd: f64,
    pub remaining_budget_usd: f64,
    pub budget_utilization_percent: f64,
    pub num_sites_surveyed: usize,
    pub num_robots_used: usize,
    pub coverage_percent: f64,
    pub avg_mission_cost_usd: f64,
}

impl ScheduleStatistics {
    /// Computes statistics for a plan.
    ///
    /// # Arguments
    /// * `missions` - Scheduled missions.
    /// * `budget_usd` - Budget the plan was built against.
    /// * `total_sites` - Number of sites offered to the scheduler.
    pub fn calculate(missions: &[Mission], budget_usd: f64, total_sites: usize) -> Self {
        let total_cost: f64 = missions.iter().map(|m| m.cost_usd).sum();
        let sites: HashSet<&str> = missions.iter().map(|m| m.site_id.as_str()).collect();
        let robots: HashSet<&str> = missions.iter().map(|m| m.robot_id.as_str()).collect();

        let budget_utilization = if budget_usd > 0.0 {
            total_cost / budget_usd * 100.0
        } else {
            0.0
        };
        let coverage = if total_sites == 0 {
            0.0
        } else {
            sites.len() as f64 / total_sites as f64 * 100.0
        };
        let avg_cost = if missions.is_empty() {
            0.0
        } else {
            total_cost / missions.len() as f64
        };

        Self {
            total_missions: missions.len(),
            total_cost_usd: round2(total_cost),
            remaining_budget_usd: round2(budget_usd - total_cost),
            budget_utilization_percent: round2(budget_utilization),
            num_sites_surveyed: sites.len(),
            num_robots_used: robots.len(),
            coverage_percent: round2(coverage),
            avg_mission_cost_usd: round2(avg_cost),
        }
    }
}
