//! Robot-site compatibility matching.
//!
//! Evaluates each (robot, site) pair on three independent facets and
//! folds them into a 0-100 score:
//!
//! | Facet | Weight | Full credit | Partial credit |
//! |-------|--------|-------------|----------------|
//! | Depth | 40 | site depth ≤ 0.9 × rated depth | min(1, rated / site depth) |
//! | Sensors | 40 | installed ⊇ required | share of required present |
//! | Status | 20 | `Available` | none |
//!
//! The scheduler uses a cheaper two-facet approximation
//! ([`SimplifiedCompatibility`]); both implement [`CompatibilityScore`].

mod facets;
mod gaps;
mod matrix;
mod sensors;

pub use facets::{check_depth, check_sensors, check_status, DepthCheck, SensorCheck, StatusCheck};
pub use gaps::{identify_equipment_gaps, DepthGap, EquipmentGapReport};
pub use matrix::{CompatibilityMatrix, MatrixRow};
pub use sensors::{
    required_sensors, sensors_for_category, BASELINE_SURVEY_SENSORS, SENSOR_REQUIREMENTS,
};

use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, instrument};

use crate::error::{PlannerError, Result};
use crate::models::{Robot, Site};
use crate::scoring::round2;

/// Depth facet weight in the detailed score.
pub const DEPTH_WEIGHT: f64 = 40.0;
/// Sensor facet weight in the detailed score.
pub const SENSOR_WEIGHT: f64 = 40.0;
/// Status facet weight in the detailed score.
pub const STATUS_WEIGHT: f64 = 20.0;

/// A rule that scores how well a robot fits a site (0-100).
///
/// Higher is better.
pub trait CompatibilityScore: Send + Sync + Debug {
    /// Rule name (e.g., "DETAILED").
    fn name(&self) -> &'static str;

    /// Scores one pair.
    fn score(&self, robot: &Robot, site: &Site) -> f64;
}

/// Three-facet score: depth 40, sensors 40, status 20, two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedCompatibility;

impl CompatibilityScore for DetailedCompatibility {
    fn name(&self) -> &'static str {
        "DETAILED"
    }

    fn score(&self, robot: &Robot, site: &Site) -> f64 {
        let depth = check_depth(robot, site);
        let sensors = check_sensors(robot, site);
        let status = check_status(robot);
        round2(
            DEPTH_WEIGHT * depth.credit
                + SENSOR_WEIGHT * sensors.credit
                + STATUS_WEIGHT * status.credit(),
        )
    }
}

/// Two-facet approximation used for scheduling.
///
/// Depth fit weighted 50 (same partial credit as the depth facet) and the
/// share of [`BASELINE_SURVEY_SENSORS`] installed weighted 50. Status is
/// not considered; the scheduler filters on it beforehand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedCompatibility;

impl CompatibilityScore for SimplifiedCompatibility {
    fn name(&self) -> &'static str {
        "SIMPLIFIED"
    }

    fn score(&self, robot: &Robot, site: &Site) -> f64 {
        let depth = if robot.can_reach(site.depth_m) {
            50.0
        } else {
            (robot.max_depth_m / site.depth_m * 50.0).min(50.0)
        };
        let present = BASELINE_SURVEY_SENSORS
            .iter()
            .filter(|s| robot.has_sensor(s))
            .count();
        depth + present as f64 / BASELINE_SURVEY_SENSORS.len() as f64 * 50.0
    }
}

/// Overall classification of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompatibilityStatus {
    #[serde(rename = "Fully Compatible")]
    FullyCompatible,
    #[serde(rename = "Partially Compatible")]
    PartiallyCompatible,
    #[serde(rename = "Incompatible")]
    Incompatible,
}

impl CompatibilityStatus {
    /// Classifies facet outcomes. Partial means only sensors fail.
    pub fn classify(depth_ok: bool, sensor_ok: bool, status_ok: bool) -> Self {
        if depth_ok && sensor_ok && status_ok {
            Self::FullyCompatible
        } else if depth_ok && status_ok {
            Self::PartiallyCompatible
        } else {
            Self::Incompatible
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullyCompatible => "Fully Compatible",
            Self::PartiallyCompatible => "Partially Compatible",
            Self::Incompatible => "Incompatible",
        }
    }

    /// Display color.
    pub fn color(self) -> &'static str {
        match self {
            Self::FullyCompatible => "green",
            Self::PartiallyCompatible => "yellow",
            Self::Incompatible => "red",
        }
    }
}

/// Detailed comparison of one robot against one site.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub robot_id: String,
    pub robot_name: String,
    pub robot_type: String,
    pub day_rate_usd: f64,
    pub site_id: String,
    pub site_name: String,
    pub estimated_value_millions: f64,
    pub compatibility_score: f64,
    pub overall_status: CompatibilityStatus,
    pub status_color: &'static str,
    pub depth_compatible: bool,
    pub depth_message: String,
    pub sensor_compatible: bool,
    pub sensor_message: String,
    pub missing_sensors: Vec<String>,
    pub status_compatible: bool,
    pub status_message: String,
}

impl CompatibilityReport {
    /// Builds the report for a pair.
    pub fn evaluate(robot: &Robot, site: &Site) -> Self {
        let depth = check_depth(robot, site);
        let sensors = check_sensors(robot, site);
        let status = check_status(robot);
        let overall = CompatibilityStatus::classify(depth.passed, sensors.passed, status.passed);

        Self {
            robot_id: robot.robot_id.clone(),
            robot_name: robot.name.clone(),
            robot_type: robot.robot_type.clone(),
            day_rate_usd: robot.day_rate_usd,
            site_id: site.site_id.clone(),
            site_name: site.name.clone(),
            estimated_value_millions: site.estimated_value_millions,
            compatibility_score: DetailedCompatibility.score(robot, site),
            overall_status: overall,
            status_color: overall.color(),
            depth_compatible: depth.passed,
            depth_message: depth.message,
            sensor_compatible: sensors.passed,
            sensor_message: sensors.message,
            missing_sensors: sensors.missing,
            status_compatible: status.passed,
            status_message: status.message,
        }
    }
}

/// Compatibility queries over a robot fleet and a site population.
#[derive(Debug, Clone)]
pub struct CompatibilityMatcher {
    robots: Vec<Robot>,
    sites: Vec<Site>,
}

impl CompatibilityMatcher {
    /// Creates a matcher over the given collections.
    pub fn new(robots: Vec<Robot>, sites: Vec<Site>) -> Self {
        Self { robots, sites }
    }

    /// The fleet.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// The site population.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Looks up a robot by ID.
    pub fn robot(&self, robot_id: &str) -> Result<&Robot> {
        self.robots
            .iter()
            .find(|r| r.robot_id == robot_id)
            .ok_or_else(|| PlannerError::not_found("robot", robot_id))
    }

    /// Looks up a site by ID.
    pub fn site(&self, site_id: &str) -> Result<&Site> {
        self.sites
            .iter()
            .find(|s| s.site_id == site_id)
            .ok_or_else(|| PlannerError::not_found("site", site_id))
    }

    /// Detailed score for a pair of records.
    pub fn compatibility_score(&self, robot: &Robot, site: &Site) -> f64 {
        DetailedCompatibility.score(robot, site)
    }

    /// Scores every (site, robot) pair.
    #[instrument(skip(self), fields(sites = self.sites.len(), robots = self.robots.len()))]
    pub fn compatibility_matrix(&self) -> CompatibilityMatrix {
        CompatibilityMatrix::build(&self.robots, &self.sites, &DetailedCompatibility)
    }

    /// Detailed comparison of a pair by IDs.
    pub fn detailed_compatibility(&self, robot_id: &str, site_id: &str) -> Result<CompatibilityReport> {
        let robot = self.robot(robot_id)?;
        let site = self.site(site_id)?;
        let report = CompatibilityReport::evaluate(robot, site);
        debug!(
            robot_id,
            site_id,
            score = report.compatibility_score,
            status = report.overall_status.label(),
            "pair evaluated"
        );
        Ok(report)
    }

    /// Top `top_n` robots for a site, best first; ties keep fleet order.
    pub fn best_robots_for_site(&self, site_id: &str, top_n: usize) -> Result<Vec<CompatibilityReport>> {
        let site = self.site(site_id)?;
        let reports = self
            .robots
            .iter()
            .map(|robot| CompatibilityReport::evaluate(robot, site))
            .collect();
        Ok(top_by_score(reports, top_n))
    }

    /// Top `top_n` sites for a robot, best first; ties keep site order.
    pub fn best_sites_for_robot(&self, robot_id: &str, top_n: usize) -> Result<Vec<CompatibilityReport>> {
        let robot = self.robot(robot_id)?;
        let reports = self
            .sites
            .iter()
            .map(|site| CompatibilityReport::evaluate(robot, site))
            .collect();
        Ok(top_by_score(reports, top_n))
    }

    /// Depth and sensor requirements the fleet cannot meet.
    pub fn equipment_gaps(&self) -> EquipmentGapReport {
        identify_equipment_gaps(&self.robots, &self.sites)
    }
}

fn top_by_score(mut reports: Vec<CompatibilityReport>, top_n: usize) -> Vec<CompatibilityReport> {
    reports.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    reports.truncate(top_n);
    reports
}
