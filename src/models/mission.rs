//! Mission (scheduled deployment) model.
//!
//! A mission records that a robot surveys a site during a time interval
//! `[start_date, end_date)` at a given cost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A scheduled robot deployment to one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    /// Sequential identifier (`MISSION_001`, ...).
    pub mission_id: String,
    /// Surveyed site.
    pub site_id: String,
    /// Site name (denormalized for presentation).
    pub site_name: String,
    /// Assigned robot.
    pub robot_id: String,
    /// Robot name (denormalized for presentation).
    pub robot_name: String,
    /// Departure time.
    pub start_date: DateTime<Utc>,
    /// Completion time (start + transit + survey).
    pub end_date: DateTime<Utc>,
    /// Transit leg duration (hours).
    pub transit_hours: f64,
    /// On-site survey duration (hours).
    pub survey_hours: f64,
    /// Transit plus survey (hours).
    pub total_hours: f64,
    /// Total mission cost (USD).
    pub cost_usd: f64,
    /// Compatibility score that won the assignment.
    pub compatibility_score: f64,
    /// Site position.
    pub site_location: GeoPoint,
}

/// Formats the sequential mission identifier for a 1-based index.
pub fn mission_id(index: usize) -> String {
    format!("MISSION_{index:03}")
}

impl Mission {
    /// Duration of the mission interval in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Whether two missions' `[start, end)` intervals intersect.
    pub fn overlaps(&self, other: &Mission) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }
}
