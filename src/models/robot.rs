//! Survey robot model.
//!
//! Robots are the resources that perform survey missions. Status and
//! location are read-only planning inputs; the scheduler tracks its own
//! availability clock per robot and never writes back to these records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoPoint;

/// Fraction of the rated depth usable in operations (10% safety margin).
pub const DEPTH_SAFETY_FACTOR: f64 = 0.9;

/// An autonomous survey robot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    /// Unique robot identifier.
    pub robot_id: String,
    /// Human-readable name.
    pub name: String,
    /// Platform class (e.g., "AUV", "ROV").
    #[serde(rename = "type", default)]
    pub robot_type: String,
    /// Rated maximum operating depth (m).
    pub max_depth_m: f64,
    /// Rated endurance per dive (hours).
    pub endurance_hours: f64,
    /// Survey speed (knots).
    pub speed_knots: f64,
    /// Installed sensor labels (e.g., "side_scan_sonar").
    #[serde(default)]
    pub sensors: Vec<String>,
    /// Operational status.
    pub status: RobotStatus,
    /// Last known position.
    pub current_location: GeoPoint,
    /// Charter or operating cost per day (USD).
    pub day_rate_usd: f64,
    /// Most recent completed maintenance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<NaiveDate>,
    /// Next planned maintenance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_maintenance: Option<NaiveDate>,
}

/// Operational status of a robot.
///
/// Labels outside the known set are preserved in [`RobotStatus::Other`]
/// so they can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RobotStatus {
    /// Ready for deployment.
    Available,
    /// Undergoing maintenance.
    InMaintenance,
    /// Currently on another mission.
    Deployed,
    /// Permanently out of service.
    Retired,
    /// Unrecognized status label.
    Other(String),
}

impl RobotStatus {
    /// Display label, as used in input records.
    pub fn label(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::InMaintenance => "In Maintenance",
            Self::Deployed => "Deployed",
            Self::Retired => "Retired",
            Self::Other(s) => s,
        }
    }

    /// Whether the robot may be assigned new missions.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<String> for RobotStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => Self::Available,
            "In Maintenance" => Self::InMaintenance,
            "Deployed" => Self::Deployed,
            "Retired" => Self::Retired,
            _ => Self::Other(s),
        }
    }
}

impl From<RobotStatus> for String {
    fn from(status: RobotStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Robot {
    /// Creates an available robot with zeroed ratings.
    pub fn new(robot_id: impl Into<String>) -> Self {
        Self {
            robot_id: robot_id.into(),
            name: String::new(),
            robot_type: String::new(),
            max_depth_m: 0.0,
            endurance_hours: 0.0,
            speed_knots: 0.0,
            sensors: Vec::new(),
            status: RobotStatus::Available,
            current_location: GeoPoint::new(0.0, 0.0),
            day_rate_usd: 0.0,
            last_maintenance: None,
            next_maintenance: None,
        }
    }

    /// Sets the robot name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the platform class.
    pub fn with_type(mut self, robot_type: impl Into<String>) -> Self {
        self.robot_type = robot_type.into();
        self
    }

    /// Sets the rated maximum depth (m).
    pub fn with_max_depth(mut self, max_depth_m: f64) -> Self {
        self.max_depth_m = max_depth_m;
        self
    }

    /// Sets the endurance rating (hours).
    pub fn with_endurance(mut self, hours: f64) -> Self {
        self.endurance_hours = hours;
        self
    }

    /// Sets the survey speed (knots).
    pub fn with_speed(mut self, knots: f64) -> Self {
        self.speed_knots = knots;
        self
    }

    /// Adds an installed sensor.
    pub fn with_sensor(mut self, sensor: impl Into<String>) -> Self {
        self.sensors.push(sensor.into());
        self
    }

    /// Replaces the sensor list.
    pub fn with_sensors<I, S>(mut self, sensors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sensors = sensors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: RobotStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the current position.
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.current_location = GeoPoint::new(lat, lon);
        self
    }

    /// Sets the day rate (USD).
    pub fn with_day_rate(mut self, usd: f64) -> Self {
        self.day_rate_usd = usd;
        self
    }

    /// Sets the maintenance window dates.
    pub fn with_maintenance(mut self, last: Option<NaiveDate>, next: Option<NaiveDate>) -> Self {
        self.last_maintenance = last;
        self.next_maintenance = next;
        self
    }

    /// Depth the robot may operate at after the safety margin (m).
    #[inline]
    pub fn usable_depth_m(&self) -> f64 {
        self.max_depth_m * DEPTH_SAFETY_FACTOR
    }

    /// Whether the usable depth covers `depth_m`.
    #[inline]
    pub fn can_reach(&self, depth_m: f64) -> bool {
        self.usable_depth_m() >= depth_m
    }

    /// Whether a sensor is installed.
    pub fn has_sensor(&self, sensor: &str) -> bool {
        self.sensors.iter().any(|s| s == sensor)
    }
}
