//! Per-facet compatibility checks.
//!
//! Each check returns whether the facet passes, a human-readable message,
//! and the fractional credit (0.0..=1.0) it contributes to a score.

use serde::Serialize;

use super::sensors::required_sensors;
use crate::models::{Robot, RobotStatus, Site};

/// Outcome of the depth facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthCheck {
    pub passed: bool,
    pub message: String,
    /// 1.0 when passed; otherwise `min(1, rated / site depth)`.
    pub credit: f64,
}

/// Outcome of the sensor facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorCheck {
    pub passed: bool,
    pub message: String,
    /// Required sensors the robot lacks, sorted.
    pub missing: Vec<String>,
    /// Share of required sensors present.
    pub credit: f64,
}

/// Outcome of the status facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCheck {
    pub passed: bool,
    pub message: String,
}

impl StatusCheck {
    /// 1.0 for an available robot, 0.0 otherwise.
    pub fn credit(&self) -> f64 {
        if self.passed {
            1.0
        } else {
            0.0
        }
    }
}

/// Compares site depth against the robot's usable depth.
pub fn check_depth(robot: &Robot, site: &Site) -> DepthCheck {
    let usable = robot.usable_depth_m();
    if site.depth_m <= usable {
        let margin = usable - site.depth_m;
        DepthCheck {
            passed: true,
            message: format!("Compatible (safety margin: {}m)", margin as i64),
            credit: 1.0,
        }
    } else {
        let deficit = site.depth_m - usable;
        DepthCheck {
            passed: false,
            message: format!("Insufficient depth rating (needs {}m more)", deficit as i64),
            credit: (robot.max_depth_m / site.depth_m).clamp(0.0, 1.0),
        }
    }
}

/// Compares installed sensors against the site's required set.
pub fn check_sensors(robot: &Robot, site: &Site) -> SensorCheck {
    let required = required_sensors(&site.mineral_types);
    let missing: Vec<String> = required
        .iter()
        .filter(|s| !robot.has_sensor(s))
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        return SensorCheck {
            passed: true,
            message: "All required sensors present".to_string(),
            missing,
            credit: 1.0,
        };
    }

    let present = required.len() - missing.len();
    SensorCheck {
        passed: false,
        message: format!("Missing sensors: {}", missing.join(", ")),
        credit: present as f64 / required.len() as f64,
        missing,
    }
}

/// Checks whether the robot can be deployed.
pub fn check_status(robot: &Robot) -> StatusCheck {
    let (passed, message) = match &robot.status {
        RobotStatus::Available => (true, "Available for deployment".to_string()),
        RobotStatus::InMaintenance => (false, "Currently in maintenance".to_string()),
        RobotStatus::Deployed => (false, "Currently deployed on another mission".to_string()),
        RobotStatus::Retired => (false, "Robot retired from service".to_string()),
        RobotStatus::Other(label) => (false, format!("Unknown status: {label}")),
    };
    StatusCheck { passed, message }
}
