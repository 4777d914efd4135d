//! Fleet-wide equipment gap analysis.

use serde::Serialize;
use std::collections::BTreeSet;

use super::sensors::required_sensors;
use crate::models::{Robot, Site, DEPTH_SAFETY_FACTOR};

/// A site deeper than the fleet can safely reach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthGap {
    pub site_id: String,
    pub site_name: String,
    pub site_depth_m: f64,
    /// Deepest rated robot in the fleet.
    pub max_fleet_depth_m: f64,
    /// Site depth minus the deepest rating. Negative when the site is
    /// within that rating but past the safety margin.
    pub depth_deficit_m: f64,
}

/// Equipment the current fleet lacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EquipmentGapReport {
    pub depth_gaps: Vec<DepthGap>,
    /// Required sensors carried by no robot, sorted.
    pub sensor_gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

impl EquipmentGapReport {
    /// Whether the fleet covers every site and sensor requirement.
    pub fn is_empty(&self) -> bool {
        self.depth_gaps.is_empty() && self.sensor_gaps.is_empty()
    }
}

/// Finds depth and sensor requirements no robot in the fleet meets.
pub fn identify_equipment_gaps(robots: &[Robot], sites: &[Site]) -> EquipmentGapReport {
    let max_fleet_depth = robots.iter().map(|r| r.max_depth_m).fold(0.0, f64::max);
    let usable_fleet_depth = max_fleet_depth * DEPTH_SAFETY_FACTOR;

    let depth_gaps: Vec<DepthGap> = sites
        .iter()
        .filter(|s| s.depth_m > usable_fleet_depth)
        .map(|s| DepthGap {
            site_id: s.site_id.clone(),
            site_name: s.name.clone(),
            site_depth_m: s.depth_m,
            max_fleet_depth_m: max_fleet_depth,
            depth_deficit_m: s.depth_m - max_fleet_depth,
        })
        .collect();

    let fleet_sensors: BTreeSet<&str> = robots
        .iter()
        .flat_map(|r| r.sensors.iter().map(String::as_str))
        .collect();
    let mut required = BTreeSet::new();
    for site in sites {
        required.extend(required_sensors(&site.mineral_types));
    }
    let sensor_gaps: Vec<String> = required
        .difference(&fleet_sensors)
        .map(|s| s.to_string())
        .collect();

    let mut recommendations = Vec::new();
    if !sensor_gaps.is_empty() {
        recommendations.push(format!(
            "Consider acquiring robots with: {}",
            sensor_gaps.join(", ")
        ));
    }
    if !depth_gaps.is_empty() {
        let max_site_depth = sites.iter().map(|s| s.depth_m).fold(0.0, f64::max);
        recommendations.push(format!(
            "Consider acquiring ultra-deep robots (>{max_site_depth:.0}m rating) to access {} deep sites",
            depth_gaps.len()
        ));
    }

    EquipmentGapReport {
        depth_gaps,
        sensor_gaps,
        recommendations,
    }
}
