//! Per-robot route sequences derived from a mission plan.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{GeoPoint, Mission, Robot};

/// What a waypoint marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointKind {
    /// The robot's position before its first mission.
    Start,
    /// A surveyed site.
    MissionSite,
}

/// One point on a robot's route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteWaypoint {
    pub robot_id: String,
    pub robot_name: String,
    #[serde(rename = "location_type")]
    pub kind: WaypointKind,
    pub location: GeoPoint,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<String>,
}

/// Builds route waypoints for every robot that has missions.
///
/// Robots appear in order of their first mission in `missions`. Each
/// route opens with a [`WaypointKind::Start`] at the robot's current
/// location, stamped with its first mission's start, followed by one
/// waypoint per mission in start order.
///
/// # Errors
/// `NotFound` when a mission references a robot absent from `robots`.
pub fn route_waypoints(missions: &[Mission], robots: &[Robot]) -> Result<Vec<RouteWaypoint>> {
    let mut groups: Vec<(&str, Vec<&Mission>)> = Vec::new();
    for mission in missions {
        match groups.iter_mut().find(|(id, _)| *id == mission.robot_id) {
            Some((_, list)) => list.push(mission),
            None => groups.push((mission.robot_id.as_str(), vec![mission])),
        }
    }

    let mut waypoints = Vec::with_capacity(missions.len() + groups.len());
    for (robot_id, mut list) in groups {
        let robot = robots
            .iter()
            .find(|r| r.robot_id == robot_id)
            .ok_or_else(|| PlannerError::not_found("robot", robot_id))?;
        list.sort_by_key(|m| m.start_date);

        let Some(first) = list.first() else {
            continue;
        };
        waypoints.push(RouteWaypoint {
            robot_id: robot.robot_id.clone(),
            robot_name: robot.name.clone(),
            kind: WaypointKind::Start,
            location: robot.current_location,
            timestamp: first.start_date,
            site_id: None,
            site_name: None,
            mission_id: None,
        });
        for mission in list {
            waypoints.push(RouteWaypoint {
                robot_id: robot.robot_id.clone(),
                robot_name: robot.name.clone(),
                kind: WaypointKind::MissionSite,
                location: mission.site_location,
                timestamp: mission.start_date,
                site_id: Some(mission.site_id.clone()),
                site_name: Some(mission.site_name.clone()),
                mission_id: Some(mission.mission_id.clone()),
            });
        }
    }
    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mission_id;
    use chrono::{Duration, TimeZone};

    fn mission(n: usize, robot: &str, site: &str, start_h: i64, lat: f64) -> Mission {
        let t0 = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        Mission {
            mission_id: mission_id(n),
            site_id: site.into(),
            site_name: format!("Site {site}"),
            robot_id: robot.into(),
            robot_name: String::new(),
            start_date: t0 + Duration::hours(start_h),
            end_date: t0 + Duration::hours(start_h + 5),
            transit_hours: 1.0,
            survey_hours: 4.0,
            total_hours: 5.0,
            cost_usd: 1.0,
            compatibility_score: 100.0,
            site_location: GeoPoint::new(lat, 0.0),
        }
    }

    #[test]
    fn test_grouped_by_first_appearance() {
        let robots = vec![
            Robot::new("R1").with_name("Alpha").with_location(1.0, 1.0),
            Robot::new("R2").with_name("Beta").with_location(2.0, 2.0),
        ];
        let missions = vec![
            mission(1, "R2", "S1", 0, 10.0),
            mission(2, "R1", "S2", 0, 20.0),
            mission(3, "R2", "S3", 5, 30.0),
        ];
        let route = route_waypoints(&missions, &robots).unwrap();
        let kinds: Vec<_> = route.iter().map(|w| (w.robot_id.as_str(), w.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("R2", WaypointKind::Start),
                ("R2", WaypointKind::MissionSite),
                ("R2", WaypointKind::MissionSite),
                ("R1", WaypointKind::Start),
                ("R1", WaypointKind::MissionSite),
            ]
        );
        assert_eq!(route[0].location, GeoPoint::new(2.0, 2.0));
        assert_eq!(route[0].robot_name, "Beta");
        assert_eq!(route[2].mission_id.as_deref(), Some("MISSION_003"));
    }

    #[test]
    fn test_sorted_by_start_within_robot() {
        let robots = vec![Robot::new("R1")];
        let missions = vec![mission(1, "R1", "late", 20, 0.0), mission(2, "R1", "early", 0, 0.0)];
        let route = route_waypoints(&missions, &robots).unwrap();
        assert_eq!(route[1].site_id.as_deref(), Some("early"));
        assert_eq!(route[0].timestamp, route[1].timestamp);
    }

    #[test]
    fn test_unknown_robot() {
        let err = route_waypoints(&[mission(1, "R9", "S1", 0, 0.0)], &[]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_plan() {
        assert!(route_waypoints(&[], &[]).unwrap().is_empty());
    }
}
