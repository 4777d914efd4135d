//! Greedy mission scheduling and plan summaries.
//!
//! # Algorithm
//!
//! `MissionScheduler` is a greedy, priority-driven, best-compatible-robot
//! heuristic under a budget and a planning horizon. It is not optimal, but
//! produces a feasible plan in a single pass.
//!
//! # Statistics
//!
//! `ScheduleStatistics` summarizes cost, budget utilization, coverage and
//! fleet usage of a plan.
//!
//! # Routes
//!
//! `route_waypoints` turns a plan into per-robot waypoint sequences for
//! map display.

mod greedy;
mod params;
mod routes;
mod statistics;

pub use greedy::{
    mission_cost, mission_duration_hours, transit_hours, CancellationFlag, MissionPlan,
    MissionScheduler, ScheduleRequest, COVERAGE_PATTERN_FACTOR, DEPLOYMENT_HOURS,
    ENDURANCE_USABLE_FRACTION, MIN_COMPATIBILITY_SCORE, OPERATIONAL_DAY_RATE_USD,
    SURVEY_AREA_KM2,
};
pub use params::{PlanningParams, PrioritizeBy};
pub use routes::{route_waypoints, RouteWaypoint, WaypointKind};
pub use statistics::ScheduleStatistics;
