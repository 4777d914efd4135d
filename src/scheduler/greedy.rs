//! Greedy budget- and horizon-constrained mission scheduler.
//!
//! # Algorithm
//!
//! 1. Keep `Available` robots; each starts free at the planning start.
//! 2. Order sites by raw concentration or estimated value (descending,
//!    stable).
//! 3. For each site, pick the best-scoring robot whose usable depth covers
//!    the site (ties go to the lowest robot id) and require a minimum score.
//! 4. Price the mission (transit + survey) and commit it if it fits the
//!    remaining budget and the planning horizon; the robot's availability
//!    advances to the mission end.
//!
//! # Complexity
//! O(n log n + n * r) where n=sites, r=robots.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::params::{PlanningParams, PrioritizeBy};
use super::statistics::ScheduleStatistics;
use crate::error::{PlannerError, Result};
use crate::matching::{CompatibilityScore, SimplifiedCompatibility};
use crate::models::{knots_to_kmh, mission_id, GeoPoint, Mission, Robot, Site};
use crate::scoring::{round2, ScoredSite};

/// Minimum compatibility score for an assignment.
pub const MIN_COMPATIBILITY_SCORE: f64 = 40.0;
/// Area covered by one survey mission (km²).
pub const SURVEY_AREA_KM2: f64 = 25.0;
/// Track-length multiplier of the survey pattern.
pub const COVERAGE_PATTERN_FACTOR: f64 = 3.0;
/// Deployment plus recovery time added to every survey (hours).
pub const DEPLOYMENT_HOURS: f64 = 4.0;
/// Share of rated endurance a single survey may use.
pub const ENDURANCE_USABLE_FRACTION: f64 = 0.8;
/// Fuel, consumables and crew per mission day (USD).
pub const OPERATIONAL_DAY_RATE_USD: f64 = 15_000.0;

/// Support vessel transit time between two points (hours).
pub fn transit_hours(from: &GeoPoint, to: &GeoPoint, vessel_speed_knots: f64) -> f64 {
    from.distance_km(to) / knots_to_kmh(vessel_speed_knots)
}

/// On-site survey duration for `robot` at `site` (hours).
///
/// Scales the base survey pattern by depth and terrain, adds deployment
/// time, and caps the result at 80% of the robot's endurance.
pub fn mission_duration_hours(robot: &Robot, site: &Site) -> f64 {
    let base = SURVEY_AREA_KM2 / knots_to_kmh(robot.speed_knots) * COVERAGE_PATTERN_FACTOR;
    let depth_factor = 1.0 + site.depth_m / 5000.0 * 0.5;
    let terrain_factor = 1.0 + site.terrain_difficulty / 100.0 * 0.3;
    let total = base * depth_factor * terrain_factor + DEPLOYMENT_HOURS;
    total.min(robot.endurance_hours * ENDURANCE_USABLE_FRACTION)
}

/// Robot, vessel and operational cost of a mission (USD).
pub fn mission_cost(robot: &Robot, survey_hours: f64, transit_hours: f64, vessel_day_rate: f64) -> f64 {
    let days = (survey_hours + transit_hours) / 24.0;
    (robot.day_rate_usd + vessel_day_rate + OPERATIONAL_DAY_RATE_USD) * days
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `None` when the span is not finite or does not fit a `Duration`.
fn hours(value: f64) -> Option<Duration> {
    let ms = (value * 3_600_000.0).round();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(ms as i64)
}

/// Cooperative cancellation for a scheduling run.
///
/// Clones share one flag. The scheduler checks it before each site.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Fleet; only `Available` robots are scheduled.
    pub robots: Vec<Robot>,
    /// Candidate sites.
    pub sites: Vec<ScoredSite>,
    /// Planning start.
    pub start: DateTime<Utc>,
    pub params: PlanningParams,
}

impl ScheduleRequest {
    /// Creates a request with default parameters.
    pub fn new(robots: Vec<Robot>, sites: Vec<ScoredSite>, start: DateTime<Utc>) -> Self {
        Self {
            robots,
            sites,
            start,
            params: PlanningParams::default(),
        }
    }

    /// Sets the planning parameters.
    pub fn with_params(mut self, params: PlanningParams) -> Self {
        self.params = params;
        self
    }
}

/// Scheduled missions plus summary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MissionPlan {
    pub missions: Vec<Mission>,
    pub statistics: ScheduleStatistics,
}

/// Greedy mission scheduler.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_survey::models::{Robot, Site};
/// use u_survey::scheduler::{MissionScheduler, PlanningParams};
/// use u_survey::scoring::ScoringEngine;
///
/// let robots = vec![Robot::new("R1")
///     .with_max_depth(6000.0)
///     .with_endurance(48.0)
///     .with_speed(3.0)
///     .with_day_rate(20_000.0)];
/// let sites = ScoringEngine::with_defaults().score_sites(&[Site::new("S1").with_depth(4000.0)]);
/// let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
///
/// let plan = MissionScheduler::new(PlanningParams::default())
///     .schedule(&robots, &sites, start)
///     .unwrap();
/// assert_eq!(plan.missions.len(), 1);
/// assert_eq!(plan.missions[0].mission_id, "MISSION_001");
/// ```
#[derive(Debug, Clone)]
pub struct MissionScheduler {
    params: PlanningParams,
    scorer: Arc<dyn CompatibilityScore>,
    cancellation: Option<CancellationFlag>,
}

impl MissionScheduler {
    /// Creates a scheduler using the simplified compatibility score.
    pub fn new(params: PlanningParams) -> Self {
        Self {
            params,
            scorer: Arc::new(SimplifiedCompatibility),
            cancellation: None,
        }
    }

    /// Replaces the compatibility source.
    pub fn with_scorer(mut self, scorer: Arc<dyn CompatibilityScore>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Attaches a cancellation flag.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub fn params(&self) -> &PlanningParams {
        &self.params
    }

    /// Schedules missions for `sites` on `robots` starting at `start`.
    ///
    /// # Errors
    /// - `InvalidParameter` if the planning parameters are out of range.
    /// - `Cancelled` if the attached flag is set during the run.
    #[instrument(skip_all, fields(robots = robots.len(), sites = sites.len(), scorer = self.scorer.name()))]
    pub fn schedule(&self, robots: &[Robot], sites: &[ScoredSite], start: DateTime<Utc>) -> Result<MissionPlan> {
        self.params.validate()?;
        let params = &self.params;

        let mut fleet: Vec<&Robot> = robots
            .iter()
            .filter(|r| r.status.is_available() && r.endurance_hours > 0.0 && r.speed_knots > 0.0)
            .collect();
        fleet.sort_by(|a, b| a.robot_id.cmp(&b.robot_id));

        let mut robot_available: HashMap<&str, DateTime<Utc>> =
            fleet.iter().map(|r| (r.robot_id.as_str(), start)).collect();

        let order = self.sort_sites(sites);
        let mut remaining = params.budget_usd;
        let mut missions: Vec<Mission> = Vec::new();

        for (considered, &idx) in order.iter().enumerate() {
            if self.is_cancelled() {
                return Err(PlannerError::Cancelled {
                    considered,
                    total: order.len(),
                });
            }
            if remaining <= 0.0 {
                debug!(considered, "budget exhausted");
                break;
            }

            let site = &sites[idx].site;
            let Some((robot, score)) = self.best_robot(&fleet, site) else {
                debug!(site_id = %site.site_id, "no available robot reaches site");
                continue;
            };
            if score < MIN_COMPATIBILITY_SCORE {
                debug!(site_id = %site.site_id, score, "best robot below threshold");
                continue;
            }

            let transit = transit_hours(&robot.current_location, &site.location(), params.vessel_speed_knots);
            let survey = mission_duration_hours(robot, site);
            let total = transit + survey;
            let cost = round2(mission_cost(robot, survey, transit, params.vessel_day_rate));
            if cost > remaining {
                debug!(site_id = %site.site_id, cost, remaining, "over budget");
                continue;
            }

            let begin = robot_available
                .get(robot.robot_id.as_str())
                .copied()
                .unwrap_or(start);
            let Some(end) = hours(total).and_then(|d| begin.checked_add_signed(d)) else {
                debug!(site_id = %site.site_id, robot_id = %robot.robot_id, total, "beyond planning horizon");
                continue;
            };
            if end <= begin {
                debug!(site_id = %site.site_id, robot_id = %robot.robot_id, "zero-length mission");
                continue;
            }
            if (end - start).num_days() > i64::from(params.time_window_days) {
                debug!(site_id = %site.site_id, robot_id = %robot.robot_id, "beyond planning horizon");
                continue;
            }

            let mission = Mission {
                mission_id: mission_id(missions.len() + 1),
                site_id: site.site_id.clone(),
                site_name: site.name.clone(),
                robot_id: robot.robot_id.clone(),
                robot_name: robot.name.clone(),
                start_date: begin,
                end_date: end,
                transit_hours: round1(transit),
                survey_hours: round1(survey),
                total_hours: round1(total),
                cost_usd: cost,
                compatibility_score: score,
                site_location: site.location(),
            };
            debug!(
                mission_id = %mission.mission_id,
                site_id = %mission.site_id,
                robot_id = %mission.robot_id,
                cost,
                "mission scheduled"
            );
            remaining -= cost;
            robot_available.insert(robot.robot_id.as_str(), end);
            missions.push(mission);
        }

        let statistics = ScheduleStatistics::calculate(&missions, params.budget_usd, sites.len());
        info!(
            missions = statistics.total_missions,
            total_cost = statistics.total_cost_usd,
            coverage = statistics.coverage_percent,
            "schedule complete"
        );
        Ok(MissionPlan { missions, statistics })
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<MissionPlan> {
        let scheduler = Self {
            params: request.params.clone(),
            scorer: Arc::clone(&self.scorer),
            cancellation: self.cancellation.clone(),
        };
        scheduler.schedule(&request.robots, &request.sites, request.start)
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation.as_ref().is_some_and(CancellationFlag::is_cancelled)
    }

    /// Site indices in priority order.
    fn sort_sites(&self, sites: &[ScoredSite]) -> Vec<usize> {
        let key = |s: &ScoredSite| match self.params.prioritize_by {
            PrioritizeBy::Score => s.site.mineral_concentration,
            PrioritizeBy::Value => s.site.estimated_value_millions,
        };
        let mut indices: Vec<usize> = (0..sites.len()).collect();
        indices.sort_by(|&a, &b| {
            key(&sites[b])
                .partial_cmp(&key(&sites[a]))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indices
    }

    /// Highest-scoring robot that can reach `site`; `fleet` is in id order
    /// so the first maximum is the lowest id.
    fn best_robot<'a>(&self, fleet: &[&'a Robot], site: &Site) -> Option<(&'a Robot, f64)> {
        let mut best: Option<(&'a Robot, f64)> = None;
        for &robot in fleet {
            if !robot.can_reach(site.depth_m) {
                continue;
            }
            let score = self.scorer.score(robot, site);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((robot, score));
            }
        }
        best
    }
}

impl Default for MissionScheduler {
    fn default() -> Self {
        Self::new(PlanningParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{CompatibilityMatrix, DetailedCompatibility};
    use crate::models::RobotStatus;
    use crate::scoring::ScoringEngine;
    use chrono::TimeZone;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const KIT: [&str; 3] = ["side_scan_sonar", "multi_beam_echo_sounder", "HD_camera"];

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn make_robot(id: &str) -> Robot {
        Robot::new(id)
            .with_name(format!("Robot {id}"))
            .with_max_depth(6000.0)
            .with_endurance(100.0)
            .with_speed(3.0)
            .with_sensors(KIT)
            .with_day_rate(10_000.0)
    }

    fn make_site(id: &str, concentration: f64, value: f64) -> Site {
        Site::new(id)
            .with_name(format!("Site {id}"))
            .with_depth(0.0)
            .with_concentration(concentration)
            .with_value(value)
    }

    fn scored(sites: &[Site]) -> Vec<ScoredSite> {
        ScoringEngine::with_defaults().score_sites(sites)
    }

    #[derive(Debug)]
    struct FixedScore(f64);

    impl CompatibilityScore for FixedScore {
        fn name(&self) -> &'static str {
            "FIXED"
        }

        fn score(&self, _robot: &Robot, _site: &Site) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_extreme_transit_is_beyond_horizon() {
        // A crawling vessel turns a quarter-globe transit into more hours
        // than a timestamp can hold.
        let params = PlanningParams::default()
            .with_vessel_speed(1e-12)
            .with_budget(1e300);
        assert!(params.validate().is_ok());
        let robots = vec![make_robot("R1").with_location(0.0, 90.0)];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);

        let plan = MissionScheduler::new(params).schedule(&robots, &sites, t0()).unwrap();
        assert!(plan.missions.is_empty());
        assert_eq!(plan.statistics.total_cost_usd, 0.0);
    }

    #[test]
    fn test_hours_rejects_unrepresentable_spans() {
        assert_eq!(hours(1.5), Some(Duration::minutes(90)));
        assert_eq!(hours(f64::INFINITY), None);
        assert_eq!(hours(f64::NAN), None);
        assert_eq!(hours(1e16), None);
    }

    #[test]
    fn test_single_mission() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();

        assert_eq!(plan.missions.len(), 1);
        let m = &plan.missions[0];
        assert_eq!(m.mission_id, "MISSION_001");
        assert_eq!(m.robot_id, "R1");
        assert_eq!(m.start_date, t0());
        assert_eq!(m.transit_hours, 0.0);
        let survey = mission_duration_hours(&robots[0], &sites[0].site);
        // 25 / (3 × 1.852) × 3 + 4
        assert!((survey - 17.4989).abs() < 1e-3);
        assert_eq!(m.survey_hours, 17.5);
        assert!((m.duration_hours() - survey).abs() < 1e-3);
        assert_eq!(m.cost_usd, round2(100_000.0 * survey / 24.0));
        assert_eq!(m.compatibility_score, 100.0);
        assert_eq!(plan.statistics.coverage_percent, 100.0);
    }

    #[test]
    fn test_helpers() {
        let robot = make_robot("R1").with_endurance(10.0);
        let site = Site::new("S").with_depth(5000.0).with_terrain_difficulty(100.0);
        // Capped at 0.8 × endurance.
        assert_eq!(mission_duration_hours(&robot, &site), 8.0);

        let from = GeoPoint::new(0.0, 0.0);
        let to = GeoPoint::new(0.0, 1.0);
        let expected = from.distance_km(&to) / 22.224;
        assert!((transit_hours(&from, &to, 12.0) - expected).abs() < 1e-12);

        assert!((mission_cost(&robot, 20.0, 4.0, 75_000.0) - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_budget() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);
        let plan = MissionScheduler::new(PlanningParams::default().with_budget(0.0))
            .schedule(&robots, &sites, t0())
            .unwrap();
        assert!(plan.missions.is_empty());
        assert_eq!(plan.statistics.total_cost_usd, 0.0);
        assert_eq!(plan.statistics.coverage_percent, 0.0);
        assert_eq!(plan.statistics.budget_utilization_percent, 0.0);
    }

    #[test]
    fn test_score_threshold() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);

        let below = MissionScheduler::default()
            .with_scorer(Arc::new(FixedScore(39.99)))
            .schedule(&robots, &sites, t0())
            .unwrap();
        assert!(below.missions.is_empty());

        let at = MissionScheduler::default()
            .with_scorer(Arc::new(FixedScore(40.0)))
            .schedule(&robots, &sites, t0())
            .unwrap();
        assert_eq!(at.missions.len(), 1);
    }

    #[test]
    fn test_only_available_robots() {
        let robots = vec![
            make_robot("R1").with_status(RobotStatus::InMaintenance),
            make_robot("R2").with_status(RobotStatus::Other("Lost".into())),
        ];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert!(plan.missions.is_empty());
    }

    #[test]
    fn test_depth_filter() {
        let robots = vec![make_robot("R1").with_max_depth(3000.0)];
        let sites = scored(&[make_site("S1", 50.0, 100.0).with_depth(2800.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert!(plan.missions.is_empty());
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        let robots = vec![make_robot("R2"), make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(plan.missions[0].robot_id, "R1");
    }

    #[test]
    fn test_higher_score_wins() {
        let robots = vec![
            make_robot("R1").with_sensors(Vec::<String>::new()),
            make_robot("R2"),
        ];
        let sites = scored(&[make_site("S1", 50.0, 100.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(plan.missions[0].robot_id, "R2");
    }

    #[test]
    fn test_prioritization() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("rich", 90.0, 10.0), make_site("valuable", 10.0, 900.0)]);

        let by_score = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(by_score.missions[0].site_id, "rich");

        let params = PlanningParams::default().with_prioritize_by(PrioritizeBy::Value);
        let by_value = MissionScheduler::new(params).schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(by_value.missions[0].site_id, "valuable");
        assert_eq!(by_value.missions[1].site_id, "rich");
    }

    #[test]
    fn test_sequential_missions_on_one_robot() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 90.0, 1.0), make_site("S2", 80.0, 1.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(plan.missions.len(), 2);
        assert_eq!(plan.missions[1].start_date, plan.missions[0].end_date);
        assert_eq!(plan.missions[1].mission_id, "MISSION_002");
        assert!(!plan.missions[0].overlaps(&plan.missions[1]));
    }

    #[test]
    fn test_horizon_whole_days() {
        // Each mission takes ~17.5 h: the first ends on day 0, the second on day 1.
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 90.0, 1.0), make_site("S2", 80.0, 1.0)]);
        let params = PlanningParams::default().with_time_window(0);
        let plan = MissionScheduler::new(params).schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(plan.missions.len(), 1);
        assert_eq!(plan.missions[0].site_id, "S1");
    }

    #[test]
    fn test_over_budget_site_skipped() {
        let robots = vec![make_robot("R1")];
        // ~50 h transit to `far`; `near` sits on the robot.
        let sites = scored(&[
            make_site("far", 90.0, 1.0).with_location(0.0, 10.0),
            make_site("near", 10.0, 1.0),
        ]);
        let params = PlanningParams::default().with_budget(100_000.0);
        let plan = MissionScheduler::new(params).schedule(&robots, &sites, t0()).unwrap();
        assert_eq!(plan.missions.len(), 1);
        assert_eq!(plan.missions[0].site_id, "near");
        assert!(plan.statistics.total_cost_usd <= 100_000.0);
    }

    #[test]
    fn test_transit_from_current_location() {
        let robots = vec![make_robot("R1").with_location(0.0, 1.0)];
        let sites = scored(&[make_site("S1", 50.0, 1.0)]);
        let plan = MissionScheduler::default().schedule(&robots, &sites, t0()).unwrap();
        let expected = transit_hours(&GeoPoint::new(0.0, 1.0), &GeoPoint::new(0.0, 0.0), 12.0);
        assert_eq!(plan.missions[0].transit_hours, round1(expected));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let err = MissionScheduler::new(PlanningParams::default().with_budget(-1.0))
            .schedule(&[], &[], t0())
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidParameter { .. }));
    }

    #[test]
    fn test_cancellation() {
        let flag = CancellationFlag::new();
        flag.cancel();
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 1.0), make_site("S2", 40.0, 1.0)]);
        let err = MissionScheduler::default()
            .with_cancellation(flag.clone())
            .schedule(&robots, &sites, t0())
            .unwrap_err();
        assert!(matches!(err, PlannerError::Cancelled { considered: 0, total: 2 }));
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_matrix_as_scorer() {
        let robots = vec![make_robot("R1"), make_robot("R2")];
        let raw = vec![make_site("S1", 50.0, 1.0)];
        let mut matrix_robots = robots.clone();
        // R1 loses its status credit in the materialized matrix only.
        matrix_robots[0].status = RobotStatus::Deployed;
        let matrix = CompatibilityMatrix::build(&matrix_robots, &raw, &DetailedCompatibility);

        let plan = MissionScheduler::default()
            .with_scorer(Arc::new(matrix))
            .schedule(&robots, &scored(&raw), t0())
            .unwrap();
        assert_eq!(plan.missions[0].robot_id, "R2");
        assert_eq!(plan.missions[0].compatibility_score, 100.0);
    }

    #[test]
    fn test_schedule_request() {
        let robots = vec![make_robot("R1")];
        let sites = scored(&[make_site("S1", 50.0, 1.0)]);
        let request = ScheduleRequest::new(robots, sites, t0())
            .with_params(PlanningParams::default().with_budget(0.0));
        let plan = MissionScheduler::default().schedule_request(&request).unwrap();
        assert!(plan.missions.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let plan = MissionScheduler::default().schedule(&[], &[], t0()).unwrap();
        assert!(plan.missions.is_empty());
        assert_eq!(plan.statistics.coverage_percent, 0.0);
    }

    fn random_robot(rng: &mut SmallRng, id: usize) -> Robot {
        let sensors: Vec<&str> = KIT.iter().copied().filter(|_| rng.random_bool(0.7)).collect();
        let status = if rng.random_bool(0.8) {
            RobotStatus::Available
        } else {
            RobotStatus::Deployed
        };
        Robot::new(format!("R{id:02}"))
            .with_max_depth(rng.random_range(2000.0..7000.0))
            .with_endurance(rng.random_range(20.0..200.0))
            .with_speed(rng.random_range(2.0..6.0))
            .with_sensors(sensors)
            .with_status(status)
            .with_location(rng.random_range(-20.0..20.0), rng.random_range(-160.0..-110.0))
            .with_day_rate(rng.random_range(5_000.0..60_000.0))
    }

    fn random_site(rng: &mut SmallRng, id: usize) -> Site {
        Site::new(format!("S{id:02}"))
            .with_location(rng.random_range(-20.0..20.0), rng.random_range(-160.0..-110.0))
            .with_depth(rng.random_range(500.0..6500.0))
            .with_concentration(rng.random_range(0.0..100.0))
            .with_value(rng.random_range(10.0..2000.0))
            .with_terrain_difficulty(rng.random_range(0.0..100.0))
    }

    #[test]
    fn test_randomized_invariants() {
        let mut rng = SmallRng::seed_from_u64(2026);
        for _ in 0..25 {
            let robots: Vec<Robot> = (0..rng.random_range(1..8)).map(|i| random_robot(&mut rng, i)).collect();
            let raw: Vec<Site> = (0..rng.random_range(1..40)).map(|i| random_site(&mut rng, i)).collect();
            let sites = scored(&raw);
            let params = PlanningParams::default()
                .with_budget(rng.random_range(0.0..3_000_000.0))
                .with_time_window(rng.random_range(1..120));

            let plan = MissionScheduler::new(params.clone())
                .schedule(&robots, &sites, t0())
                .unwrap();

            let spent: f64 = plan.missions.iter().map(|m| m.cost_usd).sum();
            assert!(spent <= params.budget_usd + 1e-6);

            for (i, m) in plan.missions.iter().enumerate() {
                assert_eq!(m.mission_id, mission_id(i + 1));
                assert!(m.end_date > m.start_date);
                assert!((m.end_date - t0()).num_days() <= i64::from(params.time_window_days));
                let robot = robots.iter().find(|r| r.robot_id == m.robot_id).unwrap();
                assert!(robot.status.is_available());
                assert!(m.compatibility_score >= MIN_COMPATIBILITY_SCORE);
                for other in &plan.missions[i + 1..] {
                    if other.robot_id == m.robot_id {
                        assert!(!m.overlaps(other), "{} overlaps {}", m.mission_id, other.mission_id);
                    }
                }
            }
        }
    }
}
