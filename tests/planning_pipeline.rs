//! End-to-end planning over the bundled fixtures in `data/`.

use chrono::{TimeZone, Utc};

use u_survey::config::PlannerConfig;
use u_survey::dataset::{parse_robots, parse_sites};
use u_survey::matching::{CompatibilityMatcher, CompatibilityStatus};
use u_survey::models::{Robot, Site};
use u_survey::scheduler::{route_waypoints, MissionScheduler, PlanningParams, WaypointKind};
use u_survey::scoring::{PriorityTier, ScoringEngine};
use u_survey::validation::validate_input;

const SITES_JSON: &str = include_str!("../data/sites.json");
const ROBOTS_JSON: &str = include_str!("../data/robots.json");

fn fixtures() -> (Vec<Site>, Vec<Robot>) {
    let sites = parse_sites(SITES_JSON).expect("sites fixture");
    let robots = parse_robots(ROBOTS_JSON).expect("robots fixture");
    (sites, robots)
}

#[test]
fn fixtures_are_valid() {
    u_survey::logging::init_test();
    let (sites, robots) = fixtures();
    assert_eq!(sites.len(), 9);
    assert_eq!(robots.len(), 5);
    assert!(validate_input(&sites, &robots).is_ok());
}

#[test]
fn scoring_ranks_all_sites() {
    let (sites, _) = fixtures();
    let engine = ScoringEngine::with_defaults();
    let scored = engine.score_sites(&sites);

    assert_eq!(scored.len(), sites.len());
    for pair in scored.windows(2) {
        assert!(pair[0].composite_score >= pair[1].composite_score);
    }
    for s in &scored {
        assert!((0.0..=100.0).contains(&s.composite_score));
        assert_eq!(s.breakdown().len(), 7);
    }

    let assessment = engine
        .assess(&scored[0], &PlannerConfig::default().economics)
        .unwrap();
    assert_eq!(assessment.site_id, scored[0].site.site_id);
    if !assessment.economics.is_viable {
        assert_eq!(assessment.priority, PriorityTier::NotViable);
    }
}

#[test]
fn matching_over_fleet() {
    let (sites, robots) = fixtures();
    let matcher = CompatibilityMatcher::new(robots, sites);

    let full = matcher.detailed_compatibility("R001", "S001").unwrap();
    assert_eq!(full.overall_status, CompatibilityStatus::FullyCompatible);
    assert_eq!(full.compatibility_score, 100.0);

    // Deployed robot missing two of four sulfide/crust sensors.
    let report = matcher.detailed_compatibility("R004", "S007").unwrap();
    assert_eq!(report.overall_status, CompatibilityStatus::Incompatible);
    assert_eq!(
        report.missing_sensors,
        vec!["HD_camera".to_string(), "magnetometer".to_string()]
    );
    assert_eq!(report.compatibility_score, 60.0);

    let matrix = matcher.compatibility_matrix();
    assert_eq!(matrix.site_count(), 9);
    assert_eq!(matrix.robot_count(), 5);

    let best = matcher.best_robots_for_site("S001", 2).unwrap();
    assert_eq!(best.len(), 2);
    assert_eq!(best[0].robot_id, "R001");

    assert!(matcher.detailed_compatibility("R404", "S001").unwrap_err().is_not_found());
}

#[test]
fn gaps_flag_trench_site() {
    let (sites, robots) = fixtures();
    let gaps = CompatibilityMatcher::new(robots, sites).equipment_gaps();

    assert_eq!(gaps.depth_gaps.len(), 1);
    assert_eq!(gaps.depth_gaps[0].site_id, "S009");
    assert_eq!(gaps.depth_gaps[0].max_fleet_depth_m, 6500.0);
    assert!((gaps.depth_gaps[0].depth_deficit_m - 700.0).abs() < 1e-9);
    assert!(gaps.sensor_gaps.is_empty());
    assert_eq!(
        gaps.recommendations,
        vec!["Consider acquiring ultra-deep robots (>7200m rating) to access 1 deep sites".to_string()]
    );
}

#[test]
fn schedule_respects_constraints() {
    let (sites, robots) = fixtures();
    let scored = ScoringEngine::with_defaults().score_sites(&sites);
    let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let params = PlanningParams::default();

    let plan = MissionScheduler::new(params.clone())
        .schedule(&robots, &scored, start)
        .unwrap();

    assert!(!plan.missions.is_empty());
    // Highest concentration first; R001 and R005 tie and the lower id wins.
    assert_eq!(plan.missions[0].site_id, "S003");
    assert_eq!(plan.missions[0].robot_id, "R001");
    assert_eq!(plan.missions[0].start_date, start);

    let spent: f64 = plan.missions.iter().map(|m| m.cost_usd).sum();
    assert!(spent <= params.budget_usd);
    assert!((plan.statistics.total_cost_usd - spent).abs() < 0.01);

    for (i, m) in plan.missions.iter().enumerate() {
        let robot = robots.iter().find(|r| r.robot_id == m.robot_id).unwrap();
        assert!(robot.status.is_available());
        assert_ne!(m.site_id, "S009");
        assert!(m.end_date > m.start_date);
        assert!((m.end_date - start).num_days() <= i64::from(params.time_window_days));
        for other in &plan.missions[i + 1..] {
            if other.robot_id == m.robot_id {
                assert!(!m.overlaps(other));
            }
        }
    }

    let routes = route_waypoints(&plan.missions, &robots).unwrap();
    let starts = routes.iter().filter(|w| w.kind == WaypointKind::Start).count();
    assert_eq!(starts, plan.statistics.num_robots_used);
    assert_eq!(routes.len(), plan.missions.len() + starts);
}

#[test]
fn zero_budget_plan_is_empty() {
    let (sites, robots) = fixtures();
    let scored = ScoringEngine::with_defaults().score_sites(&sites);
    let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

    let plan = MissionScheduler::new(PlanningParams::default().with_budget(0.0))
        .schedule(&robots, &scored, start)
        .unwrap();
    assert!(plan.missions.is_empty());
    assert_eq!(plan.statistics.total_cost_usd, 0.0);
    assert_eq!(plan.statistics.coverage_percent, 0.0);
}
