mod cli;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::json;

use cli::{Cli, Command, EconomicsArgs, FleetInput, MatchArgs, RankArgs, ScheduleArgs, ScoreArgs};
use u_survey::config::PlannerConfig;
use u_survey::dataset::{load_robots, load_sites};
use u_survey::logging;
use u_survey::matching::CompatibilityMatcher;
use u_survey::models::{Robot, Site};
use u_survey::scheduler::{route_waypoints, MissionScheduler};
use u_survey::scoring::ScoringEngine;
use u_survey::validation::{validate_robots, validate_sites, ValidationError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let output = match cli.command {
        Command::Score(args) => cmd_score(&args)?,
        Command::Economics(args) => cmd_economics(&args)?,
        Command::Match(args) => cmd_match(&args)?,
        Command::Rank(args) => cmd_rank(&args)?,
        Command::Gaps(args) => cmd_gaps(&args.input)?,
        Command::Schedule(args) => cmd_schedule(&args)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report_invalid(what: &str, errors: Vec<ValidationError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
    anyhow!("invalid {what} ({} problems):\n{}", errors.len(), lines.join("\n"))
}

fn sites(path: &Path) -> Result<Vec<Site>> {
    let sites = load_sites(path).with_context(|| format!("loading sites from {}", path.display()))?;
    validate_sites(&sites).map_err(|e| report_invalid("sites", e))?;
    Ok(sites)
}

fn robots(path: &Path) -> Result<Vec<Robot>> {
    let robots = load_robots(path).with_context(|| format!("loading robots from {}", path.display()))?;
    validate_robots(&robots).map_err(|e| report_invalid("robots", e))?;
    Ok(robots)
}

fn matcher(input: &FleetInput) -> Result<CompatibilityMatcher> {
    Ok(CompatibilityMatcher::new(robots(&input.robots)?, sites(&input.sites)?))
}

fn config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(PlannerConfig::default()),
    }
}

fn cmd_score(args: &ScoreArgs) -> Result<serde_json::Value> {
    let config = config(args.config.as_deref())?;
    let engine = ScoringEngine::new(config.scoring)?;
    let scored = engine.score_sites(&sites(&args.sites)?);
    let breakdowns: Vec<_> = scored
        .iter()
        .map(|s| {
            let breakdown: serde_json::Map<String, serde_json::Value> = s
                .breakdown()
                .into_iter()
                .map(|(label, score)| (label.to_string(), json!(score)))
                .collect();
            json!({ "site_id": s.site.site_id, "breakdown": breakdown })
        })
        .collect();
    Ok(json!({
        "weights": engine.weights(),
        "sites": scored,
        "breakdowns": breakdowns,
    }))
}

fn cmd_economics(args: &EconomicsArgs) -> Result<serde_json::Value> {
    let config = config(args.config.as_deref())?;
    let engine = ScoringEngine::new(config.scoring)?;
    let scored = engine.score_sites(&sites(&args.sites)?);
    let target = scored
        .iter()
        .find(|s| s.site.site_id == args.site)
        .ok_or_else(|| anyhow!("site not found: {}", args.site))?;
    let assessment = engine.assess(target, &config.economics)?;
    Ok(json!({ "assessment": assessment }))
}

fn cmd_match(args: &MatchArgs) -> Result<serde_json::Value> {
    let matcher = matcher(&args.input)?;
    match (args.robot.as_deref(), args.site.as_deref()) {
        (Some(robot_id), Some(site_id)) => Ok(json!(matcher.detailed_compatibility(robot_id, site_id)?)),
        _ => Ok(json!(matcher.compatibility_matrix())),
    }
}

fn cmd_rank(args: &RankArgs) -> Result<serde_json::Value> {
    let matcher = matcher(&args.input)?;
    match (args.site.as_deref(), args.robot.as_deref()) {
        (Some(site_id), _) => Ok(json!(matcher.best_robots_for_site(site_id, args.top)?)),
        (None, Some(robot_id)) => Ok(json!(matcher.best_sites_for_robot(robot_id, args.top)?)),
        (None, None) => Err(anyhow!("`rank` takes exactly one of --site or --robot")),
    }
}

fn cmd_gaps(input: &FleetInput) -> Result<serde_json::Value> {
    Ok(json!(matcher(input)?.equipment_gaps()))
}

fn cmd_schedule(args: &ScheduleArgs) -> Result<serde_json::Value> {
    let config = config(args.config.as_deref())?;
    let mut params = config.scheduling;
    if let Some(budget) = args.budget {
        params.budget_usd = budget;
    }
    if let Some(window) = args.window {
        params.time_window_days = window;
    }
    if let Some(prioritize) = args.prioritize {
        params.prioritize_by = prioritize;
    }
    let start = args.start.unwrap_or_else(Utc::now);

    let robots = robots(&args.input.robots)?;
    let engine = ScoringEngine::new(config.scoring)?;
    let scored = engine.score_sites(&sites(&args.input.sites)?);
    let plan = MissionScheduler::new(params).schedule(&robots, &scored, start)?;

    if args.routes {
        let routes = route_waypoints(&plan.missions, &robots)?;
        Ok(json!({ "plan": plan, "routes": routes }))
    } else {
        Ok(json!({ "plan": plan }))
    }
}
