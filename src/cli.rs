use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args, Parser, Subcommand};

use u_survey::scheduler::PrioritizeBy;

/// u-survey: offshore survey planning for deep-sea mineral exploration.
///
/// Results are printed to stdout as JSON; logs go to stderr (RUST_LOG).
#[derive(Debug, Parser)]
#[command(
    name = "u-survey",
    version,
    about,
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score and rank candidate sites.
    Score(ScoreArgs),

    /// Economic viability and priority tier of one site.
    Economics(EconomicsArgs),

    /// Robot-site compatibility: one pair in detail, or the full matrix.
    Match(MatchArgs),

    /// Best robots for a site, or best sites for a robot.
    Rank(RankArgs),

    /// Depth and sensor requirements the fleet cannot meet.
    Gaps(GapsArgs),

    /// Greedy mission plan under budget and horizon.
    Schedule(ScheduleArgs),
}

/// Input files shared by the fleet-aware commands.
#[derive(Debug, Args)]
pub struct FleetInput {
    /// JSON array of candidate sites.
    #[arg(long)]
    pub sites: PathBuf,

    /// JSON array of survey robots.
    #[arg(long)]
    pub robots: PathBuf,
}

// -- score / economics --

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// JSON array of candidate sites.
    #[arg(long)]
    pub sites: PathBuf,

    /// Planner config (TOML). Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EconomicsArgs {
    /// JSON array of candidate sites.
    #[arg(long)]
    pub sites: PathBuf,

    /// Site to assess.
    #[arg(long)]
    pub site: String,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

// -- match / rank / gaps --

#[derive(Debug, Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub input: FleetInput,

    /// Robot for a detailed report (requires --site).
    #[arg(long, requires = "site")]
    pub robot: Option<String>,

    /// Site for a detailed report (requires --robot).
    #[arg(long, requires = "robot")]
    pub site: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["site", "robot"])))]
pub struct RankArgs {
    #[command(flatten)]
    pub input: FleetInput,

    /// Rank robots for this site.
    #[arg(long)]
    pub site: Option<String>,

    /// Rank sites for this robot.
    #[arg(long)]
    pub robot: Option<String>,

    /// Number of entries to return.
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

#[derive(Debug, Args)]
pub struct GapsArgs {
    #[command(flatten)]
    pub input: FleetInput,
}

// -- schedule --

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub input: FleetInput,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Planning start (RFC 3339). Defaults to now.
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// Budget override (USD).
    #[arg(long)]
    pub budget: Option<f64>,

    /// Planning horizon override (days).
    #[arg(long)]
    pub window: Option<u32>,

    /// Site ordering: score or value.
    #[arg(long)]
    pub prioritize: Option<PrioritizeBy>,

    /// Include per-robot route waypoints.
    #[arg(long)]
    pub routes: bool,
}
