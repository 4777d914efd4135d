//! Offshore survey planning for deep-sea mineral exploration.
//!
//! Ranks candidate extraction sites, matches survey robots to sites, and
//! builds a budget- and horizon-constrained mission plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Site`, `Robot`, `RobotStatus`, `Mission`, `GeoPoint`
//! - **`scoring`**: Seven-criterion weighted site scoring, economic viability, priority tiers
//! - **`matching`**: Robot-site compatibility (depth, sensors, status), matrix, equipment gaps
//! - **`scheduler`**: Greedy mission scheduler, plan statistics, route waypoints
//! - **`validation`**: Input integrity checks (IDs, ranges, ratings)
//! - **`config`**: TOML-backed `PlannerConfig`
//! - **`dataset`**: JSON loading of sites and robots
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Pipeline
//!
//! ```text
//! sites ──► ScoringEngine ──► ScoredSite ─┐
//!                                         ├─► MissionScheduler ──► MissionPlan
//! robots ─► CompatibilityMatcher ─────────┘
//! ```
//!
//! All computation is synchronous and deterministic for a given input and
//! planning start.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod matching;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use error::{PlannerError, Result};
