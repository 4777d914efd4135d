//! JSON input loading for sites and robots.

use std::path::Path;

use crate::error::Result;
use crate::models::{Robot, Site};

/// Parses a JSON array of sites.
pub fn parse_sites(json: &str) -> Result<Vec<Site>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a JSON array of robots.
pub fn parse_robots(json: &str) -> Result<Vec<Robot>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON array of sites from a file.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<Site>> {
    parse_sites(&std::fs::read_to_string(path)?)
}

/// Reads a JSON array of robots from a file.
pub fn load_robots<P: AsRef<Path>>(path: P) -> Result<Vec<Robot>> {
    parse_robots(&std::fs::read_to_string(path)?)
}
