//! Site × robot compatibility matrix.

use serde::Serialize;

use super::CompatibilityScore;
use crate::models::{Robot, Site};

/// One site's scores against every robot, aligned with
/// [`CompatibilityMatrix::robot_ids`].
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub site_id: String,
    pub site_name: String,
    pub scores: Vec<f64>,
}

/// Compatibility scores for all (site, robot) pairs.
///
/// Rows follow site input order; columns follow robot input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompatibilityMatrix {
    robot_ids: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl CompatibilityMatrix {
    /// Evaluates `rule` for every pair.
    pub fn build(robots: &[Robot], sites: &[Site], rule: &dyn CompatibilityScore) -> Self {
        let robot_ids = robots.iter().map(|r| r.robot_id.clone()).collect();
        let rows = sites
            .iter()
            .map(|site| MatrixRow {
                site_id: site.site_id.clone(),
                site_name: site.name.clone(),
                scores: robots.iter().map(|robot| rule.score(robot, site)).collect(),
            })
            .collect();
        Self { robot_ids, rows }
    }

    /// Column identifiers.
    pub fn robot_ids(&self) -> &[String] {
        &self.robot_ids
    }

    /// Rows in site order.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Number of sites (rows).
    pub fn site_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of robots (columns).
    pub fn robot_count(&self) -> usize {
        self.robot_ids.len()
    }

    fn column(&self, robot_id: &str) -> Option<usize> {
        self.robot_ids.iter().position(|id| id == robot_id)
    }

    fn row(&self, site_id: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.site_id == site_id)
    }

    /// Score for one pair.
    pub fn get(&self, site_id: &str, robot_id: &str) -> Option<f64> {
        let col = self.column(robot_id)?;
        self.row(site_id).map(|r| r.scores[col])
    }

    /// `(robot_id, score)` pairs for one site.
    pub fn scores_for_site(&self, site_id: &str) -> Option<Vec<(&str, f64)>> {
        self.row(site_id).map(|row| {
            self.robot_ids
                .iter()
                .map(String::as_str)
                .zip(row.scores.iter().copied())
                .collect()
        })
    }

    /// `(site_id, score)` pairs for one robot.
    pub fn scores_for_robot(&self, robot_id: &str) -> Option<Vec<(&str, f64)>> {
        let col = self.column(robot_id)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.site_id.as_str(), row.scores[col]))
                .collect(),
        )
    }
}

impl CompatibilityScore for CompatibilityMatrix {
    fn name(&self) -> &'static str {
        "MATRIX"
    }

    /// Looks up the materialized score; pairs outside the matrix score 0.
    fn score(&self, robot: &Robot, site: &Site) -> f64 {
        self.get(&site.site_id, &robot.robot_id).unwrap_or(0.0)
    }
}
