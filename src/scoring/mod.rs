//! Multi-criteria site scoring and economic viability.
//!
//! # Algorithm
//!
//! 1. For each of the seven criteria, find the min/max raw value across
//!    the supplied site population.
//! 2. Min-max normalize every site's raw value to 0-100 (inverted for
//!    criteria where lower is better). A zero-variance criterion scores
//!    a neutral 50 for every site.
//! 3. Combine the sub-scores as a weighted sum and sort descending.
//!
//! Scores are relative to the batch supplied, not an absolute scale.

mod economics;
mod weights;

pub use economics::{
    categorize_priority, economic_viability, EconomicParams, EconomicViability, PriorityTier,
};
pub use weights::{Criterion, ScoringWeights, WEIGHT_SUM_TOLERANCE};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::models::Site;

/// Score assigned to every site on a criterion with no variance.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Rounds to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Min-max normalizes `value` onto 0-100.
///
/// Returns [`NEUTRAL_SCORE`] when `min == max`. With `inverse`, lower
/// raw values score higher.
pub fn normalize(value: f64, min: f64, max: f64, inverse: bool) -> f64 {
    if max == min {
        return NEUTRAL_SCORE;
    }
    let normalized = (value - min) / (max - min) * 100.0;
    if inverse {
        100.0 - normalized
    } else {
        normalized
    }
}

/// Normalized per-criterion scores (0-100 each).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub mineral_score: f64,
    pub depth_score: f64,
    pub distance_score: f64,
    pub environmental_score: f64,
    pub value_score: f64,
    pub terrain_score: f64,
    pub quality_score: f64,
}

impl SubScores {
    /// Sub-score for one criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::MineralConcentration => self.mineral_score,
            Criterion::Depth => self.depth_score,
            Criterion::DistanceFromPort => self.distance_score,
            Criterion::EnvironmentalSensitivity => self.environmental_score,
            Criterion::EstimatedValue => self.value_score,
            Criterion::TerrainDifficulty => self.terrain_score,
            Criterion::SurveyDataQuality => self.quality_score,
        }
    }

    fn set(&mut self, criterion: Criterion, score: f64) {
        let slot = match criterion {
            Criterion::MineralConcentration => &mut self.mineral_score,
            Criterion::Depth => &mut self.depth_score,
            Criterion::DistanceFromPort => &mut self.distance_score,
            Criterion::EnvironmentalSensitivity => &mut self.environmental_score,
            Criterion::EstimatedValue => &mut self.value_score,
            Criterion::TerrainDifficulty => &mut self.terrain_score,
            Criterion::SurveyDataQuality => &mut self.quality_score,
        };
        *slot = score;
    }
}

/// A site enriched with its scores. The wrapped [`Site`] is unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSite {
    #[serde(flatten)]
    pub site: Site,
    #[serde(flatten)]
    pub scores: SubScores,
    /// Weighted composite (0-100, two decimals).
    pub composite_score: f64,
}

impl ScoredSite {
    /// Labelled sub-scores in canonical criterion order.
    pub fn breakdown(&self) -> Vec<(&'static str, f64)> {
        Criterion::ALL
            .iter()
            .map(|&c| (c.label(), self.scores.get(c)))
            .collect()
    }
}

/// Min/max of one criterion across a population.
#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

/// Weighted multi-criteria site scorer.
///
/// # Example
///
/// ```
/// use u_survey::models::Site;
/// use u_survey::scoring::ScoringEngine;
///
/// let sites = vec![
///     Site::new("A").with_concentration(80.0).with_depth(3000.0),
///     Site::new("B").with_concentration(40.0).with_depth(5000.0),
/// ];
/// let engine = ScoringEngine::with_defaults();
/// let scored = engine.score_sites(&sites);
/// assert_eq!(scored[0].site.site_id, "A");
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    /// Creates an engine with the given weights.
    ///
    /// All-zero weights fall back to equal weights. Otherwise the weights
    /// must sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`]; they are never
    /// silently renormalized.
    pub fn new(weights: ScoringWeights) -> Result<Self> {
        if weights.is_all_zero() {
            warn!("all scoring weights are zero; using equal weights");
            return Ok(Self {
                weights: ScoringWeights::equal(),
            });
        }
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Creates an engine with the default weights.
    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// The active weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores all sites and returns them sorted by composite score (descending).
    ///
    /// Ties keep input order.
    #[instrument(skip(self, sites), fields(sites = sites.len()))]
    pub fn score_sites(&self, sites: &[Site]) -> Vec<ScoredSite> {
        if sites.is_empty() {
            return Vec::new();
        }

        // Pass 1: per-criterion ranges
        let ranges: Vec<(Criterion, Range)> = Criterion::ALL
            .iter()
            .map(|&c| {
                let range = sites.iter().map(|s| c.raw_value(s)).fold(
                    Range {
                        min: f64::INFINITY,
                        max: f64::NEG_INFINITY,
                    },
                    |r, v| Range {
                        min: r.min.min(v),
                        max: r.max.max(v),
                    },
                );
                if range.min == range.max {
                    debug!(criterion = ?c, value = range.min, "zero variance; neutral score");
                }
                (c, range)
            })
            .collect();

        // Pass 2: normalize and combine
        let mut scored: Vec<ScoredSite> = sites
            .iter()
            .map(|site| {
                let mut scores = SubScores::default();
                let mut composite = 0.0;
                for &(c, range) in &ranges {
                    let s = normalize(c.raw_value(site), range.min, range.max, c.is_inverse());
                    scores.set(c, s);
                    composite += s * self.weights.get(c);
                }
                ScoredSite {
                    site: site.clone(),
                    scores,
                    composite_score: round2(composite.clamp(0.0, 100.0)),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.composite_score
                .partial_cmp(&a.composite_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(top) = scored.first() {
            debug!(site_id = %top.site.site_id, score = top.composite_score, "top site");
        }
        scored
    }

    /// Economic viability of a site (see [`economic_viability`]).
    pub fn economic_viability(&self, site: &Site, params: &EconomicParams) -> Result<EconomicViability> {
        economic_viability(site, params)
    }

    /// Economics and priority tier for a scored site.
    pub fn assess(&self, scored: &ScoredSite, params: &EconomicParams) -> Result<SiteAssessment> {
        let economics = economic_viability(&scored.site, params)?;
        let tier = categorize_priority(scored.composite_score, &economics);
        Ok(SiteAssessment {
            site_id: scored.site.site_id.clone(),
            composite_score: scored.composite_score,
            priority: tier,
            priority_label: tier.label().to_string(),
            priority_color: tier.color().to_string(),
            economics,
        })
    }
}

/// Economics plus priority tier for one site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteAssessment {
    pub site_id: String,
    pub composite_score: f64,
    pub priority: PriorityTier,
    pub priority_label: String,
    pub priority_color: String,
    pub economics: EconomicViability,
}
