//! Scoring criteria and weight sets.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::Site;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// The seven site criteria combined into the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    MineralConcentration,
    Depth,
    DistanceFromPort,
    EnvironmentalSensitivity,
    EstimatedValue,
    TerrainDifficulty,
    SurveyDataQuality,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 7] = [
        Criterion::MineralConcentration,
        Criterion::Depth,
        Criterion::DistanceFromPort,
        Criterion::EnvironmentalSensitivity,
        Criterion::EstimatedValue,
        Criterion::TerrainDifficulty,
        Criterion::SurveyDataQuality,
    ];

    /// Whether a lower raw value is better.
    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            Criterion::Depth
                | Criterion::DistanceFromPort
                | Criterion::EnvironmentalSensitivity
                | Criterion::TerrainDifficulty
        )
    }

    /// Raw site attribute this criterion reads.
    pub fn raw_value(self, site: &Site) -> f64 {
        match self {
            Criterion::MineralConcentration => site.mineral_concentration,
            Criterion::Depth => site.depth_m,
            Criterion::DistanceFromPort => site.distance_from_port_km,
            Criterion::EnvironmentalSensitivity => site.environmental_sensitivity,
            Criterion::EstimatedValue => site.estimated_value_millions,
            Criterion::TerrainDifficulty => site.terrain_difficulty,
            Criterion::SurveyDataQuality => site.survey_data_quality,
        }
    }

    /// Display label for score breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::MineralConcentration => "Mineral Concentration",
            Criterion::Depth => "Depth (accessibility)",
            Criterion::DistanceFromPort => "Distance from Port",
            Criterion::EnvironmentalSensitivity => "Environmental Risk",
            Criterion::EstimatedValue => "Estimated Value",
            Criterion::TerrainDifficulty => "Terrain Difficulty",
            Criterion::SurveyDataQuality => "Survey Data Quality",
        }
    }
}

/// Weight per criterion.
///
/// `Default` yields the documented default weights, which sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub mineral_concentration: f64,
    pub depth: f64,
    pub distance_from_port: f64,
    pub environmental_sensitivity: f64,
    pub estimated_value: f64,
    pub terrain_difficulty: f64,
    pub survey_data_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            mineral_concentration: 0.20,
            depth: 0.15,
            distance_from_port: 0.10,
            environmental_sensitivity: 0.15,
            estimated_value: 0.20,
            terrain_difficulty: 0.10,
            survey_data_quality: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Equal weights (1/7 each).
    pub fn equal() -> Self {
        Self::uniform(1.0 / Criterion::ALL.len() as f64)
    }

    fn uniform(w: f64) -> Self {
        Self {
            mineral_concentration: w,
            depth: w,
            distance_from_port: w,
            environmental_sensitivity: w,
            estimated_value: w,
            terrain_difficulty: w,
            survey_data_quality: w,
        }
    }

    /// Normalizes raw (unnormalized) weights so they sum to 1.0.
    ///
    /// All-zero input yields equal weights. Negative raw values are
    /// treated as zero.
    pub fn from_raw(raw: ScoringWeights) -> Self {
        let mut clamped = raw;
        for c in Criterion::ALL {
            let w = clamped.get(c);
            clamped.set(c, if w.is_finite() { w.max(0.0) } else { 0.0 });
        }
        let sum = clamped.sum();
        if sum > 0.0 {
            let mut out = clamped;
            for c in Criterion::ALL {
                out.set(c, clamped.get(c) / sum);
            }
            out
        } else {
            Self::equal()
        }
    }

    /// Weight of one criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::MineralConcentration => self.mineral_concentration,
            Criterion::Depth => self.depth,
            Criterion::DistanceFromPort => self.distance_from_port,
            Criterion::EnvironmentalSensitivity => self.environmental_sensitivity,
            Criterion::EstimatedValue => self.estimated_value,
            Criterion::TerrainDifficulty => self.terrain_difficulty,
            Criterion::SurveyDataQuality => self.survey_data_quality,
        }
    }

    /// Sets the weight of one criterion.
    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        let slot = match criterion {
            Criterion::MineralConcentration => &mut self.mineral_concentration,
            Criterion::Depth => &mut self.depth,
            Criterion::DistanceFromPort => &mut self.distance_from_port,
            Criterion::EnvironmentalSensitivity => &mut self.environmental_sensitivity,
            Criterion::EstimatedValue => &mut self.estimated_value,
            Criterion::TerrainDifficulty => &mut self.terrain_difficulty,
            Criterion::SurveyDataQuality => &mut self.survey_data_quality,
        };
        *slot = weight;
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Whether every weight is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        Criterion::ALL.iter().all(|&c| self.get(c) == 0.0)
    }

    /// Checks that weights are finite, non-negative and sum to 1.0 ± tolerance.
    pub fn validate(&self) -> Result<()> {
        for c in Criterion::ALL {
            let w = self.get(c);
            if !w.is_finite() || w < 0.0 {
                return Err(PlannerError::InvalidWeights(format!(
                    "weight for {} must be a finite non-negative number, got {w}",
                    c.label()
                )));
            }
        }
        let total = self.sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PlannerError::InvalidWeights(format!(
                "weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}
