//! Economic viability and priority tiers.
//!
//! Per-ton economics are adjusted for site depth, terrain, and distance
//! from port, then annualized over the project horizon for NPV.
//!
//! # Formulas
//!
//! | Quantity | Definition |
//! |----------|-----------|
//! | Depth multiplier | 1 + depth/10000 × 0.5 |
//! | Distance multiplier | 1 + distance/5000 × 0.3 |
//! | Terrain multiplier | 1 + terrain/100 × 0.4 |
//! | Cost/t | extraction × depth × terrain + refining + transport × distance |
//! | Effective price/t | price × concentration/100 |
//! | NPV | Σ_{y=1..N} annual_profit / (1 + r)^y |
//! | ROI | (revenue − cost) / cost × 100, lifetime, undiscounted |

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PlannerError, Result};
use crate::models::Site;

/// Extraction economics assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicParams {
    pub extraction_cost_per_ton: f64,
    pub refining_cost_per_ton: f64,
    pub transport_cost_per_ton: f64,
    /// Total recoverable tonnage over the project.
    pub estimated_tonnage: f64,
    pub mineral_price_per_ton: f64,
    /// Annual discount rate (0.10 = 10%).
    pub discount_rate: f64,
    pub project_years: u32,
}

impl Default for EconomicParams {
    fn default() -> Self {
        Self {
            extraction_cost_per_ton: 50.0,
            refining_cost_per_ton: 30.0,
            transport_cost_per_ton: 20.0,
            estimated_tonnage: 100_000.0,
            mineral_price_per_ton: 8_000.0,
            discount_rate: 0.10,
            project_years: 10,
        }
    }
}

impl EconomicParams {
    /// Rejects horizons of zero years and non-finite or negative inputs.
    pub fn validate(&self) -> Result<()> {
        if self.project_years == 0 {
            return Err(PlannerError::invalid_parameter(
                "project_years",
                "must be at least 1",
            ));
        }
        let fields = [
            ("extraction_cost_per_ton", self.extraction_cost_per_ton),
            ("refining_cost_per_ton", self.refining_cost_per_ton),
            ("transport_cost_per_ton", self.transport_cost_per_ton),
            ("estimated_tonnage", self.estimated_tonnage),
            ("mineral_price_per_ton", self.mineral_price_per_ton),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::invalid_parameter(
                    name,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(PlannerError::invalid_parameter(
                "discount_rate",
                format!("must be finite and greater than -1, got {}", self.discount_rate),
            ));
        }
        Ok(())
    }
}

/// Economic metrics for one site.
///
/// Serializes the raw USD fields followed by `*_millions` views of the
/// annual and NPV figures. The views are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EconomicViability {
    pub total_cost_per_ton: f64,
    pub effective_price_per_ton: f64,
    pub profit_per_ton: f64,
    pub annual_revenue_usd: f64,
    pub annual_costs_usd: f64,
    pub annual_profit_usd: f64,
    pub npv_usd: f64,
    pub roi_percent: f64,
    /// Profit per ton strictly positive.
    pub is_viable: bool,
}

impl EconomicViability {
    /// Annual revenue (USD millions).
    pub fn annual_revenue_millions(&self) -> f64 {
        self.annual_revenue_usd / 1_000_000.0
    }

    /// Annual costs (USD millions).
    pub fn annual_costs_millions(&self) -> f64 {
        self.annual_costs_usd / 1_000_000.0
    }

    /// Annual profit (USD millions).
    pub fn annual_profit_millions(&self) -> f64 {
        self.annual_profit_usd / 1_000_000.0
    }

    /// Net present value (USD millions).
    pub fn npv_millions(&self) -> f64 {
        self.npv_usd / 1_000_000.0
    }
}

impl Serialize for EconomicViability {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EconomicViability", 13)?;
        state.serialize_field("total_cost_per_ton", &self.total_cost_per_ton)?;
        state.serialize_field("effective_price_per_ton", &self.effective_price_per_ton)?;
        state.serialize_field("profit_per_ton", &self.profit_per_ton)?;
        state.serialize_field("annual_revenue_usd", &self.annual_revenue_usd)?;
        state.serialize_field("annual_costs_usd", &self.annual_costs_usd)?;
        state.serialize_field("annual_profit_usd", &self.annual_profit_usd)?;
        state.serialize_field("npv_usd", &self.npv_usd)?;
        state.serialize_field("roi_percent", &self.roi_percent)?;
        state.serialize_field("is_viable", &self.is_viable)?;
        state.serialize_field("annual_revenue_millions", &self.annual_revenue_millions())?;
        state.serialize_field("annual_costs_millions", &self.annual_costs_millions())?;
        state.serialize_field("annual_profit_millions", &self.annual_profit_millions())?;
        state.serialize_field("npv_millions", &self.npv_millions())?;
        state.end()
    }
}

/// Computes economic viability for a site.
pub fn economic_viability(site: &Site, params: &EconomicParams) -> Result<EconomicViability> {
    params.validate()?;

    let depth_multiplier = 1.0 + (site.depth_m / 10_000.0) * 0.5;
    let distance_multiplier = 1.0 + (site.distance_from_port_km / 5_000.0) * 0.3;
    let terrain_multiplier = 1.0 + (site.terrain_difficulty / 100.0) * 0.4;

    let adjusted_extraction = params.extraction_cost_per_ton * depth_multiplier * terrain_multiplier;
    let adjusted_transport = params.transport_cost_per_ton * distance_multiplier;
    let total_cost_per_ton = adjusted_extraction + params.refining_cost_per_ton + adjusted_transport;

    let effective_price_per_ton = params.mineral_price_per_ton * (site.mineral_concentration / 100.0);
    let profit_per_ton = effective_price_per_ton - total_cost_per_ton;

    let years = params.project_years;
    let annual_tonnage = params.estimated_tonnage / f64::from(years);
    let annual_revenue = annual_tonnage * effective_price_per_ton;
    let annual_costs = annual_tonnage * total_cost_per_ton;
    let annual_profit = annual_revenue - annual_costs;

    let npv: f64 = (1..=years)
        .map(|year| annual_profit / (1.0 + params.discount_rate).powi(year as i32))
        .sum();

    let total_revenue = params.estimated_tonnage * effective_price_per_ton;
    let total_costs = params.estimated_tonnage * total_cost_per_ton;
    let roi_percent = if total_costs > 0.0 {
        (total_revenue - total_costs) / total_costs * 100.0
    } else {
        0.0
    };

    Ok(EconomicViability {
        total_cost_per_ton,
        effective_price_per_ton,
        profit_per_ton,
        annual_revenue_usd: annual_revenue,
        annual_costs_usd: annual_costs,
        annual_profit_usd: annual_profit,
        npv_usd: npv,
        roi_percent,
        is_viable: profit_per_ton > 0.0,
    })
}

/// Ordered priority tiers for a scored site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    NotViable,
    High,
    Medium,
    FurtherStudy,
    Low,
}

impl PriorityTier {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PriorityTier::NotViable => "Not Viable",
            PriorityTier::High => "High Priority",
            PriorityTier::Medium => "Medium Priority",
            PriorityTier::FurtherStudy => "Further Study Needed",
            PriorityTier::Low => "Low Priority",
        }
    }

    /// Display color (hex).
    pub fn color(self) -> &'static str {
        match self {
            PriorityTier::NotViable => "#d62728",
            PriorityTier::High => "#2ca02c",
            PriorityTier::Medium => "#ff7f0e",
            PriorityTier::FurtherStudy => "#1f77b4",
            PriorityTier::Low => "#bcbd22",
        }
    }
}

/// Maps a composite score and economics to a priority tier.
///
/// Non-viable sites are `NotViable` regardless of score.
pub fn categorize_priority(composite_score: f64, economics: &EconomicViability) -> PriorityTier {
    if !economics.is_viable {
        return PriorityTier::NotViable;
    }
    if composite_score >= 70.0 && economics.roi_percent > 50.0 {
        PriorityTier::High
    } else if composite_score >= 50.0 && economics.roi_percent > 25.0 {
        PriorityTier::Medium
    } else if composite_score >= 35.0 {
        PriorityTier::FurtherStudy
    } else {
        PriorityTier::Low
    }
}
