//! Candidate extraction site model.
//!
//! A site is immutable planning input. Scoring never mutates it; derived
//! scores live in [`crate::scoring::ScoredSite`], which wraps the site.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A candidate offshore extraction site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Unique site identifier.
    pub site_id: String,
    /// Human-readable name.
    pub name: String,
    /// Licensing jurisdiction (e.g., "ISA", an EEZ owner).
    #[serde(default)]
    pub jurisdiction: String,
    /// Latitude (decimal degrees).
    pub latitude: f64,
    /// Longitude (decimal degrees).
    pub longitude: f64,
    /// Seabed depth (m).
    pub depth_m: f64,
    /// Distance to the nearest supply port (km).
    pub distance_from_port_km: f64,
    /// Mineral concentration (0-100).
    pub mineral_concentration: f64,
    /// Mineral category labels (e.g., "Polymetallic Nodules").
    #[serde(default)]
    pub mineral_types: Vec<String>,
    /// Estimated deposit value (USD millions).
    pub estimated_value_millions: f64,
    /// Environmental sensitivity (0-100, higher = more sensitive).
    pub environmental_sensitivity: f64,
    /// Terrain difficulty (0-100, higher = harder).
    pub terrain_difficulty: f64,
    /// Quality of existing survey data (0-100).
    pub survey_data_quality: f64,
}

impl Site {
    /// Creates a site with neutral attributes.
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            name: String::new(),
            jurisdiction: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            depth_m: 0.0,
            distance_from_port_km: 0.0,
            mineral_concentration: 0.0,
            mineral_types: Vec::new(),
            estimated_value_millions: 0.0,
            environmental_sensitivity: 0.0,
            terrain_difficulty: 0.0,
            survey_data_quality: 0.0,
        }
    }

    /// Sets the site name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the jurisdiction.
    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = jurisdiction.into();
        self
    }

    /// Sets the position.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the seabed depth (m).
    pub fn with_depth(mut self, depth_m: f64) -> Self {
        self.depth_m = depth_m;
        self
    }

    /// Sets the distance from port (km).
    pub fn with_distance_from_port(mut self, km: f64) -> Self {
        self.distance_from_port_km = km;
        self
    }

    /// Sets the mineral concentration (0-100).
    pub fn with_concentration(mut self, concentration: f64) -> Self {
        self.mineral_concentration = concentration;
        self
    }

    /// Adds a mineral category label.
    pub fn with_mineral_type(mut self, mineral_type: impl Into<String>) -> Self {
        self.mineral_types.push(mineral_type.into());
        self
    }

    /// Sets the estimated value (USD millions).
    pub fn with_value(mut self, millions: f64) -> Self {
        self.estimated_value_millions = millions;
        self
    }

    /// Sets the environmental sensitivity (0-100).
    pub fn with_environmental_sensitivity(mut self, sensitivity: f64) -> Self {
        self.environmental_sensitivity = sensitivity;
        self
    }

    /// Sets the terrain difficulty (0-100).
    pub fn with_terrain_difficulty(mut self, difficulty: f64) -> Self {
        self.terrain_difficulty = difficulty;
        self
    }

    /// Sets the survey data quality (0-100).
    pub fn with_survey_quality(mut self, quality: f64) -> Self {
        self.survey_data_quality = quality;
        self
    }

    /// Site position as a [`GeoPoint`].
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
