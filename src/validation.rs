//! Input validation for planning data.
//!
//! Checks structural integrity of sites and robots before scoring,
//! matching, or scheduling. Detects:
//! - Empty and duplicate IDs
//! - Non-finite numbers
//! - Coordinates outside latitude/longitude bounds
//! - Percent-scale attributes outside 0-100
//! - Negative depths, distances, values, and rates
//! - Non-positive robot ratings (depth, endurance, speed)
//! - Maintenance dates out of order
//!
//! All problems are collected; validation never stops at the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::{GeoPoint, Robot, Site};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// A record has a blank ID.
    EmptyId,
    /// A numeric field is NaN or infinite.
    NonFinite,
    /// A bounded field is outside its range.
    OutOfRange,
    /// A rating that must be strictly positive is zero or negative.
    NonPositive,
    /// Next maintenance precedes the last one.
    InconsistentDates,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

struct Checker<'a> {
    entity: &'static str,
    id: &'a str,
    errors: &'a mut Vec<ValidationError>,
}

impl Checker<'_> {
    fn finite(&mut self, field: &str, value: f64) -> bool {
        if value.is_finite() {
            return true;
        }
        self.errors.push(ValidationError::new(
            ValidationErrorKind::NonFinite,
            format!("{} '{}': {field} is not a finite number", self.entity, self.id),
        ));
        false
    }

    fn range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if self.finite(field, value) && !(min..=max).contains(&value) {
            self.errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "{} '{}': {field} = {value} outside [{min}, {max}]",
                    self.entity, self.id
                ),
            ));
        }
    }

    fn non_negative(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value < 0.0 {
            self.errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("{} '{}': {field} = {value} is negative", self.entity, self.id),
            ));
        }
    }

    fn positive(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value <= 0.0 {
            self.errors.push(ValidationError::new(
                ValidationErrorKind::NonPositive,
                format!("{} '{}': {field} = {value} must be > 0", self.entity, self.id),
            ));
        }
    }

    fn location(&mut self, prefix: &str, point: GeoPoint) {
        self.range(&format!("{prefix}latitude"), point.lat, -90.0, 90.0);
        self.range(&format!("{prefix}longitude"), point.lon, -180.0, 180.0);
    }
}

fn check_id<'a>(
    entity: &str,
    id: &'a str,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    if id.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            format!("{entity} with empty ID"),
        ));
    } else if !seen.insert(id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("Duplicate {entity} ID: {id}"),
        ));
    }
}

/// Validates a site collection.
///
/// Checks:
/// 1. IDs are non-empty and unique
/// 2. Coordinates lie within latitude/longitude bounds
/// 3. Depth, distance from port, and estimated value are non-negative
/// 4. Concentration, sensitivity, terrain, and survey quality lie in 0-100
pub fn validate_sites(sites: &[Site]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for site in sites {
        check_id("site", &site.site_id, &mut seen, &mut errors);
        let mut check = Checker {
            entity: "Site",
            id: &site.site_id,
            errors: &mut errors,
        };
        check.location("", site.location());
        check.non_negative("depth_m", site.depth_m);
        check.non_negative("distance_from_port_km", site.distance_from_port_km);
        check.non_negative("estimated_value_millions", site.estimated_value_millions);
        check.range("mineral_concentration", site.mineral_concentration, 0.0, 100.0);
        check.range("environmental_sensitivity", site.environmental_sensitivity, 0.0, 100.0);
        check.range("terrain_difficulty", site.terrain_difficulty, 0.0, 100.0);
        check.range("survey_data_quality", site.survey_data_quality, 0.0, 100.0);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a robot fleet.
///
/// Checks:
/// 1. IDs are non-empty and unique
/// 2. Rated depth, endurance, and speed are positive
/// 3. Day rate is non-negative
/// 4. Current location lies within bounds
/// 5. Next maintenance is not before the last one
pub fn validate_robots(robots: &[Robot]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for robot in robots {
        check_id("robot", &robot.robot_id, &mut seen, &mut errors);
        let mut check = Checker {
            entity: "Robot",
            id: &robot.robot_id,
            errors: &mut errors,
        };
        check.positive("max_depth_m", robot.max_depth_m);
        check.positive("endurance_hours", robot.endurance_hours);
        check.positive("speed_knots", robot.speed_knots);
        check.non_negative("day_rate_usd", robot.day_rate_usd);
        check.location("current_location.", robot.current_location);

        if let (Some(last), Some(next)) = (robot.last_maintenance, robot.next_maintenance) {
            if next < last {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentDates,
                    format!(
                        "Robot '{}': next_maintenance {next} precedes last_maintenance {last}",
                        robot.robot_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates both collections, reporting every problem found.
pub fn validate_input(sites: &[Site], robots: &[Robot]) -> ValidationResult {
    let mut errors = validate_sites(sites).err().unwrap_or_default();
    errors.extend(validate_robots(robots).err().unwrap_or_default());
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
