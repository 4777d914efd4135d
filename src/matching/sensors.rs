//! Mineral category → required sensor lookup.

use std::collections::BTreeSet;

/// Sensors required to survey each mineral category.
///
/// A site's mineral label matches a category when the label contains the
/// category name (e.g., "Polymetallic Nodules (Mn, Ni)" matches
/// "Polymetallic Nodules"). Requirements of all matched categories are
/// combined.
pub const SENSOR_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "Polymetallic Nodules",
        &["side_scan_sonar", "multi_beam_echo_sounder", "HD_camera"],
    ),
    (
        "Polymetallic Sulfides",
        &[
            "magnetometer",
            "side_scan_sonar",
            "HD_camera",
            "multi_beam_echo_sounder",
        ],
    ),
    (
        "Rare Earth Elements",
        &[
            "multi_beam_echo_sounder",
            "sub_bottom_profiler",
            "sediment_sampler",
        ],
    ),
    (
        "Cobalt Crust",
        &["side_scan_sonar", "HD_camera", "magnetometer"],
    ),
];

/// Generic survey payload assumed by the scheduler's quick compatibility check.
pub const BASELINE_SURVEY_SENSORS: [&str; 3] =
    ["side_scan_sonar", "multi_beam_echo_sounder", "HD_camera"];

/// Sensors listed for a category, if the category is known.
pub fn sensors_for_category(category: &str) -> Option<&'static [&'static str]> {
    SENSOR_REQUIREMENTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, sensors)| *sensors)
}

/// Union of required sensors over a set of mineral labels.
pub fn required_sensors<S: AsRef<str>>(mineral_types: &[S]) -> BTreeSet<&'static str> {
    let mut required = BTreeSet::new();
    for label in mineral_types {
        let label = label.as_ref();
        for (category, sensors) in SENSOR_REQUIREMENTS {
            if label.contains(category) {
                required.extend(sensors.iter().copied());
            }
        }
    }
    required
}
