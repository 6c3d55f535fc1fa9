//! Static display text for water parameters: ideal ranges and tooltips.

use std::collections::BTreeMap;

const IDEAL_RANGES: [(&str, &str); 9] = [
    ("fc", "1.0 - 4.0 ppm"),
    ("tc", "Same as FC (minimize combined chlorine)"),
    ("ph", "7.4 - 7.6"),
    ("ta", "80 - 120 ppm"),
    ("ch", "200 - 400 ppm"),
    ("cya", "30 - 50 ppm"),
    ("salinity", "2,700 - 3,400 ppm (optimal: 3,200 ppm)"),
    ("lsi", "-0.3 to +0.3 (balanced water)"),
    ("rsi", "6.0 - 7.0 (stable water)"),
];

const DESCRIPTIONS: [(&str, &str); 13] = [
    (
        "fc",
        "Free Chlorine measures the amount of chlorine available to sanitize the water and kill bacteria and algae. This is the active form of chlorine that provides ongoing protection.",
    ),
    (
        "tc",
        "Total Chlorine is the sum of free chlorine and combined chlorine (chlorine already used in the sanitation process). Ideally, this should be close to free chlorine levels.",
    ),
    (
        "ph",
        "pH measures the acidity or alkalinity of the water on a scale from 0-14, with 7 being neutral. Proper pH is crucial for chlorine effectiveness and swimmer comfort.",
    ),
    (
        "ta",
        "Total Alkalinity measures the water's capacity to resist changes in pH (buffering capacity). It helps stabilize pH levels and prevents rapid pH swings.",
    ),
    (
        "ch",
        "Calcium Hardness measures the concentration of dissolved calcium in the pool water. Proper levels prevent water from becoming corrosive or causing scale formation.",
    ),
    (
        "cya",
        "Cyanuric Acid stabilizes chlorine, protecting it from UV degradation. It acts as a sunscreen for chlorine but can reduce its effectiveness at high levels.",
    ),
    (
        "temperature",
        "Water temperature affects chemical reaction rates, chlorine effectiveness, and swimmer comfort. Higher temperatures require more sanitizer.",
    ),
    (
        "salinity",
        "Salinity measures dissolved salt content in saltwater pools. Proper levels ensure the chlorine generator can produce adequate chlorine for sanitation.",
    ),
    (
        "tds",
        "Total Dissolved Solids measures all dissolved substances in the water. High TDS can interfere with chemical effectiveness and water clarity.",
    ),
    (
        "appearance",
        "Visual observations about water clarity, color, or any visible issues that may indicate water quality problems.",
    ),
    (
        "maintenance",
        "Notes about maintenance activities performed, equipment issues, or other relevant information about pool care.",
    ),
    (
        "lsi",
        "Langelier Saturation Index indicates whether water is balanced, scale-forming, or corrosive. Values near zero indicate balanced water.",
    ),
    (
        "rsi",
        "Ryznar Stability Index predicts the tendency of water to precipitate or dissolve calcium carbonate. Lower values indicate scale-forming tendency.",
    ),
];

/// Ideal range per parameter key (`fc`, `tc`, `ph`, `ta`, `ch`, `cya`,
/// `salinity`, `lsi`, `rsi`).
pub fn ideal_ranges() -> BTreeMap<&'static str, &'static str> {
    IDEAL_RANGES.into_iter().collect()
}

/// Tooltip text per parameter key.
pub fn parameter_descriptions() -> BTreeMap<&'static str, &'static str> {
    DESCRIPTIONS.into_iter().collect()
}

pub fn ideal_range(key: &str) -> Option<&'static str> {
    lookup(&IDEAL_RANGES, key)
}

pub fn parameter_description(key: &str) -> Option<&'static str> {
    lookup(&DESCRIPTIONS, key)
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
