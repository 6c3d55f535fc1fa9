use crate::error::AppError;
use crate::models::UnitSystem;

/// Litres per US gallon.
pub const LITRES_PER_GALLON: f64 = 3.78541;

/// Parameters reported in ppm in both systems (ppm and mg/L coincide for
/// dilute water).
const PPM_PARAMETERS: [&str; 7] = ["fc", "tc", "ta", "ch", "cya", "salinity", "tds"];
/// Dimensionless parameters.
const UNITLESS_PARAMETERS: [&str; 4] = ["ph", "lsi", "rsi", "csi"];

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn gallons_to_litres(gal: f64) -> f64 {
    gal * LITRES_PER_GALLON
}

pub fn litres_to_gallons(l: f64) -> f64 {
    l / LITRES_PER_GALLON
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quantity {
    Temperature,
    Volume,
    Ppm,
    Unitless,
}

fn quantity_of(parameter: &str) -> Option<Quantity> {
    let p = parameter.trim().to_ascii_lowercase();
    match p.as_str() {
        "temperature" => Some(Quantity::Temperature),
        "volume" => Some(Quantity::Volume),
        p if PPM_PARAMETERS.contains(&p) => Some(Quantity::Ppm),
        p if UNITLESS_PARAMETERS.contains(&p) => Some(Quantity::Unitless),
        _ => None,
    }
}

/// Convert `value` of the named parameter from `from` into the other system.
///
/// | parameter | imperial -> metric | metric -> imperial |
/// |---|---|---|
/// | `temperature` | °F -> °C | °C -> °F |
/// | `volume` | gal -> L | L -> gal |
/// | `fc`, `tc`, `ta`, `ch`, `cya`, `salinity`, `tds` | unchanged (ppm) | unchanged |
/// | `ph`, `lsi`, `rsi`, `csi` | unchanged | unchanged |
///
/// Names are matched case-insensitively. Any other name yields
/// `AppError::UnknownParameter` rather than a silently unconverted value.
pub fn convert_measurement(value: f64, parameter: &str, from: UnitSystem) -> Result<f64, AppError> {
    let quantity =
        quantity_of(parameter).ok_or_else(|| AppError::UnknownParameter(parameter.to_string()))?;
    let converted = match (quantity, from) {
        (Quantity::Temperature, UnitSystem::Imperial) => fahrenheit_to_celsius(value),
        (Quantity::Temperature, UnitSystem::Metric) => celsius_to_fahrenheit(value),
        (Quantity::Volume, UnitSystem::Imperial) => gallons_to_litres(value),
        (Quantity::Volume, UnitSystem::Metric) => litres_to_gallons(value),
        (Quantity::Ppm | Quantity::Unitless, _) => value,
    };
    Ok(converted)
}

/// Display unit of a parameter in the given system; empty for dimensionless
/// or unknown parameters.
pub fn unit_label(parameter: &str, system: UnitSystem) -> &'static str {
    match (quantity_of(parameter), system) {
        (Some(Quantity::Temperature), UnitSystem::Imperial) => "°F",
        (Some(Quantity::Temperature), UnitSystem::Metric) => "°C",
        (Some(Quantity::Volume), UnitSystem::Imperial) => "gal",
        (Some(Quantity::Volume), UnitSystem::Metric) => "L",
        (Some(Quantity::Ppm), _) => "ppm",
        (Some(Quantity::Unitless), _) | (None, _) => "",
    }
}
