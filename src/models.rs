use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Raw water-test readings for one sample.
///
/// Temperature is always in °F here; metric readings are converted at the
/// boundary before a record is built. `ta` and `ch` use `0.0` for "not
/// measured", while `tds` distinguishes absence (`None`) from a zero reading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Free chlorine (ppm).
    pub fc: f64,
    /// Total chlorine (ppm).
    pub tc: f64,
    /// pH, 0-14 scale. Zero means not measured.
    pub ph: f64,
    /// Total alkalinity (ppm).
    pub ta: f64,
    /// Calcium hardness (ppm).
    pub ch: f64,
    /// Cyanuric acid (ppm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cya: Option<f64>,
    /// Water temperature (°F).
    pub temperature: f64,
    /// Salinity (ppm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    /// Total dissolved solids (mg/L).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
}

impl Measurements {
    /// Whether the record carries a pH reading, the minimum needed to
    /// compute water balance indices.
    pub fn has_ph(&self) -> bool {
        self.ph != 0.0
    }
}

/// Water balance indices derived from one `Measurements` record.
///
/// Records are never updated in place: recomputation produces a new value
/// that replaces the old one. `sample_id` stays `None` until the caller has
/// persisted the owning sample.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Indices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<u32>,
    /// Langelier Saturation Index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsi: Option<f64>,
    /// Ryznar Stability Index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// Estimation note listing defaulted parameters, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Measurement system a value is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    /// The system a conversion from `self` lands in.
    pub fn other(self) -> Self {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(AppError::UnknownUnitSystem(s.to_string())),
        }
    }
}
