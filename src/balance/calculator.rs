use core::fmt;

use serde::Serialize;

use crate::adapters::units::fahrenheit_to_celsius;
use crate::chemistry::ph_saturation;
use crate::error::AppError;
use crate::models::{Indices, Measurements};

/// Mid-range TDS (mg/L) assumed when the reading is absent.
pub const DEFAULT_TDS_MG_L: f64 = 300.0;
/// Mid-range calcium hardness (ppm) assumed when the reading is zero.
pub const DEFAULT_CALCIUM_HARDNESS_PPM: f64 = 250.0;
/// Mid-range total alkalinity (ppm) assumed when the reading is zero.
pub const DEFAULT_TOTAL_ALKALINITY_PPM: f64 = 100.0;

pub const ESTIMATED_COMMENT_PREFIX: &str =
    "Estimated. Calculated with mid-range defaults for the following parameters that were missing: ";

/// A model input that was missing and replaced by its mid-range default.
///
/// Variants are declared in the order the inputs are checked, which is also
/// the order they appear in the estimation comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DefaultedParameter {
    Tds,
    CalciumHardness,
    TotalAlkalinity,
}

impl DefaultedParameter {
    pub fn display_name(self) -> &'static str {
        match self {
            DefaultedParameter::Tds => "TDS",
            DefaultedParameter::CalciumHardness => "Calcium Hardness",
            DefaultedParameter::TotalAlkalinity => "Total Alkalinity",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            DefaultedParameter::Tds => DEFAULT_TDS_MG_L,
            DefaultedParameter::CalciumHardness => DEFAULT_CALCIUM_HARDNESS_PPM,
            DefaultedParameter::TotalAlkalinity => DEFAULT_TOTAL_ALKALINITY_PPM,
        }
    }
}

impl fmt::Display for DefaultedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Model inputs after default substitution.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EffectiveInputs {
    pub temp_c: f64,
    pub tds: f64,
    pub ch: f64,
    pub ta: f64,
    pub defaulted: Vec<DefaultedParameter>,
}

/// Full result of an index calculation, including intermediates.
///
/// Fields:
/// - `ph`: measured pH
/// - `phs`: saturation pH from the model
/// - `lsi`: `ph - phs`
/// - `rsi`: `2 * phs - ph`
/// - `inputs`: the temperature (°C) and concentrations fed to the model
/// - `comment`: estimation note, present only when defaults were used
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BalanceSummary {
    pub ph: f64,
    pub phs: f64,
    pub lsi: f64,
    pub rsi: f64,
    pub inputs: EffectiveInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl BalanceSummary {
    /// The persisted form of this result; `sample_id` is left to the caller.
    pub fn to_indices(&self) -> Indices {
        Indices {
            sample_id: None,
            lsi: Some(self.lsi),
            rsi: Some(self.rsi),
            comment: self.comment.clone(),
        }
    }
}

fn check_finite(name: &str, v: f64) -> Result<(), AppError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("{name} must be a finite number, got {v}")))
    }
}

fn check_concentration(name: &str, v: f64) -> Result<(), AppError> {
    check_finite(name, v)?;
    if v < 0.0 {
        return Err(AppError::InvalidInput(format!("{name} cannot be negative, got {v}")));
    }
    Ok(())
}

fn validate(m: &Measurements) -> Result<(), AppError> {
    check_finite("ph", m.ph)?;
    check_finite("temperature", m.temperature)?;
    check_concentration("ta", m.ta)?;
    check_concentration("ch", m.ch)?;
    if let Some(tds) = m.tds {
        check_concentration("tds", tds)?;
    }
    Ok(())
}

/// Resolve the saturation model inputs for a record.
///
/// TDS is defaulted only when absent; an explicit zero is used as-is.
/// Calcium hardness and alkalinity are defaulted when zero, since the record
/// has no way to tell "not measured" from a zero reading for them.
pub fn effective_inputs(m: &Measurements) -> EffectiveInputs {
    let mut defaulted = Vec::new();
    let mut fill = |p: DefaultedParameter| {
        defaulted.push(p);
        p.default_value()
    };

    let tds = match m.tds {
        Some(v) => v,
        None => fill(DefaultedParameter::Tds),
    };
    let ch = if m.ch != 0.0 {
        m.ch
    } else {
        fill(DefaultedParameter::CalciumHardness)
    };
    let ta = if m.ta != 0.0 {
        m.ta
    } else {
        fill(DefaultedParameter::TotalAlkalinity)
    };

    EffectiveInputs {
        temp_c: fahrenheit_to_celsius(m.temperature),
        tds,
        ch,
        ta,
        defaulted,
    }
}

/// Estimation note for a set of defaulted parameters; `None` when empty.
pub fn estimation_comment(defaulted: &[DefaultedParameter]) -> Option<String> {
    if defaulted.is_empty() {
        return None;
    }
    let names: Vec<&str> = defaulted.iter().map(|p| p.display_name()).collect();
    Some(format!("{ESTIMATED_COMMENT_PREFIX}{}", names.join(", ")))
}

/// Compute saturation pH, LSI and RSI with all intermediate values.
///
/// Rejects non-finite pH/temperature and negative concentrations with
/// `AppError::InvalidInput`; missing TDS/CH/TA are replaced by mid-range
/// defaults and reported in `comment`.
///
/// These readings are refused up front rather than passed through to the
/// model, where they would come out as NaN indices.
pub fn compute_summary(m: &Measurements) -> Result<BalanceSummary, AppError> {
    validate(m)?;
    let inputs = effective_inputs(m);

    let phs = ph_saturation(inputs.temp_c, inputs.tds, inputs.ch, inputs.ta);
    let lsi = m.ph - phs;
    let rsi = 2.0 * phs - m.ph;
    let comment = estimation_comment(&inputs.defaulted);

    Ok(BalanceSummary {
        ph: m.ph,
        phs,
        lsi,
        rsi,
        inputs,
        comment,
    })
}

/// Calculate the water balance indices for a measurement record.
///
/// `None` is rejected with `AppError::InvalidInput`; otherwise this is
/// `compute_summary(m)?.to_indices()`.
pub fn calculate_indices(m: Option<&Measurements>) -> Result<Indices, AppError> {
    let m = m.ok_or_else(|| AppError::InvalidInput("measurements cannot be absent".to_string()))?;
    Ok(compute_summary(m)?.to_indices())
}

/// Indices to store for a sample after its measurements were created or
/// replaced: `None` when there is no pH reading, a fresh record otherwise.
pub fn indices_for_sample(m: &Measurements) -> Result<Option<Indices>, AppError> {
    if !m.has_ph() {
        return Ok(None);
    }
    calculate_indices(Some(m)).map(Some)
}
