//! Chemistry module: saturation pH of calcium carbonate in pool water.
//!
//! This module provides:
//! - Molar/unit constants used to turn ppm readings into mol/L
//! - Ionic strength estimated from total dissolved solids
//! - Temperature-dependent dielectric constant and Debye-Hückel factor
//! - Activity coefficient exponents for HCO3- and Ca2+
//! - Conditional equilibrium constants (pK'2, pK's) and the saturation pH
//!
//! Units conventions:
//! - Temperature in °C (converted to K internally)
//! - Calcium hardness and alkalinity in ppm (mg/L as CaCO3 equivalents)
//! - TDS in mg/L
//! - All logarithms are base 10
//!
//! # Panics
//! None of the functions panic.
//!
//! # Errors
//! No error types produced. Calcium and alkalinity must be strictly positive;
//! callers substitute defaults for missing readings before calling in here
//! (see `balance::calculator`).
//!
//! # Examples
//! ```rust
//! use waterlogger_rs::chemistry::ph_saturation;
//!
//! let phs = ph_saturation(25.0, 300.0, 250.0, 100.0);
//! assert!(phs > 6.5 && phs < 7.5);
//! ```

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Molar mass of calcium (g/mol) as used by the saturation model.
pub const M_CA: f64 = 40.08;
/// Divisor turning alkalinity in ppm into mol/L of HCO3- equivalents.
pub const M_HCO3_EQ: f64 = 100.0;
/// Empirical TDS (mg/L) to ionic strength (mol/L) factor.
pub const IONIC_STRENGTH_PER_TDS: f64 = 2.5e-5;
/// Upper ionic strength bound of the extended Debye-Hückel form for HCO3-.
pub const EXTENDED_DEBYE_HUCKEL_MAX_I: f64 = 0.5;
/// Water density (kg/L) assumed by the model.
pub const WATER_DENSITY: f64 = 1.0;

pub const Z_CA: f64 = 2.0;
pub const Z_HCO3: f64 = 1.0;

pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

/// Convert mass concentration (mg/L) to molar concentration (mol/L).
pub fn mol_per_l(mg_l: f64, molar_mass_g_mol: f64) -> f64 {
    mg_l * 0.001 / molar_mass_g_mol
}

/// Ionic strength (mol/L) estimated from total dissolved solids (mg/L).
pub fn ionic_strength(tds_mg_l: f64) -> f64 {
    IONIC_STRENGTH_PER_TDS * tds_mg_l
}

/// Dielectric constant of water at temperature `t_k` (K).
pub fn dielectric_constant(t_k: f64) -> f64 {
    60954.0 / (t_k + 116.0) - 68.937
}

/// Debye-Hückel correction factor `A` at temperature `t_k` (K).
pub fn debye_huckel_a(t_k: f64) -> f64 {
    let e = dielectric_constant(t_k);
    1.825e6 * WATER_DENSITY.powf(0.5) * (e * t_k).powf(-1.5)
}

fn sqrt_i_term(i: f64) -> f64 {
    let sqrt_i = i.powf(0.5);
    sqrt_i / (1.0 + sqrt_i)
}

/// log10 of the HCO3- activity coefficient.
///
/// Up to and including `EXTENDED_DEBYE_HUCKEL_MAX_I` the extended form with
/// the `0.3 * I` term applies; above it the plain form is used.
pub fn hco3_activity_exponent(a: f64, i: f64) -> f64 {
    if i <= EXTENDED_DEBYE_HUCKEL_MAX_I {
        -a * Z_HCO3.powi(2) * (sqrt_i_term(i) - 0.3 * i)
    } else {
        -a * Z_HCO3.powi(2) * sqrt_i_term(i)
    }
}

/// log10 of the Ca2+ activity coefficient.
pub fn ca_activity_exponent(a: f64, i: f64) -> f64 {
    -a * Z_CA.powi(2) * sqrt_i_term(i)
}

/// Second dissociation constant of carbonic acid, pK2, at `t_k` (K).
pub fn pk2(t_k: f64) -> f64 {
    2902.39 / t_k + 0.02379 * t_k - 6.498
}

/// Calcium carbonate solubility product, pKs, at `t_c` (°C).
pub fn pks(t_c: f64) -> f64 {
    0.01183 * t_c + 8.03
}

/// Saturation pH (pHs) at which calcium carbonate is in equilibrium.
///
/// Inputs:
/// - `t_c`: water temperature (°C)
/// - `tds`: total dissolved solids (mg/L)
/// - `ca`: calcium hardness (ppm), must be > 0
/// - `hco3`: total alkalinity (ppm), must be > 0
///
/// Combines the activity-corrected constants as
/// `pHs = pK'2 + pCa - pK's - log10(2 [HCO3]) - lg(gamma HCO3)`.
pub fn ph_saturation(t_c: f64, tds: f64, ca: f64, hco3: f64) -> f64 {
    let t_k = celsius_to_kelvin(t_c);
    let m_ca = mol_per_l(ca, M_CA);
    let m_hco3 = mol_per_l(hco3, M_HCO3_EQ);
    let i = ionic_strength(tds);
    let a = debye_huckel_a(t_k);

    let lg_hco3 = hco3_activity_exponent(a, i);
    let gamma_ca = 10f64.powf(ca_activity_exponent(a, i));

    // Conditional (activity-corrected) K2 and Ks.
    let k2 = 10f64.powf(-pk2(t_k));
    let pk2_cond = (1.0 / (k2 / gamma_ca)).log10();
    let ks = 1.0 / 10f64.powf(pks(t_c));
    let pks_cond = (1.0 / (ks / gamma_ca.powi(2))).log10();

    let p_ca = (1.0 / m_ca).log10();

    pk2_cond + p_ca - pks_cond - (2.0 * m_hco3).log10() - lg_hco3
}
