pub mod adapters;
pub mod balance;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod reference;

pub use crate::adapters::units::{celsius_to_fahrenheit, convert_measurement, fahrenheit_to_celsius};
pub use crate::balance::calculator::{
    BalanceSummary, DefaultedParameter, calculate_indices, compute_summary, indices_for_sample,
};
pub use crate::chemistry::ph_saturation;
pub use crate::error::AppError;
pub use crate::models::{Indices, Measurements, UnitSystem};
