use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};

use crate::adapters::units::{convert_measurement, unit_label};
use crate::balance::calculator::{BalanceSummary, compute_summary};
use crate::error::AppError;
use crate::models::{Measurements, UnitSystem};
use crate::reference;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pool water balance calculator (LSI / RSI)", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate saturation pH, LSI and RSI for one water test
    Indices(IndicesArgs),
    /// Convert a parameter value between imperial and metric units
    Convert(ConvertArgs),
    /// Show ideal ranges and parameter descriptions
    Reference(ReferenceArgs),
}

#[derive(clap::Args, Debug)]
pub struct IndicesArgs {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON document with measurements and optional unit_system; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for measurements (overrides --input)"
    )]
    measurements_json: Option<String>,
    #[arg(
        long,
        value_enum,
        help = "Unit system of the temperature reading (overrides the document)"
    )]
    units: Option<UnitSystem>,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[arg(long, allow_negative_numbers = true)]
    value: f64,
    #[arg(long)]
    parameter: String,
    #[arg(long, value_enum, default_value_t = UnitSystem::Imperial)]
    from: UnitSystem,
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReferenceArgs {
    #[arg(value_name = "KEY", help = "Parameter key, e.g. 'lsi' or 'tds'")]
    key: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
struct CmdInput {
    measurements: Measurements,
    #[serde(default)]
    unit_system: Option<UnitSystem>,
}

#[derive(Serialize, Debug)]
struct ConversionOutput<'a> {
    parameter: &'a str,
    value: f64,
    from_system: UnitSystem,
    from_unit: &'static str,
    converted: f64,
    to_system: UnitSystem,
    to_unit: &'static str,
}

#[derive(Serialize, Debug)]
struct NotCalculated {
    calculated: bool,
    reason: &'static str,
}

const PH_MISSING: &str = "pH missing";

#[derive(Serialize, Debug)]
struct ReferenceEntry<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ideal_range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

#[derive(Serialize, Debug)]
struct ReferenceOutput {
    ideal_ranges: BTreeMap<&'static str, &'static str>,
    descriptions: BTreeMap<&'static str, &'static str>,
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Measurements, Option<UnitSystem>), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.measurements, parsed.unit_system))
}

pub fn parse_inputs(args: &IndicesArgs) -> Result<(Measurements, UnitSystem), AppError> {
    let (m, doc_units) = match (&args.measurements_json, &args.input) {
        (Some(json), _) => {
            let m: Measurements = serde_json::from_str(json)
                .map_err(|source| AppError::ParseMeasurementsJson { source })?;
            (m, None)
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)?
        }
        (None, None) => return Err(AppError::MissingInputData),
    };
    Ok((m, args.units.or(doc_units).unwrap_or_default()))
}

/// Bring a record into the °F convention the calculator expects.
pub fn to_imperial(mut m: Measurements, system: UnitSystem) -> Result<Measurements, AppError> {
    if system == UnitSystem::Metric {
        m.temperature = convert_measurement(m.temperature, "temperature", system)?;
    }
    Ok(m)
}

fn print_json<T: Serialize + ?Sized>(out: &T) -> Result<(), AppError> {
    let s =
        serde_json::to_string_pretty(out).map_err(|source| AppError::SerializeOutput { source })?;
    println!("{}", s);
    Ok(())
}

pub fn run_indices(args: &IndicesArgs) -> Result<(), AppError> {
    let (m, units) = parse_inputs(args)?;
    debug!("parsed measurements ({units}): {m:?}");
    let m = to_imperial(m, units)?;

    let summary = if m.has_ph() {
        Some(compute_summary(&m)?)
    } else {
        info!("no pH reading, indices not calculated");
        None
    };
    if let Some(s) = &summary {
        if !s.inputs.defaulted.is_empty() {
            info!("mid-range defaults used for {:?}", s.inputs.defaulted);
        }
    }

    if args.json {
        match &summary {
            Some(s) => print_json(s),
            None => print_json(&NotCalculated {
                calculated: false,
                reason: PH_MISSING,
            }),
        }
    } else {
        print_summary(summary.as_ref());
        Ok(())
    }
}

fn print_summary(summary: Option<&BalanceSummary>) {
    let Some(s) = summary else {
        println!("Indices not calculated: {}", PH_MISSING);
        return;
    };
    println!("pHs: {:.2}", s.phs);
    println!("LSI: {:.2}", s.lsi);
    println!("RSI: {:.2}", s.rsi);
    if let Some(comment) = &s.comment {
        println!("Note: {}", comment);
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<(), AppError> {
    let converted = convert_measurement(args.value, &args.parameter, args.from)?;
    let to = args.from.other();
    let out = ConversionOutput {
        parameter: &args.parameter,
        value: args.value,
        from_system: args.from,
        from_unit: unit_label(&args.parameter, args.from),
        converted,
        to_system: to,
        to_unit: unit_label(&args.parameter, to),
    };
    if args.json {
        print_json(&out)
    } else {
        println!(
            "{} {} = {:.2} {}",
            out.value, out.from_unit, out.converted, out.to_unit
        );
        Ok(())
    }
}

pub fn run_reference(args: &ReferenceArgs) -> Result<(), AppError> {
    let Some(key) = &args.key else {
        let out = ReferenceOutput {
            ideal_ranges: reference::ideal_ranges(),
            descriptions: reference::parameter_descriptions(),
        };
        if args.json {
            return print_json(&out);
        }
        println!("Ideal ranges:");
        for (k, v) in &out.ideal_ranges {
            println!("  {:<12} {}", k, v);
        }
        println!();
        println!("Descriptions:");
        for (k, v) in &out.descriptions {
            println!("  {:<12} {}", k, v);
        }
        return Ok(());
    };

    let entry = ReferenceEntry {
        key,
        ideal_range: reference::ideal_range(key),
        description: reference::parameter_description(key),
    };
    if entry.ideal_range.is_none() && entry.description.is_none() {
        return Err(AppError::UnknownParameter(key.clone()));
    }
    if args.json {
        return print_json(&entry);
    }
    if let Some(r) = entry.ideal_range {
        println!("Ideal range: {}", r);
    }
    if let Some(d) = entry.description {
        println!("{}", d);
    }
    Ok(())
}
