#[cfg(feature = "cli")]
pub mod cli;
pub mod units;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, Command, run_convert, run_indices, run_reference};

    let args = Args::parse();
    match &args.command {
        Command::Indices(a) => run_indices(a),
        Command::Convert(a) => run_convert(a),
        Command::Reference(a) => run_reference(a),
    }
}
