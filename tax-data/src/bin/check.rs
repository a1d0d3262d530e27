use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tax_core::ScheduleKind;
use tax_data::ScheduleLoader;

/// Validate a bracket schedules CSV file and print the resulting tables.
///
/// The CSV file should have the following columns:
/// - schedule: federal, state, medicare or social_security
/// - rate: The marginal tax rate as a decimal (e.g., 0.10)
/// - upper_bound: The bracket ceiling (empty for unlimited)
#[derive(Parser, Debug)]
#[command(name = "tax-schedule-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket schedules
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Checking schedules in: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let set = ScheduleLoader::load(file)
        .with_context(|| format!("Invalid schedules in: {}", args.file.display()))?;

    for kind in ScheduleKind::all() {
        let schedule = set.get(*kind);
        println!("{}:", schedule.name());
        for bracket in schedule.brackets() {
            match bracket.upper_bound {
                Some(bound) => println!("  {:>8} up to {}", bracket.rate, bound),
                None => println!("  {:>8} above", bracket.rate),
            }
        }
    }

    Ok(())
}
