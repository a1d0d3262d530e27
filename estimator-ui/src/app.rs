//! Glue between the CLI and the computation crates.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tax_core::calculations::{TaxReportBuilder, parse_income};
use tax_core::{ScheduleSet, TaxReport};
use tax_data::ScheduleLoader;
use tracing::{info, warn};
use weather_core::{LookupError, PostalCode, WeatherLookup, WeatherPresenter, WeatherService};

use crate::board::ResultBoard;
use crate::render::{render_location, render_weather};

/// The reference schedules, with any schedules in `path` swapped in.
pub fn load_schedules(path: Option<&Path>) -> Result<ScheduleSet> {
    let Some(path) = path else {
        return Ok(ScheduleSet::reference());
    };

    info!(path = %path.display(), "loading bracket schedules");
    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    ScheduleLoader::load(file).with_context(|| format!("Invalid schedules in: {}", path.display()))
}

/// Validates raw income input and builds the report.
pub fn estimate_taxes(
    income_input: &str,
    schedules: &ScheduleSet,
) -> Result<TaxReport> {
    let income = parse_income(income_input)?;
    let report = TaxReportBuilder::new(schedules).build(income)?;
    Ok(report)
}

/// Rejects the whole batch if any postal code is invalid.
pub fn validate_postal_codes(inputs: &[String]) -> Result<Vec<PostalCode>> {
    inputs
        .iter()
        .map(|input| PostalCode::parse(input).map_err(anyhow::Error::from))
        .collect()
}

/// Outcome counts for a batch of weather searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub shown: usize,
    pub unavailable: usize,
}

/// Runs one search per postal code, one after another.
///
/// The board is cleared before each search. A successful search appends a
/// location block and a weather block and writes the board to `out`; a
/// failed one writes nothing for that postal code.
pub async fn run_weather<S, W>(
    lookup: &WeatherLookup<S>,
    postal_codes: &[PostalCode],
    presenter: &WeatherPresenter,
    board: &mut ResultBoard,
    out: &mut W,
) -> Result<SearchSummary>
where
    S: WeatherService,
    W: Write,
{
    let mut summary = SearchSummary::default();

    for postal_code in postal_codes {
        board.clear();

        match lookup.search(postal_code.as_str()).await {
            Ok(forecast) => {
                board.append(render_location(&forecast.location));
                board.append(render_weather(&forecast.reading, presenter));
                write!(out, "{}", board.render()).context("Failed to write results")?;
                summary.shown += 1;
            }
            Err(error @ LookupError::UpstreamUnavailable { .. }) => {
                warn!(%postal_code, %error, "no results");
                summary.unavailable += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(summary)
}
