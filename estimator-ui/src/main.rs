use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use estimator_ui::app;
use estimator_ui::logging::{enable_file_logging, init_logging};
use estimator_ui::{AppConfig, OutputFormat, ResultBoard};
use weather_core::{GeoNamesClient, WeatherLookup, WeatherPresenter};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax estimates and current weather by postal code.
#[derive(Debug, Parser)]
#[command(name = "estimator", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate federal, state, Medicare and Social Security tax on an income.
    Tax {
        /// Gross income, e.g. `50000`, `$50,000` or `50000.00`.
        #[arg(allow_hyphen_values = true)]
        income: String,

        /// CSV file overriding bracket schedules.
        #[arg(long)]
        schedules: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Look up the location and current weather for one or more postal codes.
    Weather {
        #[arg(required = true)]
        postal_codes: Vec<String>,

        /// GeoNames account name.
        #[arg(long)]
        username: Option<String>,

        /// ISO country code for the postal code search.
        #[arg(long)]
        country: Option<String>,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if let Some(path) = &cli.log_file {
        enable_file_logging(path)?;
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    debug!(?config, "effective configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Tax {
            income,
            schedules,
            format,
        } => {
            let path = schedules.or(config.tax.schedules);
            let schedules = app::load_schedules(path.as_deref())?;
            let report = app::estimate_taxes(&income, &schedules)?;
            let rendered = estimator_ui::render::render_report(&report, format)?;
            writeln!(out, "{}", rendered.trim_end()).context("Failed to write report")?;
        }
        Command::Weather {
            postal_codes,
            username,
            country,
        } => {
            let postal_codes = app::validate_postal_codes(&postal_codes)?;

            let mut geonames = config.geonames;
            if let Some(username) = username {
                geonames.username = username;
            }
            if let Some(country) = country {
                geonames.country = country;
            }

            let lookup = WeatherLookup::new(GeoNamesClient::new(geonames)?);
            let presenter = WeatherPresenter::new(config.weather);
            let mut board = ResultBoard::new();

            let summary =
                app::run_weather(&lookup, &postal_codes, &presenter, &mut board, &mut out).await?;
            info!(shown = summary.shown, unavailable = summary.unavailable, "weather searches done");
        }
    }

    Ok(())
}
