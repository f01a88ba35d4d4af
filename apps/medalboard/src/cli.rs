//! # CLI
//!
//! Command-line interface for Medalboard.
//!
//! Every command reads the dataset from `--data` (file path or URL), runs the
//! same core functions the server uses, and writes the result to `out`
//! (stdout when run from the binary).

use crate::api;
use crate::config::{DEFAULT_DATA, ServerConfig};
use crate::error::AppError;
use crate::source::DataSource;
use clap::{Parser, Subcommand};
use medalboard_core::{
    ChartKind, ChartRegistry, CountryRecord, DetailView, HomeSummary, validate_dataset,
};
use std::io::Write;
use std::net::SocketAddr;
use tracing::info;

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "medalboard", version, about = "Olympic Games participation dashboard")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP.
    Serve {
        /// Listen address (overrides MEDALBOARD_ADDR).
        #[arg(long)]
        addr: Option<SocketAddr>,
        /// Dataset path or URL (overrides MEDALBOARD_DATA).
        #[arg(long)]
        data: Option<String>,
    },
    /// Print the aggregate statistics.
    Stats {
        #[arg(long, default_value = DEFAULT_DATA)]
        data: String,
        #[arg(long)]
        json: bool,
    },
    /// Print one country's detail figures.
    Country {
        /// Country id as it would appear in /country/{id}.
        id: String,
        #[arg(long, default_value = DEFAULT_DATA)]
        data: String,
        #[arg(long)]
        json: bool,
    },
    /// Print a chart configuration as JSON.
    Chart {
        /// `pie` (medals per country) or `line` (medals per year, needs --country).
        kind: String,
        #[arg(long)]
        country: Option<String>,
        #[arg(long, default_value = DEFAULT_DATA)]
        data: String,
    },
    /// Check a dataset for duplicate ids and coerced counts.
    Validate {
        #[arg(long, default_value = DEFAULT_DATA)]
        data: String,
        #[arg(long)]
        json: bool,
        /// Fail when any issue is found.
        #[arg(long)]
        strict: bool,
    },
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let mut out = std::io::stdout();
    match cli.command {
        Commands::Serve { addr, data } => {
            let config = ServerConfig::from_env()?.with_overrides(addr, data.as_deref());
            cmd_serve(config).await
        }
        Commands::Stats { data, json } => cmd_stats(&data, json, &mut out).await,
        Commands::Country { id, data, json } => cmd_country(&data, &id, json, &mut out).await,
        Commands::Chart {
            kind,
            country,
            data,
        } => cmd_chart(&data, &kind, country.as_deref(), &mut out).await,
        Commands::Validate { data, json, strict } => {
            cmd_validate(&data, json, strict, &mut out).await
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

pub async fn cmd_serve(config: ServerConfig) -> Result<(), AppError> {
    // The one place chart kinds are registered.
    let charts = ChartRegistry::with_defaults();
    info!(kinds = ?charts.kinds().collect::<Vec<_>>(), "chart kinds registered");
    api::serve(config, charts).await
}

pub async fn cmd_stats(data: &str, json: bool, out: &mut impl Write) -> Result<(), AppError> {
    let countries = load(data).await?;
    let summary = HomeSummary::compute(&countries);
    let stats = summary.stats;

    if json {
        let body = serde_json::json!({
            "stats": stats,
            "medalTotals": summary.medal_totals,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    for tile in stats.all_tiles() {
        writeln!(out, "{:<26} {}", tile.label, tile.value)?;
    }
    if !summary.medal_totals.is_empty() {
        writeln!(out)?;
        for (index, entry) in summary.medal_totals.iter().enumerate() {
            writeln!(out, "[{index}] {:<22} {}", entry.country, entry.total)?;
        }
    }
    Ok(())
}

pub async fn cmd_country(
    data: &str,
    id: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let view = DetailView::activate(id);
    let view = if view.needs_data() {
        view.on_data(&load(data).await?)
    } else {
        view
    };

    match view {
        DetailView::Ready(detail) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
            } else {
                writeln!(out, "{} (id {})", detail.country, detail.id)?;
                for tile in &detail.tiles {
                    writeln!(out, "  {:<26} {}", tile.label, tile.value)?;
                }
                for point in &detail.medals_by_year {
                    writeln!(out, "  {}: {}", point.year, point.medals)?;
                }
            }
        }
        DetailView::Redirected(destination) => {
            info!(id, "country not found");
            writeln!(out, "No country with id '{id}' (-> {})", destination.path())?;
        }
        DetailView::Loading(_) => {}
    }
    Ok(())
}

pub async fn cmd_chart(
    data: &str,
    kind: &str,
    country: Option<&str>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let kind = match kind {
        "pie" => ChartKind::Pie,
        "line" => ChartKind::Line,
        other => {
            return Err(AppError::InvalidArgument(format!(
                "unknown chart kind '{other}' (expected pie or line)"
            )));
        }
    };
    let registry = ChartRegistry::with_defaults();
    let countries = load(data).await?;

    let config = match kind {
        ChartKind::Pie => registry.medals_pie(&HomeSummary::compute(&countries).medal_totals)?,
        ChartKind::Line => {
            let raw_id = country.ok_or_else(|| {
                AppError::InvalidArgument(String::from("a line chart needs --country"))
            })?;
            match DetailView::activate(raw_id).on_data(&countries) {
                DetailView::Ready(detail) => registry.medals_line(&detail.medals_by_year)?,
                _ => {
                    return Err(AppError::InvalidArgument(format!(
                        "no country with id '{raw_id}'"
                    )));
                }
            }
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

pub async fn cmd_validate(
    data: &str,
    json: bool,
    strict: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let bytes = DataSource::parse(data).fetch_bytes().await?;
    let report = validate_dataset(&bytes)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(
            out,
            "{} countries, {} participations, {} issue(s)",
            report.countries,
            report.participations,
            report.issues.len()
        )?;
        for issue in &report.issues {
            writeln!(out, "  - {}", serde_json::to_string(issue)?)?;
        }
    }

    if strict && !report.is_clean() {
        return Err(AppError::InvalidArgument(format!(
            "dataset has {} issue(s)",
            report.issues.len()
        )));
    }
    Ok(())
}

async fn load(data: &str) -> Result<Vec<CountryRecord>, AppError> {
    let source = DataSource::parse(data);
    let countries = source.fetch().await?;
    info!(source = %source, countries = countries.len(), "dataset loaded");
    Ok(countries)
}
