//! CLI command definitions and implementations
//!
//! Four read-only queries over the dataset:
//! - `stats`: statistics report for the (optionally filtered) records
//! - `list`: filtered records on stdout
//! - `options`: facet option values for one field
//! - `export`: filtered records as GeoJSON markers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use nedra::{aggregate, filter, unique_values, Confidence, FilterCriteria, TextField};

use crate::config::load_palette;
use crate::export::geojson::export_markers;
use crate::report::StatsReport;

#[derive(Subcommand)]
pub enum Commands {
    /// Print grouped statistics for the filtered records
    Stats {
        /// Path to the dataset JSON document
        #[arg(short, long)]
        path: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Number of entries in the top rankings
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Also save the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List the filtered records
    List {
        /// Path to the dataset JSON document
        #[arg(short, long)]
        path: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the option values of one facet field
    Options {
        /// Path to the dataset JSON document
        #[arg(short, long)]
        path: PathBuf,

        /// Field to enumerate: region, resource-type, resource-group,
        /// status, municipality, concessionaire, deposit-name, concession-term
        field: TextField,
    },

    /// Export the filtered records as GeoJSON point markers
    Export {
        /// Path to the dataset JSON document
        #[arg(short, long)]
        path: PathBuf,

        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Palette preset name or path to a palette JSON file
        #[arg(long, default_value = "default")]
        palette: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Filter selection shared by the query commands. Every flag is optional;
/// with none given, the commands operate on the whole eligible set.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive search across name, concessionaire, municipality,
    /// region and resource type
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep only these regions (repeatable)
    #[arg(long = "region")]
    pub regions: Vec<String>,

    /// Keep only these resource types (repeatable)
    #[arg(long = "resource-type")]
    pub resource_types: Vec<String>,

    /// Keep only these statuses (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Keep only these confidence tiers: high, medium, low, none (repeatable)
    #[arg(long = "confidence")]
    pub confidences: Vec<Confidence>,
}

impl FilterArgs {
    /// Converts the command-line flags into a criteria value.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            regions: self.regions.iter().cloned().collect(),
            resource_types: self.resource_types.iter().cloned().collect(),
            statuses: self.statuses.iter().cloned().collect(),
            confidences: self.confidences.iter().copied().collect(),
        }
    }
}

/// Runs the `stats` command.
pub fn cmd_stats(
    path: &Path,
    filter_args: &FilterArgs,
    top: usize,
    json: Option<&Path>,
) -> Result<()> {
    let dataset = nedra::load(path).context("Failed to load dataset")?;
    let criteria = filter_args.to_criteria();

    let shown = filter(&dataset.deposits, &criteria);
    let all_stats = aggregate(&dataset.deposits);
    let shown_stats = aggregate(shown.iter().copied());

    let report = StatsReport::new(&dataset.metadata, all_stats, shown_stats, top);
    report.display();

    if let Some(json_path) = json {
        report
            .save_to_file(json_path)
            .context("Failed to save JSON report")?;
        info!(path = %json_path.display(), "saved statistics report");
    }

    Ok(())
}

/// Runs the `list` command.
pub fn cmd_list(path: &Path, filter_args: &FilterArgs) -> Result<()> {
    let dataset = nedra::load(path).context("Failed to load dataset")?;
    let criteria = filter_args.to_criteria();

    let shown = filter(&dataset.deposits, &criteria);
    for deposit in &shown {
        println!(
            "{}\t{}\t{}\t{}",
            deposit.id, deposit.deposit_name, deposit.region, deposit.status
        );
    }
    info!(shown = shown.len(), "listed deposits");

    Ok(())
}

/// Runs the `options` command.
pub fn cmd_options(path: &Path, field: TextField) -> Result<()> {
    let dataset = nedra::load(path).context("Failed to load dataset")?;

    for value in unique_values(&dataset.deposits, field) {
        println!("{value}");
    }

    Ok(())
}

/// Runs the `export` command.
pub fn cmd_export(
    path: &Path,
    output: &Path,
    palette_source: &str,
    filter_args: &FilterArgs,
) -> Result<()> {
    let dataset = nedra::load(path).context("Failed to load dataset")?;
    let palette = load_palette(palette_source)?;
    let criteria = filter_args.to_criteria();

    let shown = filter(&dataset.deposits, &criteria);
    export_markers(&shown, &palette, output)?;

    Ok(())
}
