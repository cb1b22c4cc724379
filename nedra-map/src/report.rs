//! Statistics report for the console and for JSON output
//!
//! Mirrors what the map sidebar shows: totals, top resource types, top
//! regions, and the status distribution of the currently shown records.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use nedra::{top_k, Metadata, Statistics};

/// Statistics over the whole dataset and over the filtered subset, plus the
/// derived top-K rankings.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// When the dataset was extracted (provenance)
    pub extraction_date: String,
    /// Source register file (provenance)
    pub source_file: String,

    /// Counts over all eligible records
    pub dataset: Statistics,
    /// Counts over the records matching the active criteria
    pub shown: Statistics,

    /// Highest-count resource types among the shown records
    pub top_resource_types: Vec<(String, usize)>,
    /// Highest-count regions among the shown records
    pub top_regions: Vec<(String, usize)>,
}

impl StatsReport {
    /// Builds a report from the full and filtered statistics.
    pub fn new(metadata: &Metadata, dataset: Statistics, shown: Statistics, k: usize) -> Self {
        let top_resource_types = top_k(&shown.by_resource_type, k);
        let top_regions = top_k(&shown.by_region, k);

        Self {
            extraction_date: metadata.extraction_date.clone(),
            source_file: metadata.source_file.clone(),
            dataset,
            shown,
            top_resource_types,
            top_regions,
        }
    }

    /// Prints the report to the console.
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONCESSION STATISTICS - {}", self.source_file);
        println!("{}", "=".repeat(60));

        if !self.extraction_date.is_empty() {
            println!("\nExtracted: {}", self.extraction_date);
        }

        println!("\n--- SUMMARY ---");
        println!(
            "Deposits: {} eligible, {} shown",
            self.dataset.total, self.shown.total
        );
        println!(
            "Regions: {} total, {} active",
            self.dataset.by_region.len(),
            self.shown.by_region.len()
        );

        if !self.top_resource_types.is_empty() {
            println!("\n--- TOP RESOURCE TYPES ---");
            for (label, count) in &self.top_resource_types {
                println!("  {label}: {count}");
            }
        }

        if !self.top_regions.is_empty() {
            println!("\n--- TOP REGIONS ---");
            for (label, count) in &self.top_regions {
                println!("  {label}: {count}");
            }
        }

        if !self.shown.by_status.is_empty() {
            println!("\n--- STATUS ---");
            for (status, count) in &self.shown.by_status {
                let share = 100.0 * *count as f64 / self.shown.total.max(1) as f64;
                println!("  {status}: {count} ({share:.0}%)");
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} of {} deposits shown across {} regions",
            self.shown.total,
            self.dataset.total,
            self.shown.by_region.len()
        )
    }

    /// Saves the report as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
