//! # nedra-map
//!
//! Query and export tool for the Bulgarian mining-concession dataset.
//!
//! ## Usage CLI
//!
//! ```bash
//! # Statistics over the whole dataset
//! nedra-map stats --path ./mining_deposits.json
//!
//! # Faceted filtering, same semantics as the map UI
//! nedra-map list --path ./mining_deposits.json --region София --status съгласуван
//!
//! # Facet option values
//! nedra-map options --path ./mining_deposits.json resource-type
//!
//! # GeoJSON markers for the map widget
//! nedra-map export --path ./mining_deposits.json --output ./markers.geojson
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod report;

pub use config::load_palette;
pub use report::StatsReport;
