//! # nedra
//!
//! Filter and aggregation core for the Bulgarian mining-concession dataset.
//!
//! The dataset is a single pre-generated JSON document; everything here is a
//! pure, synchronous read/filter/aggregate pipeline over the in-memory
//! records. There is no write path and no shared mutable state, so every
//! operation can be re-run on each criteria change.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nedra::{aggregate, filter, load, FilterCriteria};
//! use std::path::Path;
//!
//! let dataset = load(Path::new("mining_deposits.json"))?;
//!
//! let criteria = FilterCriteria {
//!     search: "варовик".to_string(),
//!     ..Default::default()
//! };
//!
//! let shown = filter(&dataset.deposits, &criteria);
//! let stats = aggregate(shown.iter().copied());
//! println!("{} of {} deposits shown", shown.len(), stats.total);
//! ```

pub mod classify;
pub mod eligibility;
pub mod error;
pub mod facets;
pub mod filter;
pub mod stats;
pub mod types;

pub use classify::Palette;
pub use eligibility::{is_eligible, PLACEHOLDER_MARKER};
pub use error::DataError;
pub use facets::unique_values;
pub use filter::{filter, CriteriaChange, FilterCriteria};
pub use stats::{aggregate, top_k, Statistics, UNKNOWN_LABEL};
pub use types::{Confidence, Coordinates, Dataset, Deposit, Metadata, TextField};

use std::path::Path;

use tracing::info;

/// Loads the dataset document from disk.
///
/// This is the one I/O operation of the crate, performed once at startup;
/// every other function works on the resident records.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read or does not parse as a
/// dataset document.
pub fn load(path: &Path) -> Result<Dataset, DataError> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;

    info!(
        path = %path.display(),
        deposits = dataset.deposits.len(),
        geocoded = dataset.metadata.geocoded_deposits,
        "loaded concession dataset"
    );

    Ok(dataset)
}
