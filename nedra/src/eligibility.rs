//! Eligibility gate for display and statistics
//!
//! A record participates in filtering, aggregation and option enumeration
//! only if it passes this predicate. Keeping a single definition avoids the
//! displayed marker count drifting from the computed statistics.

use crate::types::Deposit;

/// Id substring marking entries the upstream extraction could not identify.
/// Such rows are placeholders carried through the dataset for completeness
/// and must never reach the map or the statistics.
pub const PLACEHOLDER_MARKER: &str = "Идентифика";

/// Returns true when a record is eligible for display and statistics:
/// it has a geocoded location and is not an unidentified placeholder.
pub fn is_eligible(deposit: &Deposit) -> bool {
    deposit.coordinates.is_some() && !deposit.id.contains(PLACEHOLDER_MARKER)
}
