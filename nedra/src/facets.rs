//! Facet option enumeration
//!
//! Produces the value lists the filter panel offers for each dimension.

use std::collections::BTreeSet;

use crate::eligibility::is_eligible;
use crate::types::{Deposit, TextField};

/// Returns the distinct non-empty values of `field` across the eligible
/// records, sorted ascending. Deterministic, so option lists are stable
/// across recomputations.
///
/// Values are offered exactly as stored (no trimming): the filter compares
/// by equality, so every offered option matches at least the record it came
/// from. Whitespace-only values are skipped.
pub fn unique_values(deposits: &[Deposit], field: TextField) -> Vec<String> {
    let values: BTreeSet<&str> = deposits
        .iter()
        .filter(|d| is_eligible(d))
        .map(|d| field.get(d))
        .filter(|v| !v.trim().is_empty())
        .collect();

    values.into_iter().map(str::to_string).collect()
}
