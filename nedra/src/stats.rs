//! Grouped statistics over eligible records
//!
//! Counts are recomputed from scratch on every criteria change; the maps use
//! `BTreeMap` so iteration order is deterministic for display and tests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::eligibility::is_eligible;
use crate::types::Deposit;

/// Bucket label for records whose categorical field is empty.
pub const UNKNOWN_LABEL: &str = "Неизвестен";

/// Grouped counts over the eligible subset of a record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of eligible records counted
    pub total: usize,

    /// Count per region
    pub by_region: BTreeMap<String, usize>,

    /// Count per resource type
    pub by_resource_type: BTreeMap<String, usize>,

    /// Count per status
    pub by_status: BTreeMap<String, usize>,
}

/// Computes grouped counts over a record collection.
///
/// Eligibility is applied here regardless of whether the caller already
/// filtered, so statistics can never disagree with the displayed set. Empty
/// categorical values are counted under [`UNKNOWN_LABEL`].
pub fn aggregate<'a, I>(deposits: I) -> Statistics
where
    I: IntoIterator<Item = &'a Deposit>,
{
    let mut stats = Statistics::default();

    for deposit in deposits.into_iter().filter(|d| is_eligible(d)) {
        stats.total += 1;
        bump(&mut stats.by_region, &deposit.region);
        bump(&mut stats.by_resource_type, &deposit.resource_type);
        bump(&mut stats.by_status, &deposit.status);
    }

    stats
}

fn bump(counts: &mut BTreeMap<String, usize>, value: &str) {
    let label = if value.is_empty() { UNKNOWN_LABEL } else { value };
    *counts.entry(label.to_string()).or_insert(0) += 1;
}

/// Returns the `k` entries with the highest counts, descending.
///
/// Ties are broken by ascending label so the ranking is deterministic.
pub fn top_k(counts: &BTreeMap<String, usize>, k: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> =
        counts.iter().map(|(label, &n)| (label.clone(), n)).collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
