//! Multi-facet filter engine
//!
//! Faceted-search semantics: every active dimension must pass (AND across
//! dimensions), and within a dimension the record needs to match any one of
//! the selected values (OR within a dimension). An empty selection imposes
//! no constraint.

use std::collections::HashSet;

use tracing::debug;

use crate::eligibility::is_eligible;
use crate::types::{Confidence, Deposit};

/// The user's current filter selection. Replaced wholesale on every
/// interaction via [`FilterCriteria::apply`]; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring query; empty = no constraint
    pub search: String,

    /// Selected regions (oblast); empty = no constraint
    pub regions: HashSet<String>,

    /// Selected resource types; empty = no constraint
    pub resource_types: HashSet<String>,

    /// Selected statuses; empty = no constraint
    pub statuses: HashSet<String>,

    /// Selected confidence tiers; empty = no constraint
    pub confidences: HashSet<Confidence>,
}

/// One user interaction with the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaChange {
    SetSearch(String),
    ToggleRegion(String),
    ToggleResourceType(String),
    ToggleStatus(String),
    ToggleConfidence(Confidence),
    ClearAll,
}

impl FilterCriteria {
    /// True when no dimension imposes any constraint.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.regions.is_empty()
            && self.resource_types.is_empty()
            && self.statuses.is_empty()
            && self.confidences.is_empty()
    }

    /// Number of active constraints (each selected value counts once, a
    /// non-empty search counts once). Drives the filter-panel badge.
    pub fn active_count(&self) -> usize {
        self.regions.len()
            + self.resource_types.len()
            + self.statuses.len()
            + self.confidences.len()
            + usize::from(!self.search.is_empty())
    }

    /// Returns a fresh criteria value with one change applied.
    ///
    /// Toggling a value that is already selected deselects it.
    pub fn apply(&self, change: CriteriaChange) -> FilterCriteria {
        let mut next = self.clone();
        match change {
            CriteriaChange::SetSearch(text) => next.search = text,
            CriteriaChange::ToggleRegion(value) => toggle(&mut next.regions, value),
            CriteriaChange::ToggleResourceType(value) => toggle(&mut next.resource_types, value),
            CriteriaChange::ToggleStatus(value) => toggle(&mut next.statuses, value),
            CriteriaChange::ToggleConfidence(tier) => toggle(&mut next.confidences, tier),
            CriteriaChange::ClearAll => next = FilterCriteria::default(),
        }
        next
    }

    /// True when the record is eligible and passes every active dimension.
    pub fn matches(&self, deposit: &Deposit) -> bool {
        self.matches_with(deposit, &self.search.to_lowercase())
    }

    /// Like [`FilterCriteria::matches`] with the lowercased search text
    /// precomputed, so [`filter`] lowercases once per call rather than once
    /// per record.
    fn matches_with(&self, deposit: &Deposit, needle: &str) -> bool {
        if !is_eligible(deposit) {
            return false;
        }

        if !needle.is_empty() && !search_haystack(deposit).contains(needle) {
            return false;
        }

        // An empty field value never equals a selected value, so records
        // with a blank region/type/status fall out of that facet's matches.
        if !self.regions.is_empty() && !self.regions.contains(&deposit.region) {
            return false;
        }
        if !self.resource_types.is_empty() && !self.resource_types.contains(&deposit.resource_type)
        {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&deposit.status) {
            return false;
        }
        if !self.confidences.is_empty() && !self.confidences.contains(&deposit.confidence) {
            return false;
        }

        true
    }
}

fn toggle<T: std::hash::Hash + Eq>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// The lowercased text a search query is matched against: deposit name,
/// concessionaire, municipality, region and resource type, non-empty fields
/// joined with a single space.
fn search_haystack(deposit: &Deposit) -> String {
    let fields = [
        deposit.deposit_name.as_str(),
        deposit.concessionaire.as_str(),
        deposit.municipality.as_str(),
        deposit.region.as_str(),
        deposit.resource_type.as_str(),
    ];

    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Applies the criteria to a record collection, preserving input order.
///
/// Ineligible records (no coordinates, placeholder id) are always dropped,
/// so `filter` with empty criteria is exactly the eligible subset.
pub fn filter<'a>(deposits: &'a [Deposit], criteria: &FilterCriteria) -> Vec<&'a Deposit> {
    let needle = criteria.search.to_lowercase();
    let kept: Vec<&Deposit> = deposits
        .iter()
        .filter(|d| criteria.matches_with(d, &needle))
        .collect();

    debug!(
        total = deposits.len(),
        kept = kept.len(),
        active = criteria.active_count(),
        "applied filter criteria"
    );

    kept
}
