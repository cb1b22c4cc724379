//! Marker classification
//!
//! Maps a record to a display color through a two-tier lookup: resource type
//! first, status as fallback, then a default. The tables are configuration
//! data supplied by the caller, not logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Deposit;

/// Injectable color tables for marker classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Primary lookup: resource type -> color
    pub resource_colors: HashMap<String, String>,

    /// Secondary lookup: status -> color
    pub status_colors: HashMap<String, String>,

    /// Color used when neither table matches
    pub fallback: String,
}

impl Palette {
    /// Resolves the display color for a record.
    pub fn classify(&self, deposit: &Deposit) -> &str {
        if let Some(color) = self.resource_colors.get(&deposit.resource_type) {
            return color;
        }
        self.status_colors
            .get(&deposit.status)
            .unwrap_or(&self.fallback)
    }
}
