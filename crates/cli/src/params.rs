//! Demand parameter table, keyed by neighbourhood.
//!
//! Demand coefficients are estimated offline; this module only loads the
//! resulting table and looks entries up by name.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Estimated demand coefficients for one neighbourhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandParams {
    pub neighbourhood: String,
    /// Demand intercept `a`: occupancy percentage at price zero.
    pub a: Decimal,
    /// Price sensitivity `b`: occupancy percentage points lost per
    /// currency unit.
    pub b: Decimal,
}

/// The full lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamsTable(Vec<DemandParams>);

impl ParamsTable {
    /// Loads the table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading demand parameters from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing demand parameters from {}", path.display()))
    }

    /// Looks an entry up by neighbourhood name, case-insensitively.
    pub fn lookup(&self, neighbourhood: &str) -> Option<&DemandParams> {
        self.0
            .iter()
            .find(|entry| entry.neighbourhood.eq_ignore_ascii_case(neighbourhood))
    }

    pub fn entries(&self) -> &[DemandParams] {
        &self.0
    }
}
