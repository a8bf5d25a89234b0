//! Jurisdiction data pack - per-state statutory reference data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{FilingStatus, StateCode, ValidationError};

/// Pass-through entity tax election availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtetProvision {
    #[serde(default)]
    pub available: bool,
    /// Entity-level rate, when the pack records one.
    #[serde(default)]
    pub rate: Option<f64>,
}

/// Statutory data for one jurisdiction, loaded once per engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionPack {
    #[serde(default)]
    pub state: Option<StateCode>,
    /// Per-filing-status standard deduction granted by the jurisdiction.
    #[serde(default)]
    pub standard_deduction: BTreeMap<FilingStatus, f64>,
    #[serde(default)]
    pub ptet: PtetProvision,
    /// Flat income tax rate applied to taxable income. When absent the
    /// statutory default rate applies.
    #[serde(default)]
    pub income_tax_rate: Option<f64>,
}

impl JurisdictionPack {
    /// Creates an empty pack: no overrides, no PTET, default rate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets a standard deduction override.
    pub fn with_standard_deduction(mut self, status: FilingStatus, amount: f64) -> Self {
        self.standard_deduction.insert(status, amount);
        self
    }

    /// Marks the PTET election as available.
    pub fn with_ptet_available(mut self, available: bool) -> Self {
        self.ptet.available = available;
        self
    }

    /// Sets the flat income tax rate.
    pub fn with_income_tax_rate(mut self, rate: f64) -> Self {
        self.income_tax_rate = Some(rate);
        self
    }

    /// Standard deduction override for a filing status, if any.
    pub fn standard_deduction_for(&self, status: FilingStatus) -> Option<f64> {
        self.standard_deduction.get(&status).copied()
    }

    pub fn ptet_available(&self) -> bool {
        self.ptet.available
    }

    /// Rejects negative deductions and rates outside 0..=1.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for amount in self.standard_deduction.values() {
            if amount.is_nan() || *amount < 0.0 {
                return Err(ValidationError::out_of_range(
                    "standard_deduction",
                    0.0,
                    f64::MAX,
                    *amount,
                ));
            }
        }
        for (field, rate) in [
            ("income_tax_rate", self.income_tax_rate),
            ("ptet.rate", self.ptet.rate),
        ] {
            if let Some(rate) = rate {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(ValidationError::out_of_range(field, 0.0, 1.0, rate));
                }
            }
        }
        Ok(())
    }
}
