//! Baseline Calculator - pre-strategy tax liability for a profile.

use serde::{Deserialize, Serialize};

use super::tax_tables::{
    progressive_tax, standard_deduction, DEFAULT_STATE_TAX_RATE, FEDERAL_BRACKETS_2025,
    NIIT_RATE, NIIT_THRESHOLD,
};
use crate::domain::catalog::JurisdictionPack;
use crate::domain::profile::ClientProfile;

/// Tax liability before any strategy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBaseline {
    /// Total income less all deductions paid. May be negative.
    pub agi: f64,
    /// Larger of the federal standard deduction and the jurisdiction override.
    pub deduction: f64,
    /// `max(agi - deduction, 0)`.
    pub taxable_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub niit: f64,
    pub total_tax: f64,
}

/// Baseline computation functions.
pub struct BaselineCalculator;

impl BaselineCalculator {
    /// Computes the baseline for a validated profile.
    ///
    /// Total over every validated profile: missing deduction categories
    /// and absent income figures count as zero.
    pub fn compute(profile: &ClientProfile, pack: &JurisdictionPack) -> TaxBaseline {
        let agi = profile.total_income() - profile.total_deductions();
        let deduction = Self::deduction(profile, pack);
        let taxable_income = (agi - deduction).max(0.0);
        let federal_tax = progressive_tax(&FEDERAL_BRACKETS_2025, taxable_income);
        let state_tax = taxable_income * Self::state_rate(pack);
        let niit = Self::niit(profile.capital_gains);

        TaxBaseline {
            agi,
            deduction,
            taxable_income,
            federal_tax,
            state_tax,
            niit,
            total_tax: federal_tax + state_tax + niit,
        }
    }

    /// The federal standard deduction, or the jurisdiction's when larger.
    pub fn deduction(profile: &ClientProfile, pack: &JurisdictionPack) -> f64 {
        let federal = standard_deduction(profile.filing_status);
        let jurisdiction = pack
            .standard_deduction_for(profile.filing_status)
            .unwrap_or(0.0);
        federal.max(jurisdiction)
    }

    /// Net investment income surtax on capital gains above the threshold.
    pub fn niit(capital_gains: f64) -> f64 {
        (capital_gains - NIIT_THRESHOLD).max(0.0) * NIIT_RATE
    }

    fn state_rate(pack: &JurisdictionPack) -> f64 {
        pack.income_tax_rate.unwrap_or(DEFAULT_STATE_TAX_RATE)
    }
}
