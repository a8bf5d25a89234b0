//! Statutory tables and rates.

use crate::domain::foundation::FilingStatus;

/// One marginal-rate bracket. `upper == None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    pub const fn new(lower: f64, upper: Option<f64>, rate: f64) -> Self {
        Self { lower, upper, rate }
    }
}

/// Federal ordinary income brackets, ascending.
pub const FEDERAL_BRACKETS_2025: [TaxBracket; 7] = [
    TaxBracket::new(0.0, Some(11_000.0), 0.10),
    TaxBracket::new(11_000.0, Some(44_725.0), 0.12),
    TaxBracket::new(44_725.0, Some(95_375.0), 0.22),
    TaxBracket::new(95_375.0, Some(182_100.0), 0.24),
    TaxBracket::new(182_100.0, Some(231_250.0), 0.32),
    TaxBracket::new(231_250.0, Some(578_125.0), 0.35),
    TaxBracket::new(578_125.0, None, 0.37),
];

/// State income tax rate used when the jurisdiction pack carries none.
pub const DEFAULT_STATE_TAX_RATE: f64 = 0.05;

/// Capital gains above this amount are subject to the NIIT surtax.
pub const NIIT_THRESHOLD: f64 = 250_000.0;

/// Net investment income tax rate.
pub const NIIT_RATE: f64 = 0.038;

/// Federal standard deduction for a filing status.
pub fn standard_deduction(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::Single => 14_600.0,
        FilingStatus::MarriedFilingJointly => 29_200.0,
        FilingStatus::MarriedFilingSeparately => 14_600.0,
        FilingStatus::HeadOfHousehold => 21_900.0,
        FilingStatus::QualifyingWidow => 29_200.0,
    }
}

/// Marginal-rate tax over an ascending bracket table.
///
/// Each dollar is taxed at the rate of the bracket it falls in. The walk
/// stops at the first bracket whose lower bound the income does not exceed,
/// or once the income is contained in the current bracket.
pub fn progressive_tax(brackets: &[TaxBracket], taxable_income: f64) -> f64 {
    let mut tax = 0.0;
    for bracket in brackets {
        if taxable_income <= bracket.lower {
            break;
        }
        let upper = bracket.upper.unwrap_or(taxable_income);
        let portion = taxable_income.min(upper) - bracket.lower;
        if portion <= 0.0 {
            continue;
        }
        tax += portion * bracket.rate;
        match bracket.upper {
            Some(upper) if taxable_income >= upper => {}
            _ => break,
        }
    }
    tax
}
