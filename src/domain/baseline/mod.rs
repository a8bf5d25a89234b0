//! Baseline module - progressive federal tax, state tax and NIIT.
//!
//! All functions are pure. The only inputs are the profile and the
//! jurisdiction pack; the statutory tables live in `tax_tables`.

mod baseline_calculator;
mod tax_tables;

pub use baseline_calculator::{BaselineCalculator, TaxBaseline};
pub use tax_tables::{
    progressive_tax, standard_deduction, TaxBracket, DEFAULT_STATE_TAX_RATE,
    FEDERAL_BRACKETS_2025, NIIT_RATE, NIIT_THRESHOLD,
};
