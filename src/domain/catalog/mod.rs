//! Catalog module - read-only reference data.
//!
//! The rule library and jurisdiction pack are loaded once when an engine
//! is constructed and shared, immutably, by every computation.

mod jurisdiction_pack;
mod rule_library;
mod strategy;

pub use jurisdiction_pack::{JurisdictionPack, PtetProvision};
pub use rule_library::RuleLibrary;
pub use strategy::{EligibilityClause, Strategy, StrategyCategory};
