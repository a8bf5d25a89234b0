//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `profile` - Client financial profile and its records
//! - `catalog` - Rule library, strategies and jurisdiction packs
//! - `baseline` - Progressive federal tax, state tax and NIIT
//! - `eligibility` - Clause predicates and the eligibility evaluator
//! - `simulation` - Per-strategy savings, outlay and composite score
//! - `ranking` - Stable ordering by risk-adjusted benefit
//! - `audit` - Canonical hashing and reproducibility records

pub mod audit;
pub mod baseline;
pub mod catalog;
pub mod eligibility;
pub mod foundation;
pub mod profile;
pub mod ranking;
pub mod simulation;
