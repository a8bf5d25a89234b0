//! Tax Strategy Engine - deterministic tax optimization
//!
//! Computes a client's baseline tax liability, filters a versioned library of
//! tax-reduction strategies for eligibility, estimates each strategy's
//! savings and risk-adjusted benefit, ranks them, and records a
//! content-addressed audit document for every optimization.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
