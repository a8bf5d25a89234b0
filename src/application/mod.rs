//! Application layer - the engine and its composition root.

pub mod bootstrap;
mod engine;

pub use engine::{OptimizationReport, TaxEngine, ENGINE_VERSION};
