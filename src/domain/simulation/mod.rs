//! Simulation module - per-strategy savings, outlay and composite score.

mod scoring;
mod simulator;

pub use scoring::{composite_score, risk_penalty, LIQUIDITY_PENALTY_RATE, RISK_PENALTY_MULTIPLIER};
pub use simulator::{OptimizationResult, StrategySimulator};
