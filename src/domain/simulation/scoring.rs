//! Composite scoring of a strategy's estimated effect.

/// Penalty per point of risk score.
pub const RISK_PENALTY_MULTIPLIER: f64 = 0.5;

/// Fraction of cash outlay charged as a liquidity penalty.
pub const LIQUIDITY_PENALTY_RATE: f64 = 0.1;

/// Converts a risk score into a non-negative penalty.
pub fn risk_penalty(risk_score: i32) -> f64 {
    (f64::from(risk_score) * RISK_PENALTY_MULTIPLIER).max(0.0)
}

/// Savings less the risk penalty and the liquidity penalty.
///
/// A zero score is always `+0.0`.
pub fn composite_score(savings: f64, risk_score: i32, cash_outlay: f64) -> f64 {
    savings - risk_penalty(risk_score) - cash_outlay * LIQUIDITY_PENALTY_RATE + 0.0
}
