//! Ranking module - orders simulated strategies by risk-adjusted benefit.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::simulation::OptimizationResult;

/// An optimization result with its 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub result: OptimizationResult,
    pub rank: u32,
}

/// Ranking functions.
pub struct Ranker;

impl Ranker {
    /// Sorts by descending risk-adjusted benefit and assigns ranks 1..=N.
    ///
    /// The sort is stable, so equal benefits keep their input order.
    /// `0.0` and `-0.0` compare equal.
    pub fn rank(mut results: Vec<OptimizationResult>) -> Vec<RankedResult> {
        results.sort_by(|a, b| {
            b.risk_adjusted_benefit
                .partial_cmp(&a.risk_adjusted_benefit)
                .unwrap_or(Ordering::Equal)
        });
        results
            .into_iter()
            .zip(1u32..)
            .map(|(result, rank)| RankedResult { result, rank })
            .collect()
    }
}
