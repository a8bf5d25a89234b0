//! Eligibility Evaluator - decides which strategies apply to a profile.

use tracing::trace;

use super::clause_registry::ClauseRegistry;
use crate::domain::catalog::{JurisdictionPack, Strategy};
use crate::domain::profile::ClientProfile;

/// Outcome of evaluating one strategy's clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityDecision {
    Eligible,
    /// The first clause that evaluated false.
    Ineligible { failed_clause: String },
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Evaluates eligibility clauses against a profile.
///
/// Clauses are a conjunction evaluated in order, stopping at the first
/// false one. A signature the registry does not know evaluates to true.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator {
    registry: ClauseRegistry,
}

impl EligibilityEvaluator {
    pub fn new(registry: ClauseRegistry) -> Self {
        Self { registry }
    }

    /// Evaluator over the built-in clauses.
    pub fn standard() -> Self {
        Self::new(ClauseRegistry::standard())
    }

    pub fn registry(&self) -> &ClauseRegistry {
        &self.registry
    }

    /// Evaluates every clause of `strategy`, reporting the first failure.
    pub fn evaluate(
        &self,
        strategy: &Strategy,
        profile: &ClientProfile,
        pack: &JurisdictionPack,
    ) -> EligibilityDecision {
        for clause in &strategy.eligibility {
            let signature = clause.signature();
            match self.registry.get(signature) {
                Some(predicate) => {
                    if !predicate(profile, pack) {
                        return EligibilityDecision::Ineligible {
                            failed_clause: signature.to_string(),
                        };
                    }
                }
                None => {
                    trace!(
                        strategy_id = %strategy.id,
                        clause = signature,
                        "Unrecognized clause treated as satisfied"
                    );
                }
            }
        }
        EligibilityDecision::Eligible
    }

    pub fn is_eligible(
        &self,
        strategy: &Strategy,
        profile: &ClientProfile,
        pack: &JurisdictionPack,
    ) -> bool {
        self.evaluate(strategy, profile, pack).is_eligible()
    }

    /// Eligible strategies in catalog order.
    pub fn filter<'a>(
        &self,
        strategies: &'a [Strategy],
        profile: &ClientProfile,
        pack: &JurisdictionPack,
    ) -> Vec<&'a Strategy> {
        strategies
            .iter()
            .filter(|strategy| self.is_eligible(strategy, profile, pack))
            .collect()
    }
}

impl Default for EligibilityEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}
