//! Eligibility module - clause predicates and the evaluator that applies them.

mod clause_registry;
mod evaluator;
pub mod predicates;

pub use clause_registry::{ClausePredicate, ClauseRegistry};
pub use evaluator::{EligibilityDecision, EligibilityEvaluator};
