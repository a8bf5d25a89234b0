//! Clause Registry - dispatch table from clause signature to predicate.

use std::collections::HashMap;
use std::fmt;

use super::predicates::{self, *};
use crate::domain::catalog::JurisdictionPack;
use crate::domain::profile::ClientProfile;

/// A pure eligibility predicate.
pub type ClausePredicate = fn(&ClientProfile, &JurisdictionPack) -> bool;

/// Maps clause signatures to predicates.
///
/// Signatures are matched exactly; whitespace is significant.
#[derive(Clone, Default)]
pub struct ClauseRegistry {
    predicates: HashMap<String, ClausePredicate>,
}

impl ClauseRegistry {
    /// Creates a registry with no clauses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in clause.
    pub fn standard() -> Self {
        Self::empty()
            .with(HAS_EMPLOYER_PLAN, predicates::has_employer_plan)
            .with(HAS_HDHP, predicates::has_hdhp)
            .with(HAS_PASS_THROUGH_INCOME, predicates::has_pass_through_income)
            .with(HAS_MULTIPLE_CRYPTO_LOTS, predicates::has_multiple_crypto_lots)
            .with(HAS_UNREALIZED_CRYPTO_LOSSES, predicates::has_unrealized_crypto_losses)
            .with(HAS_STAKING_INCOME, predicates::has_staking_income)
            .with(HAS_S_CORP_ENTITY, predicates::has_s_corp_entity)
            .with(HAS_TAX_DEFERRED_ACCOUNTS, predicates::has_tax_deferred_accounts)
            .with(HAS_HIGH_YIELD_ETF, predicates::has_high_yield_etf)
            .with(HOLDS_1256_CONTRACTS, predicates::holds_1256_contracts)
            .with(STATE_ALLOWS_PTET, predicates::state_allows_ptet)
            .with(SALT_CAP_BINDING, predicates::salt_cap_binding)
    }

    /// Registers a predicate, replacing any existing one for the signature.
    pub fn with(mut self, signature: impl Into<String>, predicate: ClausePredicate) -> Self {
        self.register(signature, predicate);
        self
    }

    /// Registers a predicate in place.
    pub fn register(&mut self, signature: impl Into<String>, predicate: ClausePredicate) {
        self.predicates.insert(signature.into(), predicate);
    }

    /// Looks up the predicate for a signature.
    pub fn get(&self, signature: &str) -> Option<ClausePredicate> {
        self.predicates.get(signature).copied()
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.predicates.contains_key(signature)
    }

    /// Registered signatures, sorted.
    pub fn signatures(&self) -> Vec<&str> {
        let mut signatures: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        signatures.sort_unstable();
        signatures
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for ClauseRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseRegistry")
            .field("signatures", &self.signatures())
            .finish()
    }
}
