//! Clause predicates over a profile and jurisdiction pack.
//!
//! Every predicate is pure and total. Missing deduction categories and
//! absent optional figures count as zero or absent.

use crate::domain::catalog::JurisdictionPack;
use crate::domain::profile::{
    ClientProfile, DEDUCTION_HSA, DEDUCTION_IRA_CONTRIBUTION, DEDUCTION_STATE_TAX_PAID,
};

pub const HAS_EMPLOYER_PLAN: &str = "hasEmployerPlan()";
pub const HAS_HDHP: &str = "hasHDHP()";
pub const HAS_PASS_THROUGH_INCOME: &str = "hasPassThroughIncome()";
pub const HAS_MULTIPLE_CRYPTO_LOTS: &str = "hasMultipleLots('crypto')";
pub const HAS_UNREALIZED_CRYPTO_LOSSES: &str = "hasUnrealizedLosses('crypto')";
pub const HAS_STAKING_INCOME: &str = "hasStakingIncome()";
pub const HAS_S_CORP_ENTITY: &str = "entityType('S_Corp')";
pub const HAS_TAX_DEFERRED_ACCOUNTS: &str = "hasTaxDeferredAccounts()";
pub const HAS_HIGH_YIELD_ETF: &str = "hasHighYieldETF()";
pub const HOLDS_1256_CONTRACTS: &str = "holds1256Contracts()";
pub const STATE_ALLOWS_PTET: &str = "stateAllowsPTET()";
pub const SALT_CAP_BINDING: &str = "saltCapBinding()";

/// State and local taxes paid at or above this amount hit the SALT cap.
pub const SALT_CAP: f64 = 10_000.0;

/// Wage income implies access to an employer plan.
pub fn has_employer_plan(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.wage_income > 0.0
}

/// An HSA deduction implies a high-deductible health plan.
pub fn has_hdhp(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.has_deduction(DEDUCTION_HSA)
}

pub fn has_pass_through_income(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    !profile.entities.is_empty()
}

/// Two or more lots across all non-ETF digital assets.
pub fn has_multiple_crypto_lots(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    let lots: usize = profile
        .digital_assets
        .iter()
        .filter(|asset| !asset.is_etf())
        .map(|asset| asset.lots.len())
        .sum();
    lots >= 2
}

pub fn has_unrealized_crypto_losses(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile
        .digital_assets
        .iter()
        .any(|asset| asset.has_unrealized_loss())
}

pub fn has_staking_income(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile
        .digital_assets
        .iter()
        .any(|asset| asset.has_activity_containing("stake"))
}

pub fn has_s_corp_entity(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.entities.iter().any(|entity| entity.is_s_corp())
}

/// Presence of an IRA contribution category, regardless of amount.
pub fn has_tax_deferred_accounts(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.has_deduction(DEDUCTION_IRA_CONTRIBUTION)
}

pub fn has_high_yield_etf(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.digital_assets.iter().any(|asset| asset.is_etf())
}

/// An ETF position trading futures holds Section 1256 contracts.
pub fn holds_1256_contracts(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile
        .digital_assets
        .iter()
        .any(|asset| asset.is_etf() && asset.has_activity_containing("futures"))
}

pub fn state_allows_ptet(_profile: &ClientProfile, pack: &JurisdictionPack) -> bool {
    pack.ptet_available()
}

pub fn salt_cap_binding(profile: &ClientProfile, _pack: &JurisdictionPack) -> bool {
    profile.deduction(DEDUCTION_STATE_TAX_PAID) >= SALT_CAP
}
