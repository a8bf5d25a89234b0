//! Strategy Simulator - estimates savings, outlay and benefit for one strategy.

use serde::{Deserialize, Serialize};

use super::scoring::composite_score;
use crate::domain::baseline::TaxBaseline;
use crate::domain::catalog::{Strategy, StrategyCategory};
use crate::domain::profile::{
    ClientProfile, DigitalAsset, Entity, DEDUCTION_CHARITY_CASH, DEDUCTION_STATE_TAX_PAID,
};

const TRADITIONAL_DEFERRAL_CAP: f64 = 22_500.0;
const TRADITIONAL_RATE: f64 = 0.05;
const ENTITY_RATE: f64 = 0.2;
const CRYPTO_HARVEST_RATE: f64 = 0.3;
const CRYPTO_FLAT_BENEFIT: f64 = 1_500.0;
const ETF_FLAT_BENEFIT: f64 = 1_200.0;
const STATE_PLANNING_RATE: f64 = 0.9;
const STATE_PLANNING_CAP: f64 = 10_000.0;
const COMPLIANCE_FLAT_BENEFIT: f64 = 250.0;
const EDUCATION_OUTLAY: f64 = 15_000.0;

/// Estimated effect of one eligible strategy, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub strategy_id: String,
    pub name: String,
    pub savings: f64,
    pub cash_outlay: f64,
    pub risk_score: i32,
    pub risk_adjusted_benefit: f64,
    #[serde(default)]
    pub audit_notes: Vec<String>,
}

/// Strategy simulation functions.
pub struct StrategySimulator;

impl StrategySimulator {
    /// Simulates an eligible strategy against the profile and its baseline.
    pub fn simulate(
        strategy: &Strategy,
        profile: &ClientProfile,
        baseline: &TaxBaseline,
    ) -> OptimizationResult {
        let savings = Self::savings(strategy, profile, baseline);
        let cash_outlay = Self::cash_outlay(strategy, profile);

        OptimizationResult {
            strategy_id: strategy.id.clone(),
            name: strategy.name.clone(),
            savings,
            cash_outlay,
            risk_score: strategy.risk_score,
            risk_adjusted_benefit: composite_score(savings, strategy.risk_score, cash_outlay),
            audit_notes: Self::audit_notes(strategy),
        }
    }

    /// Estimated tax savings for the strategy's category.
    pub fn savings(strategy: &Strategy, profile: &ClientProfile, baseline: &TaxBaseline) -> f64 {
        match strategy.category_kind() {
            StrategyCategory::Traditional => {
                TRADITIONAL_DEFERRAL_CAP.min(baseline.taxable_income * TRADITIONAL_RATE)
            }
            StrategyCategory::Entity => {
                let k1_total = profile
                    .entities
                    .iter()
                    .map(Entity::pass_through_income)
                    .fold(0.0, |acc, income| acc + income);
                k1_total * ENTITY_RATE
            }
            StrategyCategory::Crypto => {
                let harvestable = profile
                    .digital_assets
                    .iter()
                    .map(DigitalAsset::harvestable_loss)
                    .fold(0.0, |acc, loss| acc + loss);
                harvestable * CRYPTO_HARVEST_RATE + CRYPTO_FLAT_BENEFIT
            }
            StrategyCategory::Etf => ETF_FLAT_BENEFIT,
            StrategyCategory::StatePlanning => (profile.deduction(DEDUCTION_STATE_TAX_PAID)
                * STATE_PLANNING_RATE)
                .min(STATE_PLANNING_CAP),
            StrategyCategory::Compliance => COMPLIANCE_FLAT_BENEFIT,
            StrategyCategory::Charitable
            | StrategyCategory::Education
            | StrategyCategory::Other => 0.0,
        }
    }

    /// Up-front cash the strategy requires.
    pub fn cash_outlay(strategy: &Strategy, profile: &ClientProfile) -> f64 {
        match strategy.category_kind() {
            StrategyCategory::Charitable => profile.deduction(DEDUCTION_CHARITY_CASH),
            StrategyCategory::Education => EDUCATION_OUTLAY,
            _ => 0.0,
        }
    }

    fn audit_notes(strategy: &Strategy) -> Vec<String> {
        if strategy.docs.is_empty() {
            Vec::new()
        } else {
            vec![format!("Documentation required: {}", strategy.docs.join(", "))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::BaselineCalculator;
    use crate::domain::catalog::JurisdictionPack;
    use crate::domain::foundation::Percentage;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn baseline_for(profile: &ClientProfile) -> TaxBaseline {
        BaselineCalculator::compute(profile, &JurisdictionPack::empty())
    }

    fn profile() -> ClientProfile {
        ClientProfile::builder()
            .state("CA")
            .wage_income(64_600.0)
            .build()
            .unwrap()
    }

    #[test]
    fn traditional_is_five_percent_of_taxable_income() {
        let profile = profile();
        let strategy = Strategy::new("401k", "Max 401(k)", "Traditional", 1);
        let result = StrategySimulator::simulate(&strategy, &profile, &baseline_for(&profile));

        assert!(approx(result.savings, 2_500.0));
        assert_eq!(result.cash_outlay, 0.0);
        assert!(approx(result.risk_adjusted_benefit, 2_499.5));
    }

    #[test]
    fn traditional_is_capped() {
        let rich = ClientProfile::builder()
            .state("CA")
            .wage_income(2_000_000.0)
            .build()
            .unwrap();
        let strategy = Strategy::new("401k", "Max 401(k)", "Traditional", 1);
        assert_eq!(
            StrategySimulator::savings(&strategy, &rich, &baseline_for(&rich)),
            22_500.0
        );
    }

    #[test]
    fn entity_is_twenty_percent_of_k1_income() {
        let profile = ClientProfile::builder()
            .state("CA")
            .entity(Entity::new("S_Corp", "Widgets", Percentage::HUNDRED).with_k1_box1(80_000.0))
            .entity(Entity::new("Partnership", "LP", Percentage::HUNDRED))
            .build()
            .unwrap();
        let strategy = Strategy::new("ptet", "Entity election", "Entity", 4);
        assert!(approx(
            StrategySimulator::savings(&strategy, &profile, &baseline_for(&profile)),
            16_000.0
        ));
    }

    #[test]
    fn entity_without_entities_ties_with_later_zero_benefit_strategy() {
        let profile = ClientProfile::builder().state("CA").build().unwrap();
        let baseline = baseline_for(&profile);
        let results: Vec<OptimizationResult> = [
            Strategy::new("entity", "Entity election", "Entity", 0),
            Strategy::new("other", "Lifestyle", "Lifestyle", 0),
        ]
        .iter()
        .map(|strategy| StrategySimulator::simulate(strategy, &profile, &baseline))
        .collect();

        assert!(results[0].savings.is_sign_positive());
        assert!(results[0].risk_adjusted_benefit.is_sign_positive());

        let ranked = crate::domain::ranking::Ranker::rank(results);
        let ids: Vec<&str> = ranked.iter().map(|r| r.result.strategy_id.as_str()).collect();
        assert_eq!(ids, vec!["entity", "other"]);
        let json = serde_json::to_string(&ranked).unwrap();
        assert!(!json.contains("-0.0"), "{json}");
    }

    #[test]
    fn crypto_counts_harvestable_losses_plus_flat_benefit() {
        let profile = ClientProfile::builder()
            .state("CA")
            .digital_asset(DigitalAsset::new("SOL").with_basis(5_000.0, Some(2_000.0)))
            .digital_asset(DigitalAsset::new("BTC").with_basis(1_000.0, Some(9_000.0)))
            .digital_asset(DigitalAsset::new("ETH").with_basis(700.0, None))
            .digital_asset(DigitalAsset::new("DOGE"))
            .build()
            .unwrap();
        let strategy = Strategy::new("tlh", "Harvest losses", "Crypto Harvesting", 2);
        assert!(approx(
            StrategySimulator::savings(&strategy, &profile, &baseline_for(&profile)),
            3_000.0 * 0.3 + 1_500.0
        ));
    }

    #[test]
    fn state_planning_is_capped_at_ten_thousand() {
        let modest = ClientProfile::builder()
            .state("CA")
            .deduction("state_tax_paid", 10_000.0)
            .build()
            .unwrap();
        let heavy = ClientProfile::builder()
            .state("CA")
            .deduction("state_tax_paid", 40_000.0)
            .build()
            .unwrap();
        let strategy = Strategy::new("salt", "PTET", "State Planning", 3);

        assert!(approx(
            StrategySimulator::savings(&strategy, &modest, &baseline_for(&modest)),
            9_000.0
        ));
        assert_eq!(
            StrategySimulator::savings(&strategy, &heavy, &baseline_for(&heavy)),
            10_000.0
        );
    }

    #[test]
    fn flat_benefits_by_category() {
        let profile = profile();
        let baseline = baseline_for(&profile);
        let etf = Strategy::new("etf", "ETF swap", "ETF Income", 2);
        let compliance = Strategy::new("c", "Records", "Compliance", 0);
        let other = Strategy::new("o", "Misc", "Lifestyle", 0);

        assert_eq!(StrategySimulator::savings(&etf, &profile, &baseline), 1_200.0);
        assert_eq!(StrategySimulator::savings(&compliance, &profile, &baseline), 250.0);
        assert_eq!(StrategySimulator::savings(&other, &profile, &baseline), 0.0);
    }

    #[test]
    fn outlay_by_category() {
        let giver = ClientProfile::builder()
            .state("CA")
            .deduction("charity_cash", 8_000.0)
            .build()
            .unwrap();
        let charitable = Strategy::new("daf", "Donor-advised fund", "Charitable", 1);
        let education = Strategy::new("529", "529 plan", "Education", 1);
        let compliance = Strategy::new("c", "Records", "Compliance", 0);

        assert_eq!(StrategySimulator::cash_outlay(&charitable, &giver), 8_000.0);
        assert_eq!(StrategySimulator::cash_outlay(&education, &giver), 15_000.0);
        assert_eq!(StrategySimulator::cash_outlay(&compliance, &giver), 0.0);
        assert_eq!(StrategySimulator::cash_outlay(&charitable, &profile()), 0.0);
    }

    #[test]
    fn education_benefit_goes_negative() {
        let profile = profile();
        let strategy = Strategy::new("529", "529 plan", "Education", 2);
        let result = StrategySimulator::simulate(&strategy, &profile, &baseline_for(&profile));
        assert!(approx(result.risk_adjusted_benefit, -1_501.0));
    }

    #[test]
    fn audit_note_lists_documents() {
        let profile = profile();
        let strategy = Strategy::new("c", "Records", "Compliance", 0)
            .with_doc("Form 8949")
            .with_doc("Exchange statements");
        let result = StrategySimulator::simulate(&strategy, &profile, &baseline_for(&profile));
        assert_eq!(
            result.audit_notes,
            vec!["Documentation required: Form 8949, Exchange statements".to_string()]
        );

        let bare = Strategy::new("c", "Records", "Compliance", 0);
        assert!(StrategySimulator::simulate(&bare, &profile, &baseline_for(&profile))
            .audit_notes
            .is_empty());
    }
}
