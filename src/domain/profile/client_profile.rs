//! Client financial profile - the input to every engine computation.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::{DigitalAsset, Entity};
use crate::domain::foundation::{FilingStatus, StateCode, ValidationError};

/// Deduction category for health savings account contributions.
pub const DEDUCTION_HSA: &str = "HSA";
/// Deduction category for traditional IRA contributions.
pub const DEDUCTION_IRA_CONTRIBUTION: &str = "ira_contribution";
/// Deduction category for state and local taxes paid.
pub const DEDUCTION_STATE_TAX_PAID: &str = "state_tax_paid";
/// Deduction category for cash charitable gifts.
pub const DEDUCTION_CHARITY_CASH: &str = "charity_cash";

/// A client's financial situation for one tax year.
///
/// Filing status and state code are validated on deserialization, so a
/// `ClientProfile` value always carries a valid status and a normalized
/// state. Entity ownership is range-checked by [`Percentage`]; lot share
/// counts are checked by [`ClientProfile::validate`].
///
/// [`Percentage`]: crate::domain::foundation::Percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub state: StateCode,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub digital_assets: Vec<DigitalAsset>,
    /// Deduction category to amount. A `null` amount keeps the category
    /// present with a zero value.
    #[serde(default, deserialize_with = "deserialize_deductions")]
    pub deductions_paid: HashMap<String, f64>,
    #[serde(default)]
    pub dependents: u32,
    #[serde(rename = "w2_income", default)]
    pub wage_income: f64,
    #[serde(rename = "1099_income", alias = "other_income", default)]
    pub other_income: f64,
    #[serde(default)]
    pub capital_gains: f64,
}

impl ClientProfile {
    /// Creates a builder for constructing a profile.
    pub fn builder() -> ClientProfileBuilder {
        ClientProfileBuilder::new()
    }

    /// Deserializes a JSON profile and validates it.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let profile: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("profile", e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Deserializes a YAML profile and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ValidationError> {
        let profile: Self = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("profile", e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks invariants not enforced by the field types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.digital_assets
            .iter()
            .try_for_each(DigitalAsset::validate)
    }

    /// Wages + other income + capital gains + digital-asset income +
    /// entity pass-through income.
    pub fn total_income(&self) -> f64 {
        let asset_income: f64 = self.digital_assets.iter().map(DigitalAsset::income_amount).sum();
        let entity_income: f64 = self.entities.iter().map(Entity::pass_through_income).sum();
        self.wage_income + self.other_income + self.capital_gains + asset_income + entity_income
    }

    /// Sum of every deduction category.
    pub fn total_deductions(&self) -> f64 {
        self.deductions_paid.values().sum()
    }

    /// Amount for a deduction category, zero when absent.
    pub fn deduction(&self, category: &str) -> f64 {
        self.deductions_paid.get(category).copied().unwrap_or(0.0)
    }

    /// True when the category is present, whatever its amount.
    pub fn has_deduction(&self, category: &str) -> bool {
        self.deductions_paid.contains_key(category)
    }
}

fn deserialize_deductions<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Option<f64>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(category, amount)| (category, amount.unwrap_or(0.0)))
        .collect())
}

/// Builder for [`ClientProfile`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ClientProfileBuilder {
    tax_year: i32,
    filing_status: String,
    state: String,
    entities: Vec<Entity>,
    digital_assets: Vec<DigitalAsset>,
    deductions_paid: HashMap<String, f64>,
    dependents: u32,
    wage_income: f64,
    other_income: f64,
    capital_gains: f64,
}

impl ClientProfileBuilder {
    /// Creates a builder for a SINGLE filer with no income.
    pub fn new() -> Self {
        Self {
            tax_year: 2025,
            filing_status: FilingStatus::Single.code().to_string(),
            state: String::new(),
            entities: Vec::new(),
            digital_assets: Vec::new(),
            deductions_paid: HashMap::new(),
            dependents: 0,
            wage_income: 0.0,
            other_income: 0.0,
            capital_gains: 0.0,
        }
    }

    pub fn tax_year(mut self, year: i32) -> Self {
        self.tax_year = year;
        self
    }

    pub fn filing_status(mut self, status: impl Into<String>) -> Self {
        self.filing_status = status.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn digital_asset(mut self, asset: DigitalAsset) -> Self {
        self.digital_assets.push(asset);
        self
    }

    pub fn deduction(mut self, category: impl Into<String>, amount: f64) -> Self {
        self.deductions_paid.insert(category.into(), amount);
        self
    }

    pub fn dependents(mut self, count: u32) -> Self {
        self.dependents = count;
        self
    }

    pub fn wage_income(mut self, amount: f64) -> Self {
        self.wage_income = amount;
        self
    }

    pub fn other_income(mut self, amount: f64) -> Self {
        self.other_income = amount;
        self
    }

    pub fn capital_gains(mut self, amount: f64) -> Self {
        self.capital_gains = amount;
        self
    }

    /// Builds the profile, failing on an invalid filing status, a malformed
    /// state code or a negative lot share count.
    pub fn build(self) -> Result<ClientProfile, ValidationError> {
        let profile = ClientProfile {
            tax_year: self.tax_year,
            filing_status: self.filing_status.parse()?,
            state: StateCode::new(&self.state)?,
            entities: self.entities,
            digital_assets: self.digital_assets,
            deductions_paid: self.deductions_paid,
            dependents: self.dependents,
            wage_income: self.wage_income,
            other_income: self.other_income,
            capital_gains: self.capital_gains,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl Default for ClientProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::profile::AssetLot;
    use chrono::NaiveDate;

    #[test]
    fn total_income_sums_every_source() {
        let profile = ClientProfile::builder()
            .state("CA")
            .wage_income(100_000.0)
            .other_income(20_000.0)
            .capital_gains(5_000.0)
            .digital_asset(DigitalAsset::new("ETH").with_income(1_000.0))
            .digital_asset(DigitalAsset::new("BTC"))
            .entity(Entity::new("S_Corp", "Widgets", Percentage::HUNDRED).with_k1_box1(50_000.0))
            .entity(Entity::new("Partnership", "LP", Percentage::HUNDRED))
            .build()
            .unwrap();

        assert_eq!(profile.total_income(), 176_000.0);
    }

    #[test]
    fn deduction_lookup_defaults_to_zero() {
        let profile = ClientProfile::builder()
            .state("NY")
            .deduction(DEDUCTION_STATE_TAX_PAID, 12_000.0)
            .build()
            .unwrap();

        assert_eq!(profile.deduction(DEDUCTION_STATE_TAX_PAID), 12_000.0);
        assert_eq!(profile.deduction(DEDUCTION_CHARITY_CASH), 0.0);
        assert!(!profile.has_deduction(DEDUCTION_HSA));
    }

    #[test]
    fn builder_rejects_invalid_filing_status() {
        let result = ClientProfile::builder()
            .state("CA")
            .filing_status("MARRIED")
            .build();
        assert!(matches!(result, Err(ValidationError::InvalidChoice { .. })));
    }

    #[test]
    fn builder_rejects_malformed_state() {
        assert!(ClientProfile::builder().state("Calif").build().is_err());
        assert!(ClientProfile::builder().build().is_err());
    }

    #[test]
    fn builder_rejects_negative_lot_shares() {
        let lot = AssetLot {
            acquired_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            shares: -3.0,
            cost_basis: 100.0,
            proceeds: None,
        };
        let result = ClientProfile::builder()
            .state("CA")
            .digital_asset(DigitalAsset::new("BTC").with_lot(lot))
            .build();
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn from_json_accepts_wire_format() {
        let json = r#"{
            "tax_year": 2025,
            "filing_status": "MFJ",
            "state": "ca",
            "entities": [],
            "digital_assets": [],
            "deductions_paid": {"ira_contribution": null, "HSA": 4150},
            "w2_income": 185000,
            "1099_income": 12000
        }"#;
        let profile = ClientProfile::from_json(json).unwrap();

        assert_eq!(profile.filing_status, FilingStatus::MarriedFilingJointly);
        assert_eq!(profile.state.as_str(), "CA");
        assert_eq!(profile.other_income, 12_000.0);
        assert!(profile.has_deduction(DEDUCTION_IRA_CONTRIBUTION));
        assert_eq!(profile.deduction(DEDUCTION_IRA_CONTRIBUTION), 0.0);
        assert_eq!(profile.total_deductions(), 4_150.0);
    }

    #[test]
    fn from_json_accepts_other_income_alias() {
        let json = r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "TX", "other_income": 900}"#;
        let profile = ClientProfile::from_json(json).unwrap();
        assert_eq!(profile.other_income, 900.0);
    }

    #[test]
    fn from_json_rejects_invalid_filing_status() {
        let json = r#"{"tax_year": 2025, "filing_status": "JOINT", "state": "CA"}"#;
        assert!(ClientProfile::from_json(json).is_err());
    }

    #[test]
    fn from_yaml_accepts_wire_format() {
        let yaml = "tax_year: 2025\nfiling_status: HOH\nstate: wa\nw2_income: 70000\n";
        let profile = ClientProfile::from_yaml(yaml).unwrap();
        assert_eq!(profile.filing_status, FilingStatus::HeadOfHousehold);
        assert_eq!(profile.state.as_str(), "WA");
    }

    #[test]
    fn serializes_wire_field_names() {
        let profile = ClientProfile::builder()
            .state("CA")
            .wage_income(1.0)
            .other_income(2.0)
            .build()
            .unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["w2_income"], 1.0);
        assert_eq!(value["1099_income"], 2.0);
        assert_eq!(value["filing_status"], "SINGLE");
    }
}
