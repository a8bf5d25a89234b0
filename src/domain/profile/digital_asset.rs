//! Digital asset holdings and their acquisition lots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Asset type tag for exchange-traded funds.
pub const ETF_TYPE: &str = "ETF";

/// A single acquisition of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetLot {
    #[serde(rename = "acq_date")]
    pub acquired_on: NaiveDate,
    pub shares: f64,
    pub cost_basis: f64,
    #[serde(default)]
    pub proceeds: Option<f64>,
}

impl AssetLot {
    /// Creates a lot, rejecting negative share counts.
    pub fn new(acquired_on: NaiveDate, shares: f64, cost_basis: f64) -> Result<Self, ValidationError> {
        let lot = Self {
            acquired_on,
            shares,
            cost_basis,
            proceeds: None,
        };
        lot.validate()?;
        Ok(lot)
    }

    /// Checks the share count invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.shares.is_nan() || self.shares < 0.0 {
            return Err(ValidationError::out_of_range(
                "shares",
                0.0,
                f64::MAX,
                self.shares,
            ));
        }
        Ok(())
    }
}

/// A digital asset position (token, coin or tokenized fund).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalAsset {
    #[serde(rename = "asset")]
    pub name: String,
    /// Activity tags such as `trade`, `stake` or `futures`.
    #[serde(rename = "activity", default)]
    pub activities: Vec<String>,
    #[serde(rename = "type", default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub wallet: Option<String>,
    #[serde(default)]
    pub cost_basis: Option<f64>,
    #[serde(default)]
    pub proceeds: Option<f64>,
    #[serde(rename = "income_usd", default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub lots: Vec<AssetLot>,
}

impl DigitalAsset {
    /// Creates an asset with no activity, basis or lots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
            asset_type: None,
            wallet: None,
            cost_basis: None,
            proceeds: None,
            income: None,
            lots: Vec::new(),
        }
    }

    /// Adds an activity tag.
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.push(activity.into());
        self
    }

    /// Sets the asset type tag.
    pub fn with_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Sets aggregate cost basis and proceeds.
    pub fn with_basis(mut self, cost_basis: f64, proceeds: Option<f64>) -> Self {
        self.cost_basis = Some(cost_basis);
        self.proceeds = proceeds;
        self
    }

    /// Sets the income (staking rewards, airdrops) in USD.
    pub fn with_income(mut self, income: f64) -> Self {
        self.income = Some(income);
        self
    }

    /// Appends an acquisition lot.
    pub fn with_lot(mut self, lot: AssetLot) -> Self {
        self.lots.push(lot);
        self
    }

    /// Proceeds minus cost basis, or zero unless both are known.
    pub fn realized_gain(&self) -> f64 {
        match (self.proceeds, self.cost_basis) {
            (Some(proceeds), Some(cost_basis)) => proceeds - cost_basis,
            _ => 0.0,
        }
    }

    /// Cost basis in excess of proceeds; an asset without proceeds is
    /// treated as sold at basis. Zero when the cost basis is unknown.
    pub fn harvestable_loss(&self) -> f64 {
        match self.cost_basis {
            Some(cost_basis) => (cost_basis - self.proceeds.unwrap_or(cost_basis)).max(0.0),
            None => 0.0,
        }
    }

    /// True when both figures are known and basis exceeds proceeds.
    pub fn has_unrealized_loss(&self) -> bool {
        matches!(
            (self.cost_basis, self.proceeds),
            (Some(cost_basis), Some(proceeds)) if cost_basis > proceeds
        )
    }

    /// Asset income, treating a missing figure as zero.
    pub fn income_amount(&self) -> f64 {
        self.income.unwrap_or(0.0)
    }

    /// True when the asset type tag is `ETF`.
    pub fn is_etf(&self) -> bool {
        self.asset_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(ETF_TYPE))
    }

    /// True when any activity tag contains `needle`, ignoring case.
    pub fn has_activity_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.activities
            .iter()
            .any(|activity| activity.to_lowercase().contains(&needle))
    }

    /// Checks lot invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.lots.iter().try_for_each(AssetLot::validate)
    }
}
