//! Pass-through business entities owned by the client.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Entity type tags that identify an S corporation.
const S_CORP_TAGS: &[&str] = &["S_Corp", "S-Corp", "SCorp", "S Corp"];

/// A business entity reporting income to the client on a K-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type tag, e.g. `S_Corp` or `Partnership`.
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    /// Client's ownership share.
    #[serde(rename = "ownership_pct")]
    pub ownership: Percentage,
    /// Ordinary business income (K-1 Box 1).
    #[serde(default)]
    pub k1_box1: Option<f64>,
    /// Reasonable compensation paid to the owner.
    #[serde(default, rename = "reasonable_comp")]
    pub reasonable_compensation: Option<f64>,
    /// Whether the income qualifies for the QBI deduction.
    #[serde(default)]
    pub qbi_qualified: bool,
}

impl Entity {
    /// Creates an entity with no reported income.
    pub fn new(entity_type: impl Into<String>, name: impl Into<String>, ownership: Percentage) -> Self {
        Self {
            entity_type: entity_type.into(),
            name: name.into(),
            ownership,
            k1_box1: None,
            reasonable_compensation: None,
            qbi_qualified: false,
        }
    }

    /// Sets the K-1 Box 1 income.
    pub fn with_k1_box1(mut self, amount: f64) -> Self {
        self.k1_box1 = Some(amount);
        self
    }

    /// K-1 Box 1 income, treating a missing figure as zero.
    pub fn pass_through_income(&self) -> f64 {
        self.k1_box1.unwrap_or(0.0)
    }

    /// True when the type tag names an S corporation.
    pub fn is_s_corp(&self) -> bool {
        S_CORP_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(self.entity_type.trim()))
    }
}
