//! Strategy reference data.

use serde::{Deserialize, Serialize};

/// One eligibility clause, identified by its signature string,
/// e.g. `hasEmployerPlan()` or `entityType('S_Corp')`.
///
/// Accepted on the wire either as a bare string or as `{"expr": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawClause")]
pub struct EligibilityClause {
    pub expr: String,
}

impl EligibilityClause {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }

    /// The signature as written; matched byte for byte.
    pub fn signature(&self) -> &str {
        &self.expr
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClause {
    Signature(String),
    Object {
        #[serde(default)]
        expr: String,
    },
}

impl From<RawClause> for EligibilityClause {
    fn from(raw: RawClause) -> Self {
        match raw {
            RawClause::Signature(expr) | RawClause::Object { expr } => Self { expr },
        }
    }
}

/// Savings/outlay model selected by a strategy's category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyCategory {
    /// `Traditional` - retirement plan deferrals.
    Traditional,
    /// `Entity` - pass-through entity planning.
    Entity,
    /// Any category starting with `Crypto`.
    Crypto,
    /// Any category starting with `ETF`.
    Etf,
    /// `State Planning` - SALT cap workarounds.
    StatePlanning,
    /// `Compliance` - filing and documentation hygiene.
    Compliance,
    /// `Charitable` - giving strategies with a cash outlay.
    Charitable,
    /// `Education` - education funding with a fixed outlay.
    Education,
    /// Anything else; no modeled savings or outlay.
    Other,
}

impl StrategyCategory {
    /// Classifies a category string. Exact matches win over prefixes.
    pub fn classify(category: &str) -> Self {
        match category {
            "Traditional" => Self::Traditional,
            "Entity" => Self::Entity,
            "State Planning" => Self::StatePlanning,
            "Compliance" => Self::Compliance,
            "Charitable" => Self::Charitable,
            "Education" => Self::Education,
            c if c.starts_with("Crypto") => Self::Crypto,
            c if c.starts_with("ETF") => Self::Etf,
            _ => Self::Other,
        }
    }
}

/// A tax-reduction strategy from the rule library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Clauses that must all hold, evaluated in order.
    #[serde(default)]
    pub eligibility: Vec<EligibilityClause>,
    /// Calculation descriptor (informational).
    #[serde(default)]
    pub calc: String,
    #[serde(default)]
    pub outputs: Vec<String>,
    pub risk_score: i32,
    /// Documentation the client must retain.
    #[serde(default)]
    pub docs: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Strategy {
    /// Creates a strategy with no clauses, outputs or docs.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        risk_score: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            eligibility: Vec::new(),
            calc: String::new(),
            outputs: Vec::new(),
            risk_score,
            docs: Vec::new(),
            description: None,
        }
    }

    /// Appends an eligibility clause.
    pub fn with_clause(mut self, expr: impl Into<String>) -> Self {
        self.eligibility.push(EligibilityClause::new(expr));
        self
    }

    /// Appends a required document.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.docs.push(doc.into());
        self
    }

    /// The savings model for this strategy's category.
    pub fn category_kind(&self) -> StrategyCategory {
        StrategyCategory::classify(&self.category)
    }
}
