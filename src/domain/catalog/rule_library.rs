//! Rule library - the versioned strategy catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Strategy;
use crate::domain::foundation::ValidationError;

/// A versioned catalog of strategies. Catalog order is significant: it is
/// the evaluation order and the tie-break order for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLibrary {
    pub version: String,
    #[serde(default)]
    pub released_at: Option<String>,
    pub strategies: Vec<Strategy>,
}

impl RuleLibrary {
    pub fn new(version: impl Into<String>, strategies: Vec<Strategy>) -> Self {
        Self {
            version: version.into(),
            released_at: None,
            strategies,
        }
    }

    /// Rejects a blank version or duplicate strategy ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version.trim().is_empty() {
            return Err(ValidationError::empty_field("version"));
        }

        let mut seen = HashSet::new();
        for strategy in &self.strategies {
            if strategy.id.trim().is_empty() {
                return Err(ValidationError::empty_field("strategies[].id"));
            }
            if !seen.insert(strategy.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "strategies[].id",
                    format!("duplicate strategy id '{}'", strategy.id),
                ));
            }
        }
        Ok(())
    }

    /// Looks up a strategy by id.
    pub fn strategy(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
