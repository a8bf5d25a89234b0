//! Federal filing status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five federal filing statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
    QualifyingWidow,
}

impl FilingStatus {
    /// Wire codes accepted on input, in declaration order.
    pub const CODES: &'static [&'static str] = &["SINGLE", "MFJ", "MFS", "HOH", "QUALIFYING_WIDOW"];

    /// All statuses, in declaration order.
    pub const ALL: [FilingStatus; 5] = [
        FilingStatus::Single,
        FilingStatus::MarriedFilingJointly,
        FilingStatus::MarriedFilingSeparately,
        FilingStatus::HeadOfHousehold,
        FilingStatus::QualifyingWidow,
    ];

    /// Returns the wire code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            FilingStatus::Single => "SINGLE",
            FilingStatus::MarriedFilingJointly => "MFJ",
            FilingStatus::MarriedFilingSeparately => "MFS",
            FilingStatus::HeadOfHousehold => "HOH",
            FilingStatus::QualifyingWidow => "QUALIFYING_WIDOW",
        }
    }
}

impl FromStr for FilingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(FilingStatus::Single),
            "MFJ" => Ok(FilingStatus::MarriedFilingJointly),
            "MFS" => Ok(FilingStatus::MarriedFilingSeparately),
            "HOH" => Ok(FilingStatus::HeadOfHousehold),
            "QUALIFYING_WIDOW" => Ok(FilingStatus::QualifyingWidow),
            other => Err(ValidationError::invalid_choice(
                "filing_status",
                Self::CODES,
                other,
            )),
        }
    }
}

impl TryFrom<String> for FilingStatus {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilingStatus> for String {
    fn from(status: FilingStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
