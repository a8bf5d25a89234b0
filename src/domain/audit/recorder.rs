//! Audit Recorder - content hashes that make a computation reproducible.

use serde::{Deserialize, Serialize};

use super::canonical::{digest_of, CanonicalizationError};
use crate::domain::baseline::TaxBaseline;
use crate::domain::foundation::Timestamp;
use crate::domain::profile::ClientProfile;
use crate::domain::ranking::RankedResult;

/// Reproducibility record for one optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDocument {
    /// Digest of the profile together with the computation time.
    pub calc_id: String,
    /// Digest of the profile alone.
    pub inputs_hash: String,
    /// Digest of the baseline and the ranked results.
    pub result_hash: String,
    pub rule_library_version: String,
    pub engine_version: String,
    pub timestamp: Timestamp,
}

#[derive(Serialize)]
struct CalcIdPayload<'a> {
    timestamp: String,
    profile: &'a ClientProfile,
}

#[derive(Serialize)]
struct ResultPayload<'a> {
    baseline: &'a TaxBaseline,
    ranked: &'a [RankedResult],
}

/// Which hashes of an audit document matched a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditVerification {
    pub inputs_match: bool,
    pub result_match: bool,
}

impl AuditVerification {
    pub fn is_valid(&self) -> bool {
        self.inputs_match && self.result_match
    }
}

/// Builds audit documents for a fixed rule library and engine version.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    rule_library_version: String,
    engine_version: String,
}

impl AuditRecorder {
    pub fn new(rule_library_version: impl Into<String>, engine_version: impl Into<String>) -> Self {
        Self {
            rule_library_version: rule_library_version.into(),
            engine_version: engine_version.into(),
        }
    }

    pub fn rule_library_version(&self) -> &str {
        &self.rule_library_version
    }

    pub fn engine_version(&self) -> &str {
        &self.engine_version
    }

    /// Identifier unique to this profile at this instant.
    pub fn calc_id(
        profile: &ClientProfile,
        timestamp: &Timestamp,
    ) -> Result<String, CanonicalizationError> {
        digest_of(&CalcIdPayload {
            timestamp: timestamp.to_rfc3339(),
            profile,
        })
    }

    pub fn inputs_hash(profile: &ClientProfile) -> Result<String, CanonicalizationError> {
        digest_of(profile)
    }

    pub fn result_hash(
        baseline: &TaxBaseline,
        ranked: &[RankedResult],
    ) -> Result<String, CanonicalizationError> {
        digest_of(&ResultPayload { baseline, ranked })
    }

    /// Computes every hash and assembles the audit document.
    pub fn record(
        &self,
        profile: &ClientProfile,
        baseline: &TaxBaseline,
        ranked: &[RankedResult],
        timestamp: Timestamp,
    ) -> Result<AuditDocument, CanonicalizationError> {
        Ok(AuditDocument {
            calc_id: Self::calc_id(profile, &timestamp)?,
            inputs_hash: Self::inputs_hash(profile)?,
            result_hash: Self::result_hash(baseline, ranked)?,
            rule_library_version: self.rule_library_version.clone(),
            engine_version: self.engine_version.clone(),
            timestamp,
        })
    }

    /// Recomputes the content hashes and compares them with `document`.
    pub fn verify(
        document: &AuditDocument,
        profile: &ClientProfile,
        baseline: &TaxBaseline,
        ranked: &[RankedResult],
    ) -> Result<AuditVerification, CanonicalizationError> {
        Ok(AuditVerification {
            inputs_match: Self::inputs_hash(profile)? == document.inputs_hash,
            result_match: Self::result_hash(baseline, ranked)? == document.result_hash,
        })
    }
}
