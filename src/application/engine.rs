//! TaxEngine - orchestrates baseline, eligibility, simulation, ranking and audit.
//!
//! The engine holds only immutable reference data and shared handles, so a
//! single instance can serve concurrent callers. Each call is synchronous
//! and CPU-bound; the only side effect is one audit write handed to the
//! ambient tokio runtime. Callers never wait on that write, though a process
//! shutting down can drain pending writes with `flush_audits`.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::audit::{AuditDocument, AuditRecorder};
use crate::domain::baseline::{BaselineCalculator, TaxBaseline};
use crate::domain::catalog::{JurisdictionPack, RuleLibrary, Strategy};
use crate::domain::eligibility::{EligibilityDecision, EligibilityEvaluator};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::profile::ClientProfile;
use crate::domain::ranking::{RankedResult, Ranker};
use crate::domain::simulation::StrategySimulator;
use crate::ports::{AuditSink, ReferenceDataError, ReferenceDataSource};

/// Version recorded in every audit document.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub calc_id: String,
    pub baseline: TaxBaseline,
    /// Eligible strategies, best first.
    pub strategies: Vec<RankedResult>,
}

/// Deterministic tax optimization engine.
pub struct TaxEngine {
    rule_library: Arc<RuleLibrary>,
    jurisdiction_pack: Arc<JurisdictionPack>,
    evaluator: EligibilityEvaluator,
    recorder: AuditRecorder,
    audit_sink: Arc<dyn AuditSink>,
    pending_audits: Mutex<Vec<JoinHandle<()>>>,
}

impl TaxEngine {
    /// Creates an engine over already-validated reference data.
    pub fn new(
        rule_library: RuleLibrary,
        jurisdiction_pack: JurisdictionPack,
        audit_sink: Arc<dyn AuditSink>,
    ) -> Self {
        let recorder = AuditRecorder::new(rule_library.version.clone(), ENGINE_VERSION);
        info!(
            rule_library_version = %rule_library.version,
            strategies = rule_library.len(),
            state = jurisdiction_pack.state.as_ref().map(|s| s.as_str()).unwrap_or("-"),
            "Tax engine initialized"
        );
        Self {
            rule_library: Arc::new(rule_library),
            jurisdiction_pack: Arc::new(jurisdiction_pack),
            evaluator: EligibilityEvaluator::standard(),
            recorder,
            audit_sink,
            pending_audits: Mutex::new(Vec::new()),
        }
    }

    /// Loads reference data from `source` and creates the engine.
    ///
    /// # Errors
    /// Returns `ReferenceDataError` if either document cannot be loaded.
    pub fn from_source(
        source: &dyn ReferenceDataSource,
        audit_sink: Arc<dyn AuditSink>,
    ) -> Result<Self, ReferenceDataError> {
        let rule_library = source.load_rule_library()?;
        let jurisdiction_pack = source.load_jurisdiction_pack()?;
        Ok(Self::new(rule_library, jurisdiction_pack, audit_sink))
    }

    /// Replaces the eligibility evaluator, e.g. to register extra clauses.
    pub fn with_evaluator(mut self, evaluator: EligibilityEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn rule_library(&self) -> &RuleLibrary {
        &self.rule_library
    }

    pub fn jurisdiction_pack(&self) -> &JurisdictionPack {
        &self.jurisdiction_pack
    }

    /// Baseline tax liability before any strategy.
    pub fn compute_baseline(&self, profile: &ClientProfile) -> TaxBaseline {
        let baseline = BaselineCalculator::compute(profile, &self.jurisdiction_pack);
        debug!(
            taxable_income = baseline.taxable_income,
            total_tax = baseline.total_tax,
            "Baseline computed"
        );
        baseline
    }

    /// Strategies whose every clause holds for `profile`, in catalog order.
    pub fn eligible_strategies(&self, profile: &ClientProfile) -> Vec<&Strategy> {
        self.rule_library
            .strategies
            .iter()
            .filter(|strategy| {
                match self.evaluator.evaluate(strategy, profile, &self.jurisdiction_pack) {
                    EligibilityDecision::Eligible => true,
                    EligibilityDecision::Ineligible { failed_clause } => {
                        debug!(strategy_id = %strategy.id, %failed_clause, "Strategy ineligible");
                        false
                    }
                }
            })
            .collect()
    }

    /// Runs the full pipeline stamped with the current time.
    ///
    /// The audit document is written only when called from within a tokio
    /// runtime. Without one the report is still returned but the audit write
    /// is skipped and a warning is logged on every call; synchronous callers
    /// that need audit records must enter a runtime first.
    ///
    /// # Errors
    /// Returns `DomainError` only if canonical hashing fails. Audit sink
    /// failures never surface here.
    pub fn optimize(&self, profile: &ClientProfile) -> Result<OptimizationReport, DomainError> {
        self.optimize_at(profile, Timestamp::now())
    }

    /// Runs the full pipeline with an explicit timestamp.
    ///
    /// Identical profile, reference data and timestamp give an identical
    /// report, `calc_id` included. Audit delivery follows [`Self::optimize`].
    pub fn optimize_at(
        &self,
        profile: &ClientProfile,
        timestamp: Timestamp,
    ) -> Result<OptimizationReport, DomainError> {
        let baseline = self.compute_baseline(profile);
        let results = self
            .eligible_strategies(profile)
            .into_iter()
            .map(|strategy| StrategySimulator::simulate(strategy, profile, &baseline))
            .collect();
        let strategies = Ranker::rank(results);

        let document = self.recorder.record(profile, &baseline, &strategies, timestamp)?;
        let calc_id = document.calc_id.clone();
        self.dispatch_audit(document);

        info!(
            %calc_id,
            eligible = strategies.len(),
            total_tax = baseline.total_tax,
            "Optimization complete"
        );

        Ok(OptimizationReport {
            calc_id,
            baseline,
            strategies,
        })
    }

    /// Hands the document to the sink without waiting for the outcome.
    fn dispatch_audit(&self, document: AuditDocument) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(calc_id = %document.calc_id, "No async runtime available, audit write skipped");
                return;
            }
        };

        let sink = Arc::clone(&self.audit_sink);
        let task = handle.spawn(async move {
            if let Err(e) = sink.log(&document).await {
                warn!(calc_id = %document.calc_id, error = %e, "Audit write failed");
            }
        });

        let mut pending = self.pending_audits.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|t| !t.is_finished());
        pending.push(task);
    }

    /// Waits for every audit write dispatched so far. Call before shutdown
    /// so in-flight records are not dropped with the runtime.
    pub async fn flush_audits(&self) {
        let tasks = {
            let mut pending = self.pending_audits.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *pending)
        };
        for task in tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Audit task aborted");
            }
        }
    }
}
