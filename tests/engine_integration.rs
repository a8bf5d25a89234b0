//! Integration tests for the tax engine pipeline.
//!
//! These tests drive the public API end to end:
//! 1. Reference data is loaded from fixture files
//! 2. Profiles are parsed from their wire formats
//! 3. Baseline, eligibility, simulation and ranking run through `TaxEngine`
//! 4. Audit documents reach the sink and verify against the report
//!
//! Uses in-memory and failing audit sinks, no external services.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use std::sync::Arc;

use tax_strategy_engine::adapters::{FileAuditSink, FileReferenceSource, InMemoryAuditSink};
use tax_strategy_engine::application::TaxEngine;
use tax_strategy_engine::domain::audit::{AuditDocument, AuditRecorder};
use tax_strategy_engine::domain::foundation::Timestamp;
use tax_strategy_engine::domain::profile::ClientProfile;
use tax_strategy_engine::ports::{AuditSink, AuditSinkError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn reference_source() -> FileReferenceSource {
    FileReferenceSource::new(fixture("rules.bundle.v1.json"), fixture("CA.statepack.json"))
}

fn engine(sink: Arc<dyn AuditSink>) -> TaxEngine {
    TaxEngine::from_source(&reference_source(), sink).unwrap()
}

fn high_earner() -> ClientProfile {
    let json = std::fs::read_to_string(fixture("profile_high_earner.json")).unwrap();
    ClientProfile::from_json(&json).unwrap()
}

fn single_w2() -> ClientProfile {
    let yaml = std::fs::read_to_string(fixture("profile_single_w2.yaml")).unwrap();
    ClientProfile::from_yaml(&yaml).unwrap()
}

fn fixed_time() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Sink that is always down
struct UnavailableAuditSink;

#[async_trait]
impl AuditSink for UnavailableAuditSink {
    async fn log(&self, _document: &AuditDocument) -> Result<(), AuditSinkError> {
        Err(AuditSinkError::Unavailable("audit store offline".to_string()))
    }
}

// =============================================================================
// Baseline
// =============================================================================

#[test]
fn baseline_for_single_w2_filer() {
    let engine = engine(Arc::new(InMemoryAuditSink::new()));
    let baseline = engine.compute_baseline(&single_w2());

    // CA pack grants 5,540 for SINGLE; the federal 14,600 is larger
    assert!(approx(baseline.deduction, 14_600.0));
    assert!(approx(baseline.taxable_income, 50_000.0));
    assert!(approx(baseline.federal_tax, 6_307.50));
    assert!(approx(baseline.state_tax, 2_500.0));
    assert_eq!(baseline.niit, 0.0);
    assert!(approx(baseline.total_tax, 8_807.50));
}

#[test]
fn baseline_for_high_earner_includes_niit() {
    let engine = engine(Arc::new(InMemoryAuditSink::new()));
    let baseline = engine.compute_baseline(&high_earner());

    // 300k wages + 20k other + 300k gains + 80k K-1, less 37,300 deductions
    assert!(approx(baseline.agi, 662_700.0));
    assert!(approx(baseline.deduction, 29_200.0));
    assert!(approx(baseline.taxable_income, 633_500.0));
    assert!(approx(baseline.federal_tax, 194_727.0));
    assert!(approx(baseline.state_tax, 31_675.0));
    assert!(approx(baseline.niit, 1_900.0));
    assert!(approx(baseline.total_tax, 228_302.0));
}

// =============================================================================
// Optimization
// =============================================================================

#[tokio::test]
async fn high_earner_ranking() {
    let engine = engine(Arc::new(InMemoryAuditSink::new()));
    let report = engine.optimize_at(&high_earner(), fixed_time()).unwrap();

    let ids: Vec<&str> = report
        .strategies
        .iter()
        .map(|r| r.result.strategy_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "TRAD-401K-MAX",
            "TRAD-HSA-FUND",
            "TRAD-BACKDOOR-ROTH",
            "ENT-SCORP-COMP",
            "STATE-PTET-ELECT",
            "CRYPTO-TLH",
            "CRYPTO-STAKING-TIMING",
            "ETF-1256-ELECTION",
            "COMP-RECORDS",
            "CHAR-DAF",
            "EDU-529",
        ]
    );

    let ranks: Vec<u32> = report.strategies.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=11).collect::<Vec<u32>>());
    for pair in report.strategies.windows(2) {
        assert!(pair[0].result.risk_adjusted_benefit >= pair[1].result.risk_adjusted_benefit);
    }

    let tlh = &report.strategies[5].result;
    assert!(approx(tlh.savings, 6_000.0));
    assert_eq!(
        tlh.audit_notes,
        vec!["Documentation required: Form 8949, Exchange lot report".to_string()]
    );

    let daf = &report.strategies[9].result;
    assert!(approx(daf.cash_outlay, 5_000.0));
    assert!(approx(daf.risk_adjusted_benefit, -500.5));
}

#[tokio::test]
async fn single_w2_filer_sees_only_unconditional_and_plan_strategies() {
    let engine = engine(Arc::new(InMemoryAuditSink::new()));
    let report = engine.optimize(&single_w2()).unwrap();

    let ids: Vec<&str> = report
        .strategies
        .iter()
        .map(|r| r.result.strategy_id.as_str())
        .collect();
    assert_eq!(ids, vec!["TRAD-401K-MAX", "COMP-RECORDS", "CHAR-DAF", "EDU-529"]);
    assert!(approx(report.strategies[0].result.savings, 2_500.0));
}

#[tokio::test]
async fn optimize_is_deterministic_for_a_fixed_timestamp() {
    let engine = engine(Arc::new(InMemoryAuditSink::new()));
    let first = engine.optimize_at(&high_earner(), fixed_time()).unwrap();
    let second = engine.optimize_at(&high_earner(), fixed_time()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn calc_id_changes_with_time_but_hashes_do_not() {
    let sink = InMemoryAuditSink::new();
    let engine = engine(Arc::new(sink.clone()));

    let first = engine.optimize(&high_earner()).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = engine.optimize(&high_earner()).unwrap();
    engine.flush_audits().await;

    assert_ne!(first.calc_id, second.calc_id);
    assert_eq!(first.baseline, second.baseline);
    assert_eq!(first.strategies, second.strategies);

    let documents = sink.documents().await;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].inputs_hash, documents[1].inputs_hash);
    assert_eq!(documents[0].result_hash, documents[1].result_hash);
}

// =============================================================================
// Audit
// =============================================================================

#[tokio::test]
async fn audit_document_verifies_against_report() {
    let sink = InMemoryAuditSink::new();
    let engine = engine(Arc::new(sink.clone()));
    let profile = high_earner();

    let report = engine.optimize_at(&profile, fixed_time()).unwrap();
    engine.flush_audits().await;

    let document = sink.find(&report.calc_id).await.unwrap();
    assert_eq!(document.rule_library_version, "2025.1.0");
    assert_eq!(document.timestamp, fixed_time());
    assert!(AuditRecorder::verify(&document, &profile, &report.baseline, &report.strategies)
        .unwrap()
        .is_valid());
}

#[tokio::test]
async fn inputs_hash_is_independent_of_deduction_order() {
    let sink = InMemoryAuditSink::new();
    let engine = engine(Arc::new(sink.clone()));

    let forward = ClientProfile::from_json(
        r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "CA",
            "deductions_paid": {"HSA": 1000, "charity_cash": 200, "state_tax_paid": 3000}}"#,
    )
    .unwrap();
    let reverse = ClientProfile::from_json(
        r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "CA",
            "deductions_paid": {"state_tax_paid": 3000, "charity_cash": 200, "HSA": 1000}}"#,
    )
    .unwrap();

    engine.optimize_at(&forward, fixed_time()).unwrap();
    engine.optimize_at(&reverse, fixed_time()).unwrap();
    engine.flush_audits().await;

    let documents = sink.documents().await;
    assert_eq!(documents[0].inputs_hash, documents[1].inputs_hash);
    assert_eq!(documents[0].calc_id, documents[1].calc_id);
}

#[tokio::test]
async fn unavailable_sink_still_returns_full_payload() {
    let healthy = engine(Arc::new(InMemoryAuditSink::new()));
    let broken = engine(Arc::new(UnavailableAuditSink));

    let expected = healthy.optimize_at(&high_earner(), fixed_time()).unwrap();
    let actual = broken.optimize_at(&high_earner(), fixed_time()).unwrap();
    broken.flush_audits().await;

    assert_eq!(actual, expected);
    assert_eq!(actual.strategies.len(), 11);
}

#[tokio::test]
async fn file_sink_persists_audit_lines() {
    let dir = tempfile::TempDir::new().unwrap();
    let sink = Arc::new(FileAuditSink::open(dir.path().join("audit.jsonl")).await.unwrap());
    let engine = engine(sink.clone());

    let report = engine.optimize_at(&single_w2(), fixed_time()).unwrap();
    engine.flush_audits().await;

    let documents = sink.read_all().await.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].calc_id, report.calc_id);
}

// =============================================================================
// Input Validation
// =============================================================================

#[test]
fn invalid_profiles_are_rejected_before_computation() {
    let bad_status = r#"{"tax_year": 2025, "filing_status": "JOINT", "state": "CA"}"#;
    let bad_state = r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "Cal"}"#;
    let bad_ownership = r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "CA",
        "entities": [{"type": "S_Corp", "name": "X", "ownership_pct": 140}]}"#;
    let bad_shares = r#"{"tax_year": 2025, "filing_status": "SINGLE", "state": "CA",
        "digital_assets": [{"asset": "BTC", "lots": [{"acq_date": "2024-01-01", "shares": -1, "cost_basis": 10}]}]}"#;

    for json in [bad_status, bad_state, bad_ownership, bad_shares] {
        assert!(ClientProfile::from_json(json).is_err(), "accepted: {json}");
    }
}

#[test]
fn bundled_reference_data_loads() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let source = FileReferenceSource::new(
        root.join("rules.bundle.v1.json"),
        root.join("statepacks").join("CA.statepack.json"),
    );
    let engine = TaxEngine::from_source(&source, Arc::new(InMemoryAuditSink::new())).unwrap();

    assert_eq!(engine.rule_library().len(), 11);
    assert!(engine.jurisdiction_pack().ptet_available());
}
