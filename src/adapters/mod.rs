//! Adapters - Implementations of port interfaces.
//!
//! - `audit` - Audit sinks (no-op, in-memory, JSON-lines file)
//! - `reference` - Reference data loaded from JSON or YAML files

pub mod audit;
pub mod reference;

pub use audit::{FileAuditSink, InMemoryAuditSink, NoopAuditSink};
pub use reference::FileReferenceSource;
