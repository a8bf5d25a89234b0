//! Audit sink adapters.

mod file_audit_sink;
mod in_memory_audit_sink;
mod noop_audit_sink;

pub use file_audit_sink::FileAuditSink;
pub use in_memory_audit_sink::InMemoryAuditSink;
pub use noop_audit_sink::NoopAuditSink;
