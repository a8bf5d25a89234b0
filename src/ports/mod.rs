//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuditSink` - Destination for audit documents
//! - `ReferenceDataSource` - Rule library and jurisdiction pack loading

mod audit_sink;
mod reference_data;

pub use audit_sink::{AuditSink, AuditSinkError};
pub use reference_data::{ReferenceDataError, ReferenceDataSource};
