//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the tax strategy engine.

mod errors;
mod filing_status;
mod percentage;
mod state_code;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use filing_status::FilingStatus;
pub use percentage::Percentage;
pub use state_code::StateCode;
pub use timestamp::Timestamp;
