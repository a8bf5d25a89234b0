//! Reference data adapters.

mod file_reference_source;

pub use file_reference_source::FileReferenceSource;
