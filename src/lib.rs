//! Document Checker Library
//!
//! Validates PDF, Word package and plain text documents against
//! configurable size, filename and keyword rules.

pub mod core;
pub mod reporting;
pub mod scanner;

pub use crate::core::checker;
pub use crate::reporting::report_writer;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::{
        CheckError, DocumentChecker, Findings, FormatValidator, MediaType, Status,
        ValidationConfig, ValidationResult,
    };
    pub use crate::reporting::report_writer::{write_report, write_text_report, CheckReport};
    pub use crate::scanner::duplicate_detector::{compute_file_hash, find_duplicates, DuplicateInfo};
    pub use crate::scanner::file_scanner::collect_document_files;
}
