//! File scanning and collection functionality

pub mod duplicate_detector;
pub mod file_scanner;

pub use duplicate_detector::{compute_file_hash, find_duplicates, DuplicateInfo};
pub use file_scanner::{collect_document_files, DOCUMENT_EXTENSIONS};
