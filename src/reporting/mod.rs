//! Batch report generation

pub mod report_writer;

pub use report_writer::{write_report, write_text_report, CheckReport};
