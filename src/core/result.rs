//! Per-file validation outcome

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome label attached to every result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "invalid")]
    Invalid,
    #[serde(rename = "file not found")]
    FileNotFound,
    #[serde(rename = "unsupported format")]
    UnsupportedFormat,
    #[serde(rename = "validation error")]
    ValidationError,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Invalid => "invalid",
            Status::FileNotFound => "file not found",
            Status::UnsupportedFormat => "unsupported format",
            Status::ValidationError => "validation error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors and warnings collected by a sequence of checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another set of findings, preserving order
    pub fn merge(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Result of checking a single file.
///
/// `valid` is always derived from `errors`, so a result can never be
/// valid while carrying errors. Warnings do not affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(serialize_with = "serialize_path_lossy")]
    file: PathBuf,
    valid: bool,
    status: Status,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// Build a result from completed checks. Status is `valid` or `invalid`.
    pub fn from_findings(file: &Path, findings: Findings) -> Self {
        let valid = findings.errors.is_empty();
        Self {
            file: file.to_path_buf(),
            valid,
            status: if valid { Status::Valid } else { Status::Invalid },
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }

    /// Build an invalid result carrying a single error.
    ///
    /// `status` must not be `Status::Valid`.
    pub(crate) fn failure(file: &Path, status: Status, error: impl Into<String>) -> Self {
        debug_assert!(status != Status::Valid, "a failure cannot be valid");
        Self {
            file: file.to_path_buf(),
            valid: false,
            status,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Serialize a path as a string, replacing non-UTF-8 bytes
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
