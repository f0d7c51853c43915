//! Checker configuration

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::ConfigError;

/// 100 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 255;
pub const DEFAULT_FORBIDDEN_FILENAME_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Rules applied by every validator.
///
/// Loaded once (usually from a JSON file) and shared read-only by all
/// validators. Unknown keys in the source document are ignored and
/// missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum file size in bytes
    pub min_file_size: u64,
    /// Maximum file size in bytes
    pub max_file_size: u64,
    /// Characters that may not appear in a file name
    pub forbidden_filename_chars: Vec<char>,
    /// Maximum file name length in characters
    pub max_filename_length: usize,
    /// Keywords that must appear in the document text (case-insensitive)
    pub required_keywords: Vec<String>,
    /// Keywords that must not appear in the document text (case-insensitive)
    pub forbidden_keywords: Vec<String>,
    /// Minimum trimmed content length for text files, in characters
    pub min_content_length: usize,
    /// Reserved for structural PDF checks. Accepted but currently performs
    /// no additional validation.
    pub check_pdf_structure: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_file_size: 0,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            forbidden_filename_chars: DEFAULT_FORBIDDEN_FILENAME_CHARS.to_vec(),
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
            required_keywords: Vec::new(),
            forbidden_keywords: Vec::new(),
            min_content_length: 0,
            check_pdf_structure: false,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether any keyword rule is configured
    pub fn has_keyword_rules(&self) -> bool {
        !self.required_keywords.is_empty() || !self.forbidden_keywords.is_empty()
    }
}
