//! Error types for the validation engine

use std::path::PathBuf;

/// Unexpected fault while running a validator.
///
/// Content violations are never reported through this type; they become
/// entries in the result's error list. A `CheckError` is turned into a
/// `validation error` result by the checker.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// File metadata could not be read
    #[error("cannot read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path has no usable file name component
    #[error("path {} has no file name", .0.display())]
    NoFileName(PathBuf),

    /// The validator panicked
    #[error("validator panicked: {0}")]
    Panic(String),
}

/// Failure while extracting text for the optional keyword scan.
///
/// Always downgraded to a warning.
#[derive(Debug, thiserror::Error)]
pub enum ContentScanError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML: {0}")]
    Structure(String),

    #[error("{part} exceeds {limit} bytes uncompressed")]
    TooLarge { part: &'static str, limit: u64 },
}

/// Configuration file could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
