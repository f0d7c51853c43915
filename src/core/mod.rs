//! Validation engine: media type resolution, dispatch and format checks

pub mod checker;
pub mod config;
pub mod error;
pub mod generic;
pub mod media_type;
pub mod package;
pub mod pdf;
pub mod result;
pub mod text;
pub mod validator;

pub use checker::DocumentChecker;
pub use config::ValidationConfig;
pub use error::{CheckError, ConfigError, ContentScanError};
pub use media_type::MediaType;
pub use result::{Findings, Status, ValidationResult};
pub use validator::FormatValidator;
