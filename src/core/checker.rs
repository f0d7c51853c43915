//! Document checker: resolves a file's media type and dispatches to the
//! matching validator

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use super::config::ValidationConfig;
use super::error::CheckError;
use super::media_type::{self, MediaType};
use super::result::{Status, ValidationResult};
use super::validator::FormatValidator;

/// Entry point of the validation engine.
///
/// The validator registry is built once from the configuration and never
/// changes afterwards, so a checker can be shared between threads.
#[derive(Debug, Clone)]
pub struct DocumentChecker {
    config: Arc<ValidationConfig>,
    validators: HashMap<MediaType, FormatValidator>,
}

impl Default for DocumentChecker {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl DocumentChecker {
    pub fn new(config: ValidationConfig) -> Self {
        let config = Arc::new(config);
        let validators = MediaType::ALL
            .into_iter()
            .map(|media_type| (media_type, validator_for(media_type, &config)))
            .collect();

        Self { config, validators }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validator registered for a media type
    pub fn validator(&self, media_type: MediaType) -> Option<&FormatValidator> {
        self.validators.get(&media_type)
    }

    /// Check a single document.
    ///
    /// Never fails: missing files, unsupported formats and validator
    /// faults are all reported through the returned result.
    pub fn check_document(&self, path: &Path) -> ValidationResult {
        if !path.exists() {
            return ValidationResult::failure(
                path,
                Status::FileNotFound,
                format!("file {} does not exist", path.display()),
            );
        }

        let mime = media_type::guess_mime(path);
        let validator = mime
            .and_then(MediaType::from_mime)
            .and_then(|media_type| self.validators.get(&media_type));

        let Some(validator) = validator else {
            tracing::debug!(path = %path.display(), mime = ?mime, "no validator for format");
            return ValidationResult::failure(
                path,
                Status::UnsupportedFormat,
                format!("format {} is not supported", mime.unwrap_or("unknown")),
            );
        };

        tracing::debug!(path = %path.display(), validator = validator.name(), "validating");

        run_isolated(validator, path).unwrap_or_else(|e| fault_result(path, &e))
    }
}

fn fault_result(path: &Path, error: &CheckError) -> ValidationResult {
    tracing::warn!(path = %path.display(), %error, "validator failed");
    ValidationResult::failure(path, Status::ValidationError, format!("error: {}", error))
}

fn validator_for(media_type: MediaType, config: &Arc<ValidationConfig>) -> FormatValidator {
    match media_type {
        MediaType::Pdf => FormatValidator::Pdf(Arc::clone(config)),
        MediaType::WordXmlPackage | MediaType::WordLegacyBinary => {
            FormatValidator::Package(Arc::clone(config))
        }
        MediaType::PlainText | MediaType::Markdown => FormatValidator::Text(Arc::clone(config)),
    }
}

/// Run a validator, converting a panic into a `CheckError`
fn run_isolated(validator: &FormatValidator, path: &Path) -> Result<ValidationResult, CheckError> {
    match panic::catch_unwind(AssertUnwindSafe(|| validator.validate(path))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(CheckError::Panic(message))
        }
    }
}
