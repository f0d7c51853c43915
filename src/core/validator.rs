//! Format validators

use std::path::Path;
use std::sync::Arc;

use super::config::ValidationConfig;
use super::error::CheckError;
use super::generic::run_generic_checks;
use super::package::check_package_content;
use super::pdf::check_pdf_content;
use super::result::{Findings, ValidationResult};
use super::text::check_text_content;

/// Validator for one family of document formats.
///
/// Every variant runs the generic size and filename checks first and
/// then its own content checks. Errors are reported in that order.
#[derive(Debug, Clone)]
pub enum FormatValidator {
    /// PDF signature check
    Pdf(Arc<ValidationConfig>),
    /// Word XML package (and the legacy binary alias)
    Package(Arc<ValidationConfig>),
    /// Plain text and markdown
    Text(Arc<ValidationConfig>),
}

impl FormatValidator {
    pub fn name(&self) -> &'static str {
        match self {
            FormatValidator::Pdf(_) => "pdf",
            FormatValidator::Package(_) => "package",
            FormatValidator::Text(_) => "text",
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        match self {
            FormatValidator::Pdf(config)
            | FormatValidator::Package(config)
            | FormatValidator::Text(config) => config,
        }
    }

    /// Validate a single file.
    ///
    /// Content violations are returned inside the result. `Err` is
    /// reserved for faults that prevent the checks from running at all.
    pub fn validate(&self, path: &Path) -> Result<ValidationResult, CheckError> {
        let config = self.config();
        let mut findings = run_generic_checks(path, config)?;

        let content = match self {
            FormatValidator::Pdf(_) => check_pdf_content(path, config),
            FormatValidator::Package(_) => check_package_content(path, config),
            FormatValidator::Text(_) => check_text_content(path, config),
        };
        findings.merge(content);

        Ok(ValidationResult::from_findings(path, findings))
    }
}

/// Check lowercased document text against the configured keyword lists.
///
/// Messages quote the keyword as configured.
pub fn check_keywords(content_lower: &str, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();

    for keyword in &config.required_keywords {
        if !content_lower.contains(&keyword.to_lowercase()) {
            findings.error(format!("document missing required keyword: {}", keyword));
        }
    }

    for keyword in &config.forbidden_keywords {
        if content_lower.contains(&keyword.to_lowercase()) {
            findings.error(format!("document contains forbidden keyword: {}", keyword));
        }
    }

    findings
}
