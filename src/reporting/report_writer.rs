//! Report writing functionality

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::result::ValidationResult;
use crate::scanner::duplicate_detector::DuplicateInfo;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub results: Vec<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<Vec<DuplicateInfo>>,
    /// Set when the run was stopped before every file was checked
    #[serde(skip_serializing_if = "is_false")]
    pub interrupted: bool,
}

impl CheckReport {
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let valid_files = results.iter().filter(|r| r.is_valid()).count();
        Self {
            total_files: results.len(),
            valid_files,
            invalid_files: results.len() - valid_files,
            results,
            duplicates: None,
            interrupted: false,
        }
    }

    pub fn with_duplicates(mut self, duplicates: Vec<DuplicateInfo>) -> Self {
        self.duplicates = Some(duplicates);
        self
    }

    pub fn mark_interrupted(mut self) -> Self {
        self.interrupted = true;
        self
    }

    /// Exit code for the batch tool: 0 when every file is valid
    pub fn exit_code(&self) -> i32 {
        if self.invalid_files == 0 {
            0
        } else {
            1
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_report(output_path: &Path, report: &CheckReport) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("Failed to write report")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a human-readable report
pub fn write_text_report(output_path: &Path, report: &CheckReport) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file {}", output_path.display()))?;
    let mut file = BufWriter::new(file);

    writeln!(file, "Document Check Report")?;
    writeln!(file, "=====================")?;
    if report.interrupted {
        writeln!(file, "(interrupted, partial results)")?;
    }
    writeln!(file)?;

    writeln!(file, "Summary Statistics:")?;
    writeln!(file, "-------------------")?;
    writeln!(file, "  Total files checked: {}", report.total_files)?;
    writeln!(file, "  Valid files: {}", report.valid_files)?;
    writeln!(file, "  Invalid files: {}", report.invalid_files)?;

    if report.total_files > 0 {
        let valid_pct = (report.valid_files as f64 / report.total_files as f64) * 100.0;
        writeln!(file, "  Success rate: {:.2}%", valid_pct)?;
    }
    writeln!(file)?;

    if report.invalid_files > 0 {
        writeln!(file, "Invalid Files:")?;
        writeln!(file, "--------------")?;
        for result in report.results.iter().filter(|r| !r.is_valid()) {
            writeln!(file, "  {} [{}]", result.file().display(), result.status())?;
            for error in result.errors() {
                writeln!(file, "    - {}", error)?;
            }
        }
        writeln!(file)?;
    }

    let with_warnings: Vec<_> = report.results.iter().filter(|r| !r.warnings().is_empty()).collect();
    if !with_warnings.is_empty() {
        writeln!(file, "Warnings:")?;
        writeln!(file, "---------")?;
        for result in with_warnings {
            writeln!(file, "  {}", result.file().display())?;
            for warning in result.warnings() {
                writeln!(file, "    ! {}", warning)?;
            }
        }
        writeln!(file)?;
    }

    if let Some(dups) = report.duplicates.as_deref().filter(|d| !d.is_empty()) {
        let total_dups: usize = dups.iter().map(|d| d.paths.len() - 1).sum();

        writeln!(file, "Duplicate Files:")?;
        writeln!(file, "----------------")?;
        writeln!(file, "  Total duplicate groups: {}", dups.len())?;
        writeln!(file, "  Total redundant files: {}", total_dups)?;
        writeln!(file)?;

        for (idx, dup) in dups.iter().enumerate() {
            writeln!(file, "  Group {} (Hash: {}...):", idx + 1, dup.hash.get(..16).unwrap_or(&dup.hash))?;
            for path in &dup.paths {
                writeln!(file, "      {}", path.display())?;
            }
            writeln!(file)?;
        }
    }

    writeln!(file, "Valid Files:")?;
    writeln!(file, "------------")?;
    for result in report.results.iter().filter(|r| r.is_valid()) {
        writeln!(file, "  {}", result.file().display())?;
    }

    file.flush()?;
    Ok(())
}
