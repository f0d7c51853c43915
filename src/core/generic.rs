//! Checks shared by every format validator

use std::fs;
use std::path::Path;

use super::config::ValidationConfig;
use super::error::CheckError;
use super::result::Findings;

/// Check the file size against the configured bounds.
///
/// Both bounds are checked independently.
pub fn check_size(path: &Path, config: &ValidationConfig) -> Result<Findings, CheckError> {
    let size = fs::metadata(path)
        .map_err(|source| CheckError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut findings = Findings::new();
    if size < config.min_file_size {
        findings.error(format!(
            "file too small: {} bytes, minimum {}",
            size, config.min_file_size
        ));
    }
    if size > config.max_file_size {
        findings.error(format!(
            "file too large: {} bytes, maximum {}",
            size, config.max_file_size
        ));
    }
    Ok(findings)
}

/// Check a file name for forbidden characters and excessive length.
///
/// Reports each distinct forbidden character once, in configured order.
pub fn check_filename(filename: &str, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();
    let mut reported: Vec<char> = Vec::new();

    for &ch in &config.forbidden_filename_chars {
        if reported.contains(&ch) {
            continue;
        }
        if filename.contains(ch) {
            findings.error(format!("filename contains forbidden character: {}", ch));
            reported.push(ch);
        }
    }

    let length = filename.chars().count();
    if length > config.max_filename_length {
        findings.error(format!(
            "filename too long: {} characters, maximum {}",
            length, config.max_filename_length
        ));
    }

    findings
}

/// Run the size and filename checks, in that order
pub fn run_generic_checks(path: &Path, config: &ValidationConfig) -> Result<Findings, CheckError> {
    let filename = path
        .file_name()
        .ok_or_else(|| CheckError::NoFileName(path.to_path_buf()))?
        .to_string_lossy();

    let mut findings = check_size(path, config)?;
    findings.merge(check_filename(&filename, config));
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with_size(size: usize) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&vec![b'a'; size]).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_size_within_bounds() {
        let temp_file = file_with_size(10);
        let findings = check_size(temp_file.path(), &ValidationConfig::default()).unwrap();
        assert!(!findings.has_errors());
    }

    #[test]
    fn test_size_too_small() {
        let temp_file = file_with_size(10);
        let config = ValidationConfig {
            min_file_size: 100,
            ..Default::default()
        };
        let findings = check_size(temp_file.path(), &config).unwrap();
        assert_eq!(findings.errors, vec!["file too small: 10 bytes, minimum 100"]);
    }

    #[test]
    fn test_size_too_large() {
        let temp_file = file_with_size(10);
        let config = ValidationConfig {
            max_file_size: 5,
            ..Default::default()
        };
        let findings = check_size(temp_file.path(), &config).unwrap();
        assert_eq!(findings.errors, vec!["file too large: 10 bytes, maximum 5"]);
    }

    #[test]
    fn test_inverted_bounds_report_both() {
        let temp_file = file_with_size(10);
        let config = ValidationConfig {
            min_file_size: 20,
            max_file_size: 5,
            ..Default::default()
        };
        let findings = check_size(temp_file.path(), &config).unwrap();
        assert_eq!(findings.errors.len(), 2);
    }

    #[test]
    fn test_size_of_missing_file_is_a_fault() {
        let result = check_size(Path::new("/definitely/not/here.txt"), &ValidationConfig::default());
        assert!(matches!(result, Err(CheckError::Metadata { .. })));
    }

    #[test]
    fn test_filename_forbidden_char() {
        let findings = check_filename("report:final.txt", &ValidationConfig::default());
        assert_eq!(findings.errors, vec!["filename contains forbidden character: :"]);
    }

    #[test]
    fn test_filename_char_reported_once_per_distinct_char() {
        let config = ValidationConfig {
            forbidden_filename_chars: vec!['#', '#', '?'],
            ..Default::default()
        };
        let findings = check_filename("a#b#c?.txt", &config);
        assert_eq!(
            findings.errors,
            vec![
                "filename contains forbidden character: #",
                "filename contains forbidden character: ?",
            ]
        );
    }

    #[test]
    fn test_filename_length_counts_characters() {
        let config = ValidationConfig {
            max_filename_length: 8,
            ..Default::default()
        };
        // 8 characters, 13 bytes
        assert!(!check_filename("отчёт.md", &config).has_errors());

        let findings = check_filename("long_name.txt", &config);
        assert_eq!(findings.errors, vec!["filename too long: 13 characters, maximum 8"]);
    }

    #[test]
    fn test_generic_checks_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad|name.txt");
        std::fs::write(&path, b"0123456789").unwrap();
        let config = ValidationConfig {
            max_file_size: 1,
            ..Default::default()
        };

        let findings = run_generic_checks(&path, &config).unwrap();
        assert_eq!(findings.errors.len(), 2);
        assert!(findings.errors[0].starts_with("file too large"));
        assert!(findings.errors[1].contains('|'));
    }
}
