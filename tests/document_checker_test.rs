//! Integration tests for the document checker
//!
//! Exercises each format end to end through `check_document`.

use doc_checker_rs::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::ZipWriter;

fn create_named_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    path
}

/// Helper to build a Word package with the given entries
fn create_package(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    for (entry, content) in entries {
        writer.start_file(*entry, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

fn document_xml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>",
        text
    )
}

fn checker_with(config_json: &str) -> DocumentChecker {
    DocumentChecker::new(ValidationConfig::from_json(config_json).unwrap())
}

#[test]
fn test_pdf_with_signature_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "report.pdf", b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF");

    let result = DocumentChecker::default().check_document(&path);
    assert!(result.is_valid());
    assert_eq!(result.status(), Status::Valid);
    assert!(result.errors().is_empty());
    assert!(result.warnings().is_empty());
}

#[test]
fn test_pdf_with_other_signature_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "report.pdf", b"\x89PNG\r\n");

    let result = DocumentChecker::default().check_document(&path);
    assert!(!result.is_valid());
    assert_eq!(result.status(), Status::Invalid);
    assert!(result.errors().contains(&"not a valid PDF (missing PDF header)".to_string()));
}

#[test]
fn test_uppercase_extension_is_dispatched() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "SCAN.PDF", b"%PDF-1.3");
    assert!(DocumentChecker::default().check_document(&path).is_valid());
}

#[test]
fn test_docx_that_is_not_a_zip() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "letter.docx", b"Just some text, not a package");

    let result = DocumentChecker::default().check_document(&path);
    assert!(!result.is_valid());
    assert!(result.errors().iter().any(|e| e.contains("not a zip archive")));
}

#[test]
fn test_zip_without_document_part() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_package(
        temp_dir.path(),
        "letter.docx",
        &[("[Content_Types].xml", "<Types/>"), ("word/styles.xml", "<w:styles/>")],
    );

    let result = DocumentChecker::default().check_document(&path);
    assert!(!result.is_valid());
    assert!(result.errors().iter().any(|e| e.contains("missing word/document.xml")));
}

#[test]
fn test_package_with_required_keyword() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_package(
        temp_dir.path(),
        "letter.docx",
        &[("word/document.xml", document_xml("CSRM документ").as_str())],
    );

    let result = checker_with(r#"{"required_keywords": ["CSRM"]}"#).check_document(&path);
    assert!(result.is_valid(), "{:?}", result.errors());
    assert!(result.errors().is_empty());
}

#[test]
fn test_legacy_doc_alias_uses_package_rules() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_package(
        temp_dir.path(),
        "old.doc",
        &[("word/document.xml", document_xml("confidential").as_str())],
    );

    let result = checker_with(r#"{"forbidden_keywords": ["Confidential"]}"#).check_document(&path);
    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["document contains forbidden keyword: Confidential"]);
}

#[test]
fn test_package_with_malformed_document_only_warns() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_package(
        temp_dir.path(),
        "broken.docx",
        &[("word/document.xml", "<w:document><w:body><w:p>")],
    );

    let result = checker_with(r#"{"required_keywords": ["CSRM"]}"#).check_document(&path);
    assert!(result.is_valid());
    assert_eq!(result.warnings().len(), 1);
    assert!(result.warnings()[0].starts_with("could not verify document content"));
}

#[test]
fn test_whitespace_only_text_is_valid_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "blank.txt", b"  ");

    let result = DocumentChecker::default().check_document(&path);
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert!(result
        .warnings()
        .contains(&"file is empty or contains only whitespace".to_string()));
}

#[test]
fn test_text_keyword_enforcement() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "greeting.txt", b"hello world");

    let forbidden = checker_with(r#"{"forbidden_keywords": ["world"]}"#).check_document(&path);
    assert!(!forbidden.is_valid());
    assert!(forbidden.errors().iter().any(|e| e.contains("world")));

    let required = checker_with(r#"{"required_keywords": ["xyz"]}"#).check_document(&path);
    assert!(!required.is_valid());
    assert!(required.errors().iter().any(|e| e.contains("xyz")));
}

#[test]
fn test_windows_1251_text_keywords() {
    let temp_dir = TempDir::new().unwrap();
    // "Документ" in Windows-1251
    let bytes = [0xC4, 0xEE, 0xEA, 0xF3, 0xEC, 0xE5, 0xED, 0xF2];
    let path = create_named_file(temp_dir.path(), "cp1251.txt", &bytes);

    let result = checker_with(r#"{"required_keywords": ["документ"]}"#).check_document(&path);
    assert!(result.is_valid(), "{:?}", result.errors());
}

#[test]
fn test_short_markdown_warns_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "stub.md", b"# Hi");

    let result = checker_with(r#"{"min_content_length": 100}"#).check_document(&path);
    assert!(result.is_valid());
    assert_eq!(result.warnings(), ["file content too short: 4 characters"]);
}

#[test]
fn test_forbidden_filename_character() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "report:final.txt", b"perfectly fine content");

    let result = DocumentChecker::default().check_document(&path);
    assert!(!result.is_valid());
    assert!(result.errors().iter().any(|e| e.contains(':')));
}

#[test]
fn test_size_bounds() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "tiny.pdf", b"%PDF");

    let result = checker_with(r#"{"min_file_size": 1024}"#).check_document(&path);
    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["file too small: 4 bytes, minimum 1024"]);
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_named_file(temp_dir.path(), "table.csv", b"a,b\n1,2\n");

    let result = DocumentChecker::default().check_document(&path);
    assert!(!result.is_valid());
    assert_eq!(result.status(), Status::UnsupportedFormat);
    assert_eq!(result.errors(), ["format text/csv is not supported"]);
}

#[test]
fn test_check_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let checker = checker_with(r#"{"required_keywords": ["missing"], "min_content_length": 50}"#);
    let paths = [
        create_named_file(temp_dir.path(), "a.txt", b"some text"),
        create_named_file(temp_dir.path(), "b.pdf", b"nope"),
        create_package(temp_dir.path(), "c.docx", &[("word/document.xml", document_xml("x").as_str())]),
    ];

    for path in &paths {
        let first = checker.check_document(path);
        let second = checker.check_document(path);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
