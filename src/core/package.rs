//! Word-processor package checks (zip container + document part)

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

use super::config::ValidationConfig;
use super::error::ContentScanError;
use super::result::Findings;
use super::validator::check_keywords;

/// Main document part every Word package must contain
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Open the file as a zip archive, mapping failures to error messages
fn open_archive(path: &Path) -> Result<ZipArchive<File>, String> {
    let file = File::open(path).map_err(|e| format!("error reading package file: {}", e))?;
    match ZipArchive::new(file) {
        Ok(archive) => Ok(archive),
        Err(ZipError::InvalidArchive(_)) => {
            Err("not a valid package (not a zip archive)".to_string())
        }
        Err(e) => Err(format!("error reading package file: {}", e)),
    }
}

/// Concatenate all text and CDATA content of an XML document.
///
/// Rejects mismatched end tags, documents without a root element and
/// documents that end with open elements.
pub fn extract_xml_text(xml: &[u8]) -> Result<String, ContentScanError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => {
                depth += 1;
                saw_root = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) => saw_root = true,
            Event::Text(e) => {
                if depth > 0 {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if depth > 0 {
                    text.push_str(&reader.decoder().decode(&e)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ContentScanError::Structure("no root element".to_string()));
    }
    if depth > 0 {
        return Err(ContentScanError::Structure(format!(
            "unexpected end of document, {} element(s) left open",
            depth
        )));
    }
    Ok(text)
}

/// Read the main document part and extract its text.
///
/// At most `limit` uncompressed bytes are read; the size recorded in the
/// archive is not trusted.
fn extract_document_text(archive: &mut ZipArchive<File>, limit: u64) -> Result<String, ContentScanError> {
    let mut entry = archive.by_name(DOCUMENT_PART)?;
    let mut xml = Vec::new();
    entry.by_ref().take(limit.saturating_add(1)).read_to_end(&mut xml)?;
    if xml.len() as u64 > limit {
        return Err(ContentScanError::TooLarge {
            part: DOCUMENT_PART,
            limit,
        });
    }
    extract_xml_text(&xml)
}

/// Check package integrity and, when keyword rules are configured,
/// the text of the main document part.
///
/// Integrity failures are errors. Failures while scanning the text are
/// downgraded to a single warning.
pub fn check_package_content(path: &Path, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();

    let mut archive = match open_archive(path) {
        Ok(archive) => archive,
        Err(message) => {
            findings.error(message);
            return findings;
        }
    };

    if !archive.file_names().any(|name| name == DOCUMENT_PART) {
        findings.error(format!("package is corrupted: missing {}", DOCUMENT_PART));
        return findings;
    }

    if config.has_keyword_rules() {
        match extract_document_text(&mut archive, config.max_file_size) {
            Ok(text) => findings.merge(check_keywords(&text.to_lowercase(), config)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "keyword scan skipped");
                findings.warn(format!("could not verify document content: {}", e));
            }
        }
    }

    findings
}
