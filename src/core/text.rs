//! Plain text and markdown checks

use encoding_rs::WINDOWS_1251;
use std::fmt;
use std::fs;
use std::path::Path;

use super::config::ValidationConfig;
use super::result::Findings;
use super::validator::check_keywords;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings tried when decoding a text file, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Windows1251,
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1251 => "windows-1251",
            TextEncoding::Latin1 => "latin-1",
        })
    }
}

/// Decode bytes with the first encoding that accepts them.
///
/// Latin-1 maps every byte to a character, so this currently always
/// returns `Some`.
pub fn decode_text(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    // A leading BOM is not content, so a BOM-only file counts as empty
    let utf8_body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(utf8_body) {
        return Some((text.to_string(), TextEncoding::Utf8));
    }

    // Every byte decodes here, 0x98 included (as U+0098), so Latin-1 is a last resort only
    if let Some(text) = WINDOWS_1251.decode_without_bom_handling_and_without_replacement(bytes) {
        return Some((text.into_owned(), TextEncoding::Windows1251));
    }

    Some((bytes.iter().map(|&b| b as char).collect(), TextEncoding::Latin1))
}

/// Check decoded text: emptiness, keywords and minimum length.
///
/// Only keyword violations are errors; the other checks warn.
pub fn check_text(content: &str, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();
    let trimmed = content.trim();

    if trimmed.is_empty() {
        findings.warn("file is empty or contains only whitespace");
    }

    findings.merge(check_keywords(&content.to_lowercase(), config));

    let length = trimmed.chars().count();
    if length < config.min_content_length {
        findings.warn(format!("file content too short: {} characters", length));
    }

    findings
}

/// Read, decode and check a text file
pub fn check_text_content(path: &Path, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            findings.error(format!("error reading text file: {}", e));
            return findings;
        }
    };

    let Some((content, encoding)) = decode_text(&bytes) else {
        findings.error("could not read file (unknown encoding)");
        return findings;
    };
    tracing::debug!(path = %path.display(), %encoding, "decoded text file");

    findings.merge(check_text(&content, config));
    findings
}
