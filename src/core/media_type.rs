//! Media type resolution by file extension

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_MARKDOWN: &str = "text/markdown";

lazy_static::lazy_static! {
    // Common extension table, consulted first. Includes types the
    // checker has no validator for so they are reported by name.
    static ref STANDARD_TYPES: HashMap<&'static str, &'static str> = HashMap::from([
        ("pdf", MIME_PDF),
        ("doc", MIME_DOC),
        ("dot", MIME_DOC),
        ("txt", MIME_TEXT),
        ("text", MIME_TEXT),
        ("log", MIME_TEXT),
        ("csv", "text/csv"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("xml", "text/xml"),
        ("json", "application/json"),
        ("rtf", "application/rtf"),
        ("zip", "application/zip"),
        ("xls", "application/vnd.ms-excel"),
        ("ppt", "application/vnd.ms-powerpoint"),
        ("odt", "application/vnd.oasis.opendocument.text"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
    ]);

    // Fallback for extensions the standard table does not know
    static ref FALLBACK_TYPES: HashMap<&'static str, &'static str> = HashMap::from([
        ("pdf", MIME_PDF),
        ("docx", MIME_DOCX),
        ("doc", MIME_DOC),
        ("txt", MIME_TEXT),
        ("md", MIME_MARKDOWN),
    ]);
}

/// Document formats the checker knows how to validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    WordXmlPackage,
    WordLegacyBinary,
    PlainText,
    Markdown,
}

impl MediaType {
    pub const ALL: [MediaType; 5] = [
        MediaType::Pdf,
        MediaType::WordXmlPackage,
        MediaType::WordLegacyBinary,
        MediaType::PlainText,
        MediaType::Markdown,
    ];

    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Pdf => MIME_PDF,
            MediaType::WordXmlPackage => MIME_DOCX,
            MediaType::WordLegacyBinary => MIME_DOC,
            MediaType::PlainText => MIME_TEXT,
            MediaType::Markdown => MIME_MARKDOWN,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|media_type| media_type.mime() == mime)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Guess the MIME type of a path from its extension.
///
/// The standard table wins; the fallback table is only consulted when
/// the standard table has no entry. Matching is case-insensitive.
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    STANDARD_TYPES
        .get(ext.as_str())
        .or_else(|| FALLBACK_TYPES.get(ext.as_str()))
        .copied()
}

/// Resolve a path to a supported media type
pub fn resolve(path: &Path) -> Option<MediaType> {
    guess_mime(path).and_then(MediaType::from_mime)
}
