//! PDF content checks

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::config::ValidationConfig;
use super::result::Findings;

const PDF_SIGNATURE: &[u8; 4] = b"%PDF";

/// Read up to the first four bytes of a file
fn read_header(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(PDF_SIGNATURE.len());
    file.take(PDF_SIGNATURE.len() as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Check that the file starts with the PDF signature.
///
/// Short files are treated as a signature mismatch, not a read error.
pub fn check_pdf_content(path: &Path, config: &ValidationConfig) -> Findings {
    let mut findings = Findings::new();

    match read_header(path) {
        Ok(header) if header.as_slice() == PDF_SIGNATURE => {}
        Ok(_) => findings.error("not a valid PDF (missing PDF header)"),
        Err(e) => findings.error(format!("error reading PDF file: {}", e)),
    }

    if config.check_pdf_structure {
        // Structural validation is not implemented; the flag is accepted
        // so existing configuration files keep loading.
        tracing::debug!(path = %path.display(), "check_pdf_structure requested, no structural checks available");
    }

    findings
}
