//! Document file collection

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions picked up when scanning a directory
pub const DOCUMENT_EXTENSIONS: [&str; 5] = ["pdf", "docx", "doc", "txt", "md"];

fn is_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
}

/// Collect document files to check
///
/// # Arguments
/// * `path` - A single file or a directory to scan
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// A file path is returned as-is regardless of its extension. For a
/// directory, all files with a document extension, sorted by path.
pub fn collect_document_files(path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            // Symlinked documents count; `file_type` would not follow them
            if entry.path().is_file() && is_document(entry.path()) {
                files.push(entry.into_path());
            }
        }
    } else {
        let entries =
            fs::read_dir(path).with_context(|| format!("Failed to read directory {}", path.display()))?;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            if entry_path.is_file() && is_document(&entry_path) {
                files.push(entry_path);
            }
        }
    }

    files.sort();
    Ok(files)
}
