//! Duplicate document detection using SHA-256 hashing

use anyhow::Result;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A group of byte-identical files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateInfo {
    pub hash: String,
    #[serde(serialize_with = "serialize_paths_lossy")]
    pub paths: Vec<PathBuf>,
}

fn serialize_paths_lossy<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(paths.len()))?;
    for path in paths {
        seq.serialize_element(&path.to_string_lossy())?;
    }
    seq.end()
}

/// Compute SHA-256 hash of a file
///
/// # Returns
/// Hex-encoded SHA-256 hash string
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Find groups of identical files.
///
/// Unreadable files are skipped. Paths inside a group keep their input
/// order and groups are ordered by their first path.
pub fn find_duplicates(paths: &[PathBuf]) -> Vec<DuplicateInfo> {
    let mut order: Vec<String> = Vec::new();
    let mut by_hash: HashMap<String, Vec<PathBuf>> = HashMap::new();

    for path in paths {
        match compute_file_hash(path) {
            Ok(hash) => {
                let group = by_hash.entry(hash.clone()).or_default();
                if group.is_empty() {
                    order.push(hash);
                }
                group.push(path.clone());
            }
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }

    order
        .into_iter()
        .filter_map(|hash| {
            let paths = by_hash.remove(&hash)?;
            (paths.len() > 1).then_some(DuplicateInfo { hash, paths })
        })
        .collect()
}
