use crate::serialization::WEIGHT_BLOB_SUFFIX;
use std::path::Path;

/// Prefix shared by all transient files the library creates
pub const TRANSIENT_FILE_PREFIX: &str = "weightsmith_";

/// Removes transient library files from `dir`, best effort.
///
/// Scans `dir` for file names starting with [`TRANSIENT_FILE_PREFIX`] and
/// removes every match that does not end in [`WEIGHT_BLOB_SUFFIX`], so
/// persisted weight blobs survive. Directory-read and removal errors are
/// ignored: cleanup is not part of any correctness contract, and the scan
/// only ever touches the directory it is explicitly given.
///
/// # Parameters
///
/// * `dir` - Directory to scan for transient files
pub fn remove_transient_files(dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(TRANSIENT_FILE_PREFIX) {
            continue;
        }
        if name.ends_with(WEIGHT_BLOB_SUFFIX) {
            continue;
        }
        let _ = std::fs::remove_file(entry.path());
    }
}
