//! Recursive enumeration of regular files under one configured root.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{InventoryError, InventoryResult};

/// Enumerate every non-directory entry reachable under `root`.
///
/// Individual entry failures (permission denied, broken symlink, a file
/// vanishing mid-traversal) are logged and skipped so one inaccessible
/// subtree cannot suppress the rest of the tree. No ordering guarantee on
/// the returned paths.
///
/// # Errors
///
/// Returns an error if the root itself cannot be opened; an unreachable
/// root is a misconfiguration, not a condition to absorb.
pub fn walk_root(root: &Path) -> InventoryResult<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    files.push(entry.path().to_string_lossy().into_owned());
                }
            }
            Err(err) => {
                if err.path() == Some(root) {
                    return Err(InventoryError::root_unreadable(root, err));
                }
                warn!(
                    root = %root.display(),
                    error = %err,
                    "skipping unreadable entry during traversal"
                );
            }
        }
    }

    Ok(files)
}
