//! Set difference between the local and remote inventories.

use std::collections::HashSet;

use tracing::debug;

use crate::normalize::fold_key;

/// Return every local path with no case-insensitive counterpart in the
/// remote inventory, preserving the local inventory's spelling and order.
///
/// Matching is exact on the full normalized path after case folding; no
/// prefix or glob semantics. Duplicate local entries that are orphaned
/// appear once per occurrence.
#[must_use]
pub fn reconcile(local: &[String], remote: &[String]) -> Vec<String> {
    let managed: HashSet<String> = remote.iter().map(|path| fold_key(path)).collect();

    let orphans: Vec<String> = local
        .iter()
        .filter(|path| !managed.contains(&fold_key(path)))
        .cloned()
        .collect();

    debug!(
        local = local.len(),
        remote = remote.len(),
        orphans = orphans.len(),
        "reconciliation complete"
    );
    orphans
}
