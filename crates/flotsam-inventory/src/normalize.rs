//! Path normalisation: separator rewriting and case-folded comparison keys.
//!
//! Remote endpoints report relative paths using their own separator
//! convention; both sides of the rewrite are explicit parameters so the
//! executing environment's convention is never assumed for source data.

/// Separator used by paths on the operating environment running the
/// reconciliation.
pub const NATIVE_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Rewrite every occurrence of `source` into `target`. Pure and total; a
/// path containing neither separator is returned unchanged.
#[must_use]
pub fn normalize_separators(path: &str, source: char, target: char) -> String {
    if source == target {
        return path.to_string();
    }
    path.replace(source, &target.to_string())
}

/// Case-folded comparison key for a path. Used only for matching; output
/// always preserves the original spelling.
#[must_use]
pub fn fold_key(path: &str) -> String {
    path.to_lowercase()
}
