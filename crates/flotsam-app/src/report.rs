//! Orphan report serialisation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Write the orphan list to `path`, one path per line, newline-terminated.
///
/// The report is only created once reconciliation has succeeded; callers
/// must not invoke this on a failed run, so a stale report from a previous
/// run is never clobbered by a partial one.
///
/// # Errors
///
/// Returns an error when the report file cannot be created or written.
pub(crate) fn write_report(path: &Path, orphans: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for orphan in orphans {
        writeln!(writer, "{orphan}")
            .with_context(|| format!("writing report file {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing report file {}", path.display()))?;
    Ok(())
}
