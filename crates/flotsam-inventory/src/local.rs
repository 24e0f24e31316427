//! Fan-out/fan-in collection of the local filesystem inventory.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::progress::ProgressSink;
use crate::walk::walk_root;

/// Walk every configured root concurrently and merge the results into one
/// unordered collection of local file paths.
///
/// One blocking walker task runs per root; each sends exactly one result
/// through a channel sized to the number of roots and then drops its sender,
/// so the receive loop terminates once every root has reported. One progress
/// tick is recorded per completed root plus a final tick when aggregation
/// finishes.
///
/// # Errors
///
/// Returns the first fatal walker error observed, and a task error when a
/// walker dies without reporting. An unreadable root aborts the whole
/// collection; no partial local inventory is returned.
pub async fn collect_local(
    roots: Vec<String>,
    progress: Arc<dyn ProgressSink>,
) -> InventoryResult<Vec<String>> {
    collect_with(roots, progress, walk_root).await
}

async fn collect_with<F>(
    roots: Vec<String>,
    progress: Arc<dyn ProgressSink>,
    walker: F,
) -> InventoryResult<Vec<String>>
where
    F: Fn(&Path) -> InventoryResult<Vec<String>> + Clone + Send + Sync + 'static,
{
    let total = roots.len() as u64;
    let gauge = progress.gauge("local filesystem", total + 1);

    let (tx, mut rx) = mpsc::channel(roots.len().max(1));
    let mut walkers = Vec::with_capacity(roots.len());
    for root in roots {
        let tx = tx.clone();
        let walker = walker.clone();
        walkers.push(tokio::task::spawn_blocking(move || {
            let result = walker(Path::new(&root));
            // The receiver only disappears when the run is already failing.
            let _ = tx.blocking_send(result);
        }));
    }
    drop(tx);

    let mut files = Vec::new();
    while let Some(result) = rx.recv().await {
        files.extend(result?);
        gauge.advance(1);
    }
    // The loop above ends once every sender is gone; a walker that died
    // without sending surfaces here instead of shrinking the inventory.
    for walker in walkers {
        walker
            .await
            .map_err(|source| InventoryError::task("local walker", source))?;
    }
    gauge.advance(1);
    gauge.finish();

    debug!(count = files.len(), "local inventory collected");
    progress.note(&format!("local files: {}", files.len()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::progress::{ProgressGauge, SilentProgress};
    use std::error::Error;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn Error>>;

    fn silent() -> Arc<dyn ProgressSink> {
        Arc::new(SilentProgress)
    }

    #[derive(Default)]
    struct RecordingProgress {
        notes: Mutex<Vec<String>>,
    }

    impl ProgressSink for RecordingProgress {
        fn gauge(&self, _label: &str, _total: u64) -> Box<dyn ProgressGauge> {
            struct NoopGauge;
            impl ProgressGauge for NoopGauge {
                fn advance(&self, _delta: u64) {}
                fn finish(&self) {}
            }
            Box::new(NoopGauge)
        }

        fn note(&self, text: &str) {
            self.notes.lock().expect("notes lock").push(text.to_string());
        }
    }

    #[tokio::test]
    async fn collect_local_merges_all_roots() -> TestResult {
        let temp = TempDir::new()?;
        let movies = temp.path().join("movies");
        let shows = temp.path().join("shows");
        fs::create_dir_all(&movies)?;
        fs::create_dir_all(shows.join("season 1"))?;
        fs::write(movies.join("a.mkv"), b"video")?;
        fs::write(shows.join("season 1/b.mkv"), b"video")?;

        let roots = vec![
            movies.to_string_lossy().into_owned(),
            shows.to_string_lossy().into_owned(),
        ];
        let mut files = collect_local(roots, silent()).await?;
        files.sort();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.mkv"));
        assert!(files[1].ends_with("b.mkv"));
        Ok(())
    }

    #[tokio::test]
    async fn collect_local_with_no_roots_is_empty() -> TestResult {
        let files = collect_local(Vec::new(), silent()).await?;
        assert!(files.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn collect_local_unreadable_root_is_fatal() -> TestResult {
        let temp = TempDir::new()?;
        let good = temp.path().join("good");
        fs::create_dir_all(&good)?;
        fs::write(good.join("kept.mkv"), b"video")?;

        let roots = vec![
            good.to_string_lossy().into_owned(),
            temp.path()
                .join("does-not-exist")
                .to_string_lossy()
                .into_owned(),
        ];
        let err = collect_local(roots, silent())
            .await
            .expect_err("unreadable root should abort the collection");
        assert!(matches!(err, InventoryError::RootUnreadable { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn collect_local_reports_the_merged_file_count() -> TestResult {
        let temp = TempDir::new()?;
        let movies = temp.path().join("movies");
        fs::create_dir_all(&movies)?;
        fs::write(movies.join("a.mkv"), b"video")?;
        fs::write(movies.join("b.mkv"), b"video")?;

        let recording = Arc::new(RecordingProgress::default());
        let sink: Arc<dyn ProgressSink> = Arc::clone(&recording) as Arc<dyn ProgressSink>;
        collect_local(vec![movies.to_string_lossy().into_owned()], sink).await?;

        let notes = recording.notes.lock().expect("notes lock");
        assert_eq!(notes.as_slice(), ["local files: 2"]);
        Ok(())
    }

    #[tokio::test]
    async fn a_walker_dying_without_reporting_is_fatal() -> TestResult {
        let temp = TempDir::new()?;
        let good = temp.path().join("good");
        let doomed = temp.path().join("doomed");
        fs::create_dir_all(&good)?;
        fs::create_dir_all(&doomed)?;
        fs::write(good.join("kept.mkv"), b"video")?;

        let roots = vec![
            good.to_string_lossy().into_owned(),
            doomed.to_string_lossy().into_owned(),
        ];
        let err = collect_with(roots, silent(), move |root| {
            assert!(!root.ends_with("doomed"), "walker died mid-traversal");
            walk_root(root)
        })
        .await
        .expect_err("a lost walker must not shrink the inventory silently");
        assert!(matches!(
            err,
            InventoryError::Task {
                operation: "local walker",
                ..
            }
        ));
        Ok(())
    }
}
