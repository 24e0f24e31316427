//! Progress reporting seam between the collectors and the terminal.
//!
//! Collectors report through these traits without knowing whether anything
//! renders them. Implementations must tolerate concurrent calls from
//! multiple producer tasks; serialisation happens at the sink, not at the
//! producers.

/// Factory for progress gauges plus a channel for one-off status lines.
pub trait ProgressSink: Send + Sync {
    /// Open a gauge with a label and an expected number of ticks.
    fn gauge(&self, label: &str, total: u64) -> Box<dyn ProgressGauge>;

    /// Emit a one-off status line outside any gauge.
    fn note(&self, text: &str);
}

/// One live progress gauge owned by a single producer task.
pub trait ProgressGauge: Send + Sync {
    /// Advance the gauge by `delta` ticks.
    fn advance(&self, delta: u64);

    /// Mark the gauge complete.
    fn finish(&self);
}

/// Sink that discards all reports; used by tests and non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn gauge(&self, _label: &str, _total: u64) -> Box<dyn ProgressGauge> {
        Box::new(SilentGauge)
    }

    fn note(&self, _text: &str) {}
}

struct SilentGauge;

impl ProgressGauge for SilentGauge {
    fn advance(&self, _delta: u64) {}

    fn finish(&self) {}
}
