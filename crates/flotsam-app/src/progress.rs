//! Terminal rendering of collection progress.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use flotsam_inventory::{ProgressGauge, ProgressSink, SilentProgress};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{msg:24} {bar:40.cyan/blue} {pos}/{len}";

/// Pick a progress sink for the run: silent when requested or when the
/// interactive output stream is not a terminal.
pub(crate) fn sink_for(quiet: bool) -> Arc<dyn ProgressSink> {
    if quiet || !io::stderr().is_terminal() {
        Arc::new(SilentProgress)
    } else {
        Arc::new(TermProgress::new())
    }
}

/// Sink that renders one stacked bar per concurrent producer.
pub(crate) struct TermProgress {
    multi: MultiProgress,
}

impl TermProgress {
    pub(crate) fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
        }
    }
}

impl ProgressSink for TermProgress {
    fn gauge(&self, label: &str, total: u64) -> Box<dyn ProgressGauge> {
        let bar = self.multi.add(ProgressBar::new(total));
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(label.to_string());
        Box::new(TermGauge { bar })
    }

    fn note(&self, text: &str) {
        // Rendering failures on a closing terminal are not worth surfacing.
        let _ = self.multi.println(text);
    }
}

struct TermGauge {
    bar: ProgressBar,
}

impl ProgressGauge for TermGauge {
    fn advance(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
