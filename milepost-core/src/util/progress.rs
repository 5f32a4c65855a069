use kdam::{Bar, BarExt};

/// byte positions between terminal redraws; the line loops tick on
/// every line, so redraw work has to be amortized over megabytes of
/// input
const STRIDE: usize = 8 << 20;

/// set MILEPOST_PROGRESS=false to suppress the bars regardless of the
/// log level
const MILEPOST_PROGRESS: &str = "MILEPOST_PROGRESS";

/// Byte-positioned progress reporting for one DIMACS file scan.
///
/// A bar is rendered only when info logging is enabled and
/// `MILEPOST_PROGRESS` is not set to `false`; otherwise every call is a
/// no-op. [`ScanProgress::tick`] takes the scanner's cursor position and
/// redraws at most once per stride, so the per-line cost is a single
/// comparison.
pub struct ScanProgress {
    bar: Option<Bar>,
    next_tick: usize,
}

impl ScanProgress {
    /// begins reporting a scan over `total` input bytes
    pub fn start(desc: String, total: usize) -> ScanProgress {
        let suppressed = std::env::var(MILEPOST_PROGRESS)
            .ok()
            .map(|v| v.to_lowercase() == "false")
            .unwrap_or_default();
        let bar = if suppressed || !log::log_enabled!(log::Level::Info) {
            None
        } else {
            Bar::builder().total(total).desc(desc).build().ok()
        };
        ScanProgress {
            bar,
            next_tick: STRIDE,
        }
    }

    /// records the scan cursor, redrawing when it has crossed the next
    /// stride boundary
    pub fn tick(&mut self, pos: usize) {
        if pos < self.next_tick {
            return;
        }
        if let Some(bar) = self.bar.as_mut() {
            let _ = bar.update_to(pos);
        }
        self.next_tick = pos + STRIDE;
    }

    /// draws the bar full and moves terminal output to a fresh line
    pub fn finish(mut self, total: usize) {
        if let Some(bar) = self.bar.as_mut() {
            let _ = bar.update_to(total);
            println!();
        }
    }
}
