//! Progress reporting for long runs
//!
//! The driver only ever talks to a [`ProgressSink`]: it hands over the
//! completed fraction and a display width, and expects nothing back.

use std::io::Write;

/// Receiver of progress notifications. Fire-and-forget.
pub trait ProgressSink {
    /// `fraction` is the completed share of the run in `[0, 1]`.
    fn report(&mut self, fraction: f64, width: Option<usize>);

    /// Called once after the last step.
    fn finish(&mut self) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(f64, Option<usize>),
{
    fn report(&mut self, fraction: f64, width: Option<usize>) {
        self(fraction, width)
    }
}

/// Sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _fraction: f64, _width: Option<usize>) {}
}

/// Sink that forwards progress to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, fraction: f64, _width: Option<usize>) {
        log::info!("simulation progress: {:.2}%", fraction * 100.0);
    }

    fn finish(&mut self) {
        log::info!("simulation progress: 100.00%");
    }
}

/// Terminal progress bar redrawn in place on stderr.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    default_width: usize,
}

impl ProgressBar {
    pub fn new(default_width: usize) -> Self {
        Self { default_width }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(15)
    }
}

impl ProgressSink for ProgressBar {
    fn report(&mut self, fraction: f64, width: Option<usize>) {
        let line = render_bar(fraction, width.unwrap_or(self.default_width));
        let mut err = std::io::stderr().lock();
        // write errors on stderr are ignored
        let _ = write!(err, "\r{line}");
        let _ = err.flush();
    }

    fn finish(&mut self) {
        let _ = writeln!(std::io::stderr());
    }
}

/// Render `fraction` as `"42.00%  [#####.....]"` with `width` cells
///
/// Values above 1 are read as percentages. The cell under the cursor is
/// already drawn as done, so a fresh run shows one `#`.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction > 1.0 { fraction / 100.0 } else { fraction };
    let fraction = fraction.clamp(0.0, 1.0);

    let pass = ((width as f64 * fraction) as usize).min(width.saturating_sub(1));
    let done = (pass + 1).min(width);

    format!(
        "{:.2}%  [{}{}]",
        fraction * 100.0,
        "#".repeat(done),
        ".".repeat(width - done)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_has_fixed_width() {
        for f in [0.0, 0.1, 0.5, 0.999, 1.0] {
            let bar = render_bar(f, 25);
            let cells = bar.split('[').nth(1).unwrap().trim_end_matches(']');
            assert_eq!(cells.len(), 25, "bar {bar:?} has wrong width");
        }
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(render_bar(0.0, 10), "0.00%  [#.........]");
        assert_eq!(render_bar(0.5, 10), "50.00%  [######....]");
        assert_eq!(render_bar(1.0, 10), "100.00%  [##########]");
    }

    #[test]
    fn bar_reads_large_values_as_percent() {
        assert_eq!(render_bar(50.0, 10), render_bar(0.5, 10));
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |f: f64, w: Option<usize>| seen.push((f, w));
            sink.report(0.25, Some(5));
            sink.finish();
        }
        assert_eq!(seen, vec![(0.25, Some(5))]);
    }
}
