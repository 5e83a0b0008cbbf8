//! Active-section flags and the progress bar.

use tracing::debug;

use crate::scroll::observer::VisibilityObserver;
use crate::scroll::viewport::Viewport;

/// Sections count as active once half of them is visible.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Percentage shown after activating section `ordinal` of `count`.
pub fn progress_percent(ordinal: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (ordinal + 1) as f64 / count as f64 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressBar {
    percent: f64,
}

impl ProgressBar {
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    observer: VisibilityObserver,
    active: Vec<bool>,
    bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// `with_bar = false` runs the tracker without a bar; updates to it are skipped.
    pub fn new(section_count: usize, with_bar: bool) -> Self {
        Self {
            observer: VisibilityObserver::new(SECTION_THRESHOLD, section_count),
            active: vec![false; section_count],
            bar: with_bar.then(ProgressBar::default),
        }
    }

    /// Applies crossings since the last call. The last entering crossing sets the bar.
    pub fn update(&mut self, viewport: &Viewport) {
        let count = self.active.len();
        for crossing in self.observer.evaluate(|index| viewport.section_fraction(index)) {
            self.active[crossing.index] = crossing.entering;
            if !crossing.entering {
                continue;
            }
            debug!(section = crossing.index, "section entered view");
            if let Some(bar) = self.bar.as_mut() {
                bar.percent = progress_percent(crossing.index, count);
            }
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn bar(&self) -> Option<&ProgressBar> {
        self.bar.as_ref()
    }
}
