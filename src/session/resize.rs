//! Resize coordination
//!
//! Window dragging produces a flood of area-changed events; flooding the
//! channel with resize requests in response is wasteful and can glitch
//! remote full-screen programs. The coordinator coalesces events inside a
//! debounce window: the first event after a quiet period applies
//! immediately, a burst settles to one trailing application once the window
//! elapses.

use std::time::{Duration, Instant};

/// Pixel dimensions of one character cell, from the renderer's font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
}

/// Debounced pixel-area to columns/rows computation.
#[derive(Debug)]
pub struct ResizeCoordinator {
    min_cols: usize,
    min_rows: usize,
    debounce: Duration,
    /// Target waiting for the debounce window to elapse
    pending: Option<(usize, usize)>,
    /// Last time an event arrived or a target was applied
    last_touch: Option<Instant>,
}

impl ResizeCoordinator {
    /// Create a coordinator flooring computed sizes at `min_cols`/`min_rows`.
    pub fn new(min_cols: usize, min_rows: usize) -> Self {
        Self {
            min_cols: min_cols.max(1),
            min_rows: min_rows.max(1),
            debounce: Duration::from_millis(200),
            pending: None,
            last_touch: None,
        }
    }

    /// Override the debounce window (mainly for tests).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Compute the target grid size for a render area.
    pub fn target_size(&self, pixel_width: u32, pixel_height: u32, metrics: FontMetrics) -> (usize, usize) {
        let cell_width = metrics.cell_width.max(1) as usize;
        let cell_height = metrics.cell_height.max(1) as usize;
        let cols = (pixel_width as usize / cell_width).max(self.min_cols);
        let rows = (pixel_height as usize / cell_height).max(self.min_rows);
        (cols, rows)
    }

    /// Record an area change. Returns `Some(target)` when it should be
    /// applied right away (quiet period), `None` when it was coalesced into
    /// the pending target.
    pub fn note_area(
        &mut self,
        now: Instant,
        pixel_width: u32,
        pixel_height: u32,
        metrics: FontMetrics,
    ) -> Option<(usize, usize)> {
        let target = self.target_size(pixel_width, pixel_height, metrics);

        let quiet = self
            .last_touch
            .map_or(true, |touch| now.duration_since(touch) >= self.debounce);
        self.last_touch = Some(now);

        if quiet {
            self.pending = None;
            Some(target)
        } else {
            self.pending = Some(target);
            None
        }
    }

    /// Poll for a settled target: returns it once the debounce window has
    /// elapsed since the last event.
    pub fn poll(&mut self, now: Instant) -> Option<(usize, usize)> {
        let touch = self.last_touch?;
        if self.pending.is_some() && now.duration_since(touch) >= self.debounce {
            self.last_touch = Some(now);
            return self.pending.take();
        }
        None
    }
}
