//! The scrollable container: equal-height sections stacked vertically.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    start: Instant,
    duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    section_height: u16,
    section_count: usize,
    offset: u32,
    animation: Option<ScrollAnimation>,
}

impl Viewport {
    pub fn new(section_count: usize, section_height: u16) -> Self {
        Self {
            section_height: section_height.max(1),
            section_count,
            offset: 0,
            animation: None,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn section_height(&self) -> u16 {
        self.section_height
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn section_top(&self, index: usize) -> u32 {
        index as u32 * u32::from(self.section_height)
    }

    pub fn max_offset(&self) -> u32 {
        self.section_count.saturating_sub(1) as u32 * u32::from(self.section_height)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Share of the span `[top, top + height)` inside the viewport, in `[0, 1]`.
    pub fn span_fraction(&self, top: u32, height: u32) -> f64 {
        if height == 0 {
            return 0.0;
        }
        let view_start = self.offset;
        let view_end = self.offset + u32::from(self.section_height);
        let start = top.max(view_start);
        let end = (top + height).min(view_end);
        f64::from(end.saturating_sub(start)) / f64::from(height)
    }

    pub fn section_fraction(&self, index: usize) -> f64 {
        self.span_fraction(self.section_top(index), u32::from(self.section_height))
    }

    /// Section covering the middle row of the viewport.
    pub fn focused_section(&self) -> usize {
        let middle = self.offset + u32::from(self.section_height) / 2;
        let index = (middle / u32::from(self.section_height)) as usize;
        index.min(self.section_count.saturating_sub(1))
    }

    /// Starts a smooth scroll bringing section `index` to the top.
    ///
    /// A running animation is replaced, starting from the current offset.
    pub fn scroll_into_view(&mut self, index: usize, now: Instant, duration: Duration) {
        let index = index.min(self.section_count.saturating_sub(1));
        let to = self.section_top(index);
        if duration.is_zero() || to == self.offset {
            self.offset = to;
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            start: now,
            duration,
        });
    }

    /// Free scroll by `rows`. Cancels any smooth scroll.
    pub fn scroll_by(&mut self, rows: i32) {
        self.animation = None;
        let target = i64::from(self.offset) + i64::from(rows);
        self.offset = target.clamp(0, i64::from(self.max_offset())) as u32;
    }

    /// Moves the running animation to `now`. Returns true if the offset changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let elapsed = now.saturating_duration_since(animation.start);
        let t = (elapsed.as_secs_f64() / animation.duration.as_secs_f64()).min(1.0);
        let previous = self.offset;
        if t >= 1.0 {
            self.offset = animation.to;
            self.animation = None;
        } else {
            let from = f64::from(animation.from);
            let to = f64::from(animation.to);
            self.offset = (from + (to - from) * ease_in_out(t)).round() as u32;
        }
        self.offset != previous
    }

    /// New section height after a terminal resize. Keeps the focused section on top.
    pub fn resize(&mut self, section_height: u16) {
        let section_height = section_height.max(1);
        if section_height == self.section_height {
            return;
        }
        let anchor = match self.animation {
            Some(animation) => (animation.to / u32::from(self.section_height)) as usize,
            None => self.focused_section(),
        };
        self.section_height = section_height;
        self.animation = None;
        self.offset = self.section_top(anchor);
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
