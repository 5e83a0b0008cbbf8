//! One-shot fade-in of section items.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::scroll::{Viewport, VisibilityObserver};

/// Items reveal once a tenth of them is visible.
pub const FADE_THRESHOLD: f64 = 0.1;

/// Rows above the first fade item (title and spacing).
pub const FADE_HEADER_ROWS: u16 = 4;

/// Row span `(top, height)` of each fade item inside a section.
///
/// Shared by the tracker and the renderer so both agree on geometry.
pub fn fade_slots(section_height: u16, count: usize) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let available = section_height.saturating_sub(FADE_HEADER_ROWS);
    let slot = (available / count as u16).max(1);
    (0..count as u16)
        .map(|k| {
            let top = (FADE_HEADER_ROWS + k * slot).min(section_height.saturating_sub(1));
            (top, slot)
        })
        .collect()
}

/// How far along an item's fade-up transition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeLevel {
    Hidden,
    Rising,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
struct FadeItem {
    section: usize,
    slot: usize,
    revealed_at: Option<Instant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FadeTracker {
    observer: VisibilityObserver,
    items: Vec<FadeItem>,
    slot_counts: Vec<usize>,
}

impl FadeTracker {
    /// `slot_counts[i]` is the number of fade items in section `i`.
    pub fn new(slot_counts: Vec<usize>) -> Self {
        let items: Vec<FadeItem> = slot_counts
            .iter()
            .enumerate()
            .flat_map(|(section, count)| {
                (0..*count).map(move |slot| FadeItem {
                    section,
                    slot,
                    revealed_at: None,
                })
            })
            .collect();
        Self {
            observer: VisibilityObserver::new(FADE_THRESHOLD, items.len()),
            items,
            slot_counts,
        }
    }

    pub fn update(&mut self, viewport: &Viewport, now: Instant) {
        let height = viewport.section_height();
        let items = &self.items;
        let slot_counts = &self.slot_counts;
        let crossings = self.observer.evaluate(|index| {
            let item = &items[index];
            let (top, rows) = fade_slots(height, slot_counts[item.section])[item.slot];
            viewport.span_fraction(
                viewport.section_top(item.section) + u32::from(top),
                u32::from(rows),
            )
        });

        for crossing in crossings.into_iter().filter(|crossing| crossing.entering) {
            let item = &mut self.items[crossing.index];
            item.revealed_at = Some(now);
            self.observer.unobserve(crossing.index);
            debug!(section = item.section, slot = item.slot, "fade item revealed");
        }
    }

    pub fn level(&self, section: usize, slot: usize, now: Instant, fade: Duration) -> FadeLevel {
        let revealed_at = self
            .items
            .iter()
            .find(|item| item.section == section && item.slot == slot)
            .and_then(|item| item.revealed_at);
        match revealed_at {
            None => FadeLevel::Hidden,
            Some(at) if now.saturating_duration_since(at) < fade => FadeLevel::Rising,
            Some(_) => FadeLevel::Visible,
        }
    }

    pub fn is_revealed(&self, section: usize, slot: usize) -> bool {
        self.items
            .iter()
            .any(|item| item.section == section && item.slot == slot && item.revealed_at.is_some())
    }
}
