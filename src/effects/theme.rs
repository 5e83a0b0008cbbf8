//! Page theme picked by the section in view.

use tracing::debug;

use crate::deck::Theme;
use crate::scroll::{Viewport, VisibilityObserver, SECTION_THRESHOLD};

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTracker {
    observer: VisibilityObserver,
    tags: Vec<Option<Theme>>,
    current: Theme,
}

impl ThemeTracker {
    /// `tags` holds each section's declared theme, in deck order.
    pub fn new(tags: Vec<Option<Theme>>) -> Self {
        Self {
            observer: VisibilityObserver::new(SECTION_THRESHOLD, tags.len()),
            tags,
            current: Theme::default(),
        }
    }

    /// Sections entering view set the theme; untagged ones fall back to light.
    pub fn update(&mut self, viewport: &Viewport) {
        for crossing in self.observer.evaluate(|index| viewport.section_fraction(index)) {
            if !crossing.entering {
                continue;
            }
            let theme = self.tags[crossing.index].unwrap_or(Theme::Light);
            if theme != self.current {
                debug!(section = crossing.index, ?theme, "theme switched");
            }
            self.current = theme;
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }
}
