//! Scroll-driven effects of fade decks: theme switching and one-shot fade-in.

pub mod fade;
pub mod theme;

pub use fade::{fade_slots, FadeLevel, FadeTracker, FADE_THRESHOLD};
pub use theme::ThemeTracker;
