//! Shared helpers: deterministic apps and a virtual clock.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use typeslides::app::App;
use typeslides::config::Config;
use typeslides::deck::Deck;
use typeslides::reveal::{FixedJitter, JitterSource};

/// Virtual clock step, one UI frame.
pub const STEP: Duration = Duration::from_millis(16);

/// Builtin deck app with zero jitter, started at the returned instant.
pub fn make_app(id: &str) -> (App, Instant) {
    make_app_with(id, FixedJitter(Duration::ZERO))
}

pub fn make_app_with(id: &str, jitter: impl JitterSource + 'static) -> (App, Instant) {
    let start = Instant::now();
    let deck = Deck::builtin(id).expect("builtin deck");
    let app = App::new(deck, &Config::default(), start)
        .expect("builtin decks are valid")
        .with_jitter(jitter);
    (app, start)
}

/// Free-scrolls so that section `index` sits at the top.
pub fn jump_to(app: &mut App, index: usize) {
    let rows = app.viewport().section_top(index) as i64 - app.viewport().offset() as i64;
    app.scroll_rows(rows as i32);
    assert_eq!(app.focus_section(), index);
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        assert!(app.type_char(ch), "no text field focused");
    }
}

/// Ticks in frame steps until `done` holds. Panics after `limit` of virtual time.
pub fn run_until(app: &mut App, now: &mut Instant, limit: Duration, done: impl Fn(&App) -> bool) {
    let deadline = *now + limit;
    while !done(app) {
        assert!(*now < deadline, "condition not reached within {limit:?}");
        *now += STEP;
        app.on_tick(*now);
    }
}

/// Ticks for `span` of virtual time.
pub fn advance(app: &mut App, now: &mut Instant, span: Duration) {
    let end = *now + span;
    while *now < end {
        *now = (*now + STEP).min(end);
        app.on_tick(*now);
    }
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
