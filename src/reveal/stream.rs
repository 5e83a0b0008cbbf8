//! Character-by-character reveal of canned text.

use std::time::Duration;

use rand::Rng;

/// Canned text revealed one character per tick.
///
/// `cursor` is a byte offset that always sits on a char boundary, so the
/// revealed prefix is a plain slice of the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStream {
    text: String,
    cursor: usize,
}

impl TextStream {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Reveals the next character. Returns false once the text is exhausted.
    pub fn advance(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn revealed(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.text.len()
    }

    pub fn is_started(&self) -> bool {
        self.cursor > 0
    }
}

/// Source of the random part of each tick delay.
pub trait JitterSource: Send {
    /// Returns a duration in `[0, max)`, or zero when `max` is zero.
    fn sample(&mut self, max: Duration) -> Duration;
}

/// Uniform jitter from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn sample(&mut self, max: Duration) -> Duration {
        let max_micros = max.as_micros() as u64;
        if max_micros == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(rand::rng().random_range(0..max_micros))
    }
}

/// Constant jitter, for reproducible pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub Duration);

impl JitterSource for FixedJitter {
    fn sample(&mut self, max: Duration) -> Duration {
        if max.is_zero() {
            Duration::ZERO
        } else {
            self.0.min(max.saturating_sub(Duration::from_micros(1)))
        }
    }
}

/// Per-character delay: `base` plus jitter below `jitter`, redrawn every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharPacing {
    pub base: Duration,
    pub jitter: Duration,
}

impl CharPacing {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn next_delay(&self, source: &mut dyn JitterSource) -> Duration {
        self.base + source.sample(self.jitter)
    }
}
