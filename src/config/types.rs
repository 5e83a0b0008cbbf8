use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deck shown when `--deck` is not given.
    #[serde(default = "default_deck")]
    pub default_deck: String,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delays and durations of the scripted sequence, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Artificial latency before the draft prompt appears (default: 800).
    #[serde(default = "default_draft_delay")]
    pub draft_delay_ms: u64,
    /// Pause between "generate" and the first streamed character (default: 500).
    #[serde(default = "default_speech_start_delay")]
    pub speech_start_delay_ms: u64,
    /// Base delay per streamed response character (default: 20).
    #[serde(default = "default_speech_char")]
    pub speech_char_ms: u64,
    /// Pause between the response and the evaluation (default: 500).
    #[serde(default = "default_eval_pause")]
    pub eval_pause_ms: u64,
    /// Base delay per streamed evaluation character (default: 15).
    #[serde(default = "default_eval_char")]
    pub eval_char_ms: u64,
    /// Exclusive upper bound of the random per-character jitter (default: 20).
    #[serde(default = "default_jitter")]
    pub jitter_ms: u64,
    /// Score ring animation length (default: 1000).
    #[serde(default = "default_score_duration")]
    pub score_duration_ms: u64,
    /// Interval between score animation frames (default: 16).
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    /// Smooth scroll length (default: 450).
    #[serde(default = "default_scroll")]
    pub scroll_ms: u64,
    /// Length of the fade-up transition (default: 600).
    #[serde(default = "default_fade")]
    pub fade_ms: u64,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render/tick interval in milliseconds (default: 16).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Draw the progress bar in the header (default: true).
    #[serde(default = "default_true")]
    pub show_progress: bool,
    /// Capture mouse wheel scrolling (default: true).
    #[serde(default = "default_true")]
    pub mouse: bool,
}

/// Log output settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache dir>/typeslides/typeslides.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_deck() -> String {
    "cold-war".to_string()
}

fn default_draft_delay() -> u64 {
    800
}

fn default_speech_start_delay() -> u64 {
    500
}

fn default_speech_char() -> u64 {
    20
}

fn default_eval_pause() -> u64 {
    500
}

fn default_eval_char() -> u64 {
    15
}

fn default_jitter() -> u64 {
    20
}

fn default_score_duration() -> u64 {
    1000
}

fn default_frame_interval() -> u64 {
    16
}

fn default_scroll() -> u64 {
    450
}

fn default_fade() -> u64 {
    600
}

fn default_tick_rate() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TimingConfig {
    pub fn draft_delay(&self) -> Duration {
        Duration::from_millis(self.draft_delay_ms)
    }

    pub fn speech_start_delay(&self) -> Duration {
        Duration::from_millis(self.speech_start_delay_ms)
    }

    pub fn speech_char(&self) -> Duration {
        Duration::from_millis(self.speech_char_ms)
    }

    pub fn eval_pause(&self) -> Duration {
        Duration::from_millis(self.eval_pause_ms)
    }

    pub fn eval_char(&self) -> Duration {
        Duration::from_millis(self.eval_char_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.jitter_ms)
    }

    pub fn score_duration(&self) -> Duration {
        Duration::from_millis(self.score_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn scroll(&self) -> Duration {
        Duration::from_millis(self.scroll_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_deck: default_deck(),
            timing: TimingConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            draft_delay_ms: default_draft_delay(),
            speech_start_delay_ms: default_speech_start_delay(),
            speech_char_ms: default_speech_char(),
            eval_pause_ms: default_eval_pause(),
            eval_char_ms: default_eval_char(),
            jitter_ms: default_jitter(),
            score_duration_ms: default_score_duration(),
            frame_interval_ms: default_frame_interval(),
            scroll_ms: default_scroll(),
            fade_ms: default_fade(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_progress: true,
            mouse: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
