use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LoggingConfig};

/// Log file for `logging`: the configured path or the cache default.
pub fn log_path(logging: &LoggingConfig) -> PathBuf {
    logging.file.clone().unwrap_or_else(Config::default_log_path)
}

/// Initialize tracing into a log file.
///
/// Stdout belongs to the TUI, so nothing is written there. `RUST_LOG`
/// overrides the configured level. Failing to open the file leaves logging
/// off with a warning on stderr.
pub fn init_tracing(logging: &LoggingConfig) {
    let path = log_path(logging);
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                path.display(),
                err
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}
