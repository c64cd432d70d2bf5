//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring `tracing` macros to
//! the rotating log file through the fmt layer.

use super::file_writer::{FileWriter, LogWriter};
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them without ANSI styling (the pane, not a terminal, reads
///    the file)
/// 3. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `~/.local/share/zellij/zibrary/zibrary.log`. The
/// plugin uses `/host/.local/share/zellij/zibrary/zibrary.log` in Zellij's
/// sandbox environment, which maps to the path above when Zellij is started
/// from the user's home directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
///
/// # Example
///
/// ```rust
/// use zibrary::observability::init_tracing;
/// use zibrary::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Silently fail if we can't create the directory
        return;
    }

    let log_file = data_dir.join("zibrary.log");
    let writer = LogWriter::new(FileWriter::new(log_file));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
