//! Logging Infrastructure
//!
//! Structured logging for the operator binary and local development.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional file output
///
/// `log_level` accepts anything `EnvFilter` does (`debug`,
/// `item_sync=debug,wix_client=info`, ...). `RUST_LOG` wins when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "item-sync");
            let subscriber = subscriber.with_ansi(false).with_writer(file_appender);
            let _ = if json.unwrap_or(false) {
                subscriber.json().try_init()
            } else {
                subscriber.try_init()
            };
            return;
        }
    }

    let _ = if json.unwrap_or(false) {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}
