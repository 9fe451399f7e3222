//! Logging Infrastructure
//!
//! `EnvFilter` from `RUST_LOG` when present, otherwise the configured level
//! for this crate and `tower_http`. With a log directory the output goes to a
//! daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("bistro_server={log_level},tower_http={log_level}"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "bistro-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
