//! Logging Infrastructure
//!
//! Console output always; a daily rolling file when a log directory is given.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initialize the logger with console output only
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level` when set. `json` switches to structured
/// JSON lines. Calling this twice is harmless (the second call is a no-op).
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("payroll_server={level},tower_http={level},{level}"))
    });

    let file_appender = log_dir.and_then(|dir| {
        let path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(path) {
            eprintln!("Failed to create log directory {dir}: {e}");
            return None;
        }
        Some(tracing_appender::rolling::daily(path, "payroll-server.log"))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let result = match (file_appender, json) {
        (Some(file), true) => builder
            .json()
            .with_writer(std::io::stdout.and(file))
            .try_init(),
        (Some(file), false) => builder
            .with_ansi(false)
            .with_writer(std::io::stdout.and(file))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logger_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        init_logger_with_file(Some("debug"), false, log_dir.to_str());
        assert!(log_dir.exists());
        tracing::info!("logger test line");
    }
}
