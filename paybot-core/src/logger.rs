//! Tracing setup: plain-text events to stdout and an append-only log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::{format::Writer, time::FormatTime, writer::MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timestamps, e.g. `2026-10-18 09:30:00`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Opens `path` for appending, creating it and any missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Events go to stdout and `log_file_path` without ANSI codes.
/// Call after `.env` is loaded so `RUST_LOG` is honoured. Fails if a subscriber is already set.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(Path::new(log_file_path))?);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stdout.and(file))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/app.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    /// **Test: init_tracing creates missing log directories and writes events to the file.**
    #[test]
    fn test_init_tracing_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/paybot.log");
        let path_str = path.to_str().unwrap();

        init_tracing(path_str).unwrap();
        tracing::info!(check = "logger_test", "log line for file check");

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log line for file check"));

        // A second global subscriber is rejected.
        assert!(init_tracing(path_str).is_err());
    }
}
