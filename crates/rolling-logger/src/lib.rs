//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to stderr and to a
//! daily-rotated log file (`<app>.<date>.log`). Only the newest
//! `DEFAULT_MAX_FILES` files are kept in the log directory.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoLocal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MAX_FILES: usize = 5;

/// Daily appender writing `<app_name>.<date>.log` under `log_dir`
pub fn build_appender(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    max_files: usize,
) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(max_files)
        .build(log_dir.as_ref())
}

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. The returned guard
/// flushes the file writer on drop and must be held for the process lifetime.
pub fn init_logger(
    log_dir: impl AsRef<Path>,
    app_name: &str,
) -> Result<WorkerGuard, Box<dyn std::error::Error + Send + Sync>> {
    let appender = build_appender(log_dir, app_name, DEFAULT_MAX_FILES)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
                .with_writer(io::stderr),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(ChronoLocal::rfc_3339())
                .with_writer(file_writer),
        )
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn log_files(dir: &Path, app_name: &str) -> Vec<PathBuf> {
        let prefix = format!("{}.", app_name);
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                name.starts_with(&prefix) && name.ends_with(".log")
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_writes_dated_app_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut appender = build_appender(dir.path(), "PreTaste", 3).unwrap();

        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let files = log_files(dir.path(), "PreTaste");
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "hello\n");
    }

    #[test]
    fn test_creates_missing_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("server");

        let mut appender = build_appender(&nested, "app", 3).unwrap();
        appender.write_all(b"x").unwrap();
        appender.flush().unwrap();

        assert!(nested.is_dir());
        assert_eq!(log_files(&nested, "app").len(), 1);
    }

    #[test]
    fn test_non_blocking_writer_flushes_on_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let appender = build_appender(dir.path(), "app", 3).unwrap();
        let (mut writer, guard) = tracing_appender::non_blocking(appender);

        writer.write_all(b"queued line\n").unwrap();
        drop(guard);

        let files = log_files(dir.path(), "app");
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "queued line\n");
    }

    #[test]
    fn test_appends_to_todays_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = build_appender(dir.path(), "app", 3).unwrap();
        first.write_all(b"one\n").unwrap();
        first.flush().unwrap();
        drop(first);

        let mut second = build_appender(dir.path(), "app", 3).unwrap();
        second.write_all(b"two\n").unwrap();
        second.flush().unwrap();

        let files = log_files(dir.path(), "app");
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "one\ntwo\n");
    }
}
