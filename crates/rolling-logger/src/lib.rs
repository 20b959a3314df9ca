//! Rolling File Logger
//!
//! Writes log lines to `<dir>/<app>.log`, rotating to `<app>.1.log` ..
//! `<app>.N.log` once the active file passes a size limit. The most recent
//! lines are also kept in a circular buffer so a host can show them without
//! reading the files back.
//!
//! `init_logger` installs a `tracing-subscriber` fmt subscriber (with the
//! `log` bridge), so crates logging through either facade end up here.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Errors raised while setting up or using the logger
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Size and retention settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Rotate once the active file would grow past this many bytes
    pub max_bytes: u64,
    /// Files kept on disk, including the active one
    pub max_files: usize,
    /// Lines kept in the in-memory ring buffer
    pub buffer_lines: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 200,
        }
    }
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Initialize the global logger with default options
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerOptions::default()).map(|_| ())
}

/// Initialize the global logger
///
/// Fails with `AlreadyInitialized` on a second call, and with `Subscriber`
/// when some other global subscriber was installed first.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    options: LoggerOptions,
) -> Result<RollingLogger, LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let logger = RollingLogger::open(log_dir, app_name, options)?;

    tracing_subscriber::fmt()
        .with_writer(logger.clone())
        .with_ansi(false)
        .with_timer(LocalTimer)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(logger.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    log::info!("[{}] logging to {}", app_name, logger.active_path().display());
    Ok(logger)
}

/// Whether `init_logger` has completed
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent lines of the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent_lines()).unwrap_or_default()
}

fn ensure_initialized() -> Result<(), LoggerError> {
    if is_initialized() {
        Ok(())
    } else {
        Err(LoggerError::NotInitialized)
    }
}

/// Timestamps in local time, millisecond precision
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

// ========================
// Rolling file
// ========================

struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: Option<File>,
    written: u64,
}

impl RollingFile {
    fn open(dir: &Path, app_name: &str, options: &LoggerOptions) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let mut rolling = Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes: options.max_bytes,
            max_files: options.max_files.max(1),
            file: None,
            written: 0,
        };
        rolling.reopen()?;
        Ok(rolling)
    }

    /// Path of the file at `index` (0 = active)
    fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.app_name))
        } else {
            self.dir.join(format!("{}.{}.log", self.app_name, index))
        }
    }

    fn reopen(&mut self) -> io::Result<()> {
        let path = self.path(0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.written = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;

        let oldest = self.path(self.max_files - 1);
        if self.max_files > 1 && oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.path(index - 1);
            if from.exists() {
                fs::rename(&from, self.path(index))?;
            }
        }
        if self.max_files == 1 {
            // Nowhere to roll to: truncate
            File::create(self.path(0))?;
        }

        self.reopen()
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        let len = line.len() as u64;
        if self.written > 0 && self.written + len > self.max_bytes {
            self.rotate()?;
        }
        if self.file.is_none() {
            self.reopen()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(line)?;
            file.flush()?;
        }
        self.written += len;
        Ok(())
    }
}

// ========================
// Ring buffer
// ========================

struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

// ========================
// Logger handle
// ========================

struct Shared {
    file: RollingFile,
    buffer: RingBuffer,
}

/// Cloneable handle to the rolling file and its ring buffer
#[derive(Clone)]
pub struct RollingLogger {
    shared: Arc<Mutex<Shared>>,
}

impl RollingLogger {
    /// Open (or create) the log directory without installing a subscriber
    pub fn open(
        log_dir: impl AsRef<Path>,
        app_name: &str,
        options: LoggerOptions,
    ) -> Result<Self, LoggerError> {
        let file = RollingFile::open(log_dir.as_ref(), app_name, &options)?;
        Ok(Self {
            shared: Arc::new(Mutex::new(Shared {
                file,
                buffer: RingBuffer::new(options.buffer_lines),
            })),
        })
    }

    /// Append raw text; each newline-terminated line also lands in the buffer
    pub fn append(&self, text: &[u8]) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let mut shared = self.lock();
        shared.file.write_line(text)?;
        for line in String::from_utf8_lossy(text).lines() {
            if !line.trim().is_empty() {
                shared.buffer.push(line.to_string());
            }
        }
        Ok(())
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().buffer.lines.iter().cloned().collect()
    }

    /// Path of the active log file
    pub fn active_path(&self) -> PathBuf {
        self.lock().file.path(0)
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A panic mid-write leaves nothing worth discarding
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Per-event writer handed out to the fmt layer
///
/// The formatted event is buffered and committed as one line on drop, so a
/// rotation never splits an event across files.
pub struct EventWriter {
    logger: RollingLogger,
    buf: Vec<u8>,
}

impl Write for EventWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let pending = std::mem::take(&mut self.buf);
        self.logger.append(&pending)
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for RollingLogger {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        EventWriter {
            logger: self.clone(),
            buf: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options() -> LoggerOptions {
        LoggerOptions {
            max_bytes: 64,
            max_files: 3,
            buffer_lines: 4,
        }
    }

    #[test]
    fn test_append_writes_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path(), "Tally", small_options()).unwrap();

        logger.append(b"hello\n").unwrap();

        let content = fs::read_to_string(dir.path().join("Tally.log")).unwrap();
        assert_eq!(content, "hello\n");
        assert_eq!(logger.active_path(), dir.path().join("Tally.log"));
    }

    #[test]
    fn test_rotation_keeps_bounded_files() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path(), "Tally", small_options()).unwrap();

        let line = format!("{}\n", "x".repeat(40));
        for _ in 0..6 {
            logger.append(line.as_bytes()).unwrap();
        }

        assert!(dir.path().join("Tally.log").exists());
        assert!(dir.path().join("Tally.1.log").exists());
        assert!(dir.path().join("Tally.2.log").exists());
        assert!(!dir.path().join("Tally.3.log").exists());

        let active = fs::read_to_string(dir.path().join("Tally.log")).unwrap();
        assert_eq!(active, line);
    }

    #[test]
    fn test_single_file_truncates_on_rotation() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoggerOptions { max_files: 1, ..small_options() };
        let logger = RollingLogger::open(dir.path(), "Tally", options).unwrap();

        let line = format!("{}\n", "y".repeat(40));
        logger.append(line.as_bytes()).unwrap();
        logger.append(line.as_bytes()).unwrap();

        let active = fs::read_to_string(dir.path().join("Tally.log")).unwrap();
        assert_eq!(active, line);
        assert!(!dir.path().join("Tally.1.log").exists());
    }

    #[test]
    fn test_ring_buffer_keeps_latest_lines() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path(), "Tally", small_options()).unwrap();

        for i in 0..6 {
            logger.append(format!("line {}\n", i).as_bytes()).unwrap();
        }

        assert_eq!(
            logger.recent_lines(),
            vec!["line 2", "line 3", "line 4", "line 5"]
        );
    }

    #[test]
    fn test_event_writer_commits_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path(), "Tally", small_options()).unwrap();

        {
            let mut writer = logger.make_writer();
            write!(writer, "part one ").unwrap();
            writeln!(writer, "part two").unwrap();
            assert!(logger.recent_lines().is_empty());
        }

        assert_eq!(logger.recent_lines(), vec!["part one part two"]);
    }

    #[test]
    fn test_reopen_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let logger = RollingLogger::open(dir.path(), "Tally", LoggerOptions::default()).unwrap();
            logger.append(b"first\n").unwrap();
        }
        let logger = RollingLogger::open(dir.path(), "Tally", LoggerOptions::default()).unwrap();
        logger.append(b"second\n").unwrap();

        let content = fs::read_to_string(dir.path().join("Tally.log")).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_global_init_routes_helpers() {
        let dir = tempfile::tempdir().unwrap();
        init_logger(dir.path(), "Global").unwrap();

        info("logger ready").unwrap();
        warn("disk almost full").unwrap();
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("logger ready")));
        assert!(lines.iter().any(|l| l.contains("WARN") && l.contains("disk almost full")));
        assert!(matches!(
            init_logger(dir.path(), "Global"),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
