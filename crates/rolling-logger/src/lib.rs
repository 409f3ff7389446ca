//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and echoes each one to the browser console (wasm) or stderr (native).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Max records kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
    /// Echo records to the console sink
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            level: LevelFilter::Info,
            echo: true,
        }
    }
}

impl LoggerConfig {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

/// One captured record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.time.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Errors from the global logger helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
    NotInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Circular-buffer logger
#[derive(Debug)]
pub struct RollingLogger {
    config: LoggerConfig,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(VecDeque::with_capacity(config.capacity.min(1024))),
        }
    }

    /// Copy of the buffered records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Last `n` records, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let all = self.entries();
        let skip = all.len().saturating_sub(n);
        all.into_iter().skip(skip).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn push(&self, entry: LogEntry) {
        if self.config.capacity == 0 {
            return;
        }
        if let Ok(mut entries) = self.entries.lock() {
            while entries.len() >= self.config.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            time: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.config.echo {
            sink::emit(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogEntry;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn emit(entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_string());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogEntry;

    pub fn emit(entry: &LogEntry) {
        eprintln!("{}", entry);
    }
}

/// Install the global logger. Call once at startup.
pub fn init_logger(config: LoggerConfig) -> Result<&'static RollingLogger, LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(config.level);
    Ok(logger)
}

/// The installed logger, if any
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    logger().ok_or(LoggerError::NotInitialized)?;
    log::info!("{}", message);
    Ok(())
}
