//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that plugs into the standard
//! log crate and echoes records to the console.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is written
    level: LevelFilter,
    /// Whether records are also printed to stdout
    echo: bool,
}

impl Logger {
    /// Creates a logger appending to `log_file`
    pub fn append(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file)?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
            echo: true,
        })
    }

    /// A logger that discards file output and only echoes to the console
    pub fn console() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Info,
            echo: true,
        }
    }

    /// Set the most verbose level that is written
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Disable console echo
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Writes one line to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// A logger that writes records at `level` and above to `log_file` only
    pub fn file_backend(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        Ok(Logger::append(log_file)?.with_level(level).quiet())
    }

    /// Installs a file logger as the global `log` backend
    ///
    /// Records go to the file only, leaving stdout to command output.
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::file_backend(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            if self.echo {
                println!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
