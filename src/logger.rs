use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Entries kept in memory for the status bar and debug views
const MAX_BUFFERED_LOGS: usize = 500;

/// Buffer chained into the installed global dispatch
static INSTALLED_BUFFER: OnceCell<Arc<Mutex<Vec<String>>>> = OnceCell::new();

/// Shared logger that can be used across the application.
///
/// Holds an in-memory buffer of formatted entries. When created through
/// [`Logger::from_config`] it also installs the global `log` backend, so every
/// `log::info!`/`log::debug!` in the crate lands in the buffer and, when file
/// logging is enabled, in the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            log_file: None,
        }
    }

    /// Create a logger and install it as the global `log` backend.
    ///
    /// Only the first installation in a process takes effect. Later calls
    /// return a handle sharing the installed buffer and add no file output.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        logger.enabled = config.enabled;

        let buffer = logger.logs.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.level_filter())
            .chain(fern::Output::call(move |record| {
                push_bounded(&buffer, record.args().to_string());
            }));

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
            logger.log_file = Some(path);
        }

        match dispatch.apply() {
            Ok(()) => {
                let _ = INSTALLED_BUFFER.set(logger.logs.clone());
            }
            Err(_) => {
                if let Some(shared) = INSTALLED_BUFFER.get() {
                    logger.logs = shared.clone();
                }
                logger.log_file = None;
                logger.log("Global logger already installed; keeping the existing one".to_string());
            }
        }

        Ok(logger)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        push_bounded(&self.logs, format!("[{}] {}", timestamp, message));
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<String> {
        self.logs.lock().ok().and_then(|logs| logs.last().cloned())
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether file logging was requested
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a log file is being written
    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    /// Path of the active log file, if any
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Location of the log file in the XDG data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("swipelist").join("swipelist.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(logs: &Mutex<Vec<String>>, entry: String) {
    if let Ok(mut logs) = logs.lock() {
        logs.push(entry);
        if logs.len() > MAX_BUFFERED_LOGS {
            let excess = logs.len() - MAX_BUFFERED_LOGS;
            logs.drain(..excess);
        }
    }
}
