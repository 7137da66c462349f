//! CLI command implementations

pub mod logs;
pub mod shell;
pub mod signup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use taskline_core::{EntryPoint, LogEvent, LoggingService, TasklineContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    let taskline_dir = get_taskline_dir();
    // Ensure directory exists
    std::fs::create_dir_all(&taskline_dir).ok()?;
    LoggingService::new(&taskline_dir, entry_point, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the taskline directory from environment or default
pub fn get_taskline_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKLINE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".taskline")
    }
}

/// Get or create taskline context
pub fn get_context() -> Result<TasklineContext> {
    let taskline_dir = get_taskline_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&taskline_dir)
        .with_context(|| format!("Failed to create taskline directory: {:?}", taskline_dir))?;

    TasklineContext::new(&taskline_dir).context("Failed to initialize taskline context")
}
