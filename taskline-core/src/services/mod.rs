//! Core services
//!
//! Session lifecycle, task-collection synchronization, and structured
//! event logging.

mod logging;
mod session;
mod tasks;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use session::SessionService;
pub use tasks::TaskService;
