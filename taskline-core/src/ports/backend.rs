//! Remote task service port
//!
//! Defines the interface for the four wire operations of the remote
//! task-tracking service. The session and task services use this trait to
//! reach the service without knowing the transport, and tests substitute
//! it for the HTTP adapter.

use crate::domain::result::Result;
use crate::domain::{Credentials, Task, TaskDraft};

/// Remote task service abstraction
pub trait TaskBackend: Send + Sync {
    /// Register a new account
    ///
    /// Success does not establish a session; the server requires a
    /// separate login.
    fn signup(&self, credentials: &Credentials) -> Result<()>;

    /// Exchange credentials for a bearer token
    fn login(&self, credentials: &Credentials) -> Result<String>;

    /// Fetch the full task list, in server order
    fn list_tasks(&self, token: &str) -> Result<Vec<Task>>;

    /// Create a task and return the server's echo of it, including any
    /// server-assigned identifier
    fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<Task>;
}
