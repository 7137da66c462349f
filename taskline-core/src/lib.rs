//! Taskline Core - client logic for the Taskline task tracker
//!
//! This crate implements the client following hexagonal architecture:
//!
//! - **domain**: core entities (Task, Session, Credentials)
//! - **ports**: trait definitions for external dependencies (TaskBackend)
//! - **services**: session and task-collection orchestration
//! - **adapters**: concrete implementations (Backengine HTTP client)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::Result;
use serde::Serialize;

use adapters::backengine::BackengineClient;
use config::Config;
use domain::result::Result as CoreResult;
use ports::TaskBackend;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Credentials, Session, SessionState, Task, TaskDraft};
pub use services::{EntryPoint, LogEntry, LogEvent, LoggingService, SessionService, TaskService};

/// Main context for Taskline operations
///
/// This is the primary entry point for presentation layers. It composes
/// the configuration, the remote backend, and the session/task services,
/// and exposes the query-and-intent surface they render.
///
/// Every failed intent records exactly one message in `last_error`; every
/// successful intent clears it. State changes bump the revision counter,
/// so a presentation layer can poll `revision()` instead of diffing
/// snapshots.
pub struct TasklineContext {
    pub config: Config,
    pub session_service: SessionService,
    pub task_service: TaskService,
    revision: Arc<AtomicU64>,
    last_error: RwLock<Option<String>>,
}

impl TasklineContext {
    /// Create a context talking to the configured Backengine service
    pub fn new(taskline_dir: &Path) -> Result<Self> {
        let config = Config::load(taskline_dir)?;
        let backend = Arc::new(BackengineClient::new(&config)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Create a context over any backend implementation
    pub fn with_backend(config: Config, backend: Arc<dyn TaskBackend>) -> Self {
        let session = Arc::new(RwLock::new(domain::Session::new()));
        let revision = Arc::new(AtomicU64::new(0));

        let session_service = SessionService::new(
            Arc::clone(&backend),
            Arc::clone(&session),
            Arc::clone(&revision),
        );
        let task_service = TaskService::new(backend, session, Arc::clone(&revision));

        Self {
            config,
            session_service,
            task_service,
            revision,
            last_error: RwLock::new(None),
        }
    }

    // === Intents ===

    /// Sign up a new account. Success does not log the user in.
    pub fn submit_signup(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> CoreResult<()> {
        let result = self.session_service.signup(Credentials::new(email, password));
        self.record(result)
    }

    /// Log in and, on success, perform the initial task fetch.
    ///
    /// A failed initial fetch does not undo the login; its message is
    /// left in `last_error` for the presentation layer.
    pub fn submit_login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> CoreResult<()> {
        let result = self.session_service.login(Credentials::new(email, password));
        let result = self.record(result);

        if result.is_ok() {
            if let Err(e) = self.task_service.load_all() {
                self.set_last_error(Some(e.to_string()));
            }
        }
        result
    }

    /// Create a task and append the server's echo to the collection
    pub fn submit_create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> CoreResult<Task> {
        let result = self.task_service.create(TaskDraft::new(title, content));
        self.record(result)
    }

    /// Re-fetch the whole collection from the server
    pub fn load_tasks(&self) -> CoreResult<Vec<Task>> {
        let result = self.task_service.load_all();
        self.record(result)
    }

    /// End the session and drop the task collection derived from it
    pub fn logout(&self) {
        self.session_service.logout();
        self.task_service.clear();
        self.set_last_error(None);
    }

    // === Queries ===

    pub fn is_authenticated(&self) -> bool {
        self.session_service.is_authenticated()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.task_service.tasks()
    }

    /// Message of the most recent failed intent, if the last intent failed
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Monotonic counter bumped on every state mutation
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Serializable view of the presentation surface
    pub fn snapshot(&self) -> ClientSnapshot {
        ClientSnapshot {
            is_authenticated: self.is_authenticated(),
            tasks: self.tasks(),
            last_error: self.last_error(),
            revision: self.revision(),
        }
    }

    /// Record the outcome of an intent: failures set `last_error`,
    /// successes clear it
    fn record<T>(&self, result: CoreResult<T>) -> CoreResult<T> {
        match &result {
            Ok(_) => self.set_last_error(None),
            Err(e) => self.set_last_error(Some(e.to_string())),
        }
        result
    }

    fn set_last_error(&self, message: Option<String>) {
        *self.last_error.write().unwrap_or_else(|e| e.into_inner()) = message;
    }
}

/// Read-model of the client state for presentation layers
#[derive(Debug, Clone, Serialize)]
pub struct ClientSnapshot {
    pub is_authenticated: bool,
    pub tasks: Vec<Task>,
    pub last_error: Option<String>,
    pub revision: u64,
}
