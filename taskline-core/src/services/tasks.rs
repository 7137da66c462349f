//! Task service - synchronize the local task collection with the service
//!
//! The collection is in-memory only: replaced wholesale on a successful
//! fetch, appended to on a successful create, and cleared when the
//! session ends. Failures never leave it partially mutated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::result::{Error, Result};
use crate::domain::{Session, Task, TaskDraft};
use crate::ports::TaskBackend;

/// Task service
///
/// Reads the shared session but never writes it. No request is issued
/// while the token is absent.
pub struct TaskService {
    backend: Arc<dyn TaskBackend>,
    session: Arc<RwLock<Session>>,
    tasks: RwLock<Vec<Task>>,
    revision: Arc<AtomicU64>,
}

impl TaskService {
    pub fn new(
        backend: Arc<dyn TaskBackend>,
        session: Arc<RwLock<Session>>,
        revision: Arc<AtomicU64>,
    ) -> Self {
        Self {
            backend,
            session,
            tasks: RwLock::new(Vec::new()),
            revision,
        }
    }

    /// Token for an authenticated request, without touching the network
    fn require_token(&self) -> Result<String> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .token()
            .map(str::to_string)
            .ok_or(Error::Unauthenticated)
    }

    /// Replace the local collection with the server's ordered list.
    ///
    /// On failure the collection keeps its pre-call contents.
    pub fn load_all(&self) -> Result<Vec<Task>> {
        let token = self.require_token()?;
        let fetched = self.backend.list_tasks(&token)?;

        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        *tasks = fetched;
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(tasks.clone())
    }

    /// Create a task and append the server's echo to the collection.
    ///
    /// Not idempotent: every call produces a new server-side entry and a
    /// new append, duplicates included. On failure the collection keeps
    /// its pre-call contents.
    pub fn create(&self, draft: TaskDraft) -> Result<Task> {
        let token = self.require_token()?;
        let created = self.backend.create_task(&token, &draft)?;

        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        tasks.push(created.clone());
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    /// Snapshot of the current collection
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all local tasks (session invalidation)
    pub fn clear(&self) {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        if !tasks.is_empty() {
            tasks.clear();
            self.revision.fetch_add(1, Ordering::SeqCst);
        }
    }
}
