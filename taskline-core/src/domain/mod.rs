//! Core domain entities
//!
//! Pure data structures for the client's session and task state - no I/O
//! or external dependencies.

mod session;
mod task;
pub mod result;

pub use session::{Credentials, Session, SessionState};
pub use task::{Task, TaskDraft};
