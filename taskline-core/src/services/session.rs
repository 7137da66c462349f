//! Session service - credential-to-token exchange and session lifecycle

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::result::Result;
use crate::domain::{Credentials, Session, SessionState};
use crate::ports::TaskBackend;

/// Session service
///
/// Sole writer of the shared session: stores the bearer token on login
/// success and clears it on logout. Signup never touches the session.
pub struct SessionService {
    backend: Arc<dyn TaskBackend>,
    session: Arc<RwLock<Session>>,
    revision: Arc<AtomicU64>,
}

impl SessionService {
    pub fn new(
        backend: Arc<dyn TaskBackend>,
        session: Arc<RwLock<Session>>,
        revision: Arc<AtomicU64>,
    ) -> Self {
        Self {
            backend,
            session,
            revision,
        }
    }

    /// Register a new account.
    ///
    /// The server requires a separate login afterwards, so success here
    /// does not establish a session. The credentials are consumed and
    /// dropped either way.
    pub fn signup(&self, credentials: Credentials) -> Result<()> {
        self.backend.signup(&credentials)
    }

    /// Exchange credentials for a token and store it.
    ///
    /// On failure the session is left untouched and stays anonymous. The
    /// credentials are consumed and dropped either way.
    pub fn login(&self, credentials: Credentials) -> Result<()> {
        let token = self.backend.login(&credentials)?;

        self.session
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .set_token(token);
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Drop the session unconditionally.
    ///
    /// Transitions the client back to anonymous. The composing layer is
    /// responsible for invalidating task state derived from the session
    /// (see `TasklineContext::logout`).
    pub fn logout(&self) {
        let mut session = self.session.write().unwrap_or_else(|e| e.into_inner());
        if session.is_authenticated() {
            session.clear();
            self.revision.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .state()
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .token()
            .map(str::to_string)
    }
}
