use crate::session::{Session, SessionStore, SessionStoreError};
use chrono::Utc;
use std::sync::Arc;

/// Outcome of the startup session check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(Session),
    Unauthenticated,
}

/// Decides on startup whether the caller lands on the login view or the
/// application. Expired records are deleted on sight; valid records are
/// left untouched (no sliding expiration).
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn check(&self) -> Result<AuthState, SessionStoreError> {
        let Some(session) = self.store.load()? else {
            return Ok(AuthState::Unauthenticated);
        };

        if session.is_valid_at(Utc::now().timestamp_millis()) {
            tracing::debug!(username = %session.username, "Existing session accepted");
            Ok(AuthState::Authenticated(session))
        } else {
            tracing::info!(username = %session.username, "Session expired, clearing");
            self.store.clear()?;
            Ok(AuthState::Unauthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SESSION_TTL_MS};

    #[test]
    fn test_absent_session_is_unauthenticated() {
        let store = Arc::new(MemorySessionStore::new());
        let guard = SessionGuard::new(store);
        assert_eq!(guard.check().unwrap(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_valid_session_is_accepted_and_left_untouched() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new("Ayoub", SESSION_TTL_MS);
        store.save(&session).unwrap();

        let guard = SessionGuard::new(store.clone());
        assert_eq!(guard.check().unwrap(), AuthState::Authenticated(session.clone()));
        // Expiry unchanged: checking again yields the same record
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn test_expired_session_is_deleted() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session {
            username: "Ayoub".to_string(),
            expiry: Utc::now().timestamp_millis() - 1_000,
        };
        store.save(&session).unwrap();

        let guard = SessionGuard::new(store.clone());
        assert_eq!(guard.check().unwrap(), AuthState::Unauthenticated);
        assert!(store.load().unwrap().is_none());
    }
}
