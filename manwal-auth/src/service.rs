use crate::credentials::CredentialVerifier;
use crate::session::{Session, SessionStore, SessionStoreError, SESSION_TTL_MS};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Deliberately generic: unknown user and wrong password read the same
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Runs the credential check and manages the persisted session record.
pub struct LoginService {
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn SessionStore>,
    /// Loading-state affordance only; zero in tests
    delay: Duration,
}

impl LoginService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            verifier,
            store,
            delay: Duration::from_secs(1),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// On success the session is persisted with a one-day expiry and
    /// returned; on mismatch nothing is written.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if !self.verifier.verify(username, password).await {
            tracing::warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(username, SESSION_TTL_MS);
        self.store.save(&session)?;
        tracing::info!(username = %session.username, "Login succeeded");
        Ok(session)
    }

    /// Deletes the session record; the caller routes back to the login view
    pub fn logout(&self) -> Result<(), SessionStoreError> {
        tracing::info!("Logging out");
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;
    use crate::session::MemorySessionStore;
    use chrono::Utc;

    fn service(store: Arc<MemorySessionStore>) -> LoginService {
        LoginService::new(Arc::new(StaticCredentials::builtin()), store)
            .with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_persists_one_day_session() {
        let store = Arc::new(MemorySessionStore::new());
        let before = Utc::now().timestamp_millis();

        let session = service(store.clone()).login("Ayoub", "11223344").await.unwrap();

        let after = Utc::now().timestamp_millis();
        assert_eq!(session.username, "Ayoub");
        assert!(session.expiry >= before + SESSION_TTL_MS);
        assert!(session.expiry <= after + SESSION_TTL_MS);
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_wrong_case_username_is_rejected_and_nothing_written() {
        let store = Arc::new(MemorySessionStore::new());
        let result = service(store.clone()).login("ayoub", "11223344").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_is_the_same_generic_failure() {
        let store = Arc::new(MemorySessionStore::new());
        let unknown_user = service(store.clone()).login("Nobody", "x").await.unwrap_err();
        let wrong_password = service(store.clone()).login("Ayoub", "x").await.unwrap_err();

        assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_logout_clears_the_record() {
        let store = Arc::new(MemorySessionStore::new());
        let service = service(store.clone());

        service.login("Ayoub", "11223344").await.unwrap();
        service.logout().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
