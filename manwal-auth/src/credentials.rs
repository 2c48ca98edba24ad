use async_trait::async_trait;

/// Credential verification capability. The control flow of the login
/// service never depends on which implementation is plugged in.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// The single build-time credential pair. Exact, case-sensitive match;
/// unknown user and wrong password are indistinguishable to the caller.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The pair the agency operates with
    pub fn builtin() -> Self {
        Self::new("Ayoub", "11223344")
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_match_only() {
        let creds = StaticCredentials::builtin();
        assert!(creds.verify("Ayoub", "11223344").await);
        assert!(!creds.verify("ayoub", "11223344").await);
        assert!(!creds.verify("Ayoub", "11223345").await);
        assert!(!creds.verify("", "").await);
    }
}
