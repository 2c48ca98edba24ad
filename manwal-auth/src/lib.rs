pub mod credentials;
pub mod guard;
pub mod service;
pub mod session;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use guard::{AuthState, SessionGuard};
pub use service::{AuthError, LoginService};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore, SessionStoreError, SESSION_TTL_MS};
