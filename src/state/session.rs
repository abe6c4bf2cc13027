//! Session State
//!
//! Login/logout state machine with a pluggable authentication backend.
//! The only implementation is a mock that accepts any non-empty
//! credentials after an artificial delay standing in for network latency.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

/// Storage key for the persisted session blob.
pub const SESSION_KEY: &str = "airway-auth";

/// Simulated network latency for the mock login, in milliseconds.
const LOGIN_LATENCY_MS: u32 = 1_000;

/// The signed-in employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub employee_id: String,
    pub department: String,
}

/// What gets persisted for an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: UserProfile,
    pub token: String,
}

/// Login failure reported back to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid credentials"),
        }
    }
}

/// Authentication capability the session controller calls.
///
/// A real backend would wrap an HTTP client here; the portal only ships
/// [`MockAuth`].
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionRecord, LoginError>;
}

/// Mock backend: fabricates a canonical pilot profile for any non-empty
/// credentials, after its configured latency.
#[derive(Clone, Copy)]
pub struct MockAuth {
    latency_ms: u32,
}

impl MockAuth {
    pub fn new() -> Self {
        Self {
            latency_ms: LOGIN_LATENCY_MS,
        }
    }

    /// Zero-latency variant so tests resolve immediately.
    pub fn instant() -> Self {
        Self { latency_ms: 0 }
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthBackend for MockAuth {
    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionRecord, LoginError> {
        // TimeoutFuture is wasm-only; zero latency skips it so native tests
        // run deterministically.
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }

        if email.is_empty() || password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(SessionRecord {
            user: UserProfile {
                id: "1".to_string(),
                name: "John Pilot".to_string(),
                email: email.to_string(),
                role: "Captain".to_string(),
                employee_id: "AW001".to_string(),
                department: "Flight Operations".to_string(),
            },
            token: "mock-jwt-token".to_string(),
        })
    }
}

/// Holds the authenticated session, restoring it from storage on startup.
///
/// Two states: logged out (`session` is `None`) and logged in. The view
/// layer switches between the credential form and the dashboard based on
/// which state the controller is in.
pub struct SessionController<S: KeyValueStorage, A: AuthBackend> {
    storage: S,
    auth: A,
    session: Option<SessionRecord>,
}

impl<S: KeyValueStorage, A: AuthBackend> SessionController<S, A> {
    /// Restore the session from storage. A stored blob that fails to parse
    /// is purged and the controller starts logged out; no error surfaces.
    pub fn restore(storage: S, auth: A) -> Self {
        let session = storage.get(SESSION_KEY).and_then(|blob| {
            match serde_json::from_str::<SessionRecord>(&blob) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("discarding unreadable session data: {err}");
                    storage.remove(SESSION_KEY);
                    None
                }
            }
        });

        Self {
            storage,
            auth,
            session,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Attempt a login through the auth backend. On success the session is
    /// persisted and held in memory until [`logout`](Self::logout).
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        let record = self.auth.authenticate(email, password).await?;

        match serde_json::to_string(&record) {
            Ok(blob) => self.storage.set(SESSION_KEY, &blob),
            Err(err) => log::error!("failed to serialize session: {err}"),
        }
        self.session = Some(record);

        Ok(())
    }

    /// Erase the persisted session and clear the in-memory state.
    pub fn logout(&mut self) {
        self.storage.remove(SESSION_KEY);
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;

    fn controller(storage: MemoryStorage) -> SessionController<MemoryStorage, MockAuth> {
        SessionController::restore(storage, MockAuth::instant())
    }

    #[test]
    fn starts_logged_out_with_empty_storage() {
        let session = controller(MemoryStorage::default());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn successful_login_persists_and_survives_restart() {
        let storage = MemoryStorage::default();
        let mut session = controller(storage.clone());

        block_on(session.login("a@b.com", "x")).unwrap();
        assert!(session.is_authenticated());
        assert!(storage.get(SESSION_KEY).is_some());

        // A fresh controller over the same storage restores the session.
        let restored = controller(storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().unwrap().email, "a@b.com");
        assert_eq!(restored.user().unwrap().name, "John Pilot");
    }

    #[test]
    fn empty_credentials_fail_without_persisting() {
        let storage = MemoryStorage::default();
        let mut session = controller(storage.clone());

        let err = block_on(session.login("", "x")).unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = block_on(session.login("a@b.com", "")).unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);

        assert!(!session.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY), None);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = MemoryStorage::default();
        let mut session = controller(storage.clone());

        block_on(session.login("a@b.com", "x")).unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY), None);

        let restored = controller(storage);
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn malformed_blob_is_purged_on_restore() {
        let storage = MemoryStorage::default();
        storage.set(SESSION_KEY, "{not json");

        let session = controller(storage.clone());
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY), None);
    }

    #[test]
    fn persisted_blob_uses_camel_case_field_names() {
        let storage = MemoryStorage::default();
        let mut session = controller(storage.clone());

        block_on(session.login("a@b.com", "x")).unwrap();

        let blob = storage.get(SESSION_KEY).unwrap();
        assert!(blob.contains("\"employeeId\":\"AW001\""));
        assert!(blob.contains("\"token\":\"mock-jwt-token\""));
    }
}
