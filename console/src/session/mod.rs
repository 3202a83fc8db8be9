//! # Session State
//!
//! The one piece of process-wide state the client owns: an optional bearer
//! token and the matching user record.
//!
//! Two states, re-derived from persisted storage on startup:
//!
//! ```text
//! Unauthenticated ──login/register──▶ Authenticated(token)
//! Authenticated ──logout / any 401──▶ Unauthenticated
//! ```
//!
//! Reads and writes funnel through [`Session`], which holds the in-memory
//! cell behind a `parking_lot::RwLock` and mirrors every write into a
//! [`SessionStore`]. Stores are pluggable so tests can substitute
//! [`MemoryStore`]; [`FileStore`] is the client-local storage used by real
//! deployments, keyed under the fixed `"token"` and `"user"` entries.
//!
//! State changes are announced as [`SessionEvent`]s over an `async-channel`
//! sender when one is attached. `SessionExpired` is the signal the view
//! layer uses to navigate back to the login entry point.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::auth::UserInfo;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Session lifecycle notifications for the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Login or registration succeeded; a token is now held.
    SignedIn,
    /// Explicit logout.
    SignedOut,
    /// The backend rejected the token; the session was evicted and the view
    /// should navigate to the login entry point.
    SessionExpired,
}

/// Key/value persistence for the session, in the shape of browser
/// local storage. Implementations are best-effort: a store that cannot
/// persist must still behave consistently for reads in the same process.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// File-backed store: one JSON object per file, written on every change.
///
/// I/O failures are logged and swallowed; losing persistence degrades to an
/// in-memory session rather than failing the request that triggered the
/// write.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store at `path`, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt session store");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize session store");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session store");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        entries.remove(key);
        self.flush(&entries);
    }
}

// Stores are often shared between a session and the code that created them.
impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserInfo>,
}

struct SessionInner {
    state: RwLock<SessionState>,
    store: Box<dyn SessionStore>,
    events: Option<async_channel::Sender<SessionEvent>>,
}

/// Shared handle to the session cell. Cheap to clone; all clones observe the
/// same state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Create a session backed by `store`, re-deriving the current state from
    /// whatever the store already holds.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self::build(Box::new(store), None)
    }

    /// Like [`Session::new`], additionally announcing lifecycle changes on
    /// `events`.
    pub fn with_events(
        store: impl SessionStore + 'static,
        events: async_channel::Sender<SessionEvent>,
    ) -> Self {
        Self::build(Box::new(store), Some(events))
    }

    /// Ephemeral session for tests and one-shot tools.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    fn build(
        store: Box<dyn SessionStore>,
        events: Option<async_channel::Sender<SessionEvent>>,
    ) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());

        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(SessionState { token, user }),
                store,
                events,
            }),
        }
    }

    /// The held bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.inner.state.read().token.clone()
    }

    /// The signed-in user record, if authenticated.
    pub fn user(&self) -> Option<UserInfo> {
        self.inner.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().token.is_some()
    }

    /// Transition to `Authenticated`: hold and persist the token and user.
    pub fn sign_in(&self, token: String, user: UserInfo) {
        self.inner.store.set(TOKEN_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            self.inner.store.set(USER_KEY, &raw);
        }
        *self.inner.state.write() = SessionState {
            token: Some(token),
            user: Some(user),
        };
        self.emit(SessionEvent::SignedIn);
    }

    /// Explicit logout: clear held and persisted state.
    pub fn sign_out(&self) {
        self.clear();
        self.emit(SessionEvent::SignedOut);
    }

    /// Eviction after an authentication-failure response. Clears state like
    /// [`sign_out`](Session::sign_out) but announces `SessionExpired` so the
    /// view layer redirects to login.
    pub fn invalidate(&self) {
        self.clear();
        self.emit(SessionEvent::SessionExpired);
    }

    fn clear(&self) {
        self.inner.store.remove(TOKEN_KEY);
        self.inner.store.remove(USER_KEY);
        *self.inner.state.write() = SessionState::default();
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(tx) = &self.inner.events {
            // Events are advisory; a missing or saturated listener never
            // blocks the request path.
            let _ = tx.try_send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserInfo {
        UserInfo {
            id: 1,
            username: "operator".to_string(),
            email: Some("op@example.com".to_string()),
        }
    }

    #[test]
    fn test_sign_in_then_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.sign_in("jwt-abc".to_string(), test_user());
        assert_eq!(session.token().as_deref(), Some("jwt-abc"));
        assert_eq!(session.user().unwrap().username, "operator");

        session.sign_out();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_invalidate_emits_session_expired() {
        let (tx, rx) = async_channel::bounded(4);
        let session = Session::with_events(MemoryStore::new(), tx);

        session.sign_in("jwt-abc".to_string(), test_user());
        session.invalidate();

        assert!(!session.is_authenticated());
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::SignedIn);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::SessionExpired);
    }

    #[test]
    fn test_state_rederived_from_store() {
        let store = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "persisted-token");
        store.set(
            USER_KEY,
            &serde_json::to_string(&test_user()).unwrap(),
        );

        let session = Session::new(store.clone());
        assert_eq!(session.token().as_deref(), Some("persisted-token"));
        assert_eq!(session.user().unwrap().id, 1);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let session = Session::new(FileStore::open(&path));
            session.sign_in("file-token".to_string(), test_user());
        }

        // A fresh session over the same file re-derives the state
        let session = Session::new(FileStore::open(&path));
        assert_eq!(session.token().as_deref(), Some("file-token"));
        assert_eq!(session.user().unwrap().username, "operator");

        session.sign_out();
        let session = Session::new(FileStore::open(&path));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = Session::new(FileStore::open(&path));
        assert!(!session.is_authenticated());
    }
}
