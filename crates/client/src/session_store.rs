//! Session persistence.
//!
//! One serialized session record, kept as a JSON file under the user's
//! config directory, behind a trait so embedders and tests can substitute
//! their own storage.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use bibliotek_auth::Session;

/// File name of the persisted session record.
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no config directory available")]
    NoConfigDir,
}

/// Durable storage for the single active session record.
///
/// All writes are wholesale (last-writer-wins); there is at most one logical
/// session per process.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, StoreError>;
    fn save(&self, session: &Session) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store under the user's config directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store under `<config_dir>/bibliotek/session.json`.
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self {
            path: dir.join("bibliotek").join(SESSION_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupted record is as good as no record; drop it.
                tracing::warn!(error = %e, path = %self.path.display(), "discarding unreadable session record");
                let _ = std::fs::remove_file(&self.path);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(session)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibliotek_auth::Role;
    use bibliotek_core::UserId;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bibliotek-test-{}-{name}", std::process::id()))
            .join(SESSION_FILE)
    }

    fn sample_session() -> Session {
        Session::new(UserId::new(), "reader@example.com", Role::User)
    }

    #[test]
    fn file_store_round_trips_a_session() {
        let store = FileSessionStore::with_path(temp_path("roundtrip"));
        let session = sample_session();

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn missing_file_loads_as_no_session() {
        let store = FileSessionStore::with_path(temp_path("missing"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupted_record_is_discarded() {
        let path = temp_path("corrupted");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::with_path(&path);
        assert_eq!(store.load().unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn clearing_twice_is_fine() {
        let store = FileSessionStore::with_path(temp_path("clear-twice"));
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySessionStore::new();
        let session = sample_session();
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
