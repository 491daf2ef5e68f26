//! In-process session registry.

use crate::service::content_store::{ContentStore, StoreError};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Stable identifier for one user session.
pub type SessionId = Uuid;

/// Default upper bound on concurrently open sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 64;

/// Session lookup/lifecycle errors.
#[derive(Debug)]
pub enum SessionError {
    SessionNotFound(SessionId),
    CapacityReached { max_sessions: usize },
    /// A previous holder panicked while holding a session lock.
    Poisoned,
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionNotFound(id) => write!(f, "session not found: {id}"),
            Self::CapacityReached { max_sessions } => {
                write!(f, "session capacity reached ({max_sessions})")
            }
            Self::Poisoned => write!(f, "session state is poisoned"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

type SharedStore = Arc<Mutex<ContentStore>>;
type SessionMap = BTreeMap<SessionId, SharedStore>;

/// Registry of open sessions, each owning one seeded `ContentStore`.
pub struct SessionRegistry {
    sessions: Mutex<SessionMap>,
    max_sessions: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRegistry {
    /// Creates an empty registry; `max_sessions` is clamped to at least 1.
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(BTreeMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Opens a new session with freshly seeded content.
    ///
    /// The store is built without holding the registry lock; capacity is
    /// checked before building and again before inserting.
    pub fn open_session(&self) -> Result<SessionId, SessionError> {
        {
            let sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
            self.check_capacity(&sessions)?;
        }

        let store = ContentStore::open_seeded()?;

        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        self.check_capacity(&sessions)?;
        let session_id = Uuid::new_v4();
        sessions.insert(session_id, Arc::new(Mutex::new(store)));
        info!(
            "event=session_open module=session status=ok session_id={} open_sessions={}",
            session_id,
            sessions.len()
        );
        Ok(session_id)
    }

    fn check_capacity(&self, sessions: &SessionMap) -> Result<(), SessionError> {
        if sessions.len() < self.max_sessions {
            return Ok(());
        }
        warn!(
            "event=session_open module=session status=rejected error_code=capacity_reached max_sessions={}",
            self.max_sessions
        );
        Err(SessionError::CapacityReached {
            max_sessions: self.max_sessions,
        })
    }

    /// Drops a session and all of its content.
    pub fn close_session(&self, session_id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        if sessions.remove(&session_id).is_none() {
            return Err(SessionError::SessionNotFound(session_id));
        }
        info!(
            "event=session_close module=session status=ok session_id={} open_sessions={}",
            session_id,
            sessions.len()
        );
        Ok(())
    }

    pub fn contains(&self, session_id: SessionId) -> bool {
        self.sessions
            .lock()
            .map(|sessions| sessions.contains_key(&session_id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .map(|sessions| sessions.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` with exclusive access to one session's store.
    ///
    /// The registry lock is released before `f` runs, so a slow operation on
    /// one session does not block other sessions.
    pub fn with_session<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut ContentStore) -> Result<T, StoreError>,
    ) -> Result<T, SessionError> {
        let store = {
            let sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
            sessions
                .get(&session_id)
                .cloned()
                .ok_or(SessionError::SessionNotFound(session_id))?
        };

        let mut guard = store.lock().map_err(|_| SessionError::Poisoned)?;
        f(&mut *guard).map_err(SessionError::from)
    }
}
