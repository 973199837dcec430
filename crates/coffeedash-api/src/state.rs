use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use coffeedash_pipeline::{SelectionPipeline, SelectionSession};
use uuid::Uuid;

use crate::error::ApiError;

/// Idle time after which a session is dropped when no TTL is configured
pub const DEFAULT_SESSION_TTL_SECS: i64 = 30 * 60;

struct SessionEntry {
    session: Arc<Mutex<SelectionSession>>,
    last_seen: DateTime<Utc>,
}

type SessionTable = HashMap<Uuid, SessionEntry>;

/// Shared server state: the read-only pipeline plus one session per dashboard user.
///
/// The table lock is only held to look a session up; each session has its
/// own lock, so recomputes in different sessions run independently. Sessions
/// idle for longer than the TTL are evicted whenever the table is touched.
pub struct AppState {
    pub pipeline: Arc<SelectionPipeline>,
    pub started_at: DateTime<Utc>,
    session_ttl: Duration,
    sessions: Mutex<SessionTable>,
}

impl AppState {
    pub fn new(pipeline: Arc<SelectionPipeline>) -> Self {
        Self {
            pipeline,
            started_at: Utc::now(),
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    fn sessions(&self) -> Result<MutexGuard<'_, SessionTable>, ApiError> {
        self.sessions.lock().map_err(|e| {
            tracing::error!(error = %e, "Session table lock poisoned");
            ApiError::internal("Session table unavailable")
        })
    }

    fn evict_idle(&self, sessions: &mut SessionTable, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_seen <= self.session_ttl);

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, active = sessions.len(), "Idle sessions evicted");
        }
    }

    /// Register a fresh session and run `f` on it
    pub fn create_session<T>(
        &self,
        f: impl FnOnce(&mut SelectionSession) -> T,
    ) -> Result<(Uuid, T), ApiError> {
        let id = Uuid::new_v4();
        let mut session = self.pipeline.session();
        let value = f(&mut session);

        let now = Utc::now();
        let mut sessions = self.sessions()?;
        self.evict_idle(&mut sessions, now);
        sessions.insert(id, SessionEntry { session: Arc::new(Mutex::new(session)), last_seen: now });
        tracing::info!(session_id = %id, active = sessions.len(), "Session created");

        Ok((id, value))
    }

    /// Run `f` on an existing session and mark it as seen
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SelectionSession) -> T,
    ) -> Result<T, ApiError> {
        let session = {
            let now = Utc::now();
            let mut sessions = self.sessions()?;
            self.evict_idle(&mut sessions, now);
            let entry = sessions
                .get_mut(&id)
                .ok_or_else(|| ApiError::not_found("Session not found").with_details(id.to_string()))?;
            entry.last_seen = now;
            Arc::clone(&entry.session)
        };

        let mut session = session.lock().map_err(|e| {
            tracing::error!(session_id = %id, error = %e, "Session lock poisoned");
            ApiError::internal("Session unavailable")
        })?;
        Ok(f(&mut *session))
    }

    pub fn remove_session(&self, id: Uuid) -> Result<(), ApiError> {
        let mut sessions = self.sessions()?;
        match sessions.remove(&id) {
            Some(_) => {
                tracing::info!(session_id = %id, active = sessions.len(), "Session closed");
                Ok(())
            }
            None => Err(ApiError::not_found("Session not found").with_details(id.to_string())),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions().map(|sessions| sessions.len()).unwrap_or(0)
    }
}
