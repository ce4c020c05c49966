//! Session-scoped upload context
//!
//! Each browser session owns one slot holding the most recent successful
//! upload. Generation requests read the slot; only a fully parsed upload
//! writes it, so a failed upload or generation leaves the previous
//! document in place.
//!
//! Sessions idle for longer than the store's TTL are evicted the next time
//! any session is created or looked up.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use doc_extract::ExtractedDocument;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServerError;

/// Idle time after which a session is dropped
pub const DEFAULT_SESSION_TTL_MINUTES: u32 = 60;

#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// When `current` was last replaced
    pub updated_at: DateTime<Utc>,
    /// Last request that touched this session
    pub last_active: DateTime<Utc>,
    pub current: Option<Arc<ExtractedDocument>>,
}

impl SessionContext {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            last_active: now,
            current: None,
        }
    }
}

/// In-memory session map shared by all handlers
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::minutes(i64::from(DEFAULT_SESSION_TTL_MINUTES)))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create(&self) -> SessionContext {
        let now = Utc::now();
        let session = SessionContext::new(now);

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        sessions.insert(session.id, session.clone());
        debug!("Created session {} ({} active)", session.id, sessions.len());
        session
    }

    /// Look up a live session and mark it active
    pub async fn get(&self, id: Uuid) -> Result<SessionContext, ServerError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        let session = sessions
            .get_mut(&id)
            .ok_or(ServerError::SessionNotFound(id))?;
        session.last_active = now;
        Ok(session.clone())
    }

    /// The session's current document, or `NoDocument` when nothing has
    /// been uploaded yet
    pub async fn current(&self, id: Uuid) -> Result<Arc<ExtractedDocument>, ServerError> {
        self.get(id).await?.current.ok_or(ServerError::NoDocument)
    }

    /// Replace the current document wholesale
    pub async fn replace_current(
        &self,
        id: Uuid,
        document: ExtractedDocument,
    ) -> Result<Arc<ExtractedDocument>, ServerError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        let session = sessions
            .get_mut(&id)
            .ok_or(ServerError::SessionNotFound(id))?;
        let document = Arc::new(document);
        session.current = Some(Arc::clone(&document));
        session.updated_at = now;
        session.last_active = now;
        debug!("Session {} now holds a {:?} document", id, document.kind());
        Ok(document)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ServerError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| debug!("Removed session {}", id))
            .ok_or(ServerError::SessionNotFound(id))
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, SessionContext>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_active < self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {} idle session(s)", evicted);
        }
    }
}
