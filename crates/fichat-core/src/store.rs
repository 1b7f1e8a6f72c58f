// crates/fichat-core/src/store.rs

//! Session bookkeeping for boundaries that serve many conversations.

use crate::answer::{Answer, Reply};
use crate::error::{FiError, Result};
use crate::router::Router;
use crate::session::Session;
use dashmap::DashMap;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Conversations keyed by session id.
///
/// Each id owns its own [`Session`]; a turn only locks its own entry, so
/// concurrent conversations never see each other's category.
#[derive(Debug)]
pub struct SessionStore {
    router: Router,
    sessions: DashMap<SessionId, Session>,
}

impl SessionStore {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            sessions: DashMap::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Starts a fresh conversation and returns its id.
    pub fn open(&self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Session::new());
        tracing::debug!(session = %id, "session opened");
        id
    }

    /// Current state of `id`, if the session exists.
    pub fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).map(|s| *s)
    }

    /// Runs one turn for `id`.
    ///
    /// Only [`SessionStore::open`] creates sessions; an unknown id is
    /// [`FiError::NotFound`]. A farewell ends the conversation and drops it.
    pub fn converse(&self, id: SessionId, text: &str) -> Result<Reply> {
        let reply = {
            let mut entry = self
                .sessions
                .get_mut(&id)
                .ok_or_else(|| FiError::NotFound(format!("unknown session {id}")))?;
            let (reply, next) = self.router.converse(text, *entry)?;
            *entry = next;
            reply
        };

        if matches!(reply.answer, Answer::Farewell(_)) {
            self.close(&id);
        }
        Ok(reply)
    }

    /// Forgets `id`. Returns whether it existed.
    pub fn close(&self, id: &SessionId) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session = %id, "session closed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
