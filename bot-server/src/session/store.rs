//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::Session;

/// Process-wide session storage, keyed by user id.
///
/// Sessions are created lazily on first contact and never expire. Each
/// session sits behind its own mutex, and the dialogue holds that mutex
/// for a whole conversation turn; two messages from the same user landing
/// in one webhook batch are therefore applied in sequence rather than both
/// reading the same pre-transition state.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<Session>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `user_id`, creating it on first sight.
    pub async fn session(&self, user_id: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(user_id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(user_id.to_string()).or_default())
    }

    /// Number of users seen so far.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
