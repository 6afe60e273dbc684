//! Session registry
//!
//! Tracks active sessions as opaque token to role mappings. Tokens are
//! issued at login, carried by the client in a cookie, and removed at
//! logout. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::credentials::Role;

/// In-memory token registry shared across request handlers.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, Role>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh opaque token bound to the given role.
    pub async fn login(&self, role: Role) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.lock().await.insert(token.clone(), role);
        token
    }

    /// Resolves a token to its role, if the session is still active.
    pub async fn role_for(&self, token: &str) -> Option<Role> {
        self.sessions.lock().await.get(token).copied()
    }

    /// Removes the session for the given token, if any.
    pub async fn logout(&self, token: &str) {
        self.sessions.lock().await.remove(token);
    }
}
