//! The signed-in session.
//!
//! [`SessionStore`] is created once at startup and shared (`Arc`) with every
//! consumer. The identity and its credential token are always written and
//! cleared together; there is never a token without an identity or the
//! reverse. Consumers that need to react to sign-in or sign-out call
//! [`SessionStore::subscribe`].

use std::sync::Arc;

use async_trait::async_trait;
use donezo_core::types::{Identity, LoginResponse};
use tokio::sync::{broadcast, RwLock};

use crate::api::ApiError;
use crate::storage::{SessionStorage, StorageError};

/// Storage key for the credential token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the JSON-serialized [`Identity`].
pub const USER_KEY: &str = "user";

/// Shown when the backend gives no reason for a failed login.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check credentials / API.";

const EVENT_CAPACITY: usize = 16;

// ---------------------------------------------------------------------------
// Collaborators and errors
// ---------------------------------------------------------------------------

/// Exchanges credentials for an identity and token.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credentials were rejected or the request never completed.
    #[error("Login failed: {0}")]
    Api(#[from] ApiError),

    /// The session could not be saved.
    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Inline message for the login form.
    pub fn user_message(&self) -> &str {
        match self {
            AuthError::Api(e) => e.server_message().unwrap_or(LOGIN_FAILED_MESSAGE),
            AuthError::Storage(_) => LOGIN_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn(Identity),
    LoggedOut,
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Session {
    identity: Identity,
    token: String,
}

pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    authenticator: Arc<dyn Authenticator>,
    current: RwLock<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Create the store, resuming any session left in `storage`.
    ///
    /// A half-written session (only one of the two keys, or an unreadable
    /// identity) is discarded and both keys are cleared. Storage that cannot
    /// be read at all is wiped so the next login can write to it.
    pub fn restore(
        storage: impl SessionStorage + 'static,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let current = match read_session(&storage) {
            Ok(Some(session)) => {
                tracing::debug!(user_id = session.identity.id, "Restored session");
                Some(session)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session");
                if let Err(e) = storage.clear() {
                    tracing::error!(error = %e, "Failed to clear unreadable session");
                }
                None
            }
        };

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            storage: Box::new(storage),
            authenticator,
            current: RwLock::new(current),
            events,
        }
    }

    /// Sign in and persist the session.
    ///
    /// On failure the previous session, if any, is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let response = self
            .authenticator
            .authenticate(email, password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Login rejected"))?;
        let (identity, token) = response.into_parts();

        let mut current = self.current.write().await;
        self.persist(&identity, &token)?;
        *current = Some(Session {
            identity: identity.clone(),
            token,
        });
        drop(current);

        tracing::info!(user_id = identity.id, "Signed in");
        // Zero receivers is fine.
        let _ = self.events.send(SessionEvent::LoggedIn(identity.clone()));
        Ok(identity)
    }

    /// Clear the session from memory and storage. Never fails; storage
    /// errors are logged.
    pub async fn logout(&self) {
        let mut current = self.current.write().await;
        clear_storage(self.storage.as_ref());
        let previous = current.take();
        drop(current);

        match previous {
            Some(session) => tracing::info!(user_id = session.identity.id, "Signed out"),
            None => tracing::debug!("Sign-out with no active session"),
        }
        let _ = self.events.send(SessionEvent::LoggedOut);
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.current.read().await.as_ref().map(|s| s.identity.clone())
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Write both keys, rolling back the token if the identity write fails.
    fn persist(&self, identity: &Identity, token: &str) -> Result<(), StorageError> {
        let user = serde_json::to_string(identity).map_err(StorageError::Corrupt)?;
        self.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.storage.set(USER_KEY, &user) {
            if let Err(rollback) = self.storage.remove(TOKEN_KEY) {
                tracing::error!(error = %rollback, "Failed to roll back session token");
            }
            return Err(e);
        }
        Ok(())
    }
}

fn read_session(storage: &dyn SessionStorage) -> Result<Option<Session>, StorageError> {
    let token = storage.get(TOKEN_KEY)?;
    let user = storage.get(USER_KEY)?;

    match (token, user) {
        (Some(token), Some(user)) => {
            let identity: Identity = serde_json::from_str(&user)?;
            Ok(Some(Session { identity, token }))
        }
        (None, None) => Ok(None),
        _ => {
            tracing::warn!("Discarding half-written session");
            clear_storage(storage);
            Ok(None)
        }
    }
}

fn clear_storage(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            tracing::warn!(key, error = %e, "Failed to clear session key");
        }
    }
}
