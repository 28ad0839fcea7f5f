use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::storage::SessionStore;

/// Storage key holding the session identifier.
pub const SESSION_KEY: &str = "chat_session_id";

/// Identity of this client towards the assistant service.
///
/// Built once at startup and handed to the conversation controller. The
/// identifier never changes for the lifetime of the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: String,
    persisted: bool,
}

impl SessionContext {
    /// Read the stored identifier, or create and store a new one.
    ///
    /// Storage failures are not fatal: the context falls back to an
    /// identifier that only lives for this run.
    pub fn initialize(store: &mut dyn SessionStore) -> Self {
        match store.get(SESSION_KEY) {
            Ok(Some(existing)) if !existing.is_empty() => {
                debug!(location = %store.describe(), "reusing stored session id");
                return Self {
                    session_id: existing,
                    persisted: true,
                };
            }
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "session storage unavailable; using an ephemeral session id");
                return Self::ephemeral();
            }
        }

        let session_id = generate_session_id();
        match store.set(SESSION_KEY, &session_id) {
            Ok(()) => {
                debug!(location = %store.describe(), "created new session id");
                Self {
                    session_id,
                    persisted: true,
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to persist session id; it will not survive this run");
                Self {
                    session_id,
                    persisted: false,
                }
            }
        }
    }

    /// A fresh identifier that is never written anywhere.
    pub fn ephemeral() -> Self {
        Self {
            session_id: generate_session_id(),
            persisted: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}

fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}
