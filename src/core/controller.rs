use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{AskError, AskRequest, AssistantBackend};
use crate::core::conversation::ConversationState;
use crate::core::session::SessionContext;

/// How a spawned request settled.
pub type AskOutcome = Result<String, AskError>;

/// Owns the conversation and the only path to the assistant backend.
pub struct ConversationController {
    state: ConversationState,
    session: SessionContext,
    backend: Arc<dyn AssistantBackend>,
}

impl ConversationController {
    pub fn new(session: SessionContext, backend: Arc<dyn AssistantBackend>) -> Self {
        Self {
            state: ConversationState::new(),
            session,
            backend,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Record the user turn and build the request for it.
    pub fn begin_submit(&mut self, text: &str) -> Option<AskRequest> {
        if !self.state.submit_start(text) {
            return None;
        }

        Some(AskRequest {
            prompt: text.to_string(),
            session_id: self.session.session_id().to_string(),
        })
    }

    pub fn begin_submit_draft(&mut self) -> Option<AskRequest> {
        let text = self.state.draft().to_string();
        self.begin_submit(&text)
    }

    pub fn settle(&mut self, outcome: AskOutcome) {
        match outcome {
            Ok(reply) => {
                if !self.state.receive_success(reply) {
                    debug!("ignoring reply with no request in flight");
                }
            }
            Err(err) => {
                warn!(error = %err, "request to assistant failed");
                if !self.state.receive_failure(err.user_message()) {
                    debug!("ignoring failure with no request in flight");
                }
            }
        }
    }

    /// Send `text` and wait for the reply. Returns false if the submit was
    /// refused.
    pub async fn submit(&mut self, text: &str) -> bool {
        let Some(request) = self.begin_submit(text) else {
            return false;
        };

        let outcome = self.backend.ask(&request).await;
        self.settle(outcome);
        true
    }

    /// Send the current draft on a background task. The outcome arrives on
    /// `tx` and must be passed back to [`settle`](Self::settle).
    pub fn spawn_submit(&mut self, tx: mpsc::UnboundedSender<AskOutcome>) -> bool {
        let Some(request) = self.begin_submit_draft() else {
            return false;
        };

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let outcome = backend.ask(&request).await;
            // The receiver is gone once the user quits; the reply is dropped.
            let _ = tx.send(outcome);
        });
        true
    }
}
