//! Transcript and input state with explicit transitions.
//!
//! Every change to the conversation goes through one of the transition
//! methods below, so the UI can be redrawn from this struct alone and the
//! behavior can be tested without a terminal or a network.

use crate::core::message::Message;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
    loading: bool,
    error: String,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last failure message, empty when the last request did not fail.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.draft.trim().is_empty()
    }

    /// Idle -> Sending.
    ///
    /// Returns false and leaves the state untouched when `text` is blank or a
    /// request is already in flight.
    pub fn submit_start(&mut self, text: &str) -> bool {
        if self.loading || text.trim().is_empty() {
            return false;
        }

        self.messages.push(Message::user(text));
        self.draft.clear();
        self.error.clear();
        self.loading = true;
        true
    }

    /// Sending -> Idle with a new assistant turn.
    pub fn receive_success(&mut self, reply: impl Into<String>) -> bool {
        if !self.loading {
            return false;
        }

        self.messages.push(Message::assistant(reply));
        self.loading = false;
        true
    }

    /// Sending -> Idle with an error. The user turn stays in the transcript.
    pub fn receive_failure(&mut self, message: impl Into<String>) -> bool {
        if !self.loading {
            return false;
        }

        self.error = message.into();
        self.loading = false;
        true
    }
}
