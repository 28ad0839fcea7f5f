//! HTTP client for the assistant service.
//!
//! The service exposes a single endpoint that accepts a prompt and a session
//! identifier and answers with one complete reply. Every failure, whether the
//! request never reached the server or the server answered with a non-success
//! status, settles the request as an [`AskError`].

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::api::{AskRequest, AskResponse};
use crate::utils::url::construct_api_url;

/// Shown when a failure carries no text of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Shown for any non-success HTTP status.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    /// The server answered with a non-success status.
    Status(StatusCode),
    /// The request could not be sent or the connection failed.
    Transport(String),
    /// The reply body was not the expected JSON document.
    Decode(String),
}

impl AskError {
    /// Text shown to the user in the error line.
    pub fn user_message(&self) -> String {
        match self {
            AskError::Status(_) => SERVER_ERROR_MESSAGE.to_string(),
            AskError::Transport(text) | AskError::Decode(text) if text.is_empty() => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AskError::Transport(text) | AskError::Decode(text) => text.clone(),
        }
    }
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskError::Status(status) => write!(f, "{SERVER_ERROR_MESSAGE} ({status})"),
            AskError::Transport(_) | AskError::Decode(_) => f.write_str(&self.user_message()),
        }
    }
}

impl StdError for AskError {}

/// Something that can answer a prompt.
///
/// The terminal UI and the one-shot `say` command only depend on this trait,
/// so tests can drive the conversation without a network.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<String, AskError>;
}

pub struct HttpAssistant {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistant {
    pub fn new(client: reqwest::Client, base_url: &str, ask_path: &str) -> Self {
        Self {
            client,
            endpoint: construct_api_url(base_url, ask_path),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssistantBackend for HttpAssistant {
    async fn ask(&self, request: &AskRequest) -> Result<String, AskError> {
        debug!(
            endpoint = %self.endpoint,
            session_id = %request.session_id,
            prompt_len = request.prompt.len(),
            "sending prompt"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| AskError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "assistant returned non-success status");
            return Err(AskError::Status(status));
        }

        let body = response
            .json::<AskResponse>()
            .await
            .map_err(|err| AskError::Decode(err.to_string()))?;

        debug!(reply_len = body.response.len(), "received reply");
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests;
