#[cfg(test)]
use crate::api::{AskError, AskRequest, AssistantBackend};
#[cfg(test)]
use crate::core::controller::{AskOutcome, ConversationController};
#[cfg(test)]
use crate::core::session::SessionContext;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Backend that replays canned outcomes and records every request.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    outcomes: Arc<Mutex<VecDeque<AskOutcome>>>,
    requests: Arc<Mutex<Vec<AskRequest>>>,
}

#[cfg(test)]
impl ScriptedBackend {
    pub fn new(outcomes: impl IntoIterator<Item = AskOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<AskRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl AssistantBackend for ScriptedBackend {
    async fn ask(&self, request: &AskRequest) -> Result<String, AskError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AskError::Transport("no scripted reply".to_string())))
    }
}

#[cfg(test)]
pub fn create_test_controller(backend: ScriptedBackend) -> ConversationController {
    ConversationController::new(SessionContext::ephemeral(), Arc::new(backend))
}

#[cfg(test)]
pub const SAMPLE_LEGAL_REPLY: &str = "A tort is a civil wrong that causes a claimant to suffer loss or harm.\n\nThe main categories are:\n  - negligence\n  - intentional torts\n  - strict liability\n\nThis is general information, not legal advice.";
