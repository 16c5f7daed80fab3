//! Fake Chat Client - deterministic chat engine for tests
//!
//! Never performs network calls; replies with a canned completion, echoes
//! the user prompt, or fails with an injected error.

use async_trait::async_trait;

use crate::application::ports::{ChatEnginePort, ChatError, ChatRole, CompletionRequest};

#[derive(Debug, Clone)]
enum FakeBehavior {
    Reply(String),
    EchoUserPrompt,
    Fail(String),
}

/// Fake Chat Client
#[derive(Debug, Clone)]
pub struct FakeChatClient {
    behavior: FakeBehavior,
}

impl FakeChatClient {
    /// Always reply with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            behavior: FakeBehavior::Reply(reply.into()),
        }
    }

    /// Reply with the content of the request's last user message. Useful
    /// for asserting that concurrent requests do not cross-talk.
    pub fn echoing() -> Self {
        Self {
            behavior: FakeBehavior::EchoUserPrompt,
        }
    }

    /// Always fail with a service error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: FakeBehavior::Fail(message.into()),
        }
    }
}

#[async_trait]
impl ChatEnginePort for FakeChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatError> {
        match &self.behavior {
            FakeBehavior::Reply(reply) => Ok(reply.clone()),
            FakeBehavior::EchoUserPrompt => Ok(request
                .messages
                .iter()
                .rev()
                .find(|m| m.role == ChatRole::User)
                .map(|m| m.content.clone())
                .unwrap_or_default()),
            FakeBehavior::Fail(message) => Err(ChatError::ServiceError(message.clone())),
        }
    }
}
