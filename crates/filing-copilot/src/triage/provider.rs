use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::intake::ChatRole;

/// Message as forwarded to the completion provider, role already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion provider returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Provider(String),
}

/// External chat-completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, CompletionError>;
}
