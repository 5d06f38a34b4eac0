//! Conversational intake assistant backed by an external completion API.

mod openai;
mod provider;
pub mod router;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::intake::{ChatMessage, ChatRole};

pub use openai::OpenAiClient;
pub use provider::{CompletionError, CompletionProvider, PromptMessage};
pub use router::triage_router;

pub const SYSTEM_PROMPT: &str = "You are an AI assistant helping a user gather information to fill out South African CIPC trademark form TM1. You are not a lawyer and you do not provide legal advice, opinions, or predictions of success. Use simple, plain language. Ask only for information needed to complete the form. If asked for legal advice, decline and suggest consulting an attorney.";

pub const UNCONFIGURED_REPLY: &str =
    "OpenAI API key not configured. Please set OPENAI_API_KEY in your environment.";

enum Backend {
    Unconfigured,
    Provider(Arc<dyn CompletionProvider>),
}

/// Forwards conversations to the provider and always answers with text.
pub struct TriageService {
    backend: Backend,
    model: String,
}

impl TriageService {
    /// Builds the OpenAI client only when a key is present.
    pub fn from_config(config: &LlmConfig) -> Self {
        if !config.is_configured() {
            return Self::unconfigured();
        }

        let client = OpenAiClient::new(config.api_key.clone(), config.base_url.clone());
        Self::with_provider(Arc::new(client), config.model.clone())
    }

    pub fn unconfigured() -> Self {
        Self {
            backend: Backend::Unconfigured,
            model: String::new(),
        }
    }

    pub fn with_provider(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            backend: Backend::Provider(provider),
            model: model.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Provider(_))
    }

    pub async fn reply(&self, messages: &[ChatMessage]) -> String {
        let provider = match &self.backend {
            Backend::Unconfigured => return UNCONFIGURED_REPLY.to_string(),
            Backend::Provider(provider) => provider,
        };

        let prompt = build_prompt(messages);
        debug!(turns = messages.len(), model = %self.model, "forwarding triage conversation");

        match provider.complete(&self.model, &prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "triage completion failed");
                apology(&err)
            }
        }
    }
}

impl std::fmt::Debug for TriageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageService")
            .field("configured", &self.is_configured())
            .field("model", &self.model)
            .finish()
    }
}

/// System instruction followed by the client turns with normalized roles.
pub fn build_prompt(messages: &[ChatMessage]) -> Vec<PromptMessage> {
    std::iter::once(PromptMessage {
        role: ChatRole::System,
        content: SYSTEM_PROMPT.to_string(),
    })
    .chain(messages.iter().map(|message| PromptMessage {
        role: ChatRole::normalize(&message.role),
        content: message.content.clone(),
    }))
    .collect()
}

fn apology(err: &CompletionError) -> String {
    format!(
        "Sorry, I could not process that request right now. Please try again in a moment. (Details: {err})"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(String, Vec<PromptMessage>)>>,
    }

    impl RecordingProvider {
        fn calls(&self) -> Vec<(String, Vec<PromptMessage>)> {
            self.calls.lock().expect("calls mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for RecordingProvider {
        async fn complete(
            &self,
            model: &str,
            messages: &[PromptMessage],
        ) -> Result<String, CompletionError> {
            self.calls
                .lock()
                .expect("calls mutex poisoned")
                .push((model.to_string(), messages.to_vec()));
            Ok("What is the name of your mark?".to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(
            &self,
            _model: &str,
            _messages: &[PromptMessage],
        ) -> Result<String, CompletionError> {
            Err(CompletionError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn unconfigured_service_returns_placeholder() {
        let service = TriageService::unconfigured();
        let reply = service.reply(&[ChatMessage::new("user", "hello")]).await;
        assert_eq!(reply, UNCONFIGURED_REPLY);
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn blank_key_never_reaches_the_network() {
        // An unroutable base URL would produce an apology if a request were made.
        let config = LlmConfig {
            api_key: "   ".to_string(),
            model: "gpt-4o".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        };
        let service = TriageService::from_config(&config);
        let reply = service.reply(&[ChatMessage::new("user", "hello")]).await;
        assert_eq!(reply, UNCONFIGURED_REPLY);
    }

    #[tokio::test]
    async fn prepends_system_prompt_and_normalizes_roles() {
        let provider = Arc::new(RecordingProvider::default());
        let service = TriageService::with_provider(provider.clone(), "gpt-4o");

        let reply = service
            .reply(&[
                ChatMessage::new("moderator", "Please keep it short"),
                ChatMessage::new("assistant", "Sure."),
                ChatMessage::new("user", "I sell coffee"),
            ])
            .await;
        assert_eq!(reply, "What is the name of your mark?");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let (model, prompt) = &calls[0];
        assert_eq!(model, "gpt-4o");
        assert_eq!(prompt.len(), 4);
        assert_eq!(prompt[0].role, ChatRole::System);
        assert_eq!(prompt[0].content, SYSTEM_PROMPT);
        assert_eq!(prompt[1].role, ChatRole::User);
        assert_eq!(prompt[1].content, "Please keep it short");
        assert_eq!(prompt[2].role, ChatRole::Assistant);
        assert_eq!(prompt[3].role, ChatRole::User);
    }

    #[tokio::test]
    async fn provider_failure_becomes_apology() {
        let service = TriageService::with_provider(Arc::new(FailingProvider), "gpt-4o");
        let reply = service.reply(&[ChatMessage::new("user", "hi")]).await;
        assert!(reply.starts_with("Sorry, I could not process that request right now."));
        assert!(reply.contains("(Details: completion provider returned 429: rate limited)"));
    }

    #[test]
    fn empty_conversation_still_carries_system_prompt() {
        let prompt = build_prompt(&[]);
        assert_eq!(prompt.len(), 1);
        assert_eq!(prompt[0].role, ChatRole::System);
    }
}
