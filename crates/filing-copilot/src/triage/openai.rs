use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::{CompletionError, CompletionProvider, PromptMessage};

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: CompletionResponse = response.json().await?;
        first_reply(data)
    }
}

// A present choice with null content reads as an empty reply.
fn first_reply(data: CompletionResponse) -> Result<String, CompletionError> {
    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Provider("no choices returned".to_string()))?;
    Ok(choice.message.content.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ChatRole;

    #[test]
    fn request_body_uses_lowercase_roles() {
        let messages = vec![PromptMessage {
            role: ChatRole::System,
            content: "be brief".to_string(),
        }];
        let body = serde_json::to_value(CompletionRequest {
            model: "gpt-4o",
            messages: &messages,
        })
        .expect("serializes");
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = OpenAiClient::new("sk-test", "https://api.openai.com/v1/");
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert!(!format!("{client:?}").contains("sk-test"));
    }

    #[test]
    fn missing_content_reads_as_empty() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .expect("parses");
        assert_eq!(first_reply(parsed).expect("one choice"), "");
    }

    #[test]
    fn empty_choices_is_a_provider_error() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices":[]}"#).expect("parses");
        let err = first_reply(parsed).expect_err("no choice to read");
        assert!(matches!(err, CompletionError::Provider(_)));
        assert_eq!(err.to_string(), "no choices returned");
    }
}
