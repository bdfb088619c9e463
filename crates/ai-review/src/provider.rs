//! Chat completion providers
//!
//! The review pipeline talks to the model through the [`ChatProvider`]
//! trait so tests can substitute a stub; [`OpenAiProvider`] is the real
//! implementation against an OpenAI-compatible `/chat/completions`
//! endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{classify_upstream, ReviewError};

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one system+user exchange and return the assistant message text
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ReviewError>;
}

#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    endpoint: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(
        api_key: String,
        model: String,
        endpoint: Option<String>,
    ) -> Result<Self, ReviewError> {
        if api_key.is_empty() {
            return Err(ReviewError::Auth);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            api_key,
            model,
            endpoint: endpoint.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            client,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ReviewError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: 0.3,
            max_tokens: 4000,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        debug!("Sending review request to {} ({})", self.endpoint, self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Chat API error: {}", body);
            return Err(classify_upstream(&body));
        }

        let parsed: ChatResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(ReviewError::EmptyResponse)?;

        Ok(choice.message.content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_rejects_empty_api_key() {
        let provider = OpenAiProvider::new(String::new(), "gpt-4o-mini".to_string(), None);
        assert!(matches!(provider, Err(ReviewError::Auth)));
    }

    #[tokio::test]
    async fn test_returns_assistant_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "{\"ok\": true}"}}]}"#,
            )
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            Some(server.url()),
        )
        .unwrap();

        let content = provider.complete("system", "user").await.unwrap();
        assert_eq!(content, "{\"ok\": true}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_maps_quota_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "You exceeded your current quota"}}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            Some(server.url()),
        )
        .unwrap();

        let err = provider.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, ReviewError::QuotaExceeded));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let provider = OpenAiProvider::new(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            Some(server.url()),
        )
        .unwrap();

        let err = provider.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, ReviewError::EmptyResponse));
    }
}
