use crate::application::insights::ANALYST_SYSTEM_PROMPT;
use crate::config::GenAiConfig;
use crate::domain::errors::ServiceError;
use crate::domain::ports::TextCompletionService;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client for the Groq API.
pub struct GroqCompletionService {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl GroqCompletionService {
    /// Returns `None` when no API key is configured. This is the only place
    /// the credential is checked.
    pub fn from_config(config: &GenAiConfig) -> Option<Self> {
        let Some(api_key) = config.api_key.clone() else {
            warn!("GROQ_API_KEY not set. GenAI insights will be unavailable.");
            return None;
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        info!("GenAI configured: model {} at {}", config.model, config.base_url);

        Some(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ANALYST_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl TextCompletionService for GroqCompletionService {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        debug!("Sending chat completion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        extract_content(body)
    }

    fn name(&self) -> &str {
        "Groq"
    }
}

fn extract_content(body: ChatResponse) -> Result<String, ServiceError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ServiceError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GenAiConfig {
        GenAiConfig {
            api_key: Some("gsk_test".to_string()),
            base_url: "http://localhost:9/v1/".to_string(),
            ..GenAiConfig::default()
        }
    }

    #[test]
    fn test_unconfigured_returns_none() {
        assert!(GroqCompletionService::from_config(&GenAiConfig::default()).is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let service = GroqCompletionService::from_config(&configured()).unwrap();
        assert_eq!(service.endpoint, "http://localhost:9/v1/chat/completions");

        let json = serde_json::to_value(service.request_body("How are sales?")).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], ANALYST_SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "How are sales?");
        assert!((json["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_extract_content() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Sell more."}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(body).unwrap(), "Sell more.");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(extract_content(empty), Err(ServiceError::EmptyResponse)));
    }
}
