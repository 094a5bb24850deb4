//! OpenAI chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Default API base URL for the hosted model endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// A message in a conversation with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (e.g., "system", "user", "assistant").
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request for text generation from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier to use for generation.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 - 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a new generation request with default parameters.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature for this request.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max tokens for this request.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Unique identifier for this response.
    pub id: String,
    /// Model that generated this response.
    pub model: String,
    /// Generated choices/completions.
    pub choices: Vec<Choice>,
    /// Token usage statistics.
    #[serde(default)]
    pub usage: Usage,
}

impl GenerationResponse {
    /// Content of the first choice, if available.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single generated choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice in the response.
    pub index: u32,
    /// Generated message.
    pub message: Message,
    /// Reason the generation stopped (e.g., "stop", "length").
    #[serde(default)]
    pub finish_reason: String,
}

/// Token usage statistics for a generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Number of tokens generated.
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens used.
    #[serde(default)]
    pub total_tokens: u32,
}

/// Trait for providers that can generate text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a response for the given request.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}

/// Client for the OpenAI chat-completions API.
pub struct OpenAiClient {
    /// Base URL for the API.
    api_base: String,
    /// API key for authentication.
    api_key: String,
    /// HTTP client for making API requests.
    http_client: Client,
}

impl OpenAiClient {
    /// Create a new client against the default API base.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, api_key)
    }

    /// Create a new client with an explicit API base URL.
    ///
    /// Useful for OpenAI-compatible gateways and for tests against a local
    /// mock server.
    pub fn with_api_base(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            http_client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// API base URL this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Error response body from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail from the API.
#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields kept for complete API error deserialization
struct ApiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<serde_json::Value>,
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let url = format!("{}/chat/completions", self.api_base);

        let http_response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = http_response.status();

        if !status.is_success() {
            let status_code = status.as_u16();

            let error_text = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                if status_code == 429 {
                    return Err(GenerationError::RateLimited(error_response.error.message));
                }

                return Err(GenerationError::ApiError {
                    code: status_code,
                    message: error_response.error.message,
                });
            }

            return Err(GenerationError::ApiError {
                code: status_code,
                message: error_text,
            });
        }

        http_response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(format!("Failed to parse API response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = Message::system("You are a documentation generator.");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are a documentation generator.");

        let user = Message::user("Hello");
        assert_eq!(user.role, "user");

        let assistant = Message::assistant("Hi there!");
        assert_eq!(assistant.role, "assistant");
    }

    #[test]
    fn test_generation_request_builder() {
        let request = GenerationRequest::new("gpt-4o", vec![Message::user("test")])
            .with_temperature(0.5)
            .with_max_tokens(1500);

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.5));
        assert_eq!(request.max_tokens, Some(1500));
    }

    #[test]
    fn test_generation_request_serialization_skips_none() {
        let request = GenerationRequest::new("gpt-4o", vec![Message::user("test")])
            .with_max_tokens(1500);

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(json.contains("\"model\":\"gpt-4o\""));
        assert!(json.contains("\"max_tokens\":1500"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_generation_response_first_content() {
        let response = GenerationResponse {
            id: "test-id".to_string(),
            model: "gpt-4o".to_string(),
            choices: vec![Choice {
                index: 0,
                message: Message::assistant("# README"),
                finish_reason: "stop".to_string(),
            }],
            usage: Usage::default(),
        };
        assert_eq!(response.first_content(), Some("# README"));

        let empty = GenerationResponse {
            id: "test-id".to_string(),
            model: "gpt-4o".to_string(),
            choices: vec![],
            usage: Usage::default(),
        };
        assert_eq!(empty.first_content(), None);
    }

    #[test]
    fn test_client_api_base() {
        let client = OpenAiClient::new("test-key");
        assert_eq!(client.api_base(), DEFAULT_API_BASE);

        let client = OpenAiClient::with_api_base("http://localhost:4000/v1", "test-key");
        assert_eq!(client.api_base(), "http://localhost:4000/v1");
    }

    #[tokio::test]
    async fn test_generate_connection_error() {
        // Port with no listener: the request itself fails.
        let client = OpenAiClient::with_api_base("http://127.0.0.1:65535/v1", "test-key");
        let request = GenerationRequest::new("gpt-4o", vec![Message::user("test")]);

        let err = client.generate(request).await.unwrap_err();
        assert!(matches!(err, GenerationError::RequestFailed(_)));
    }

    #[test]
    fn test_response_deserialization_without_usage() {
        let json = r#"{
            "id": "chatcmpl-1",
            "model": "gpt-4o",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hi"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: GenerationResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(response.first_content(), Some("hi"));
        assert_eq!(response.usage.total_tokens, 0);
    }
}
