/// LLM Client — the only module that talks to the external analysis service.
///
/// The service is an OpenAI-compatible chat-completions endpoint. Callers hold
/// it as `Arc<dyn AnalysisService>` and must ask `readiness()` before use;
/// there is no global "AI is ready" flag.
///
/// A call is made exactly once. Retrying is the caller's decision, and a retry
/// is a new run.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Analysis service is not configured: {0}")]
    NotReady(String),

    #[error("Analysis service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Analysis service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Result of the capability check performed before each analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady(String),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// What the service hands back: either bare text or a message envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Text(String),
    Structured { message: Option<ReplyMessage> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

impl ChatReply {
    /// The reply text; an envelope without content reads as empty.
    pub fn content(&self) -> &str {
        match self {
            ChatReply::Text(text) => text,
            ChatReply::Structured { message } => message
                .as_ref()
                .and_then(|m| m.content.as_deref())
                .unwrap_or(""),
        }
    }
}

/// The external analysis collaborator.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn readiness(&self) -> Readiness;

    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<ChatReply, ServiceError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl AnalysisService for ChatClient {
    async fn readiness(&self) -> Readiness {
        if self.api_key.is_none() {
            return Readiness::NotReady("ANALYSIS_API_KEY is not set".to_string());
        }
        if reqwest::Url::parse(&self.endpoint()).is_err() {
            return Readiness::NotReady(format!("invalid service URL: {}", self.base_url));
        }
        Readiness::Ready
    }

    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<ChatReply, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::NotReady("ANALYSIS_API_KEY is not set".to_string()))?;

        let request_body = ChatCompletionRequest {
            model,
            messages,
            temperature: 0.2,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Analysis service returned {}: {}", status, message);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(decode_reply(body))
    }
}

/// Reads a successful response body. An OpenAI envelope or a JSON string or
/// message is unwrapped; anything else is passed on verbatim as text.
fn decode_reply(body: String) -> ChatReply {
    if let Ok(completion) = serde_json::from_str::<ChatCompletionResponse>(&body) {
        if let Some(usage) = &completion.usage {
            debug!(
                "Analysis call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }
        return ChatReply::Structured {
            message: completion.choices.into_iter().next().map(|c| c.message),
        };
    }

    match serde_json::from_str::<ChatReply>(&body) {
        Ok(reply @ ChatReply::Text(_)) => reply,
        Ok(reply @ ChatReply::Structured { message: Some(_) }) => reply,
        _ => ChatReply::Text(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> ChatClient {
        ChatClient::new(
            "http://127.0.0.1:9/v1/",
            api_key.map(String::from),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[test]
    fn test_reply_content_from_plain_text() {
        let reply: ChatReply = serde_json::from_str(r#""{\"overallScore\": \"7/10\"}""#).unwrap();
        assert_eq!(reply.content(), r#"{"overallScore": "7/10"}"#);
    }

    #[test]
    fn test_reply_content_from_envelope() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"message": {"content": "hello"}}"#).unwrap();
        assert_eq!(reply.content(), "hello");
    }

    #[test]
    fn test_reply_without_message_is_empty() {
        let reply: ChatReply = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert_eq!(reply.content(), "");
    }

    #[test]
    fn test_decode_openai_envelope() {
        let body = r#"{"choices": [{"message": {"content": "{\"overallScore\": 7}"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}}"#;
        assert_eq!(decode_reply(body.to_string()).content(), r#"{"overallScore": 7}"#);
    }

    #[test]
    fn test_decode_json_string_body() {
        let body = r#""{\"overallScore\": \"8/10\"}""#;
        assert_eq!(decode_reply(body.to_string()).content(), r#"{"overallScore": "8/10"}"#);
    }

    #[test]
    fn test_decode_bare_analysis_object_passes_through() {
        let body = r#"{"overallScore": "6/10", "summary": "ok"}"#;
        assert_eq!(decode_reply(body.to_string()).content(), body);
    }

    #[test]
    fn test_decode_prose_passes_through() {
        let body = "I am sorry, I cannot analyze this.";
        assert_eq!(decode_reply(body.to_string()).content(), body);
    }

    #[test]
    fn test_request_serializes_roles_lowercase() {
        let messages = [ChatMessage::system("be terse"), ChatMessage::user("hi")];
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: 0.2,
        })
        .unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["model"], "gpt-4o");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(client(None).endpoint(), "http://127.0.0.1:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_key_is_not_ready() {
        let readiness = client(None).readiness().await;
        assert!(!readiness.is_ready());
        let err = client(None)
            .chat(&[ChatMessage::user("hi")], "gpt-4o")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotReady(_)));
    }

    #[tokio::test]
    async fn test_configured_key_is_ready() {
        assert_eq!(client(Some("sk-test")).readiness().await, Readiness::Ready);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let err = client(Some("sk-test"))
            .chat(&[ChatMessage::user("hi")], "gpt-4o")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unreachable(_)));
    }
}
