#![allow(dead_code)]

//! Thin asynchronous client for the AHS assistant backend.
//!
//! - `chat` and `rates` POST endpoints plus session history and health.
//! - Replies are decoded leniently; rate payloads go through the domain
//!   extraction layer so array and single-object shapes both work.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::extraction::parse_rate_response;
use crate::domain::{ChatMessage, ChatRole, RateResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const BASE_URL_ENV: &str = "AHS_API_BASE";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("freight-rate-desk/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum AhsClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone)]
pub struct AhsClient {
    http: Client,
    base_url: Url,
}

/// Assistant reply for one chat turn. The backend may hand out a new
/// session id, e.g. when the requested one has expired.
#[derive(Clone, Debug)]
pub struct ChatReply {
    pub agent_response: String,
    pub session_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub message: Option<String>,
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// Optional filters for the typed rate-search endpoint.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RateFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
}

impl AhsClient {
    pub fn new() -> Result<Self, AhsClientError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self, AhsClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Sends one user message and returns the assistant's reply text.
    pub async fn chat(
        &self,
        user_input: &str,
        session_id: &str,
    ) -> Result<ChatReply, AhsClientError> {
        let url = self.url("chat")?;
        tracing::info!(%session_id, "sending chat message");

        let body = ChatRequestDto {
            user_input: user_input.to_string(),
            session_id: session_id.to_string(),
        };
        let dto: ChatReplyDto = self.send_json(self.http.post(url).json(&body)).await?;
        dto.into_reply()
    }

    /// Typed rate search. The body is decoded through the extraction layer
    /// so both the `rates` array shape and a bare rate object round-trip.
    pub async fn search_rates(
        &self,
        filters: &RateFilters,
    ) -> Result<RateResponse, AhsClientError> {
        let url = self.url("rates")?;
        tracing::info!(?filters, "requesting rates");

        let response = self
            .http
            .post(url)
            .json(filters)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        parse_rate_response(&body)
            .ok_or_else(|| AhsClientError::Api("unrecognized rate response shape".to_string()))
    }

    /// Replays the stored conversation as alternating user/assistant
    /// messages, oldest first.
    pub async fn session_history(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, AhsClientError> {
        let mut url = self.url(&format!("session/{session_id}/history"))?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());

        let dto: SessionHistoryDto = self.send_json(self.http.get(url)).await?;
        let mut messages = Vec::with_capacity(dto.history.len() * 2);
        for entry in dto.history {
            messages.extend(entry.into_messages());
        }
        Ok(messages)
    }

    pub async fn health(&self) -> Result<HealthStatus, AhsClientError> {
        let url = self.url("health")?;
        let dto: HealthDto = self.send_json(self.http.get(url)).await?;
        Ok(HealthStatus::from(dto))
    }

    async fn send_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, AhsClientError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequestDto {
    user_input: String,
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct ChatReplyDto {
    #[serde(default)]
    agent_response: String,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default = "default_true")]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ChatReplyDto {
    /// Backend failures arrive either as `success: false` or as a bare
    /// `error` field on an otherwise empty body; both reject the reply.
    fn into_reply(self) -> Result<ChatReply, AhsClientError> {
        if !self.success || self.error.is_some() {
            return Err(AhsClientError::Api(
                self.error
                    .unwrap_or_else(|| "chat request failed".to_string()),
            ));
        }
        Ok(ChatReply {
            agent_response: self.agent_response,
            session_id: self.session_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SessionHistoryDto {
    #[serde(default)]
    history: Vec<HistoryEntryDto>,
    #[serde(default)]
    session_id: Option<String>,
}

/// One stored exchange. The history endpoint names its sides
/// `user_message`/`assistant_response`, unlike the chat endpoint's
/// `user_input`/`agent_response`.
#[derive(Debug, Deserialize)]
struct HistoryEntryDto {
    #[serde(default)]
    user_message: String,
    #[serde(default)]
    assistant_response: String,
    #[serde(default)]
    timestamp: Option<String>,
}

impl HistoryEntryDto {
    fn into_messages(self) -> Vec<ChatMessage> {
        let timestamp = parse_history_timestamp(self.timestamp.as_deref());
        let mut messages = Vec::with_capacity(2);
        if !self.user_message.is_empty() {
            messages.push(ChatMessage::with_timestamp(
                ChatRole::User,
                self.user_message,
                timestamp,
            ));
        }
        if !self.assistant_response.is_empty() {
            messages.push(ChatMessage::with_timestamp(
                ChatRole::Assistant,
                self.assistant_response,
                timestamp,
            ));
        }
        messages
    }
}

#[derive(Debug, Deserialize)]
struct HealthDto {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl From<HealthDto> for HealthStatus {
    fn from(dto: HealthDto) -> Self {
        Self {
            status: dto.status,
            message: dto.message,
            version: dto.version,
        }
    }
}

fn parse_history_timestamp(raw: Option<&str>) -> OffsetDateTime {
    raw.and_then(|value| OffsetDateTime::parse(value, &Rfc3339).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_success_defaults_to_true() {
        let dto: ChatReplyDto =
            serde_json::from_str(r#"{"agent_response":"hello","session_id":"s1"}"#).unwrap();
        assert!(dto.success);

        let reply = dto.into_reply().unwrap();
        assert_eq!(reply.agent_response, "hello");
        assert_eq!(reply.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_failed_chat_reply_carries_error() {
        let dto: ChatReplyDto =
            serde_json::from_str(r#"{"success":false,"error":"agent unavailable"}"#).unwrap();
        assert!(!dto.success);

        let err = dto.into_reply().unwrap_err();
        assert!(matches!(err, AhsClientError::Api(message) if message == "agent unavailable"));
    }

    #[test]
    fn test_error_field_rejects_reply_even_when_success_is_unset() {
        let dto: ChatReplyDto =
            serde_json::from_str(r#"{"agent_response":"","error":"agent unavailable"}"#).unwrap();
        assert!(dto.success);

        let err = dto.into_reply().unwrap_err();
        assert!(matches!(err, AhsClientError::Api(message) if message == "agent unavailable"));
    }

    #[test]
    fn test_history_entry_becomes_message_pair() {
        let dto: SessionHistoryDto = serde_json::from_str(
            r#"{"history":[{"user_message":"hi","assistant_response":"hello there","timestamp":"2025-07-01T10:00:00Z"}],"session_id":"s1"}"#,
        )
        .unwrap();
        let entry = dto.history.into_iter().next().unwrap();
        let messages = entry.into_messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::User);
        assert_eq!(messages[0].content, "hi");
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[1].content, "hello there");
        assert_eq!(messages[0].timestamp.year(), 2025);
    }

    #[test]
    fn test_health_status_recognizes_healthy() {
        let healthy = HealthStatus::from(HealthDto {
            status: "healthy".to_string(),
            message: None,
            version: Some("1.2.0".to_string()),
        });
        assert!(healthy.is_healthy());

        let down = HealthStatus::from(HealthDto {
            status: "degraded".to_string(),
            message: None,
            version: None,
        });
        assert!(!down.is_healthy());
    }

    #[test]
    fn test_rate_filters_skip_unset_fields() {
        let filters = RateFilters {
            origin: Some("Karachi".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(value["origin"], "Karachi");
        assert!(value.get("destination").is_none());
        assert!(value.get("container_type").is_none());
    }
}
