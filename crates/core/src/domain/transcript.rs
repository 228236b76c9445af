use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::agent::AgentKind;
use crate::domain::response::AgentResponse;
use crate::errors::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_response"
    )]
    pub data: Option<AgentResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
}

/// Payloads from other producers may not match any known response shape; they are
/// dropped rather than failing the whole message.
fn lenient_response<'de, D>(deserializer: D) -> Result<Option<AgentResponse>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), data: None, response_time_ms: None }
    }

    pub fn assistant(data: AgentResponse, response_time_ms: f64) -> Self {
        Self {
            role: Role::Assistant,
            content: data.response().to_string(),
            data: Some(data),
            response_time_ms: Some(response_time_ms),
        }
    }
}

/// In-memory, append-only list of turns for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptExport {
    pub agent: AgentKind,
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub total_messages: usize,
    pub messages: Vec<ChatMessage>,
}

impl TranscriptExport {
    pub fn new(agent: AgentKind, session_id: Uuid, messages: Vec<ChatMessage>) -> Self {
        Self { agent, session_id, timestamp: Utc::now(), total_messages: messages.len(), messages }
    }

    /// `ai_agent_chat_<YYYYmmdd_HHMMSS>.json`
    pub fn file_name(&self) -> String {
        format!("ai_agent_chat_{}.json", self.timestamp.format("%Y%m%d_%H%M%S"))
    }
}

/// Only `messages` is required; `agent`, `timestamp`, `session_id` and
/// `total_messages` are accepted in any shape and ignored.
#[derive(Deserialize)]
struct ExportDocument {
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Export(ExportDocument),
    Messages(Vec<ChatMessage>),
}

/// Accepts either a full export document or a bare array of messages.
pub fn parse_transcript(raw: &str) -> Result<Vec<ChatMessage>, SessionError> {
    let document = serde_json::from_str::<TranscriptDocument>(raw)
        .map_err(|source| SessionError::TranscriptParse { message: source.to_string() })?;
    Ok(match document {
        TranscriptDocument::Export(export) => export.messages,
        TranscriptDocument::Messages(messages) => messages,
    })
}
