use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// NOTE: Wire Shape
//
// Events arrive from the conversation stream as JSON objects discriminated by
// `source`. User messages carry their text in `content`, agent messages in
// `message`. Both may carry `file_urls` when the author attached files, in
// which case the text ends with a localized "files attached" listing.
//
// Only the fields the renderer needs are modeled; everything else in the
// stream record is ignored by serde.

/// A chat message as received from the conversation event stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum ChatMessageEvent {
    /// Message typed by the user
    #[serde(rename = "user")]
    User(UserMessage),

    /// Message produced by the agent
    #[serde(rename = "agent", alias = "assistant")]
    Assistant(AssistantMessage),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Raw user text, possibly containing control tags
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Raw agent text, possibly containing control tags
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_urls: Option<Vec<String>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ChatMessageEvent {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessageEvent::User(UserMessage {
            content: content.into(),
            ..Default::default()
        })
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        ChatMessageEvent::Assistant(AssistantMessage {
            message: message.into(),
            ..Default::default()
        })
    }

    /// Attach file URLs, replacing any already present
    pub fn with_file_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls = Some(urls.into_iter().map(Into::into).collect());
        match &mut self {
            ChatMessageEvent::User(msg) => msg.file_urls = urls,
            ChatMessageEvent::Assistant(msg) => msg.file_urls = urls,
        }
        self
    }

    pub fn is_user_message(&self) -> bool {
        matches!(self, ChatMessageEvent::User(_))
    }

    /// Raw text before any normalization: `content` for users, `message` for the agent
    pub fn raw_text(&self) -> &str {
        match self {
            ChatMessageEvent::User(msg) => &msg.content,
            ChatMessageEvent::Assistant(msg) => &msg.message,
        }
    }

    /// Attached file URLs in order; empty when the field is absent
    pub fn file_urls(&self) -> &[String] {
        let urls = match self {
            ChatMessageEvent::User(msg) => msg.file_urls.as_deref(),
            ChatMessageEvent::Assistant(msg) => msg.file_urls.as_deref(),
        };
        urls.unwrap_or_default()
    }

    pub fn has_attachments(&self) -> bool {
        !self.file_urls().is_empty()
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            ChatMessageEvent::User(msg) => msg.id,
            ChatMessageEvent::Assistant(msg) => msg.id,
        }
    }

    pub fn author(&self) -> &'static str {
        match self {
            ChatMessageEvent::User(_) => "user",
            ChatMessageEvent::Assistant(_) => "agent",
        }
    }
}
