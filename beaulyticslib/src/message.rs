//! Chat messages and the wire types of the AI endpoint.
//!
//! Messages carry either a plain string or a list of content parts. Both are
//! collapsed to text before formatting.

use serde::{Deserialize, Serialize};

use crate::error::BeaulyticsError;
use crate::format::Formatter;
use crate::Result;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One part of a structured message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

/// A message body: plain text or a list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// The body collapsed to text: parts are concatenated without a separator.
    pub fn text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => text.as_deref(),
                })
                .collect(),
        }
    }

    /// Formatted body, or `None` when there is no text to show.
    pub fn render(&self, formatter: &Formatter) -> Option<String> {
        let text = self.text();
        if text.is_empty() {
            None
        } else {
            Some(formatter.format(&text))
        }
    }
}

/// Append a previous diagnosis report to the last message as hidden context.
///
/// The context goes into a string body directly, into the first text part of
/// a part list, or as a new text part when the list has none.
pub fn inject_context(messages: &mut [ChatMessage], context: &str) {
    let Some(last) = messages.last_mut() else {
        return;
    };
    let note = format!(
        "\n\n[SYSTEM CONTEXT: User has a previous Skin Diagnosis Report. Use this reference: {context}]\n"
    );

    match &mut last.content {
        MessageContent::Text(text) => text.push_str(&note),
        MessageContent::Parts(parts) => {
            let first_text = parts.iter_mut().find_map(|part| match part {
                ContentPart::Text { text } => Some(text),
            });
            match first_text {
                Some(text) => text.get_or_insert_with(String::new).push_str(&note),
                None => parts.push(ContentPart::Text { text: Some(note) }),
            }
        }
    }
}

/// Which feature a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Chat,
    Diagnosis,
}

/// Request body sent to the AI endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRequest {
    pub mode: Mode,
    pub messages: Vec<ChatMessage>,
}

impl AiRequest {
    pub fn chat(messages: Vec<ChatMessage>) -> Self {
        Self {
            mode: Mode::Chat,
            messages,
        }
    }

    pub fn diagnosis(messages: Vec<ChatMessage>) -> Self {
        Self {
            mode: Mode::Diagnosis,
            messages,
        }
    }
}

/// Reply from the AI endpoint: either `content` or an error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AiReply {
    /// Decode a reply from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The reply text, or the upstream error it carries.
    ///
    /// An error takes precedence over content when both are present.
    pub fn into_content(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(BeaulyticsError::Upstream {
                error,
                status: self.status,
                detail: self.detail,
            });
        }
        self.content.ok_or(BeaulyticsError::EmptyReply)
    }
}

/// Decode a JSON array of chat messages
pub fn parse_messages(json: &str) -> Result<Vec<ChatMessage>> {
    Ok(serde_json::from_str(json)?)
}
