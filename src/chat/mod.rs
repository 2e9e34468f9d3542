//! Chat — the message list shown once onboarding is complete.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::remote::RemoteService;
use crate::view::View;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Result of [`ChatSession::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input; nothing was sent.
    Ignored,
    /// The server replied (possibly with no text).
    Delivered,
    /// The request failed; an error message was appended instead.
    Failed,
}

/// In-memory chat transcript backed by `POST /chat`.
pub struct ChatSession {
    remote: Arc<dyn RemoteService>,
    locale: Locale,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(remote: Arc<dyn RemoteService>, locale: Locale) -> Self {
        Self {
            remote,
            locale,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the greeting shown when the chat opens. Only the first call
    /// on an empty transcript has an effect.
    pub fn welcome(&mut self, view: &dyn View) {
        if self.messages.is_empty() {
            self.push(ChatMessage::new(Role::Assistant, self.locale.chat_welcome()), view);
        }
    }

    /// Send a user message and append the assistant's reply.
    pub async fn send(&mut self, user_id: &str, text: &str, view: &dyn View) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        self.push(ChatMessage::new(Role::User, text), view);

        view.show_loading();
        let result = self.remote.chat(user_id, text).await;
        view.hide_loading();

        match result {
            Ok(reply) => {
                if let Some(reply) = reply.reply.filter(|r| !r.is_empty()) {
                    self.push(ChatMessage::new(Role::Assistant, reply), view);
                }
                SendOutcome::Delivered
            }
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Error sending chat message");
                self.push(ChatMessage::new(Role::Assistant, self.locale.chat_error()), view);
                SendOutcome::Failed
            }
        }
    }

    /// Forget the transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, message: ChatMessage, view: &dyn View) {
        view.show_chat_message(&message);
        self.messages.push(message);
    }
}
