//! Chatbot transcript state for the offline advice bot.
//!
//! The session holds an append-only, render-ordered transcript of alternating
//! user/bot turns. It lives for the session only and is never persisted.
//! Replies come from the advice rule table, with a generic
//! consult-a-physician fallback when nothing matches.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{advice_table, MatchResult, GENERIC_ADVICE};
use crate::models::enums::MessageRole;

/// Caveat line the collaborator renders above the transcript.
pub const CHAT_DISCLAIMER: &str =
    "The chatbot can only suggest help for a limited set of common problems. \
     If the problem is serious, please consult a doctor.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub text: String,
    pub timestamp: NaiveDateTime,
}

/// An in-memory chat transcript. Messages are only ever appended.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submits a user turn. Blank input is a no-op and returns `None`;
    /// otherwise the transcript grows by exactly two messages (the user turn
    /// and the bot reply) and the reply is returned.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let reply = match advice_table().evaluate(trimmed) {
            MatchResult::Matched(advice) => advice.clone(),
            MatchResult::NoMatch => GENERIC_ADVICE.to_string(),
        };
        tracing::debug!(chars = trimmed.len(), "advice reply composed");

        self.push(MessageRole::User, input.to_string());
        self.push(MessageRole::Bot, reply);
        self.messages.last()
    }

    fn push(&mut self, role: MessageRole, text: String) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            role,
            text,
            timestamp: Local::now().naive_local(),
        });
    }
}
