// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session state
//!
//! The transcript plus the currently selected personality. Switching
//! personality changes only how future replies are generated; the
//! transcript always persists across the switch.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::personality::PersonalityKind;

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    /// Transcribed from the microphone rather than typed.
    UserVoice,
    Assistant,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "you",
            MessageRole::UserVoice => "you (voice)",
            MessageRole::Assistant => "sonny",
        }
    }
}

/// One transcript line.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Transcript + selected personality for one page visit.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    messages: Vec<ChatMessage>,
    personality: PersonalityKind,
}

impl ChatSession {
    /// Open a session with the assistant's greeting line.
    pub fn new(personality: PersonalityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::new(
                MessageRole::Assistant,
                "Hello! I'm your AI assistant.",
            )],
            personality,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    pub fn personality(&self) -> PersonalityKind {
        self.personality
    }

    /// Change the responder. The transcript is untouched.
    pub fn set_personality(&mut self, personality: PersonalityKind) {
        self.personality = personality;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(PersonalityKind::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_greets() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, MessageRole::Assistant);
    }

    #[test]
    fn test_personality_switch_keeps_history() {
        let mut session = ChatSession::default();
        session.push(MessageRole::User, "hello");
        session.push(MessageRole::Assistant, "Hello!");
        let before = session.messages().len();

        session.set_personality(PersonalityKind::Sarcastic);
        assert_eq!(session.messages().len(), before);
        assert_eq!(session.personality(), PersonalityKind::Sarcastic);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(MessageRole::User.label(), "you");
        assert_eq!(MessageRole::UserVoice.label(), "you (voice)");
        assert_eq!(MessageRole::Assistant.label(), "sonny");
    }
}
