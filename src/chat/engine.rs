// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Assistant engine
//!
//! Ties the session to the personality dispatcher and the injected
//! speech capabilities. The engine never talks to the host directly;
//! everything capability-shaped arrives through its constructor so
//! tests can hand it scripted fakes.

use std::sync::Arc;

use crate::chat::session::{ChatSession, MessageRole};
use crate::error::SonnyError;
use crate::personality::{self, PersonalityKind};
use crate::report::Reporter;
use crate::speech::{Recognizer, Synthesizer};

pub struct AssistantEngine {
    session: ChatSession,
    synthesizer: Arc<dyn Synthesizer>,
    recognizer: Arc<dyn Recognizer>,
    reporter: Reporter,
}

impl AssistantEngine {
    pub fn new(
        personality: PersonalityKind,
        synthesizer: Arc<dyn Synthesizer>,
        recognizer: Arc<dyn Recognizer>,
        reporter: Reporter,
    ) -> Self {
        Self {
            session: ChatSession::new(personality),
            synthesizer,
            recognizer,
            reporter,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn personality(&self) -> PersonalityKind {
        self.session.personality()
    }

    pub fn set_personality(&mut self, personality: PersonalityKind) {
        self.session.set_personality(personality);
    }

    pub fn is_speaking(&self) -> bool {
        self.synthesizer.is_speaking()
    }

    pub fn can_listen(&self) -> bool {
        self.recognizer.is_supported()
    }

    /// Submit typed input. Empty input is ignored at the form level
    /// (the dispatcher's own fallback only applies once something is
    /// submitted). Returns the reply when one was generated.
    pub fn submit_text(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        self.session.push(MessageRole::User, input);
        Some(self.respond_and_speak(input))
    }

    /// One voice round: open a single recognition session, submit the
    /// first final transcript. Unsupported or failed recognition is
    /// surfaced through the report channel and ends the round.
    pub async fn submit_voice(&mut self) -> Option<String> {
        if !self.recognizer.is_supported() {
            self.reporter
                .error("Speech recognition not supported on this host");
            return None;
        }
        match self.recognizer.listen_once().await {
            Ok(transcript) => {
                self.session.push(MessageRole::UserVoice, &transcript);
                Some(self.respond_and_speak(&transcript))
            }
            Err(SonnyError::CapabilityUnavailable(what)) => {
                self.reporter.error(format!("{what} not supported"));
                None
            }
            Err(e) => {
                self.reporter.warn(format!("listening failed: {e}"));
                None
            }
        }
    }

    fn respond_and_speak(&mut self, input: &str) -> String {
        let reply = personality::respond(input, self.session.personality());
        self.session.push(MessageRole::Assistant, &reply);
        if let Err(e) = self.synthesizer.speak(&reply) {
            // A mute assistant still chats; the failure is only reported.
            self.reporter.warn(format!("speech synthesis unavailable: {e}"));
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crate::speech::{ScriptedRecognizer, UnsupportedRecognizer, UnsupportedSynthesizer};

    fn engine_with(recognizer: Arc<dyn Recognizer>) -> (AssistantEngine, report::ReportReceiver) {
        let (reporter, rx) = report::channel();
        (
            AssistantEngine::new(
                PersonalityKind::Default,
                Arc::new(UnsupportedSynthesizer),
                recognizer,
                reporter,
            ),
            rx,
        )
    }

    #[test]
    fn test_submit_text_generates_reply() {
        let (mut engine, _rx) = engine_with(Arc::new(UnsupportedRecognizer));
        let reply = engine.submit_text("hello").unwrap();
        assert_eq!(reply, "Hello! I'm your AI assistant. How can I help today?");
        // Greeting + user + assistant.
        assert_eq!(engine.session().messages().len(), 3);
    }

    #[test]
    fn test_submit_empty_text_is_ignored() {
        let (mut engine, _rx) = engine_with(Arc::new(UnsupportedRecognizer));
        assert!(engine.submit_text("   ").is_none());
        assert_eq!(engine.session().messages().len(), 1);
    }

    #[test]
    fn test_personality_switch_changes_only_responder() {
        let (mut engine, _rx) = engine_with(Arc::new(UnsupportedRecognizer));
        engine.submit_text("hello");
        let history = engine.session().messages().len();

        engine.set_personality(PersonalityKind::Sarcastic);
        assert_eq!(engine.session().messages().len(), history);
        let reply = engine.submit_text("hello").unwrap();
        assert_eq!(reply, "Oh wow. A greeting. How original.");
    }

    #[tokio::test]
    async fn test_voice_round_uses_first_transcript() {
        let (mut engine, _rx) =
            engine_with(Arc::new(ScriptedRecognizer::new(["help", "ignored second"])));
        let reply = engine.submit_voice().await.unwrap();
        assert_eq!(reply, "You can ask me about projects, robotics, AI, or voice control.");
        let roles: Vec<_> = engine.session().messages().iter().map(|m| m.role).collect();
        assert!(roles.contains(&MessageRole::UserVoice));
    }

    #[tokio::test]
    async fn test_voice_unsupported_reports_error() {
        let (mut engine, mut rx) = engine_with(Arc::new(UnsupportedRecognizer));
        assert!(engine.submit_voice().await.is_none());
        let report = rx.try_recv().unwrap();
        assert_eq!(report.severity, report::Severity::Error);
        assert!(report.message.contains("not supported"));
        // Nothing was added to the transcript.
        assert_eq!(engine.session().messages().len(), 1);
    }

    #[test]
    fn test_synthesis_failure_still_replies() {
        let (mut engine, mut rx) = engine_with(Arc::new(UnsupportedRecognizer));
        let reply = engine.submit_text("tell me about your projects");
        assert!(reply.is_some());
        // UnsupportedSynthesizer fails; failure lands as a Warn report.
        assert_eq!(rx.try_recv().unwrap().severity, report::Severity::Warn);
    }
}
