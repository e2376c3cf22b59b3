// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for the personality dispatcher and chat engine.

use std::sync::Arc;

use sonny::chat::{AssistantEngine, MessageRole};
use sonny::personality::{respond, PersonalityKind, EMPTY_INPUT_REPLY};
use sonny::report;
use sonny::speech::{ScriptedRecognizer, Synthesizer, UnsupportedSynthesizer};

#[test]
fn known_trigger_returns_canned_reply() {
    assert_eq!(
        respond("hello", PersonalityKind::Default),
        "Hello! I'm your AI assistant. How can I help today?"
    );
    assert_eq!(
        respond("what tech do you use?", PersonalityKind::Default),
        "I work with React, TypeScript, robotics, and AI systems."
    );
}

#[test]
fn trigger_matching_is_case_insensitive() {
    assert_eq!(
        respond("HELLO THERE", PersonalityKind::Sarcastic),
        "Oh wow. A greeting. How original."
    );
}

#[test]
fn unmatched_input_gets_personality_default() {
    assert_eq!(
        respond("quantum chromodynamics", PersonalityKind::Default),
        "I'm not sure yet — but I'm learning more every day."
    );
    assert_eq!(
        respond("quantum chromodynamics", PersonalityKind::Sarcastic),
        "Fascinating. Truly."
    );
}

#[test]
fn empty_input_is_fixed_fallback_for_every_personality() {
    for kind in PersonalityKind::all() {
        assert_eq!(respond("", *kind), EMPTY_INPUT_REPLY);
        assert_eq!(respond("   \n\t ", *kind), EMPTY_INPUT_REPLY);
    }
    assert_eq!(EMPTY_INPUT_REPLY, "Say that again?");
}

#[test]
fn sarcastic_help_scenario() {
    assert_eq!(
        respond("you are sarcastic, help me", PersonalityKind::Sarcastic),
        "Yes yes, I help. It's literally my job."
    );
}

#[test]
fn first_matching_trigger_wins_in_table_order() {
    // Both "hello" and "help" present: "hello" sits earlier in the table.
    assert_eq!(
        respond("hello, now help", PersonalityKind::Sarcastic),
        "Oh wow. A greeting. How original."
    );
}

#[test]
fn unknown_personality_key_falls_back_to_default_handler() {
    let kind = PersonalityKind::parse("experimental-9000");
    assert_eq!(kind, PersonalityKind::Default);
    assert_eq!(
        respond("hello", kind),
        "Hello! I'm your AI assistant. How can I help today?"
    );
}

fn engine() -> AssistantEngine {
    let (reporter, _rx) = report::channel();
    AssistantEngine::new(
        PersonalityKind::Default,
        Arc::new(UnsupportedSynthesizer),
        Arc::new(ScriptedRecognizer::default()),
        reporter,
    )
}

#[test]
fn switching_personality_preserves_chat_history() {
    let mut engine = engine();
    engine.submit_text("hello");
    engine.submit_text("tell me about your project");
    let count = engine.session().messages().len();
    let transcript: Vec<String> = engine
        .session()
        .messages()
        .iter()
        .map(|m| m.content.clone())
        .collect();

    engine.set_personality(PersonalityKind::Friendly);

    let after: Vec<String> = engine
        .session()
        .messages()
        .iter()
        .map(|m| m.content.clone())
        .collect();
    assert_eq!(engine.session().messages().len(), count);
    assert_eq!(after, transcript);

    // Only the responder changed.
    let reply = engine.submit_text("hello").unwrap();
    assert_eq!(reply, "Hey there!! 😄 So good to hear from you!");
}

mockall::mock! {
    Synth {}
    impl Synthesizer for Synth {
        fn speak(&self, text: &str) -> sonny::error::Result<()>;
        fn stop(&self);
        fn is_speaking(&self) -> bool;
    }
}

#[test]
fn every_reply_is_spoken_exactly_once() {
    let mut synth = MockSynth::new();
    synth
        .expect_speak()
        .withf(|text| text == "Oh wow. A greeting. How original.")
        .times(1)
        .returning(|_| Ok(()));
    synth.expect_is_speaking().return_const(false);

    let (reporter, _rx) = report::channel();
    let mut engine = AssistantEngine::new(
        PersonalityKind::Sarcastic,
        Arc::new(synth),
        Arc::new(ScriptedRecognizer::default()),
        reporter,
    );
    engine.submit_text("hello");
}

#[tokio::test]
async fn voice_round_submits_first_final_transcript() {
    let (reporter, _rx) = report::channel();
    let mut engine = AssistantEngine::new(
        PersonalityKind::Default,
        Arc::new(UnsupportedSynthesizer),
        Arc::new(ScriptedRecognizer::new(["hello robot", "second result"])),
        reporter,
    );
    let reply = engine.submit_voice().await.unwrap();
    assert_eq!(reply, "Hello! I'm your AI assistant. How can I help today?");

    let voice_lines: Vec<_> = engine
        .session()
        .messages()
        .iter()
        .filter(|m| m.role == MessageRole::UserVoice)
        .collect();
    // Exactly one recognition session ran.
    assert_eq!(voice_lines.len(), 1);
    assert_eq!(voice_lines[0].content, "hello robot");
}
