// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Personality dispatch for the assistant
//!
//! A personality is a pure function from input text to a reply string.
//! Dispatch is a direct lookup from [`PersonalityKind`] to a trigger
//! table; reply generation is deterministic — no state, no randomness,
//! no external calls.

mod builtin;

pub use builtin::{TriggerEntry, TriggerTable};

use std::fmt;

/// Reply used when the (trimmed) input is empty, for every personality.
pub const EMPTY_INPUT_REPLY: &str = "Say that again?";

/// The fixed set of assistant personalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PersonalityKind {
    #[default]
    Default,
    Friendly,
    Sarcastic,
    Butler,
}

impl PersonalityKind {
    /// All personalities, in selector order.
    pub fn all() -> &'static [PersonalityKind] {
        &[
            PersonalityKind::Default,
            PersonalityKind::Friendly,
            PersonalityKind::Sarcastic,
            PersonalityKind::Butler,
        ]
    }

    /// Stable key used in config files and the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            PersonalityKind::Default => "default",
            PersonalityKind::Friendly => "friendly",
            PersonalityKind::Sarcastic => "sarcastic",
            PersonalityKind::Butler => "butler",
        }
    }

    /// Human-facing selector label.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityKind::Default => "Default",
            PersonalityKind::Friendly => "Friendly",
            PersonalityKind::Sarcastic => "Sarcastic",
            PersonalityKind::Butler => "Robot Butler",
        }
    }

    /// Parse a personality key. Unknown keys fall back to the default
    /// personality rather than failing — an unrecognized selection should
    /// never break the chat.
    pub fn parse(key: &str) -> PersonalityKind {
        match key.trim().to_ascii_lowercase().as_str() {
            "friendly" => PersonalityKind::Friendly,
            "sarcastic" => PersonalityKind::Sarcastic,
            "butler" => PersonalityKind::Butler,
            _ => PersonalityKind::Default,
        }
    }

    /// The trigger table backing this personality.
    pub fn table(&self) -> &'static TriggerTable {
        match self {
            PersonalityKind::Default => &builtin::DEFAULT,
            PersonalityKind::Friendly => &builtin::FRIENDLY,
            PersonalityKind::Sarcastic => &builtin::SARCASTIC,
            PersonalityKind::Butler => &builtin::BUTLER,
        }
    }

    /// Cycle to the next personality (selector navigation).
    pub fn next(&self) -> PersonalityKind {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl fmt::Display for PersonalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate a reply for `input` under the given personality.
///
/// Input is trimmed first; empty input yields [`EMPTY_INPUT_REPLY`]
/// regardless of personality. Otherwise the personality's trigger table
/// is scanned in order, matching case-insensitively on substrings, and
/// the first match wins. No trigger match yields the table's own
/// fallback reply.
pub fn respond(input: &str, kind: PersonalityKind) -> String {
    let clean = input.trim();
    if clean.is_empty() {
        return EMPTY_INPUT_REPLY.to_string();
    }
    kind.table().reply(clean).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_uses_fixed_fallback() {
        for kind in PersonalityKind::all() {
            assert_eq!(respond("", *kind), EMPTY_INPUT_REPLY);
            assert_eq!(respond("   \t  ", *kind), EMPTY_INPUT_REPLY);
        }
    }

    #[test]
    fn test_default_hello() {
        assert_eq!(
            respond("hello", PersonalityKind::Default),
            "Hello! I'm your AI assistant. How can I help today?"
        );
    }

    #[test]
    fn test_default_triggers_are_case_insensitive() {
        assert_eq!(
            respond("HELLO there", PersonalityKind::Default),
            respond("hello there", PersonalityKind::Default)
        );
        assert_eq!(
            respond("Tell me about your SKILLS", PersonalityKind::Default),
            "I work with React, TypeScript, robotics, and AI systems."
        );
    }

    #[test]
    fn test_default_no_trigger_falls_back() {
        assert_eq!(
            respond("what is the weather", PersonalityKind::Default),
            "I'm not sure yet — but I'm learning more every day."
        );
    }

    #[test]
    fn test_sarcastic_first_match_wins() {
        // "help" is the only trigger present; "sarcastic" itself is not one.
        assert_eq!(
            respond("you are sarcastic, help me", PersonalityKind::Sarcastic),
            "Yes yes, I help. It's literally my job."
        );
        // When both triggers appear, the earlier table entry wins.
        assert_eq!(
            respond("hello, help me", PersonalityKind::Sarcastic),
            "Oh wow. A greeting. How original."
        );
    }

    #[test]
    fn test_friendly_robot_trigger() {
        assert_eq!(
            respond("I built a robot arm", PersonalityKind::Friendly),
            "Robots are AWESOME 🤖💙 especially when you build them yourself!"
        );
    }

    #[test]
    fn test_butler_greets_in_register() {
        let reply = respond("hello", PersonalityKind::Butler);
        assert!(reply.contains("sir or madam"), "got: {reply}");
    }

    #[test]
    fn test_parse_known_and_unknown_keys() {
        assert_eq!(PersonalityKind::parse("sarcastic"), PersonalityKind::Sarcastic);
        assert_eq!(PersonalityKind::parse("  Butler "), PersonalityKind::Butler);
        assert_eq!(PersonalityKind::parse("gpt-7"), PersonalityKind::Default);
        assert_eq!(PersonalityKind::parse(""), PersonalityKind::Default);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut kind = PersonalityKind::Default;
        for _ in 0..PersonalityKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, PersonalityKind::Default);
    }

    proptest! {
        /// Dispatch is total and deterministic over arbitrary input.
        #[test]
        fn prop_respond_is_deterministic(input in ".{0,200}") {
            for kind in PersonalityKind::all() {
                let a = respond(&input, *kind);
                let b = respond(&input, *kind);
                prop_assert_eq!(&a, &b);
                prop_assert!(!a.is_empty());
            }
        }

        /// Leading/trailing whitespace never changes the reply.
        #[test]
        fn prop_respond_trims(input in "[a-z ]{1,40}") {
            let padded = format!("  {input}\t");
            prop_assert_eq!(
                respond(&padded, PersonalityKind::Default),
                respond(&input, PersonalityKind::Default)
            );
        }
    }
}
