// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Built-in trigger tables
//!
//! Each personality is an ordered list of (trigger substrings, canned
//! reply) pairs plus a fallback. Order matters: the first entry whose
//! trigger appears in the lowercased input wins.

/// One canned response: any of `triggers` (lowercase) selects `reply`.
#[derive(Debug, Clone, Copy)]
pub struct TriggerEntry {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

/// Ordered trigger table with a fallback reply.
#[derive(Debug, Clone, Copy)]
pub struct TriggerTable {
    pub entries: &'static [TriggerEntry],
    pub fallback: &'static str,
}

impl TriggerTable {
    /// Scan entries in order against the lowercased input; first
    /// matching trigger wins, otherwise the fallback.
    pub fn reply(&self, input: &str) -> &'static str {
        let text = input.to_lowercase();
        for entry in self.entries {
            if entry.triggers.iter().any(|t| text.contains(t)) {
                return entry.reply;
            }
        }
        self.fallback
    }
}

pub static DEFAULT: TriggerTable = TriggerTable {
    entries: &[
        TriggerEntry {
            triggers: &["hello", "hi"],
            reply: "Hello! I'm your AI assistant. How can I help today?",
        },
        TriggerEntry {
            triggers: &["skills", "tech"],
            reply: "I work with React, TypeScript, robotics, and AI systems.",
        },
        TriggerEntry {
            triggers: &["project"],
            reply: "You're currently exploring a modular robotics control platform.",
        },
        TriggerEntry {
            triggers: &["help"],
            reply: "You can ask me about projects, robotics, AI, or voice control.",
        },
    ],
    fallback: "I'm not sure yet — but I'm learning more every day.",
};

pub static FRIENDLY: TriggerTable = TriggerTable {
    entries: &[
        TriggerEntry {
            triggers: &["hello"],
            reply: "Hey there!! 😄 So good to hear from you!",
        },
        TriggerEntry {
            triggers: &["robot"],
            reply: "Robots are AWESOME 🤖💙 especially when you build them yourself!",
        },
    ],
    fallback: "That sounds interesting! Tell me more 😊",
};

pub static SARCASTIC: TriggerTable = TriggerTable {
    entries: &[
        TriggerEntry {
            triggers: &["hello"],
            reply: "Oh wow. A greeting. How original.",
        },
        TriggerEntry {
            triggers: &["help"],
            reply: "Yes yes, I help. It's literally my job.",
        },
    ],
    fallback: "Fascinating. Truly.",
};

pub static BUTLER: TriggerTable = TriggerTable {
    entries: &[
        TriggerEntry {
            triggers: &["hello", "good day"],
            reply: "Good day, sir or madam. Sonny at your service.",
        },
        TriggerEntry {
            triggers: &["help", "assist"],
            reply: "Certainly. Might I suggest the projects wing, or perhaps the voice console?",
        },
        TriggerEntry {
            triggers: &["thank"],
            reply: "But of course. It is my distinct pleasure to serve.",
        },
    ],
    fallback: "Very good. I shall make a note of it.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_first_entry_wins() {
        // "hello" appears before "help" in the default table.
        assert_eq!(
            DEFAULT.reply("hello, can you help"),
            "Hello! I'm your AI assistant. How can I help today?"
        );
    }

    #[test]
    fn test_reply_matches_substring_anywhere() {
        assert_eq!(
            DEFAULT.reply("my latest project broke"),
            "You're currently exploring a modular robotics control platform."
        );
    }

    #[test]
    fn test_reply_fallback_on_no_match() {
        assert_eq!(SARCASTIC.reply("weather?"), "Fascinating. Truly.");
        assert_eq!(FRIENDLY.reply("weather?"), "That sounds interesting! Tell me more 😊");
    }

    #[test]
    fn test_hi_inside_word_still_matches() {
        // Substring semantics: "hi" inside "this" matches, as in the
        // original tables. Documented behavior, not a bug.
        assert_eq!(
            DEFAULT.reply("this"),
            "Hello! I'm your AI assistant. How can I help today?"
        );
    }

    #[test]
    fn test_butler_thanks() {
        assert_eq!(
            BUTLER.reply("thank you"),
            "But of course. It is my distinct pleasure to serve."
        );
    }
}
