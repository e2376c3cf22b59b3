// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Assistant chat
//!
//! `session` holds the transcript; `engine` wires the personality
//! dispatcher to the speech capabilities. Chat state lives for one page
//! visit — nothing is persisted.

pub mod engine;
pub mod session;

pub use engine::AssistantEngine;
pub use session::{ChatMessage, ChatSession, MessageRole};
