// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Speech recognition
//!
//! Recognition is one-shot: `listen_once` opens exactly one session and
//! resolves with the first final transcript, then the session is over.
//! There is no continuous listening mode.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, SonnyError};

/// Speech-to-text capability.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Whether recognition exists on this host. Callers should check
    /// before offering the mic control.
    fn is_supported(&self) -> bool;

    /// Open one recognition session and resolve with the first final
    /// transcript. The session ends when this returns.
    async fn listen_once(&self) -> Result<String>;
}

/// Stand-in for hosts without speech recognition.
///
/// `listen_once` fails with [`SonnyError::CapabilityUnavailable`]; the
/// caller surfaces that at Error severity rather than pretending the
/// mic worked.
#[derive(Debug, Default)]
pub struct UnsupportedRecognizer;

#[async_trait]
impl Recognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    async fn listen_once(&self) -> Result<String> {
        Err(SonnyError::CapabilityUnavailable(
            "speech recognition".to_string(),
        ))
    }
}

/// Recognizer that replays a fixed transcript queue.
///
/// Used by the demo voice flow and by tests; each `listen_once` pops the
/// next transcript, and an exhausted queue behaves like a session that
/// ended without a final result.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    transcripts: Mutex<VecDeque<String>>,
}

impl ScriptedRecognizer {
    pub fn new(transcripts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            transcripts: Mutex::new(transcripts.into_iter().map(Into::into).collect()),
        }
    }

    /// Queue another transcript for a later session.
    pub fn push(&self, transcript: impl Into<String>) {
        self.transcripts
            .lock()
            .expect("transcript queue poisoned")
            .push_back(transcript.into());
    }
}

#[async_trait]
impl Recognizer for ScriptedRecognizer {
    fn is_supported(&self) -> bool {
        true
    }

    async fn listen_once(&self) -> Result<String> {
        let next = self
            .transcripts
            .lock()
            .expect("transcript queue poisoned")
            .pop_front();
        next.ok_or_else(|| SonnyError::Speech("no speech detected".to_string()))
    }
}
