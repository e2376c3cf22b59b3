// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Speech synthesis
//!
//! [`CommandSynthesizer`] shells out to a host TTS command (`espeak`,
//! `say`, ...), one process per utterance. Overlapping utterances are
//! resolved by cancel-and-replace: a new `speak` aborts the in-flight
//! waiter task, which kills its process on drop. The speaking flag
//! clears on completion and on error alike, so the UI can never get
//! stuck in a speaking state.

use std::process::Stdio;
use std::sync::Mutex;

use tokio::process::{Child, Command};
use tokio::task::JoinHandle;

use crate::error::{Result, SonnyError};
use crate::report::Reporter;
use crate::speech::SpeakingFlag;

/// Text-to-speech capability.
///
/// `speak` is non-blocking: it hands the utterance to the provider and
/// returns. Completion is observable through [`Synthesizer::is_speaking`].
pub trait Synthesizer: Send + Sync {
    /// Start speaking `text`, cancelling any utterance already in flight.
    fn speak(&self, text: &str) -> Result<()>;

    /// Cancel the in-flight utterance, if any.
    fn stop(&self);

    /// Whether an utterance is currently being spoken.
    fn is_speaking(&self) -> bool;
}

/// Synthesizer backed by a one-shot TTS command per utterance.
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
    speaking: SpeakingFlag,
    reporter: Reporter,
    /// Waiter task for the utterance in flight. Aborting it drops the
    /// child, and `kill_on_drop` takes the process down with it.
    current: Mutex<Option<JoinHandle<()>>>,
}

impl CommandSynthesizer {
    /// `program` is invoked as `program [args..] <text>` per utterance.
    pub fn new(program: impl Into<String>, args: Vec<String>, reporter: Reporter) -> Self {
        Self {
            program: program.into(),
            args,
            speaking: SpeakingFlag::new(),
            reporter,
            current: Mutex::new(None),
        }
    }

    /// Look for `program` on PATH; used by the capability factory to
    /// decide between this and [`UnsupportedSynthesizer`].
    pub fn is_available(program: &str) -> bool {
        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
    }

    fn cancel_current(&self) {
        let mut guard = self.current.lock().expect("synthesizer lock poisoned");
        if let Some(handle) = guard.take() {
            handle.abort();
        }
        self.speaking.clear();
    }
}

impl Synthesizer for CommandSynthesizer {
    fn speak(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SonnyError::Speech("cannot speak empty text".to_string()));
        }

        // Cancel-and-replace: whatever is in flight dies first.
        self.cancel_current();

        let mut child = spawn_utterance(&self.program, &self.args, text)
            .map_err(|e| SonnyError::Speech(format!("{} failed to start: {e}", self.program)))?;

        self.speaking.set();
        let speaking = self.speaking.clone();
        let reporter = self.reporter.clone();
        let program = self.program.clone();
        let handle = tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    reporter.warn(format!("{program} exited with {status}"));
                }
                Err(e) => {
                    reporter.warn(format!("{program} wait failed: {e}"));
                }
                _ => {}
            }
            // Clears on completion and on error alike.
            speaking.clear();
        });

        *self.current.lock().expect("synthesizer lock poisoned") = Some(handle);
        Ok(())
    }

    fn stop(&self) {
        self.cancel_current();
    }

    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }
}

impl Drop for CommandSynthesizer {
    fn drop(&mut self) {
        self.cancel_current();
    }
}

fn spawn_utterance(program: &str, args: &[String], text: &str) -> std::io::Result<Child> {
    Command::new(program)
        .args(args)
        .arg(text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
}

/// Stand-in for hosts without any TTS command.
///
/// Every `speak` fails with [`SonnyError::CapabilityUnavailable`] so the
/// caller reports it; nothing is ever silently dropped.
#[derive(Debug, Default)]
pub struct UnsupportedSynthesizer;

impl Synthesizer for UnsupportedSynthesizer {
    fn speak(&self, _text: &str) -> Result<()> {
        Err(SonnyError::CapabilityUnavailable(
            "speech synthesis".to_string(),
        ))
    }

    fn stop(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}
