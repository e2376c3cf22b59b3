// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Speech capability providers
//!
//! The assistant never touches host speech facilities directly. It is
//! handed a [`Synthesizer`] and a [`Recognizer`] — explicit capability
//! providers that can be substituted with fakes in tests. Hosts without
//! a capability get the unsupported implementations, which fail visibly
//! through the report channel instead of silently doing nothing.

pub mod recognition;
pub mod synthesis;

pub use recognition::{Recognizer, ScriptedRecognizer, UnsupportedRecognizer};
pub use synthesis::{CommandSynthesizer, Synthesizer, UnsupportedSynthesizer};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::VoiceConfig;
use crate::report::Reporter;

/// Environment variable that scripts the microphone for demos and
/// manual testing: transcripts separated by `;`.
pub const FAKE_MIC_ENV: &str = "SONNY_FAKE_MIC";

/// Build the synthesis capability for this host: the configured TTS
/// command when it exists on PATH, otherwise the unsupported stub.
pub fn default_synthesizer(voice: &VoiceConfig, reporter: Reporter) -> Arc<dyn Synthesizer> {
    if !CommandSynthesizer::is_available(&voice.synthesizer_program) {
        return Arc::new(UnsupportedSynthesizer);
    }
    let mut args = voice.synthesizer_args.clone();
    if args.is_empty() && voice.synthesizer_program == "espeak" {
        // espeak: -s words/min, -p pitch 0-99.
        args = vec![
            "-s".to_string(),
            format!("{:.0}", voice.rate * 175.0),
            "-p".to_string(),
            format!("{:.0}", (voice.pitch * 49.0).clamp(0.0, 99.0)),
        ];
    }
    Arc::new(CommandSynthesizer::new(
        voice.synthesizer_program.clone(),
        args,
        reporter,
    ))
}

/// Build the recognition capability. There is no portable microphone
/// transcription on a bare terminal, so recognition is unsupported
/// unless scripted through [`FAKE_MIC_ENV`].
pub fn default_recognizer() -> Arc<dyn Recognizer> {
    match std::env::var(FAKE_MIC_ENV) {
        Ok(script) if !script.trim().is_empty() => Arc::new(ScriptedRecognizer::new(
            script.split(';').map(str::trim).filter(|s| !s.is_empty()),
        )),
        _ => Arc::new(UnsupportedRecognizer),
    }
}

/// Shared "currently speaking" flag.
///
/// Raised when an utterance starts and cleared when it completes or
/// errors. The UI reads it to disable the mic control while speaking;
/// that exclusion is a UI convention, not a lock.
#[derive(Debug, Clone, Default)]
pub struct SpeakingFlag(Arc<AtomicBool>);

impl SpeakingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
