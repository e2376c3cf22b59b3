// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Sonny
//!
//! Handles loading and saving settings from ~/.sonny/settings.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SonnyError};
use crate::viewer::ViewerSettings;

/// Main settings structure, stored in ~/.sonny/settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Voice input/output settings
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Model viewer defaults
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Object detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Speech synthesis and recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceConfig {
    /// TTS command invoked per utterance
    #[serde(default = "default_synth_program")]
    pub synthesizer_program: String,

    /// Extra arguments passed before the utterance text
    #[serde(default)]
    pub synthesizer_args: Vec<String>,

    /// Voice speed multiplier (0.5 - 2.0)
    #[serde(default = "default_rate")]
    pub rate: f32,

    /// Voice pitch multiplier (0.0 - 2.0)
    #[serde(default = "default_rate")]
    pub pitch: f32,

    /// Wake word shown in the wake-word settings page
    #[serde(default = "default_wake_word")]
    pub wake_word: String,

    /// Wake-word engine selection
    #[serde(default = "default_wake_engine")]
    pub wake_engine: String,

    /// Personality key used for new chat sessions
    #[serde(default = "default_personality")]
    pub default_personality: String,
}

fn default_synth_program() -> String {
    "espeak".to_string()
}

fn default_rate() -> f32 {
    1.0
}

fn default_wake_word() -> String {
    "Hey Sonny".to_string()
}

fn default_wake_engine() -> String {
    "Mycroft Precise".to_string()
}

fn default_personality() -> String {
    "default".to_string()
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            synthesizer_program: default_synth_program(),
            synthesizer_args: Vec::new(),
            rate: default_rate(),
            pitch: default_rate(),
            wake_word: default_wake_word(),
            wake_engine: default_wake_engine(),
            default_personality: default_personality(),
        }
    }
}

/// Wake-word engines offered by the settings page.
pub const WAKE_ENGINES: &[&str] = &["Mycroft Precise", "PocketSphinx", "Vosk (Keyword Mode)"];

/// Model viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Fixed path of the default model asset
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Scene display defaults
    #[serde(default)]
    pub scene: ViewerSettings,
}

fn default_model_path() -> String {
    crate::viewer::loader::DEFAULT_MODEL_PATH.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            scene: ViewerSettings::default(),
        }
    }
}

/// Object detection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionConfig {
    /// Scanner mode on entry: "kitchen" or "clothing"
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Detection loop cadence in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Detections below this confidence are not drawn
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

fn default_mode() -> String {
    "kitchen".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

fn default_min_confidence() -> f32 {
    0.5
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            tick_ms: default_tick_ms(),
            min_confidence: default_min_confidence(),
        }
    }
}

/// Appearance configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Accent color for titles and borders
    #[serde(default = "default_accent")]
    pub accent_color: String,

    /// Show the hub banner on startup
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_accent() -> String {
    "#00ffc8".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent(),
            show_banner: true,
        }
    }
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::sonny_home().join("settings.toml")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields the
    /// defaults; a malformed one is an error the user should see.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the sonny home directory (~/.sonny or $SONNY_HOME).
    pub fn sonny_home() -> PathBuf {
        if let Ok(home) = std::env::var("SONNY_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sonny")
    }

    /// Check value ranges before the settings are used or persisted.
    pub fn validate(&self) -> Result<()> {
        if !(0.5..=2.0).contains(&self.voice.rate) {
            return Err(SonnyError::Config(format!(
                "voice.rate {} outside 0.5-2.0",
                self.voice.rate
            )));
        }
        if !(0.0..=2.0).contains(&self.voice.pitch) {
            return Err(SonnyError::Config(format!(
                "voice.pitch {} outside 0.0-2.0",
                self.voice.pitch
            )));
        }
        if self.detection.tick_ms < 16 {
            return Err(SonnyError::Config(format!(
                "detection.tick_ms {} below 16",
                self.detection.tick_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(SonnyError::Config(format!(
                "detection.min_confidence {} outside 0.0-1.0",
                self.detection.min_confidence
            )));
        }
        if !matches!(self.detection.default_mode.as_str(), "kitchen" | "clothing") {
            return Err(SonnyError::Config(format!(
                "detection.default_mode {:?} is not kitchen or clothing",
                self.detection.default_mode
            )));
        }
        if !self.appearance.accent_color.starts_with('#') {
            return Err(SonnyError::Config(format!(
                "appearance.accent_color {:?} is not a hex color",
                self.appearance.accent_color
            )));
        }
        Ok(())
    }
}
