// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Sonny
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Sonny operations
#[derive(Error, Debug)]
pub enum SonnyError {
    /// A required capability (speech, camera) is not available on this host
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Camera acquisition was denied or failed
    #[error("Camera error: {0}")]
    Camera(String),

    /// Object detector errors (model load, inference)
    #[error("Detection error: {0}")]
    Detection(String),

    /// Speech synthesis or recognition errors
    #[error("Speech error: {0}")]
    Speech(String),

    /// Model asset load or decode errors
    #[error("Asset error: {0}")]
    Asset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown route requested
    #[error("Unknown route: {0}")]
    Route(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Result type alias for Sonny operations
pub type Result<T> = std::result::Result<T, SonnyError>;

impl From<toml::de::Error> for SonnyError {
    fn from(err: toml::de::Error) -> Self {
        SonnyError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for SonnyError {
    fn from(err: toml::ser::Error) -> Self {
        SonnyError::Toml(err.to_string())
    }
}
