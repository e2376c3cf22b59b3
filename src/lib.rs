// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sonny - terminal control hub for a hobbyist humanoid robot project.
//!
//! This crate exposes the runtime used by the `sonny` CLI: a routed
//! terminal UI presenting the project's portfolio pages and a simulated
//! robot-control surface.
//!
//! Architecture highlights:
//! - `personality`, `chat`: the scripted assistant — pure trigger-table
//!   dispatch plus session state
//! - `speech`, `vision`: capability providers (synthesis, recognition,
//!   camera, detection) injected into pages, fakeable in tests
//! - `viewer`: wireframe model viewer with orbit camera and projection
//! - `pose`: joint poses, presets, and the typed broadcast bus
//! - `hub`, `tui`: route table and the ratatui presentation layer
//! - `report`: the single status/error channel every page reports through

pub mod chat;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod hub;
pub mod personality;
pub mod pose;
pub mod report;
pub mod speech;
pub mod telemetry;
pub mod tui;
pub mod viewer;
pub mod vision;

pub use error::{Result, SonnyError};
