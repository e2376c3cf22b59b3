// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command-line interface for Sonny

pub mod args;

pub use args::{AskArgs, Cli, Commands, OutputFormat};
