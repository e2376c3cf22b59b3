// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Sonny.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sonny - robot control hub for your terminal
#[derive(Parser, Debug)]
#[command(name = "sonny")]
#[command(version, about = "Robot control hub for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for non-interactive commands
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the control hub TUI (default when no command given)
    Hub,

    /// Ask the assistant a single question (non-interactive)
    Ask(AskArgs),

    /// List the navigation routes
    Routes,

    /// Print the effective configuration
    #[command(alias = "settings")]
    Config,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug, Default)]
pub struct AskArgs {
    /// The question text
    pub input: String,

    /// Personality key (default, friendly, sarcastic, butler)
    #[arg(short, long, default_value = "default")]
    pub personality: String,

    /// Speak the reply with the configured synthesizer
    #[arg(long)]
    pub speak: bool,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults_to_hub() {
        let cli = Cli::parse_from(["sonny"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_ask_with_personality() {
        let cli = Cli::parse_from(["sonny", "ask", "hello", "--personality", "sarcastic"]);
        match cli.command {
            Some(Commands::Ask(args)) => {
                assert_eq!(args.input, "hello");
                assert_eq!(args.personality, "sarcastic");
                assert!(!args.speak);
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::parse_from(["sonny", "--format", "json", "routes"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Routes)));
    }

    #[test]
    fn test_settings_alias() {
        let cli = Cli::parse_from(["sonny", "settings"]);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }
}
