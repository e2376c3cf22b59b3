// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sonny - robot control hub for your terminal
//!
//! Entry point for the Sonny CLI application.

use std::time::Duration;

use clap::Parser;

use sonny::cli::{AskArgs, Cli, Commands, OutputFormat};
use sonny::config::Settings;
use sonny::error::Result;
use sonny::hub::Route;
use sonny::personality::{self, PersonalityKind};
use sonny::report;
use sonny::speech;
use sonny::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on the runtime diagnostics without requiring target
    // names up front. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in ["sonny=debug", "sonny.report=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    // The hub owns the terminal, so interactive logs go to a file;
    // one-shot commands log to stderr like any CLI.
    let interactive = matches!(cli.command, None | Some(Commands::Hub));
    if interactive {
        let log_path = Settings::sonny_home().join("sonny.log");
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let log_file = std::fs::File::create(&log_path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::sync::Mutex::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;

    match cli.command {
        None | Some(Commands::Hub) => {
            tui::run_hub(settings).await?;
        }
        Some(Commands::Ask(args)) => {
            run_ask(args, &settings, cli.format).await?;
        }
        Some(Commands::Routes) => {
            run_routes(cli.format)?;
        }
        Some(Commands::Config) => {
            run_config(&settings, cli.format)?;
        }
    }

    Ok(())
}

/// One dispatcher round without the TUI.
async fn run_ask(args: AskArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let kind = PersonalityKind::parse(&args.personality);
    let reply = personality::respond(&args.input, kind);

    match format {
        OutputFormat::Text => println!("{reply}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "input": args.input,
                "personality": kind.key(),
                "reply": reply,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if args.speak {
        let (reporter, _reports) = report::channel();
        let synth = speech::default_synthesizer(&settings.voice, reporter);
        synth.speak(&reply)?;
        // Give the worker a beat to start, then wait for the utterance.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let deadline = tokio::time::Instant::now() + Duration::from_secs(30);
        while synth.is_speaking() && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }

    Ok(())
}

/// Print the navigation surface.
fn run_routes(format: OutputFormat) -> Result<()> {
    let routes = Route::table();
    match format {
        OutputFormat::Text => {
            for route in routes {
                println!("{:<24} {}", route.path(), route.title());
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = routes
                .iter()
                .map(|r| serde_json::json!({"path": r.path(), "title": r.title()}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Print the effective configuration.
fn run_config(settings: &Settings, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", toml::to_string_pretty(settings).map_err(sonny::SonnyError::from)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
    }
    Ok(())
}
