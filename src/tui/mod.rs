// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal UI
//!
//! Raw-mode alternate-screen app driven by one cooperative loop:
//! a tick interval (detection cadence, telemetry steps), the report
//! channel, and zero-timeout keyboard polling multiplexed with
//! `tokio::select!`.

pub mod app;
pub mod input;
pub mod pages;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::time::MissedTickBehavior;

use crate::config::Settings;
use crate::error::Result;
use crate::report::{self, ReportReceiver};
use app::App;

/// Run the control hub until the user quits.
pub async fn run_hub(settings: Settings) -> Result<()> {
    let (reporter, reports) = report::channel();
    let mut app = App::new(settings, reporter);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, reports).await;

    // Restore the terminal whatever happened in the loop.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut reports: ReportReceiver,
) -> Result<()> {
    let tick_ms = app.settings.detection.tick_ms.max(16);
    let mut tick = tokio::time::interval(Duration::from_millis(tick_ms));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.on_tick().await;
            }
            report = reports.recv() => {
                if let Some(report) = report {
                    app.set_status(report);
                }
            }
        }

        // Drain whatever keys arrived since the last pass.
        while crossterm::event::poll(Duration::from_millis(0))? {
            if let TermEvent::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key).await;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
