// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Control hub grid
//!
//! The module launcher. A card per module, arranged two columns wide,
//! arrow-key navigable.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::hub::Route;
use crate::tui::pages::PageAction;

/// Card layout: title, blurb, destination.
const CARDS: &[(&str, &str, Route)] = &[
    (
        "Virtual Robot Studio",
        "3D Viewer + Movement Controls",
        Route::RobotStudio,
    ),
    (
        "Object Detection Studio",
        "Real-time Object Scanner",
        Route::ObjectScanner,
    ),
    (
        "AI Assistant",
        "Voice and text-based AI assistant",
        Route::Assistant,
    ),
    (
        "Voice Control Module",
        "Wake word, speech output, commands",
        Route::VoiceModule,
    ),
    (
        "3D Model Viewer",
        "Inspect the Sonny model",
        Route::VirtualModel,
    ),
    (
        "Movement Panel",
        "Joint sliders and pose presets",
        Route::MovementModule,
    ),
    (
        "Power Management",
        "Battery, voltage, servo draw",
        Route::PowerModule,
    ),
    (
        "Network System",
        "WiFi diagnostics and link checks",
        Route::NetworkModule,
    ),
];

const COLS: usize = 2;

#[derive(Debug, Default)]
pub struct ControlHubPage {
    selected: usize,
}

impl ControlHubPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_route(&self) -> Route {
        CARDS[self.selected].2
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Left => {
                if self.selected % COLS > 0 {
                    self.selected -= 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Right => {
                if self.selected % COLS + 1 < COLS && self.selected + 1 < CARDS.len() {
                    self.selected += 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Up => {
                if self.selected >= COLS {
                    self.selected -= COLS;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                if self.selected + COLS < CARDS.len() {
                    self.selected += COLS;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Enter => Some(PageAction::Navigate(self.selected_route())),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let rows_needed = CARDS.len().div_ceil(COLS);
        let header_and_rows: Vec<Constraint> = std::iter::once(Constraint::Length(2))
            .chain(std::iter::repeat(Constraint::Min(4)).take(rows_needed))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(header_and_rows)
            .split(area);

        frame.render_widget(
            Paragraph::new("Select a module to begin").style(Style::default().fg(Color::Gray)),
            rows[0],
        );

        for (row_idx, row_area) in rows.iter().skip(1).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);
            for col_idx in 0..COLS {
                let idx = row_idx * COLS + col_idx;
                let Some((title, blurb, _)) = CARDS.get(idx) else {
                    continue;
                };
                let selected = idx == self.selected;
                let border_style = if selected {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let card = Paragraph::new(vec![
                    Line::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    Line::styled(*blurb, Style::default().fg(Color::Gray)),
                ])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).border_style(border_style));
                frame.render_widget(card, cols[col_idx]);
            }
        }
    }
}
