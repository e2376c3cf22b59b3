// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame layout and draw dispatch
//!
//! Every frame: title bar, the active page's body, and the status
//! banner fed by the report channel.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::report::Severity;
use crate::tui::app::{ActivePage, App};
use crate::tui::pages;

/// Parse `#rrggbb` into a color; anything else falls back to cyan.
pub fn parse_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Cyan
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let accent = parse_color(&app.settings.appearance.accent_color);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, rows[0], app, accent);
    draw_body(frame, rows[1], app, accent);
    draw_status(frame, rows[2], app);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App, accent: Color) {
    let title = Line::from(vec![
        Span::styled(" SONNY ", Style::default().fg(Color::Black).bg(accent)),
        Span::styled(
            format!(" {} ", app.route.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.route.path(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &mut App, accent: Color) {
    match &mut app.page {
        ActivePage::Home => pages::render_home(frame, area, accent),
        ActivePage::About => pages::render_about(frame, area, accent),
        ActivePage::Skill(idx) => pages::render_skill(frame, area, accent, *idx),
        ActivePage::ControlHub(page) => page.render(frame, area, accent),
        ActivePage::Assistant(page) => page.render(frame, area, accent),
        ActivePage::Scanner(page) => page.render(frame, area, accent),
        ActivePage::Viewer(page) => page.render(frame, area, accent),
        ActivePage::Studio(page) => page.render(frame, area, accent),
        ActivePage::Movement(page) => page.render(frame, area, accent),
        ActivePage::Voice(page) => page.render(frame, area, accent),
        ActivePage::WakeWord(page) => page.render(frame, area, accent),
        ActivePage::SpeechOutput(page) => page.render(frame, area, accent),
        ActivePage::Commands(page) => page.render(frame, area, accent),
        ActivePage::Power(page) | ActivePage::Network(page) => page.render(frame, area, accent),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(report) => {
            let color = match report.severity {
                Severity::Info => Color::Green,
                Severity::Warn => Color::Yellow,
                Severity::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", report.severity.label()),
                    Style::default().fg(Color::Black).bg(color),
                ),
                Span::raw(" "),
                Span::raw(report.message.clone()),
            ])
        }
        None => Line::styled(
            " Esc back · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}
