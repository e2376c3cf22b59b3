// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! AI assistant page
//!
//! Transcript, input line, personality selector, mic control. All
//! replies come from the personality dispatcher; speech goes through
//! the injected capabilities.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::chat::{AssistantEngine, MessageRole};
use crate::personality::PersonalityKind;
use crate::report::Reporter;
use crate::speech::{Recognizer, Synthesizer};
use crate::tui::input::InputState;
use crate::tui::pages::PageAction;

pub struct AssistantPage {
    engine: AssistantEngine,
    input: InputState,
    /// Lines scrolled up from the transcript bottom.
    scroll_back: usize,
}

impl AssistantPage {
    pub fn new(
        personality: PersonalityKind,
        synthesizer: Arc<dyn Synthesizer>,
        recognizer: Arc<dyn Recognizer>,
        reporter: Reporter,
    ) -> Self {
        Self {
            engine: AssistantEngine::new(personality, synthesizer, recognizer, reporter),
            input: InputState::new(),
            scroll_back: 0,
        }
    }

    pub fn engine(&self) -> &AssistantEngine {
        &self.engine
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        // Ctrl chords first; plain chars go to the input buffer.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('p') => {
                    let next = self.engine.personality().next();
                    self.engine.set_personality(next);
                    return Some(PageAction::Consumed);
                }
                KeyCode::Char('l') => {
                    // Mic is a UI no-op while speaking (buttons-disabled
                    // convention); the data layer does not enforce it.
                    if !self.engine.is_speaking() {
                        self.engine.submit_voice().await;
                        self.scroll_back = 0;
                    }
                    return Some(PageAction::Consumed);
                }
                _ => return None,
            }
        }
        match key.code {
            KeyCode::Enter => {
                let text = self.input.submit();
                self.engine.submit_text(&text);
                self.scroll_back = 0;
                Some(PageAction::Consumed)
            }
            KeyCode::Backspace => {
                self.input.backspace();
                Some(PageAction::Consumed)
            }
            KeyCode::Left => {
                self.input.move_left();
                Some(PageAction::Consumed)
            }
            KeyCode::Right => {
                self.input.move_right();
                Some(PageAction::Consumed)
            }
            KeyCode::Up => {
                self.scroll_back += 1;
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                self.scroll_back = self.scroll_back.saturating_sub(1);
                Some(PageAction::Consumed)
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        // Personality selector + capability indicators.
        let mut header = vec![
            Span::styled("Personality: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.engine.personality().label(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Ctrl+P cycles)", Style::default().fg(Color::DarkGray)),
        ];
        if self.engine.is_speaking() {
            header.push(Span::styled("  🔊 speaking", Style::default().fg(accent)));
        }
        if self.engine.can_listen() {
            header.push(Span::styled("  Ctrl+L mic", Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Paragraph::new(Line::from(header)), rows[0]);

        // Transcript, newest at the bottom.
        let mut lines: Vec<Line> = Vec::new();
        for msg in self.engine.session().messages() {
            let (tag_style, body_style) = match msg.role {
                MessageRole::Assistant => (
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    Style::default(),
                ),
                _ => (
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Gray),
                ),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", msg.role.label()), tag_style),
                Span::styled(msg.content.clone(), body_style),
            ]));
        }
        let visible = rows[1].height.saturating_sub(2) as usize;
        let total = lines.len();
        let offset = total
            .saturating_sub(visible)
            .saturating_sub(self.scroll_back.min(total));
        let tail: Vec<Line> = lines.into_iter().skip(offset).collect();
        frame.render_widget(
            Paragraph::new(tail)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Transcript")),
            rows[1],
        );

        // Input line.
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.input.text().to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]))
            .block(Block::default().borders(Borders::ALL).title("Say something...")),
            rows[2],
        );
    }
}
