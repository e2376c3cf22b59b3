// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Voice module pages
//!
//! The voice hub plus its three sub-pages: wake-word settings, speech
//! output settings, and the command trainer. Settings pages edit the
//! real config and persist on save; trained commands are transient by
//! design.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::config::{Settings, WAKE_ENGINES};
use crate::hub::Route;
use crate::personality::PersonalityKind;
use crate::report::Reporter;
use crate::tui::input::InputState;
use crate::tui::pages::PageAction;

const MENU: &[(&str, &str, Route)] = &[
    (
        "Wake-Word Settings",
        "Configure recognition engine and microphone settings.",
        Route::WakeWord,
    ),
    (
        "Speech Output",
        "Control voice type, speed, pitch, and TTS engine.",
        Route::SpeechOutput,
    ),
    (
        "Command Trainer",
        "Teach Sonny new commands and behaviors.",
        Route::CommandTrainer,
    ),
];

/// The voice hub menu.
#[derive(Debug, Default)]
pub struct VoiceModulePage {
    selected: usize,
}

impl VoiceModulePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                if self.selected + 1 < MENU.len() {
                    self.selected += 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Enter => Some(PageAction::Navigate(MENU[self.selected].2)),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let mut lines = vec![
            Line::styled(
                "Manage wake-word detection, speech output, and command training.",
                Style::default().fg(Color::Gray),
            ),
            Line::raw(""),
        ];
        for (idx, (title, blurb, _)) in MENU.iter().enumerate() {
            let marker = if idx == self.selected { "> " } else { "  " };
            let style = if idx == self.selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("{marker}{title}"), style));
            lines.push(Line::styled(
                format!("    {blurb}"),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

/// Wake-word settings: the word itself plus the engine choice.
pub struct WakeWordPage {
    word: InputState,
    engine_idx: usize,
    editing: bool,
}

impl WakeWordPage {
    pub fn new(settings: &Settings) -> Self {
        let engine_idx = WAKE_ENGINES
            .iter()
            .position(|e| *e == settings.voice.wake_engine)
            .unwrap_or(0);
        Self {
            word: InputState::with_text(&settings.voice.wake_word),
            engine_idx,
            editing: false,
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        settings: &mut Settings,
        reporter: &Reporter,
    ) -> Option<PageAction> {
        if self.editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                KeyCode::Backspace => self.word.backspace(),
                KeyCode::Left => self.word.move_left(),
                KeyCode::Right => self.word.move_right(),
                KeyCode::Char(c) => self.word.insert_char(c),
                _ => {}
            }
            return Some(PageAction::Consumed);
        }
        match key.code {
            KeyCode::Char('e') => {
                self.editing = true;
                Some(PageAction::Consumed)
            }
            KeyCode::Up => {
                self.engine_idx = self.engine_idx.saturating_sub(1);
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                if self.engine_idx + 1 < WAKE_ENGINES.len() {
                    self.engine_idx += 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Enter => {
                settings.voice.wake_word = self.word.text().to_string();
                settings.voice.wake_engine = WAKE_ENGINES[self.engine_idx].to_string();
                match settings.save() {
                    Ok(()) => reporter.info("wake-word settings saved"),
                    Err(e) => reporter.error(format!("saving settings failed: {e}")),
                }
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Wake Word  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("\"{}\"", self.word.text()),
                    Style::default().fg(accent),
                ),
                if self.editing {
                    Span::styled("  (editing — Enter done)", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("  (e edits)", Style::default().fg(Color::DarkGray))
                },
            ]),
            Line::raw(""),
            Line::styled("Engine", Style::default().fg(Color::Gray)),
        ];
        for (idx, engine) in WAKE_ENGINES.iter().enumerate() {
            let marker = if idx == self.engine_idx { "> " } else { "  " };
            let style = if idx == self.engine_idx {
                Style::default().fg(accent)
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("{marker}{engine}"), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Enter saves settings",
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

/// Speech output settings: pitch, rate, default personality.
pub struct SpeechOutputPage {
    pitch: f32,
    rate: f32,
    personality: PersonalityKind,
    selected: usize,
}

impl SpeechOutputPage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pitch: settings.voice.pitch,
            rate: settings.voice.rate,
            personality: PersonalityKind::parse(&settings.voice.default_personality),
            selected: 0,
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        settings: &mut Settings,
        reporter: &Reporter,
    ) -> Option<PageAction> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                if self.selected < 2 {
                    self.selected += 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Left | KeyCode::Right => {
                let step = if key.code == KeyCode::Left { -0.1 } else { 0.1 };
                match self.selected {
                    0 => self.pitch = (self.pitch + step).clamp(0.0, 2.0),
                    1 => self.rate = (self.rate + step).clamp(0.5, 2.0),
                    _ => {
                        self.personality = self.personality.next();
                    }
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Enter => {
                settings.voice.pitch = self.pitch;
                settings.voice.rate = self.rate;
                settings.voice.default_personality = self.personality.key().to_string();
                match settings.save() {
                    Ok(()) => reporter.info("speech output settings saved"),
                    Err(e) => reporter.error(format!("saving settings failed: {e}")),
                }
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let row = |idx: usize, label: &str, value: String| {
            let marker = if idx == self.selected { "> " } else { "  " };
            let style = if idx == self.selected {
                Style::default().fg(accent)
            } else {
                Style::default()
            };
            Line::styled(format!("{marker}{label:<18}{value}"), style)
        };
        let lines = vec![
            row(0, "Voice Pitch", format!("{:.1}", self.pitch)),
            row(1, "Voice Speed", format!("{:.1}", self.rate)),
            row(2, "Voice Personality", self.personality.label().to_string()),
            Line::raw(""),
            Line::styled("←/→ adjust, Enter saves", Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

/// Command trainer: name + response pairs held only for this visit.
pub struct CommandTrainerPage {
    name: InputState,
    response: InputState,
    editing_response: bool,
    commands: Vec<(String, String)>,
}

impl CommandTrainerPage {
    pub fn new() -> Self {
        Self {
            name: InputState::new(),
            response: InputState::new(),
            editing_response: false,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[(String, String)] {
        &self.commands
    }

    pub fn handle_key(&mut self, key: KeyEvent, reporter: &Reporter) -> Option<PageAction> {
        let field = if self.editing_response {
            &mut self.response
        } else {
            &mut self.name
        };
        match key.code {
            KeyCode::Tab => {
                self.editing_response = !self.editing_response;
                Some(PageAction::Consumed)
            }
            KeyCode::Backspace => {
                field.backspace();
                Some(PageAction::Consumed)
            }
            KeyCode::Char(c) => {
                field.insert_char(c);
                Some(PageAction::Consumed)
            }
            KeyCode::Enter => {
                let name = self.name.text().trim().to_string();
                let response = self.response.text().trim().to_string();
                if name.is_empty() || response.is_empty() {
                    reporter.warn("command needs both a name and a response");
                } else {
                    self.commands.push((name.clone(), response));
                    self.name.clear();
                    self.response.clear();
                    self.editing_response = false;
                    reporter.info(format!("command \"{name}\" added (this session only)"));
                }
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let field_style = |active: bool| {
            if active {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::Gray)
            }
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("New Command  ", field_style(!self.editing_response)),
                Span::raw(format!("e.g. 'Sonny wave' → {}", self.name.text())),
            ]),
            Line::from(vec![
                Span::styled("Response     ", field_style(self.editing_response)),
                Span::raw(format!("What should Sonny do? → {}", self.response.text())),
            ]),
            Line::styled(
                "Tab switches field, Enter adds",
                Style::default().fg(Color::DarkGray),
            ),
            Line::raw(""),
            Line::styled("Trained commands (not persisted)", Style::default().add_modifier(Modifier::BOLD)),
        ];
        if self.commands.is_empty() {
            lines.push(Line::styled("  (none yet)", Style::default().fg(Color::Gray)));
        }
        for (name, response) in &self.commands {
            lines.push(Line::raw(format!("  {name} → {response}")));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

impl Default for CommandTrainerPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_voice_menu_navigates() {
        let mut page = VoiceModulePage::new();
        page.handle_key(key(KeyCode::Down));
        let action = page.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(PageAction::Navigate(Route::SpeechOutput)));
    }

    #[test]
    fn test_wake_word_save_updates_settings() {
        let mut settings = Settings::default();
        let (reporter, _rx) = report::channel();
        let home = tempfile::tempdir().unwrap();
        std::env::set_var("SONNY_HOME", home.path());

        let mut page = WakeWordPage::new(&settings);
        page.handle_key(key(KeyCode::Char('e')), &mut settings, &reporter);
        for c in "!".chars() {
            page.handle_key(key(KeyCode::Char(c)), &mut settings, &reporter);
        }
        page.handle_key(key(KeyCode::Enter), &mut settings, &reporter); // leave edit
        page.handle_key(key(KeyCode::Down), &mut settings, &reporter);
        page.handle_key(key(KeyCode::Enter), &mut settings, &reporter); // save

        assert_eq!(settings.voice.wake_word, "Hey Sonny!");
        assert_eq!(settings.voice.wake_engine, WAKE_ENGINES[1]);
        std::env::remove_var("SONNY_HOME");
    }

    #[test]
    fn test_trainer_requires_both_fields() {
        let (reporter, mut rx) = report::channel();
        let mut page = CommandTrainerPage::new();
        for c in "wave".chars() {
            page.handle_key(key(KeyCode::Char(c)), &reporter);
        }
        page.handle_key(key(KeyCode::Enter), &reporter);
        assert!(page.commands().is_empty());
        assert_eq!(rx.try_recv().unwrap().severity, report::Severity::Warn);

        page.handle_key(key(KeyCode::Tab), &reporter);
        for c in "raise left arm".chars() {
            page.handle_key(key(KeyCode::Char(c)), &reporter);
        }
        page.handle_key(key(KeyCode::Enter), &reporter);
        assert_eq!(page.commands().len(), 1);
        assert_eq!(page.commands()[0].0, "wave");
    }
}
