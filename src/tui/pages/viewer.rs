// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model viewer page
//!
//! Wireframe canvas on the right, controls on the left. Wireframe mode
//! switches the canvas marker from solid blocks to braille dots, so the
//! material toggle has a visible texture change at terminal resolution.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::report::Reporter;
use crate::tui::input::InputState;
use crate::tui::pages::PageAction;
use crate::viewer::{ModelLoader, ViewerSession, ViewerToggle};

const ORBIT_STEP: f64 = 10.0;
const ZOOM_STEP: f64 = 1.0;
const SCALE_STEP: f32 = 0.5;
const LIGHT_STEP: f32 = 0.1;

pub struct ViewerPage {
    session: ViewerSession,
    /// `Some` while the user is typing an import path.
    importing: Option<InputState>,
}

impl ViewerPage {
    pub fn new(model_path: &str, reporter: Reporter) -> Self {
        Self {
            session: ViewerSession::new(ModelLoader::new(model_path), reporter),
            importing: None,
        }
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        if let Some(input) = self.importing.as_mut() {
            match key.code {
                KeyCode::Esc => {
                    self.importing = None;
                }
                KeyCode::Enter => {
                    let path = input.submit();
                    self.importing = None;
                    if !path.trim().is_empty() {
                        let _ = self.session.import_model(std::path::Path::new(path.trim()));
                    }
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Char(c) => input.insert_char(c),
                _ => {}
            }
            return Some(PageAction::Consumed);
        }

        match key.code {
            KeyCode::Char('g') => self.toggle(ViewerToggle::Grid),
            KeyCode::Char('s') => self.toggle(ViewerToggle::Shadows),
            KeyCode::Char('a') => self.toggle(ViewerToggle::Axes),
            KeyCode::Char('e') => self.toggle(ViewerToggle::Reflections),
            KeyCode::Char('w') => self.toggle(ViewerToggle::Wireframe),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let scale = self.session.transform().scale + SCALE_STEP;
                self.session.transform_mut().set_scale(scale);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('-') => {
                let scale = self.session.transform().scale - SCALE_STEP;
                self.session.transform_mut().set_scale(scale);
                Some(PageAction::Consumed)
            }
            KeyCode::Left => {
                self.session.camera_mut().orbit(-ORBIT_STEP, 0.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Right => {
                self.session.camera_mut().orbit(ORBIT_STEP, 0.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Up => {
                self.session.camera_mut().orbit(0.0, ORBIT_STEP / 2.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                self.session.camera_mut().orbit(0.0, -ORBIT_STEP / 2.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('z') => {
                self.session.camera_mut().zoom(-ZOOM_STEP);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('Z') => {
                self.session.camera_mut().zoom(ZOOM_STEP);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('h') => {
                self.session.camera_mut().pan(-0.5, 0.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('l') => {
                self.session.camera_mut().pan(0.5, 0.0);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('j') => {
                self.session.camera_mut().pan(0.0, -0.5);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('k') => {
                self.session.camera_mut().pan(0.0, 0.5);
                Some(PageAction::Consumed)
            }
            KeyCode::Char(',') => {
                let v = self.session.settings().ambient_light_intensity - LIGHT_STEP;
                self.session.set_ambient(v);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('.') => {
                let v = self.session.settings().ambient_light_intensity + LIGHT_STEP;
                self.session.set_ambient(v);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('<') => {
                let v = self.session.settings().directional_light_intensity - LIGHT_STEP;
                self.session.set_directional(v);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('>') => {
                let v = self.session.settings().directional_light_intensity + LIGHT_STEP;
                self.session.set_directional(v);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('i') => {
                self.importing = Some(InputState::new());
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    fn toggle(&mut self, toggle: ViewerToggle) -> Option<PageAction> {
        self.session.toggle(toggle);
        Some(PageAction::Consumed)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, accent: Color) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(20)])
            .split(area);

        self.render_controls(frame, cols[0], accent);
        self.render_canvas(frame, cols[1], accent);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let settings = self.session.settings();
        let transform = self.session.transform();
        let on_off = |v: bool| if v { "on " } else { "off" };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Model: ", Style::default().fg(Color::Gray)),
                Span::styled(self.session.model_name(), Style::default().fg(accent)),
            ]),
            Line::raw(""),
            Line::styled("Display Settings", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(format!(" [g] grid         {}", on_off(settings.show_grid))),
            Line::raw(format!(" [s] shadows      {}", on_off(settings.show_shadows))),
            Line::raw(format!(" [a] axes         {}", on_off(settings.show_axes))),
            Line::raw(format!(" [e] reflections  {}", on_off(settings.show_reflections))),
            Line::raw(format!(" [w] wireframe    {}", on_off(settings.wireframe))),
            Line::raw(""),
            Line::styled("Lighting", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(format!(
                " [,/.] ambient     {:.1}",
                settings.ambient_light_intensity
            )),
            Line::raw(format!(
                " [</>] directional {:.1}",
                settings.directional_light_intensity
            )),
            Line::raw(""),
            Line::styled("Transform", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(format!(" [+/-] scale      {}", transform.scale_label())),
            Line::raw(format!(
                " rotation   {:.0}° {:.0}° {:.0}°",
                transform.rotation[0], transform.rotation[1], transform.rotation[2]
            )),
            Line::raw(""),
            Line::raw(" arrows orbit, z/Z zoom, hjkl pan"),
            Line::raw(" [i] import model file"),
        ];

        if let Some(input) = &self.importing {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("Import path: ", Style::default().fg(accent)),
                Span::raw(input.text().to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Controls")),
            area,
        );
    }

    fn render_canvas(&mut self, frame: &mut Frame, area: Rect, accent: Color) {
        let w = f64::from(area.width.saturating_sub(2).max(1));
        let h = f64::from(area.height.saturating_sub(2).max(1)) * 2.0;
        let lines = self.session.render_pass(w, h);
        let marker = if self.session.settings().wireframe {
            Marker::Braille
        } else {
            Marker::Block
        };
        // Directional intensity dims or brightens the model lines.
        let bright = self.session.settings().directional_light_intensity >= 0.5;
        let color = if bright { accent } else { Color::DarkGray };

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Scene"))
            .marker(marker)
            .x_bounds([0.0, w])
            .y_bounds([0.0, h])
            .paint(move |ctx| {
                for ((x1, y1), (x2, y2)) in &lines {
                    ctx.draw(&CanvasLine {
                        x1: *x1,
                        y1: *y1,
                        x2: *x2,
                        y2: *y2,
                        color,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crossterm::event::KeyModifiers;
    use std::io::Write;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page() -> ViewerPage {
        let (reporter, _rx) = report::channel();
        ViewerPage::new("/nonexistent/sonny.obj", reporter)
    }

    #[test]
    fn test_wireframe_key_toggles_setting() {
        let mut p = page();
        assert!(!p.session().settings().wireframe);
        p.handle_key(key(KeyCode::Char('w')));
        assert!(p.session().settings().wireframe);
    }

    #[test]
    fn test_scale_keys_update_label() {
        let mut p = page();
        for _ in 0..4 {
            p.handle_key(key(KeyCode::Char('+')));
        }
        assert_eq!(p.session().transform().scale_label(), "5.0");
    }

    #[test]
    fn test_import_mode_consumes_keys_and_swaps_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut p = page();
        p.handle_key(key(KeyCode::Char('i')));
        for c in path.chars() {
            assert_eq!(p.handle_key(key(KeyCode::Char(c))), Some(PageAction::Consumed));
        }
        p.handle_key(key(KeyCode::Enter));
        // Model name now follows the imported file stem.
        assert_ne!(p.session().model_name(), "placeholder");
    }

    #[test]
    fn test_import_mode_escape_cancels() {
        let mut p = page();
        p.handle_key(key(KeyCode::Char('i')));
        p.handle_key(key(KeyCode::Esc));
        // Back to normal mode: 'w' toggles again.
        p.handle_key(key(KeyCode::Char('w')));
        assert!(p.session().settings().wireframe);
    }
}
