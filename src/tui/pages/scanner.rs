// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Object scanner page
//!
//! Hosts one [`Scanner`] session and draws its overlay. Switching mode
//! tears the session down (releasing the stream) and starts a fresh
//! one, exactly like remounting the original detection view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Rectangle};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::config::DetectionConfig;
use crate::report::Reporter;
use crate::tui::pages::PageAction;
use crate::tui::ui::parse_color;
use crate::vision::{
    DetectorMode, LumaBlobDetector, Scanner, ScannerState, SimulatedCamera,
};

pub struct ScannerPage {
    scanner: Scanner,
    mode: DetectorMode,
    config: DetectionConfig,
    reporter: Reporter,
    started: bool,
}

impl ScannerPage {
    pub fn new(config: DetectionConfig, reporter: Reporter) -> Self {
        let mode = match config.default_mode.as_str() {
            "clothing" => DetectorMode::Clothing,
            _ => DetectorMode::Kitchen,
        };
        let scanner = Self::build_scanner(mode, &config, &reporter);
        Self {
            scanner,
            mode,
            config,
            reporter,
            started: false,
        }
    }

    fn build_scanner(mode: DetectorMode, config: &DetectionConfig, reporter: &Reporter) -> Scanner {
        Scanner::new(
            Box::new(SimulatedCamera::default()),
            Box::new(LumaBlobDetector::new(mode)),
            mode,
            reporter.clone(),
        )
        .with_min_confidence(config.min_confidence)
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    fn switch_mode(&mut self, mode: DetectorMode) {
        if mode == self.mode {
            return;
        }
        // Old session stops (and releases its stream) on drop.
        self.scanner.stop();
        self.mode = mode;
        self.scanner = Self::build_scanner(mode, &self.config, &self.reporter);
        self.started = false;
    }

    /// Drive the session: lazy start on the first tick, then one
    /// detection pass per tick.
    pub async fn on_tick(&mut self) {
        if !self.started {
            self.started = true;
            self.scanner.start().await;
            return;
        }
        self.scanner.tick().await;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Char('k') => {
                self.switch_mode(DetectorMode::Kitchen);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('c') => {
                self.switch_mode(DetectorMode::Clothing);
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(8), Constraint::Length(4)])
            .split(area);

        let state_line = match self.scanner.state() {
            ScannerState::Idle => "starting…",
            ScannerState::Loading => "loading model…",
            ScannerState::Offline => "camera offline",
            ScannerState::Running => "live",
            ScannerState::Stopped => "stopped",
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.mode.title(), Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                Span::styled(format!("   [{state_line}]"), Style::default().fg(Color::Gray)),
                Span::styled("   k kitchen / c clothing", Style::default().fg(Color::DarkGray)),
            ])),
            rows[0],
        );

        self.render_overlay(frame, rows[1]);

        let detections: Vec<Line> = self
            .scanner
            .detections()
            .iter()
            .map(|d| Line::raw(format!("  {}", d.caption())))
            .collect();
        let list = if detections.is_empty() {
            Paragraph::new(Line::styled("  (nothing detected)", Style::default().fg(Color::Gray)))
        } else {
            Paragraph::new(detections)
        };
        frame.render_widget(
            list.block(Block::default().borders(Borders::ALL).title("Detections")),
            rows[2],
        );
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect) {
        let (frame_w, frame_h) = self.scanner.overlay().dimensions();
        let color = parse_color(self.scanner.overlay().highlight());
        let (w, h) = (f64::from(frame_w.max(1)), f64::from(frame_h.max(1)));

        let boxes: Vec<(Rectangle, f64, f64, String)> = self
            .scanner
            .overlay()
            .boxes()
            .iter()
            .map(|b| {
                // Overlay coordinates are top-left origin; the canvas
                // y-axis grows upward.
                let rect = Rectangle {
                    x: f64::from(b.x),
                    y: h - f64::from(b.y) - f64::from(b.height),
                    width: f64::from(b.width),
                    height: f64::from(b.height),
                    color,
                };
                let label_y = (h - f64::from(b.y) + 1.0).min(h);
                (rect, f64::from(b.x), label_y, b.caption.clone())
            })
            .collect();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Camera"))
            .marker(Marker::Braille)
            .x_bounds([0.0, w])
            .y_bounds([0.0, h])
            .paint(move |ctx| {
                for (rect, label_x, label_y, caption) in &boxes {
                    ctx.draw(rect);
                    ctx.print(
                        *label_x,
                        *label_y,
                        Line::styled(caption.clone(), Style::default().fg(color)),
                    );
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page() -> ScannerPage {
        let (reporter, _rx) = report::channel();
        ScannerPage::new(DetectionConfig::default(), reporter)
    }

    #[tokio::test]
    async fn test_first_tick_starts_session() {
        let mut p = page();
        assert_eq!(p.scanner().state(), ScannerState::Idle);
        p.on_tick().await;
        assert_eq!(p.scanner().state(), ScannerState::Running);
    }

    #[tokio::test]
    async fn test_mode_switch_resets_session() {
        let mut p = page();
        p.on_tick().await;
        for _ in 0..5 {
            p.on_tick().await;
        }
        p.handle_key(key(KeyCode::Char('c')));
        assert_eq!(p.scanner().state(), ScannerState::Idle);
        assert_eq!(p.scanner().mode(), DetectorMode::Clothing);
        assert_eq!(p.scanner().overlay().highlight(), "#ff00ff");
    }

    #[tokio::test]
    async fn test_same_mode_key_keeps_session() {
        let mut p = page();
        p.on_tick().await;
        p.handle_key(key(KeyCode::Char('k')));
        assert_eq!(p.scanner().state(), ScannerState::Running);
    }
}
