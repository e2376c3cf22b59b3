// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Robot Studio
//!
//! Movement panel on the left, model viewer on the right — the two
//! pages composed side by side, with BackTab switching which pane gets
//! the keyboard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::pose::PoseBus;
use crate::report::Reporter;
use crate::tui::pages::{MovementPage, PageAction, ViewerPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Movement,
    Viewer,
}

pub struct StudioPage {
    movement: MovementPage,
    viewer: ViewerPage,
    focus: Pane,
}

impl StudioPage {
    pub fn new(model_path: &str, bus: PoseBus, reporter: Reporter) -> Self {
        Self {
            movement: MovementPage::new(bus, reporter.clone()),
            viewer: ViewerPage::new(model_path, reporter),
            focus: Pane::Movement,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        if key.code == KeyCode::BackTab {
            self.focus = match self.focus {
                Pane::Movement => Pane::Viewer,
                Pane::Viewer => Pane::Movement,
            };
            return Some(PageAction::Consumed);
        }
        match self.focus {
            Pane::Movement => self.movement.handle_key(key),
            Pane::Viewer => self.viewer.handle_key(key),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, accent: Color) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let dim = Color::DarkGray;
        let (movement_accent, viewer_accent) = match self.focus {
            Pane::Movement => (accent, dim),
            Pane::Viewer => (dim, accent),
        };
        self.movement.render(frame, cols[0], movement_accent);
        self.viewer.render(frame, cols[1], viewer_accent);
    }
}
