// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Movement panel
//!
//! Joint sliders grouped by category, pose presets, and quick head
//! actions. Every send publishes a typed [`PoseEvent`] on the bus; the
//! panel itself never talks to hardware.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs};

use crate::pose::broadcast::meta;
use crate::pose::{Joint, Pose, PoseBus, PosePreset};
use crate::report::Reporter;
use crate::tui::pages::PageAction;

const SOURCE: &str = "movement-panel";
const JOINT_STEP: f32 = 5.0;

/// Panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Head,
    LeftArm,
    RightArm,
    Hands,
    Presets,
}

impl Category {
    fn all() -> &'static [Category] {
        &[
            Category::Head,
            Category::LeftArm,
            Category::RightArm,
            Category::Hands,
            Category::Presets,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Category::Head => "Head",
            Category::LeftArm => "Left Arm",
            Category::RightArm => "Right Arm",
            Category::Hands => "Hands",
            Category::Presets => "Presets",
        }
    }

    fn joints(&self) -> &'static [Joint] {
        match self {
            Category::Head => &[Joint::HeadTurn, Joint::HeadTilt],
            Category::LeftArm => &[Joint::LeftShoulder, Joint::LeftElbow],
            Category::RightArm => &[Joint::RightShoulder, Joint::RightElbow],
            Category::Hands => &[Joint::LeftHand, Joint::RightHand],
            Category::Presets => &[],
        }
    }
}

pub struct MovementPage {
    pose: Pose,
    category: Category,
    selected: usize,
    bus: PoseBus,
    reporter: Reporter,
    last_sent: Option<String>,
}

impl MovementPage {
    pub fn new(bus: PoseBus, reporter: Reporter) -> Self {
        Self {
            pose: Pose::initial(),
            category: Category::Head,
            selected: 0,
            bus,
            reporter,
            last_sent: None,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    fn rows(&self) -> usize {
        match self.category {
            Category::Presets => PosePreset::all().len(),
            c => c.joints().len(),
        }
    }

    fn send(&mut self, pose: Pose, meta: std::collections::BTreeMap<String, String>) {
        let event = self.bus.publish(SOURCE, pose, meta);
        let described = event
            .meta
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        let summary = if described.is_empty() {
            format!("{} joints", event.pose.len())
        } else {
            described
        };
        self.reporter.info(format!("pose sent ({summary})"));
        self.last_sent = Some(summary);
    }

    fn apply_preset(&mut self, preset: PosePreset) {
        let partial = preset.pose();
        self.pose.merge(&partial);
        // Presets go straight out to listeners.
        self.send(partial, meta("preset", preset.name()));
    }

    fn adjust_selected(&mut self, delta: f32) {
        let joints = self.category.joints();
        let Some(joint) = joints.get(self.selected) else {
            return;
        };
        let current = self.pose.get(*joint).unwrap_or(0.0);
        self.pose.set(*joint, current + delta);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Tab => {
                let all = Category::all();
                let idx = all.iter().position(|c| *c == self.category).unwrap_or(0);
                self.category = all[(idx + 1) % all.len()];
                self.selected = 0;
                Some(PageAction::Consumed)
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Some(PageAction::Consumed)
            }
            KeyCode::Down => {
                if self.selected + 1 < self.rows() {
                    self.selected += 1;
                }
                Some(PageAction::Consumed)
            }
            KeyCode::Left if self.category != Category::Presets => {
                self.adjust_selected(-JOINT_STEP);
                Some(PageAction::Consumed)
            }
            KeyCode::Right if self.category != Category::Presets => {
                self.adjust_selected(JOINT_STEP);
                Some(PageAction::Consumed)
            }
            KeyCode::Enter if self.category == Category::Presets => {
                let preset = PosePreset::all()[self.selected];
                self.apply_preset(preset);
                Some(PageAction::Consumed)
            }
            KeyCode::Char('s') => {
                let pose = self.pose.clone();
                self.send(pose, Default::default());
                Some(PageAction::Consumed)
            }
            KeyCode::Char('r') => {
                self.pose = Pose::initial();
                let pose = self.pose.clone();
                self.send(pose, meta("preset", "reset"));
                Some(PageAction::Consumed)
            }
            KeyCode::Char('c') => {
                let mut partial = Pose::new();
                partial.set(Joint::HeadTurn, 0.0);
                partial.set(Joint::HeadTilt, 0.0);
                self.pose.merge(&partial);
                self.send(partial, meta("action", "center_head"));
                Some(PageAction::Consumed)
            }
            KeyCode::Char('z') => {
                let mut partial = Pose::new();
                partial.set(Joint::HeadTurn, -30.0);
                self.pose.merge(&partial);
                self.send(partial, meta("action", "look_left"));
                Some(PageAction::Consumed)
            }
            KeyCode::Char('x') => {
                let mut partial = Pose::new();
                partial.set(Joint::HeadTurn, 30.0);
                self.pose.merge(&partial);
                self.send(partial, meta("action", "look_right"));
                Some(PageAction::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(2),
            ])
            .split(area);

        let titles: Vec<Line> = Category::all().iter().map(|c| Line::raw(c.label())).collect();
        let selected_tab = Category::all()
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        frame.render_widget(
            Tabs::new(titles)
                .select(selected_tab)
                .highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL)),
            rows[0],
        );

        match self.category {
            Category::Presets => self.render_presets(frame, rows[1], accent),
            _ => self.render_joints(frame, rows[1], accent),
        }

        let hint = match self.category {
            Category::Presets => "Enter apply+send  s send pose  r reset  Tab category",
            Category::Head => "←/→ adjust  c center  z/x look left/right  s send  r reset",
            _ => "←/→ adjust  s send pose  r reset  Tab category",
        };
        let mut footer = vec![Span::styled(hint, Style::default().fg(Color::Gray))];
        if let Some(last) = &self.last_sent {
            footer.push(Span::styled(
                format!("   last sent: {last}"),
                Style::default().fg(accent),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(footer)), rows[2]);
    }

    fn render_joints(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let joints = self.category.joints();
        let constraints: Vec<Constraint> = joints.iter().map(|_| Constraint::Length(3)).collect();
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, joint) in joints.iter().enumerate() {
            let value = self.pose.get(*joint).unwrap_or(0.0);
            let (lo, hi) = joint.range();
            let ratio = f64::from((value - lo) / (hi - lo));
            let style = if idx == self.selected {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let unit = if matches!(joint, Joint::LeftHand | Joint::RightHand) {
                "%"
            } else {
                "°"
            };
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("{} {:.0}{}", joint.label(), value, unit)),
                )
                .gauge_style(style)
                .ratio(ratio.clamp(0.0, 1.0));
            frame.render_widget(gauge, slots[idx]);
        }
    }

    fn render_presets(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let lines: Vec<Line> = PosePreset::all()
            .iter()
            .enumerate()
            .map(|(idx, preset)| {
                let marker = if idx == self.selected { "> " } else { "  " };
                let style = if idx == self.selected {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::styled(format!("{marker}{}", preset.name()), style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Presets")),
            area,
        );
    }
}
