// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Power and network dashboards
//!
//! Both pages display the same simulated telemetry walk, stepped on a
//! fixed interval and torn down with the page.

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::telemetry::TelemetrySim;
use crate::tui::pages::PageAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryKind {
    Power,
    Network,
}

pub struct TelemetryPage {
    kind: TelemetryKind,
    sim: TelemetrySim,
    ticks: u64,
    /// UI ticks per telemetry step; keeps the walk near 1 Hz whatever
    /// the UI cadence is.
    step_every: u64,
}

impl TelemetryPage {
    pub fn new(kind: TelemetryKind, seed: u64, tick_ms: u64) -> Self {
        Self {
            kind,
            sim: TelemetrySim::new(seed),
            ticks: 0,
            step_every: (1000 / tick_ms.max(16)).max(1),
        }
    }

    pub fn on_tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.step_every == 0 {
            self.sim.step();
        }
    }

    pub fn handle_key(&mut self, _key: KeyEvent) -> Option<PageAction> {
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        match self.kind {
            TelemetryKind::Power => self.render_power(frame, area, accent),
            TelemetryKind::Network => self.render_network(frame, area, accent),
        }
    }

    fn render_power(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let sample = self.sim.power();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(area);

        let battery = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Battery"))
            .gauge_style(Style::default().fg(accent))
            .ratio(f64::from(sample.battery_pct) / 100.0)
            .label(format!("{:.0}%", sample.battery_pct));
        frame.render_widget(battery, rows[0]);

        let voltage = Paragraph::new(format!("Bus voltage: {:.2} V (simulated)", sample.bus_voltage))
            .block(Block::default().borders(Borders::ALL).title("Voltage"));
        frame.render_widget(voltage, rows[1]);

        let servo_lines: Vec<Line> = sample
            .servo_draw_ma
            .iter()
            .map(|(name, draw)| {
                Line::from(vec![
                    Span::styled(format!("{name:<12}"), Style::default().fg(accent)),
                    Span::raw(format!("{draw:>6.0} mA")),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(servo_lines)
                .block(Block::default().borders(Borders::ALL).title("Servo draw")),
            rows[2],
        );
    }

    fn render_network(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let sample = self.sim.network();
        let status = if sample.link_up { "UP" } else { "DOWN" };
        let status_color = if sample.link_up { accent } else { Color::Red };
        let lines = vec![
            Line::from(vec![
                Span::raw("Pi ↔ Arduino link: "),
                Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
            ]),
            Line::raw(format!("WiFi RSSI:    {:>6.0} dBm", sample.rssi_dbm)),
            Line::raw(format!("Latency:      {:>6.1} ms", sample.latency_ms)),
            Line::raw(format!("Packet loss:  {:>6.1} %", sample.packet_loss_pct)),
            Line::raw(""),
            Line::styled(
                "All values are simulated; no hardware is consulted.",
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Diagnostics")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_on_fixed_interval() {
        let mut page = TelemetryPage::new(TelemetryKind::Power, 3, 100);
        assert_eq!(page.step_every, 10);
        let before = page.sim.power();
        for _ in 0..9 {
            page.on_tick();
        }
        assert_eq!(page.sim.power(), before);
        page.on_tick();
        assert_ne!(page.sim.power(), before);
    }

    #[test]
    fn test_step_every_never_zero() {
        let page = TelemetryPage::new(TelemetryKind::Network, 3, 5000);
        assert_eq!(page.step_every, 1);
    }
}
