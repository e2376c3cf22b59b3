// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static pages: home, about, skill placeholders
//!
//! These render fixed content records and hold no state of their own.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content;

/// Homepage: hero, skills console summary, projects, lab notebook.
pub fn render_home(frame: &mut Frame, area: Rect, accent: Color) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Min(6),
            Constraint::Min(6),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::styled(
            "Robotics hobbyist building Sonny, an InMoov-style humanoid.",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Enter opens the Control Hub. Esc goes back.",
            Style::default().fg(Color::Gray),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(accent)));
    frame.render_widget(hero, sections[0]);

    let skill_lines: Vec<Line> = content::skills()
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("{:<16}", s.key), Style::default().fg(accent)),
                Span::styled(format!("[{}] ", s.level.label()), Style::default().fg(Color::Gray)),
                Span::raw(s.tagline),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(skill_lines)
            .block(Block::default().borders(Borders::ALL).title("Skills Console")),
        sections[1],
    );

    let project_lines: Vec<Line> = content::projects()
        .iter()
        .map(|p| {
            let mut spans = vec![
                Span::styled(p.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — "),
                Span::raw(p.description),
            ];
            if let Some(link) = p.link {
                spans.push(Span::styled(format!("  {link}"), Style::default().fg(Color::Blue)));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(project_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Projects")),
        sections[2],
    );

    let lab_lines: Vec<Line> = content::lab_entries()
        .iter()
        .flat_map(|e| {
            vec![
                Line::styled(e.title, Style::default().add_modifier(Modifier::BOLD)),
                Line::from(vec![
                    Span::styled("  outcome: ", Style::default().fg(Color::Gray)),
                    Span::raw(e.outcome),
                ]),
                Line::from(vec![
                    Span::styled("  takeaway: ", Style::default().fg(Color::Gray)),
                    Span::raw(e.takeaway),
                ]),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lab_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Robotics Lab Notebook")),
        sections[3],
    );
}

pub fn render_about(frame: &mut Frame, area: Rect, accent: Color) {
    let text = vec![
        Line::styled("About Me", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(
            "I build robots for fun: a 3D-printed InMoov named Sonny, assorted Arduino \
             servo rigs, and the occasional vision experiment.",
        ),
        Line::raw(""),
        Line::raw(
            "This control hub is the terminal companion to the project — a simulated \
             cockpit for the robot that mostly exists on my workbench.",
        ),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Placeholder page for one skill: tagline, practice notes, tools.
pub fn render_skill(frame: &mut Frame, area: Rect, accent: Color, idx: usize) {
    let Some(skill) = content::skills().get(idx) else {
        frame.render_widget(Paragraph::new("Unknown skill"), area);
        return;
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(skill.key, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{}]", skill.level.label()), Style::default().fg(Color::Gray)),
        ]),
        Line::raw(""),
        Line::raw(skill.tagline),
        Line::raw(""),
        Line::styled("Tools", Style::default().add_modifier(Modifier::BOLD)),
    ];
    lines.extend(skill.tools.iter().map(|t| Line::raw(format!("  - {t}"))));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Dedicated page coming soon.",
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
