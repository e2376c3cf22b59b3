// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application shell
//!
//! Holds the active page, the navigation stack, and the shared
//! capabilities (speech, pose bus, reporter). Navigating away from a
//! page drops its state entirely — scanners release their stream,
//! transcripts vanish, exactly the lifetime the pages promise.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::hub::Route;
use crate::personality::PersonalityKind;
use crate::pose::PoseBus;
use crate::report::{Report, Reporter};
use crate::speech::{self, Recognizer, Synthesizer};
use crate::tui::pages::{
    AssistantPage, CommandTrainerPage, ControlHubPage, MovementPage, PageAction, ScannerPage,
    SpeechOutputPage, StudioPage, TelemetryKind, TelemetryPage, ViewerPage, VoiceModulePage,
    WakeWordPage,
};

/// The state of whichever page is on screen.
pub enum ActivePage {
    Home,
    About,
    Skill(usize),
    ControlHub(ControlHubPage),
    Assistant(AssistantPage),
    Scanner(ScannerPage),
    Viewer(ViewerPage),
    Studio(StudioPage),
    Movement(MovementPage),
    Voice(VoiceModulePage),
    WakeWord(WakeWordPage),
    SpeechOutput(SpeechOutputPage),
    Commands(CommandTrainerPage),
    Power(TelemetryPage),
    Network(TelemetryPage),
}

pub struct App {
    pub settings: Settings,
    pub route: Route,
    pub page: ActivePage,
    pub status: Option<Report>,
    pub should_quit: bool,
    nav_stack: Vec<Route>,
    reporter: Reporter,
    pose_bus: PoseBus,
    synthesizer: Arc<dyn Synthesizer>,
    recognizer: Arc<dyn Recognizer>,
}

impl App {
    pub fn new(settings: Settings, reporter: Reporter) -> Self {
        let synthesizer = speech::default_synthesizer(&settings.voice, reporter.clone());
        let recognizer = speech::default_recognizer();
        Self {
            settings,
            route: Route::Home,
            page: ActivePage::Home,
            status: None,
            should_quit: false,
            nav_stack: Vec::new(),
            reporter,
            pose_bus: PoseBus::default(),
            synthesizer,
            recognizer,
        }
    }

    pub fn pose_bus(&self) -> &PoseBus {
        &self.pose_bus
    }

    pub fn set_status(&mut self, report: Report) {
        self.status = Some(report);
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.nav_stack.push(self.route);
        self.route = route;
        self.page = self.build_page(route);
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.nav_stack.pop() {
            self.route = prev;
            self.page = self.build_page(prev);
        } else if self.route == Route::Home {
            self.should_quit = true;
        } else {
            let parent = self.route.parent().unwrap_or(Route::Home);
            self.route = parent;
            self.page = self.build_page(parent);
        }
    }

    fn build_page(&self, route: Route) -> ActivePage {
        match route {
            Route::Home => ActivePage::Home,
            Route::About => ActivePage::About,
            Route::Skill(idx) => ActivePage::Skill(idx),
            Route::ControlHub => ActivePage::ControlHub(ControlHubPage::new()),
            Route::Assistant => ActivePage::Assistant(AssistantPage::new(
                PersonalityKind::parse(&self.settings.voice.default_personality),
                self.synthesizer.clone(),
                self.recognizer.clone(),
                self.reporter.clone(),
            )),
            Route::ObjectScanner => ActivePage::Scanner(ScannerPage::new(
                self.settings.detection.clone(),
                self.reporter.clone(),
            )),
            Route::VirtualModel => ActivePage::Viewer(ViewerPage::new(
                &self.settings.viewer.model_path,
                self.reporter.clone(),
            )),
            Route::RobotStudio => ActivePage::Studio(StudioPage::new(
                &self.settings.viewer.model_path,
                self.pose_bus.clone(),
                self.reporter.clone(),
            )),
            Route::MovementModule => ActivePage::Movement(MovementPage::new(
                self.pose_bus.clone(),
                self.reporter.clone(),
            )),
            Route::VoiceModule => ActivePage::Voice(VoiceModulePage::new()),
            Route::WakeWord => ActivePage::WakeWord(WakeWordPage::new(&self.settings)),
            Route::SpeechOutput => ActivePage::SpeechOutput(SpeechOutputPage::new(&self.settings)),
            Route::CommandTrainer => ActivePage::Commands(CommandTrainerPage::new()),
            Route::PowerModule => ActivePage::Power(TelemetryPage::new(
                TelemetryKind::Power,
                rand::random(),
                self.settings.detection.tick_ms,
            )),
            Route::NetworkModule => ActivePage::Network(TelemetryPage::new(
                TelemetryKind::Network,
                rand::random(),
                self.settings.detection.tick_ms,
            )),
        }
    }

    pub async fn on_tick(&mut self) {
        match &mut self.page {
            ActivePage::Scanner(page) => page.on_tick().await,
            ActivePage::Power(page) | ActivePage::Network(page) => page.on_tick(),
            _ => {}
        }
    }

    pub async fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match &mut self.page {
            ActivePage::Home => match key.code {
                KeyCode::Enter => Some(PageAction::Navigate(Route::ControlHub)),
                KeyCode::Char('a') => Some(PageAction::Navigate(Route::About)),
                KeyCode::Char(c @ '1'..='8') => {
                    let idx = c as usize - '1' as usize;
                    (idx < crate::content::skills().len())
                        .then_some(PageAction::Navigate(Route::Skill(idx)))
                }
                _ => None,
            },
            ActivePage::About | ActivePage::Skill(_) => None,
            ActivePage::ControlHub(page) => page.handle_key(key),
            ActivePage::Assistant(page) => page.handle_key(key).await,
            ActivePage::Scanner(page) => page.handle_key(key),
            ActivePage::Viewer(page) => page.handle_key(key),
            ActivePage::Studio(page) => page.handle_key(key),
            ActivePage::Movement(page) => page.handle_key(key),
            ActivePage::Voice(page) => page.handle_key(key),
            ActivePage::WakeWord(page) => {
                page.handle_key(key, &mut self.settings, &self.reporter)
            }
            ActivePage::SpeechOutput(page) => {
                page.handle_key(key, &mut self.settings, &self.reporter)
            }
            ActivePage::Commands(page) => page.handle_key(key, &self.reporter),
            ActivePage::Power(page) | ActivePage::Network(page) => page.handle_key(key),
        };

        match action {
            Some(PageAction::Navigate(route)) => self.navigate(route),
            Some(PageAction::Back) => self.back(),
            Some(PageAction::Consumed) => {}
            None => match key.code {
                KeyCode::Esc => self.back(),
                // Pages with text entry consume their chars, so a 'q'
                // reaching here is a real quit request.
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }
}
