// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Route table
//!
//! Static path → page mapping. The paths keep the original site's
//! spellings (including `/AIAssistant`) so deep links shared from the
//! old frontend keep meaning something in `sonny routes` output.

use crate::content;
use crate::error::{Result, SonnyError};

/// Every navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ControlHub,
    VirtualModel,
    RobotStudio,
    Assistant,
    About,
    ObjectScanner,
    MovementModule,
    VoiceModule,
    PowerModule,
    NetworkModule,
    WakeWord,
    SpeechOutput,
    CommandTrainer,
    /// Placeholder page for the skill at this index in
    /// [`content::skills`].
    Skill(usize),
}

impl Route {
    /// The full navigation surface, in display order.
    pub fn table() -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::ControlHub,
            Route::VirtualModel,
            Route::RobotStudio,
            Route::Assistant,
            Route::About,
            Route::ObjectScanner,
            Route::MovementModule,
            Route::VoiceModule,
            Route::PowerModule,
            Route::NetworkModule,
            Route::WakeWord,
            Route::SpeechOutput,
            Route::CommandTrainer,
        ];
        routes.extend((0..content::skills().len()).map(Route::Skill));
        routes
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ControlHub => "/control-hub".to_string(),
            Route::VirtualModel => "/virtual-model".to_string(),
            Route::RobotStudio => "/robotstudio".to_string(),
            Route::Assistant => "/AIAssistant".to_string(),
            Route::About => "/about".to_string(),
            Route::ObjectScanner => "/object-scanner".to_string(),
            Route::MovementModule => "/movement-module".to_string(),
            Route::VoiceModule => "/voice-module".to_string(),
            Route::PowerModule => "/power-module".to_string(),
            Route::NetworkModule => "/network-module".to_string(),
            Route::WakeWord => "/voice/wakeword".to_string(),
            Route::SpeechOutput => "/voice/tts".to_string(),
            Route::CommandTrainer => "/voice/commands".to_string(),
            Route::Skill(idx) => format!(
                "/skills/{}",
                content::skills()[*idx].key.to_lowercase().replace(' ', "-")
            ),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => "Sonny".to_string(),
            Route::ControlHub => "Control Hub".to_string(),
            Route::VirtualModel => "3D Model Viewer".to_string(),
            Route::RobotStudio => "Robot Studio".to_string(),
            Route::Assistant => "AI Assistant".to_string(),
            Route::About => "About Me".to_string(),
            Route::ObjectScanner => "AI Object Scanner".to_string(),
            Route::MovementModule => "Advanced Robotics Panel".to_string(),
            Route::VoiceModule => "Voice Control Module".to_string(),
            Route::PowerModule => "Power Management System".to_string(),
            Route::NetworkModule => "Network System".to_string(),
            Route::WakeWord => "Wake-Word Settings".to_string(),
            Route::SpeechOutput => "Speech Output".to_string(),
            Route::CommandTrainer => "Command Trainer".to_string(),
            Route::Skill(idx) => content::skills()[*idx].key.to_string(),
        }
    }

    /// Resolve a path. Unknown paths are an error the caller can turn
    /// into the not-found page.
    pub fn parse(path: &str) -> Result<Route> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Route::table()
            .into_iter()
            .find(|r| {
                let candidate = r.path();
                candidate.trim_end_matches('/') == path || candidate == path
            })
            .ok_or_else(|| SonnyError::Route(path.to_string()))
    }

    /// Where "back" goes from this page.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Home => None,
            Route::ControlHub => Some(Route::Home),
            Route::WakeWord | Route::SpeechOutput | Route::CommandTrainer => {
                Some(Route::VoiceModule)
            }
            Route::Skill(_) | Route::About => Some(Route::Home),
            _ => Some(Route::ControlHub),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_route() {
        for route in Route::table() {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        assert_eq!(Route::parse("/control-hub/").unwrap(), Route::ControlHub);
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
    }

    #[test]
    fn test_parse_unknown_path_errors() {
        assert!(matches!(
            Route::parse("/sensors-deluxe"),
            Err(SonnyError::Route(_))
        ));
    }

    #[test]
    fn test_voice_subpages_back_to_voice_module() {
        assert_eq!(Route::WakeWord.parent(), Some(Route::VoiceModule));
        assert_eq!(Route::SpeechOutput.parent(), Some(Route::VoiceModule));
        assert_eq!(Route::CommandTrainer.parent(), Some(Route::VoiceModule));
    }

    #[test]
    fn test_skill_placeholders_exist_per_skill() {
        let skill_routes = Route::table()
            .into_iter()
            .filter(|r| matches!(r, Route::Skill(_)))
            .count();
        assert_eq!(skill_routes, crate::content::skills().len());
    }

    #[test]
    fn test_assistant_keeps_original_spelling() {
        assert_eq!(Route::Assistant.path(), "/AIAssistant");
    }
}
