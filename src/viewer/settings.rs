// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Viewer settings and model transform
//!
//! A flat record of toggles and intensities. Defaults match the
//! original viewer: grid and shadows on, black background, the model
//! scaled up and turned slightly toward the camera.

use serde::{Deserialize, Serialize};

/// Boolean display settings, addressable for toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerToggle {
    Grid,
    Shadows,
    Axes,
    Reflections,
    Wireframe,
}

impl ViewerToggle {
    pub fn all() -> &'static [ViewerToggle] {
        &[
            ViewerToggle::Grid,
            ViewerToggle::Shadows,
            ViewerToggle::Axes,
            ViewerToggle::Reflections,
            ViewerToggle::Wireframe,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewerToggle::Grid => "Show Grid",
            ViewerToggle::Shadows => "Show Shadows",
            ViewerToggle::Axes => "Show Axes",
            ViewerToggle::Reflections => "Show Reflections",
            ViewerToggle::Wireframe => "Wireframe",
        }
    }
}

/// Display and lighting state for the 3D scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerSettings {
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_shadows: bool,
    #[serde(default)]
    pub show_axes: bool,
    #[serde(default)]
    pub show_reflections: bool,
    #[serde(default)]
    pub wireframe: bool,
    #[serde(default = "default_ambient")]
    pub ambient_light_intensity: f32,
    #[serde(default = "default_directional")]
    pub directional_light_intensity: f32,
    #[serde(default = "default_background")]
    pub background_color: String,
}

fn default_true() -> bool {
    true
}

fn default_ambient() -> f32 {
    0.4
}

fn default_directional() -> f32 {
    1.0
}

fn default_background() -> String {
    "#000000".to_string()
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_shadows: true,
            show_axes: false,
            show_reflections: false,
            wireframe: false,
            ambient_light_intensity: 0.4,
            directional_light_intensity: 1.0,
            background_color: "#000000".to_string(),
        }
    }
}

impl ViewerSettings {
    pub fn get(&self, toggle: ViewerToggle) -> bool {
        match toggle {
            ViewerToggle::Grid => self.show_grid,
            ViewerToggle::Shadows => self.show_shadows,
            ViewerToggle::Axes => self.show_axes,
            ViewerToggle::Reflections => self.show_reflections,
            ViewerToggle::Wireframe => self.wireframe,
        }
    }

    pub fn toggle(&mut self, toggle: ViewerToggle) {
        let flag = match toggle {
            ViewerToggle::Grid => &mut self.show_grid,
            ViewerToggle::Shadows => &mut self.show_shadows,
            ViewerToggle::Axes => &mut self.show_axes,
            ViewerToggle::Reflections => &mut self.show_reflections,
            ViewerToggle::Wireframe => &mut self.wireframe,
        };
        *flag = !*flag;
    }
}

/// Model placement in world space. Rotation is in degrees per axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ModelTransform {
    pub scale: f32,
    pub rotation: [f32; 3],
    pub position: [f32; 3],
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: 3.0,
            rotation: [0.0, 25.0, 0.0],
            position: [-1.5, -1.4, 0.0],
        }
    }
}

impl ModelTransform {
    /// Label shown next to the scale slider, one decimal place.
    pub fn scale_label(&self) -> String {
        format!("{:.1}", self.scale)
    }

    pub fn rotate(&mut self, axis: usize, degrees: f32) {
        self.rotation[axis] = (self.rotation[axis] + degrees) % 360.0;
    }

    pub fn translate(&mut self, axis: usize, delta: f32) {
        self.position[axis] += delta;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(0.1, 10.0);
    }
}
