// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wireframe model viewer
//!
//! Renders one model with adjustable transform, lighting and display
//! toggles. State is plain numbers and booleans; changing any of them
//! simply changes what the next render pass produces — there is no
//! animation or interpolation between states.

pub mod camera;
pub mod loader;
pub mod mesh;
pub mod projection;
pub mod settings;

pub use camera::OrbitCamera;
pub use loader::ModelLoader;
pub use mesh::{Material, Mesh, Scene};
pub use projection::Line2;
pub use settings::{ModelTransform, ViewerSettings, ViewerToggle};

use crate::error::Result;
use crate::report::Reporter;

/// One viewer page's worth of state: scene + settings + camera.
pub struct ViewerSession {
    scene: Scene,
    settings: ViewerSettings,
    transform: ModelTransform,
    camera: OrbitCamera,
    loader: ModelLoader,
    model_name: String,
    reporter: Reporter,
}

impl ViewerSession {
    /// Load the default model (cached across sessions by the loader);
    /// a failed load falls back to placeholder geometry and reports.
    pub fn new(mut loader: ModelLoader, reporter: Reporter) -> Self {
        let (mesh, model_name) = match loader.load_default() {
            Ok(mesh) => {
                let name = mesh.name.clone();
                (mesh, name)
            }
            Err(e) => {
                reporter.error(format!("model load failed, using placeholder: {e}"));
                let mesh = Mesh::placeholder();
                let name = mesh.name.clone();
                (mesh, name)
            }
        };
        Self {
            scene: Scene::with_model(mesh),
            settings: ViewerSettings::default(),
            transform: ModelTransform::default(),
            camera: OrbitCamera::default(),
            loader,
            model_name,
            reporter,
        }
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn transform(&self) -> &ModelTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ModelTransform {
        &mut self.transform
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn toggle(&mut self, toggle: ViewerToggle) {
        self.settings.toggle(toggle);
    }

    pub fn set_ambient(&mut self, value: f32) {
        self.settings.ambient_light_intensity = value.clamp(0.0, 2.0);
    }

    pub fn set_directional(&mut self, value: f32) {
        self.settings.directional_light_intensity = value.clamp(0.0, 3.0);
    }

    /// Import a model file and swap it into the scene. The uploaded
    /// file really replaces the rendered asset; the displayed name
    /// follows it.
    pub fn import_model(&mut self, path: &std::path::Path) -> Result<()> {
        match self.loader.load(path) {
            Ok(mesh) => {
                self.model_name = mesh.name.clone();
                self.scene.replace_model(mesh);
                self.reporter.info(format!("imported model {}", self.model_name));
                Ok(())
            }
            Err(e) => {
                self.reporter.error(format!("model import failed: {e}"));
                Err(e)
            }
        }
    }

    /// Produce the line segments for one render pass. Settings are
    /// applied to scene materials here, so a toggle made since the last
    /// pass is visible in this one.
    pub fn render_pass(&mut self, viewport_w: f64, viewport_h: f64) -> Vec<Line2> {
        self.scene.apply_settings(&self.settings);
        let mut lines = Vec::new();
        if self.settings.show_grid {
            lines.extend(self.camera.project_grid(viewport_w, viewport_h));
        }
        if self.settings.show_axes {
            lines.extend(self.camera.project_axes(viewport_w, viewport_h));
        }
        lines.extend(
            self.camera
                .project_scene(&self.scene, &self.transform, viewport_w, viewport_h),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;

    fn session() -> ViewerSession {
        let (reporter, _rx) = report::channel();
        // Nonexistent fixed path: exercises the placeholder fallback.
        ViewerSession::new(ModelLoader::new("/nonexistent/sonny.obj"), reporter)
    }

    #[test]
    fn test_missing_asset_falls_back_to_placeholder() {
        let s = session();
        assert_eq!(s.model_name(), "placeholder");
        assert!(!s.scene().meshes().is_empty());
    }

    #[test]
    fn test_wireframe_toggle_reaches_every_material() {
        let mut s = session();
        s.toggle(ViewerToggle::Wireframe);
        // Takes effect on the next render pass.
        s.render_pass(80.0, 40.0);
        assert!(s.scene().meshes().iter().all(|m| m.material.wireframe));

        s.toggle(ViewerToggle::Wireframe);
        s.render_pass(80.0, 40.0);
        assert!(s.scene().meshes().iter().all(|m| !m.material.wireframe));
    }

    #[test]
    fn test_render_pass_emits_grid_and_model_lines() {
        let mut s = session();
        let with_grid = s.render_pass(80.0, 40.0).len();
        s.toggle(ViewerToggle::Grid);
        let without_grid = s.render_pass(80.0, 40.0).len();
        assert!(with_grid > without_grid);
        assert!(without_grid > 0);
    }

    #[test]
    fn test_scale_label_reads_back() {
        let mut s = session();
        s.transform_mut().scale = 5.0;
        assert_eq!(s.transform().scale_label(), "5.0");
    }

    #[test]
    fn test_light_intensity_clamped() {
        let mut s = session();
        s.set_ambient(99.0);
        assert_eq!(s.settings().ambient_light_intensity, 2.0);
        s.set_directional(-1.0);
        assert_eq!(s.settings().directional_light_intensity, 0.0);
    }
}
