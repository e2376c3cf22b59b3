// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Orbit camera
//!
//! Orbit, zoom and pan around a target point, with the zoom distance
//! clamped to a fixed range. The starting pose matches the original
//! scene: eye at (5, 3, 5) looking at the origin, 60° field of view.

use crate::viewer::mesh::Scene;
use crate::viewer::projection::{transform_point, Line2, ViewBasis};
use crate::viewer::settings::ModelTransform;

/// Fixed zoom clamp.
pub const MIN_DISTANCE: f64 = 2.0;
pub const MAX_DISTANCE: f64 = 20.0;

const FLOOR_Y: f64 = -1.5;
const GRID_EXTENT: i32 = 5;
const AXIS_LENGTH: f64 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Horizontal orbit angle, degrees.
    pub yaw: f64,
    /// Vertical orbit angle, degrees, clamped short of the poles.
    pub pitch: f64,
    pub distance: f64,
    pub target: [f64; 3],
    pub fov: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Spherical coordinates of the original eye (5, 3, 5).
        let distance = (25.0f64 + 9.0 + 25.0).sqrt();
        Self {
            yaw: 45.0,
            pitch: (3.0 / distance).asin().to_degrees(),
            distance,
            target: [0.0, 0.0, 0.0],
            fov: 60.0,
        }
    }
}

impl OrbitCamera {
    /// Eye position derived from yaw/pitch/distance around the target.
    pub fn eye(&self) -> [f64; 3] {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        [
            self.target[0] + self.distance * pitch.cos() * yaw.sin(),
            self.target[1] + self.distance * pitch.sin(),
            self.target[2] + self.distance * pitch.cos() * yaw.cos(),
        ]
    }

    pub fn orbit(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(360.0);
        self.pitch = (self.pitch + d_pitch).clamp(-85.0, 85.0);
    }

    /// Move the eye toward (negative) or away from (positive) the
    /// target, clamped to the fixed range.
    pub fn zoom(&mut self, delta: f64) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.target[0] += dx;
        self.target[1] += dy;
    }

    fn basis(&self) -> ViewBasis {
        ViewBasis::look_at(self.eye(), self.target)
    }

    /// Project every mesh edge of the scene under the model transform.
    pub fn project_scene(
        &self,
        scene: &Scene,
        transform: &ModelTransform,
        viewport_w: f64,
        viewport_h: f64,
    ) -> Vec<Line2> {
        let basis = self.basis();
        let mut lines = Vec::new();
        for mesh in scene.meshes() {
            for &(a, b) in &mesh.edges {
                let pa = transform_point(mesh.vertices[a], transform);
                let pb = transform_point(mesh.vertices[b], transform);
                if let Some(line) = basis.project_segment(pa, pb, self.fov, viewport_w, viewport_h)
                {
                    lines.push(line);
                }
            }
        }
        lines
    }

    /// Floor grid lines.
    pub fn project_grid(&self, viewport_w: f64, viewport_h: f64) -> Vec<Line2> {
        let basis = self.basis();
        let mut lines = Vec::new();
        let extent = GRID_EXTENT as f64;
        for i in -GRID_EXTENT..=GRID_EXTENT {
            let offset = i as f64;
            let along_x = basis.project_segment(
                [-extent, FLOOR_Y, offset],
                [extent, FLOOR_Y, offset],
                self.fov,
                viewport_w,
                viewport_h,
            );
            let along_z = basis.project_segment(
                [offset, FLOOR_Y, -extent],
                [offset, FLOOR_Y, extent],
                self.fov,
                viewport_w,
                viewport_h,
            );
            lines.extend(along_x);
            lines.extend(along_z);
        }
        lines
    }

    /// XYZ axes helper, three segments from the origin.
    pub fn project_axes(&self, viewport_w: f64, viewport_h: f64) -> Vec<Line2> {
        let basis = self.basis();
        let origin = [0.0, 0.0, 0.0];
        [
            [AXIS_LENGTH, 0.0, 0.0],
            [0.0, AXIS_LENGTH, 0.0],
            [0.0, 0.0, AXIS_LENGTH],
        ]
        .into_iter()
        .filter_map(|end| basis.project_segment(origin, end, self.fov, viewport_w, viewport_h))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::mesh::Mesh;

    #[test]
    fn test_default_eye_matches_original_scene() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!((eye[0] - 5.0).abs() < 1e-6);
        assert!((eye[1] - 3.0).abs() < 1e-6);
        assert!((eye[2] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamps_to_fixed_range() {
        let mut cam = OrbitCamera::default();
        cam.zoom(-100.0);
        assert_eq!(cam.distance, MIN_DISTANCE);
        cam.zoom(100.0);
        assert_eq!(cam.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 500.0);
        assert_eq!(cam.pitch, 85.0);
        cam.orbit(720.0, 0.0);
        assert!(cam.yaw >= 0.0 && cam.yaw < 360.0);
    }

    #[test]
    fn test_project_scene_emits_visible_edges() {
        let cam = OrbitCamera::default();
        let scene = Scene::with_model(Mesh::placeholder());
        let transform = ModelTransform::default();
        let lines = cam.project_scene(&scene, &transform, 100.0, 50.0);
        assert!(!lines.is_empty());
        assert!(lines.len() <= 12);
    }

    #[test]
    fn test_grid_and_axes_counts() {
        let cam = OrbitCamera::default();
        // 11 lines each direction, all in front of the default camera.
        assert_eq!(cam.project_grid(100.0, 50.0).len(), 22);
        assert_eq!(cam.project_axes(100.0, 50.0).len(), 3);
    }
}
