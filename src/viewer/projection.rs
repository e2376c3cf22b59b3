// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! 3D → 2D projection math
//!
//! Pure functions: model transform (scale, per-axis rotation in
//! degrees, translation), camera view, and perspective divide onto a
//! viewport. Lines with an endpoint behind the near plane are dropped
//! rather than clipped — at terminal resolution the difference is not
//! visible.

use crate::viewer::settings::ModelTransform;

/// A projected line segment in viewport coordinates.
pub type Line2 = ((f64, f64), (f64, f64));

const NEAR_PLANE: f64 = 0.1;

/// Apply the model transform: scale, rotate X then Y then Z, translate.
pub fn transform_point(p: [f32; 3], t: &ModelTransform) -> [f64; 3] {
    let s = t.scale as f64;
    let mut v = [p[0] as f64 * s, p[1] as f64 * s, p[2] as f64 * s];

    let [rx, ry, rz] = t.rotation.map(|d| (d as f64).to_radians());

    // X axis
    let (sin, cos) = rx.sin_cos();
    v = [v[0], v[1] * cos - v[2] * sin, v[1] * sin + v[2] * cos];
    // Y axis
    let (sin, cos) = ry.sin_cos();
    v = [v[0] * cos + v[2] * sin, v[1], -v[0] * sin + v[2] * cos];
    // Z axis
    let (sin, cos) = rz.sin_cos();
    v = [v[0] * cos - v[1] * sin, v[0] * sin + v[1] * cos, v[2]];

    [
        v[0] + t.position[0] as f64,
        v[1] + t.position[1] as f64,
        v[2] + t.position[2] as f64,
    ]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Camera basis looking from `eye` toward `target`.
#[derive(Debug, Clone, Copy)]
pub struct ViewBasis {
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    forward: [f64; 3],
}

impl ViewBasis {
    pub fn look_at(eye: [f64; 3], target: [f64; 3]) -> Self {
        let forward = normalize(sub(target, eye));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        Self {
            eye,
            right,
            up,
            forward,
        }
    }

    /// World point → camera space (x right, y up, z forward).
    fn view(&self, world: [f64; 3]) -> [f64; 3] {
        let d = sub(world, self.eye);
        [dot(d, self.right), dot(d, self.up), dot(d, self.forward)]
    }

    /// World point → viewport pixel, or `None` behind the near plane.
    pub fn project(
        &self,
        world: [f64; 3],
        fov_deg: f64,
        viewport_w: f64,
        viewport_h: f64,
    ) -> Option<(f64, f64)> {
        let cam = self.view(world);
        if cam[2] <= NEAR_PLANE {
            return None;
        }
        let half = (fov_deg.to_radians() / 2.0).tan();
        let aspect = if viewport_h > 0.0 {
            viewport_w / viewport_h
        } else {
            1.0
        };
        let ndc_x = cam[0] / (cam[2] * half * aspect);
        let ndc_y = cam[1] / (cam[2] * half);
        Some((
            (ndc_x + 1.0) / 2.0 * viewport_w,
            (ndc_y + 1.0) / 2.0 * viewport_h,
        ))
    }

    /// Project a world-space segment; dropped when either end is behind
    /// the camera.
    pub fn project_segment(
        &self,
        a: [f64; 3],
        b: [f64; 3],
        fov_deg: f64,
        viewport_w: f64,
        viewport_h: f64,
    ) -> Option<Line2> {
        let pa = self.project(a, fov_deg, viewport_w, viewport_h)?;
        let pb = self.project(b, fov_deg, viewport_w, viewport_h)?;
        Some((pa, pb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_transform() -> ModelTransform {
        ModelTransform {
            scale: 1.0,
            rotation: [0.0, 0.0, 0.0],
            position: [0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn test_identity_transform_preserves_point() {
        let t = default_transform();
        let p = transform_point([1.0, 2.0, 3.0], &t);
        assert!((p[0] - 1.0).abs() < 1e-9);
        assert!((p[1] - 2.0).abs() < 1e-9);
        assert!((p[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_then_translate() {
        let mut t = default_transform();
        t.scale = 2.0;
        t.position = [1.0, 0.0, 0.0];
        let p = transform_point([1.0, 0.0, 0.0], &t);
        assert!((p[0] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_rotation_quarter_turn() {
        let mut t = default_transform();
        t.rotation = [0.0, 90.0, 0.0];
        let p = transform_point([1.0, 0.0, 0.0], &t);
        // +X rotates onto -Z for a right-handed Y rotation.
        assert!(p[0].abs() < 1e-9);
        assert!((p[2] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_center_lands_mid_viewport() {
        let basis = ViewBasis::look_at([0.0, 0.0, -5.0], [0.0, 0.0, 0.0]);
        let (x, y) = basis.project([0.0, 0.0, 0.0], 60.0, 100.0, 50.0).unwrap();
        assert!((x - 50.0).abs() < 1e-6);
        assert!((y - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_behind_camera_is_none() {
        let basis = ViewBasis::look_at([0.0, 0.0, -5.0], [0.0, 0.0, 0.0]);
        assert!(basis.project([0.0, 0.0, -10.0], 60.0, 100.0, 50.0).is_none());
    }

    #[test]
    fn test_project_segment_needs_both_ends() {
        let basis = ViewBasis::look_at([0.0, 0.0, -5.0], [0.0, 0.0, 0.0]);
        assert!(basis
            .project_segment([0.0, 0.0, 0.0], [0.0, 0.0, -20.0], 60.0, 100.0, 50.0)
            .is_none());
        assert!(basis
            .project_segment([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 60.0, 100.0, 50.0)
            .is_some());
    }
}
