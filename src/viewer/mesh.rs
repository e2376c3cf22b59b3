// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mesh and scene types
//!
//! A mesh is vertices plus edges — enough for a wireframe pass. The
//! scene holds the displayed model (and nothing else; floor, grid and
//! axes are generated at projection time).

use crate::viewer::settings::ViewerSettings;

/// Per-mesh render state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material {
    pub wireframe: bool,
}

/// An edge-list mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<[f32; 3]>,
    /// Index pairs into `vertices`.
    pub edges: Vec<(usize, usize)>,
    pub material: Material,
}

impl Mesh {
    /// Unit cube stand-in used when the real asset cannot be loaded.
    pub fn placeholder() -> Self {
        let vertices = vec![
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ];
        let edges = vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        Self {
            name: "placeholder".to_string(),
            vertices,
            edges,
            material: Material::default(),
        }
    }

    /// Whether the mesh has anything renderable.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.edges.is_empty()
    }
}

/// The displayed scene. Currently a single model slot, but settings
/// application is written over all meshes so composites stay cheap.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn with_model(mesh: Mesh) -> Self {
        Self { meshes: vec![mesh] }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Swap the displayed model for an imported one.
    pub fn replace_model(&mut self, mesh: Mesh) {
        self.meshes.clear();
        self.meshes.push(mesh);
    }

    /// Push display settings down into every mesh material. Runs at the
    /// start of each render pass.
    pub fn apply_settings(&mut self, settings: &ViewerSettings) {
        for mesh in &mut self.meshes {
            mesh.material.wireframe = settings.wireframe;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_cube_shape() {
        let cube = Mesh::placeholder();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        assert!(!cube.is_empty());
    }

    #[test]
    fn test_apply_settings_sets_every_material() {
        let mut scene = Scene::with_model(Mesh::placeholder());
        let mut settings = ViewerSettings::default();
        settings.wireframe = true;
        scene.apply_settings(&settings);
        assert!(scene.meshes().iter().all(|m| m.material.wireframe));
    }

    #[test]
    fn test_replace_model_swaps_single_slot() {
        let mut scene = Scene::with_model(Mesh::placeholder());
        let mut other = Mesh::placeholder();
        other.name = "imported".to_string();
        scene.replace_model(other);
        assert_eq!(scene.meshes().len(), 1);
        assert_eq!(scene.meshes()[0].name, "imported");
    }
}
