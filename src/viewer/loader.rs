// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model loading
//!
//! Loads wireframe meshes from a small OBJ subset (`v`, `l`, `f`
//! records). The default asset lives at a fixed relative path and is
//! cached after the first parse; imports go through the same parser and
//! the same cache, so re-importing a file is free.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SonnyError};
use crate::viewer::mesh::{Material, Mesh};

/// Fixed path of the default model asset.
pub const DEFAULT_MODEL_PATH: &str = "assets/sonny.obj";

/// Parsing + caching loader for viewer assets.
pub struct ModelLoader {
    default_path: PathBuf,
    cache: HashMap<PathBuf, Mesh>,
}

impl ModelLoader {
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            cache: HashMap::new(),
        }
    }

    /// Load the fixed default asset.
    pub fn load_default(&mut self) -> Result<Mesh> {
        let path = self.default_path.clone();
        self.load(&path)
    }

    /// Load (or fetch from cache) the mesh at `path`.
    pub fn load(&mut self, path: &Path) -> Result<Mesh> {
        if let Some(mesh) = self.cache.get(path) {
            return Ok(mesh.clone());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| SonnyError::Asset(format!("{}: {e}", path.display())))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string();
        let mesh = parse_obj(&name, &text)?;
        self.cache.insert(path.to_path_buf(), mesh.clone());
        Ok(mesh)
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

/// Parse the OBJ subset: `v x y z` vertices, `l a b` polylines,
/// `f a b c ...` faces (turned into their boundary edges). Indices are
/// 1-based as in OBJ; anything else is skipped.
pub fn parse_obj(name: &str, text: &str) -> Result<Mesh> {
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coords = [0.0f32; 3];
                for coord in coords.iter_mut() {
                    let field = parts.next().ok_or_else(|| {
                        SonnyError::Asset(format!("{name}: short vertex at line {}", lineno + 1))
                    })?;
                    *coord = field.parse().map_err(|_| {
                        SonnyError::Asset(format!(
                            "{name}: bad vertex component {field:?} at line {}",
                            lineno + 1
                        ))
                    })?;
                }
                vertices.push(coords);
            }
            Some("l") | Some("f") => {
                let indices: Vec<usize> = parts
                    .map(|field| {
                        // Faces may carry `v/vt/vn` syntax; only the
                        // vertex index matters for a wireframe.
                        let vertex_field = field.split('/').next().unwrap_or(field);
                        vertex_field.parse::<usize>().map_err(|_| {
                            SonnyError::Asset(format!(
                                "{name}: bad index {field:?} at line {}",
                                lineno + 1
                            ))
                        })
                    })
                    .collect::<Result<_>>()?;
                if indices.len() < 2 {
                    continue;
                }
                let closed = line.starts_with('f');
                for pair in indices.windows(2) {
                    edges.push((pair[0] - 1, pair[1] - 1));
                }
                if closed {
                    edges.push((indices[indices.len() - 1] - 1, indices[0] - 1));
                }
            }
            _ => {}
        }
    }

    if vertices.is_empty() || edges.is_empty() {
        return Err(SonnyError::Asset(format!(
            "{name}: no renderable geometry"
        )));
    }
    if let Some(&(a, b)) = edges.iter().find(|&&(a, b)| a >= vertices.len() || b >= vertices.len())
    {
        return Err(SonnyError::Asset(format!(
            "{name}: edge ({a}, {b}) out of range for {} vertices",
            vertices.len()
        )));
    }

    Ok(Mesh {
        name: name.to_string(),
        vertices,
        edges,
        material: Material::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIANGLE: &str = "\
# comment
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

    #[test]
    fn test_parse_obj_triangle() {
        let mesh = parse_obj("tri", TRIANGLE).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        // Face of 3 vertices closes into 3 edges.
        assert_eq!(mesh.edges.len(), 3);
        assert_eq!(mesh.name, "tri");
    }

    #[test]
    fn test_parse_obj_polyline_stays_open() {
        let text = "v 0 0 0\nv 1 0 0\nv 2 0 0\nl 1 2 3\n";
        let mesh = parse_obj("line", text).unwrap();
        assert_eq!(mesh.edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_obj_face_with_slashes() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/2 3/3/3\n";
        let mesh = parse_obj("slashed", text).unwrap();
        assert_eq!(mesh.edges.len(), 3);
    }

    #[test]
    fn test_parse_obj_rejects_bad_vertex() {
        let text = "v 0 zero 0\n";
        assert!(matches!(
            parse_obj("bad", text),
            Err(SonnyError::Asset(_))
        ));
    }

    #[test]
    fn test_parse_obj_rejects_out_of_range_index() {
        let text = "v 0 0 0\nv 1 0 0\nl 1 9\n";
        assert!(parse_obj("oob", text).is_err());
    }

    #[test]
    fn test_parse_obj_rejects_empty_geometry() {
        assert!(parse_obj("empty", "# nothing here\n").is_err());
    }

    #[test]
    fn test_loader_caches_by_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRIANGLE.as_bytes()).unwrap();
        let path = file.path().to_path_buf();

        let mut loader = ModelLoader::new(&path);
        let first = loader.load_default().unwrap();

        // Corrupt the file; the cache must still serve the parse.
        std::fs::write(&path, "garbage").unwrap();
        let second = loader.load_default().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_loader_missing_file_is_asset_error() {
        let mut loader = ModelLoader::new("/definitely/missing.obj");
        assert!(matches!(
            loader.load_default(),
            Err(SonnyError::Asset(_))
        ));
    }
}
