// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for the model viewer.

use std::io::Write;

use sonny::report;
use sonny::viewer::{ModelLoader, ViewerSession, ViewerToggle};

const CUBE_OBJ: &str = "\
v -1 -1 -1
v  1 -1 -1
v  1  1 -1
v -1  1 -1
f 1 2 3 4
";

fn temp_model(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_model_from_fixed_path() {
    let model = temp_model(CUBE_OBJ);
    let (reporter, _rx) = report::channel();
    let session = ViewerSession::new(ModelLoader::new(model.path()), reporter);
    assert_ne!(session.model_name(), "placeholder");
    assert_eq!(session.scene().meshes().len(), 1);
    assert_eq!(session.scene().meshes()[0].vertices.len(), 4);
}

#[test]
fn missing_asset_reports_and_falls_back_to_placeholder() {
    let (reporter, mut reports) = report::channel();
    let session = ViewerSession::new(ModelLoader::new("/missing/sonny.obj"), reporter);
    assert_eq!(session.model_name(), "placeholder");

    let report = reports.try_recv().unwrap();
    assert_eq!(report.severity, report::Severity::Error);
    assert!(report.message.contains("model load failed"));
}

#[test]
fn wireframe_toggle_reaches_every_mesh_on_next_pass() {
    let (reporter, _rx) = report::channel();
    let mut session = ViewerSession::new(ModelLoader::new("/missing/sonny.obj"), reporter);

    session.toggle(ViewerToggle::Wireframe);
    session.render_pass(100.0, 50.0);
    assert!(session.scene().meshes().iter().all(|m| m.material.wireframe));
}

#[test]
fn scale_label_reads_back_one_decimal() {
    let (reporter, _rx) = report::channel();
    let mut session = ViewerSession::new(ModelLoader::new("/missing/sonny.obj"), reporter);
    session.transform_mut().set_scale(5.0);
    assert_eq!(session.transform().scale_label(), "5.0");
}

#[test]
fn import_replaces_rendered_asset_and_name() {
    let initial = temp_model(CUBE_OBJ);
    let imported = temp_model("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");

    let (reporter, _rx) = report::channel();
    let mut session = ViewerSession::new(ModelLoader::new(initial.path()), reporter);
    let before = session.model_name().to_string();

    session.import_model(imported.path()).unwrap();
    assert_ne!(session.model_name(), before);
    // The rendered geometry really swapped: the triangle has 3 vertices.
    assert_eq!(session.scene().meshes()[0].vertices.len(), 3);
}

#[test]
fn failed_import_keeps_current_model() {
    let initial = temp_model(CUBE_OBJ);
    let (reporter, mut reports) = report::channel();
    let mut session = ViewerSession::new(ModelLoader::new(initial.path()), reporter);
    let name = session.model_name().to_string();

    assert!(session
        .import_model(std::path::Path::new("/missing/other.obj"))
        .is_err());
    assert_eq!(session.model_name(), name);
    assert!(reports.try_recv().unwrap().message.contains("import failed"));
}

#[test]
fn zoom_stays_clamped_during_render() {
    let (reporter, _rx) = report::channel();
    let mut session = ViewerSession::new(ModelLoader::new("/missing/sonny.obj"), reporter);
    session.camera_mut().zoom(-100.0);
    let near = session.render_pass(100.0, 50.0);
    session.camera_mut().zoom(200.0);
    let far = session.render_pass(100.0, 50.0);
    // Both extremes still render something sensible.
    assert!(!near.is_empty());
    assert!(!far.is_empty());
}
