// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Import/export round trips through the filesystem

use anyhow::Result;
use approx::assert_relative_eq;
use brickwrap::geometry::cuboid;
use brickwrap::{export_obj, export_stl, import_stl, unfold, write_layout_json};
use nalgebra::Vector3;
use tempfile::tempdir;

#[test]
fn stl_roundtrip_preserves_triangles_and_bounds() -> Result<()> {
    let mesh = cuboid(Vector3::new(3.0, 1.0, 2.0));

    let dir = tempdir()?;
    let path = dir.path().join("brick.stl");
    export_stl(&mesh, &path)?;

    let imported = import_stl(&path)?;
    assert_eq!(imported.triangle_count(), mesh.triangle_count());
    assert!(imported.bounding_box().approx_eq(&mesh.bounding_box(), 1e-5));

    Ok(())
}

#[test]
fn imported_mesh_projects_like_the_original() -> Result<()> {
    let mesh = cuboid(Vector3::new(2.0, 1.0, 1.0));

    let dir = tempdir()?;
    let path = dir.path().join("brick.stl");
    export_stl(&mesh, &path)?;
    let imported = import_stl(&path)?;

    let original = unfold(&mesh)?;
    let reimported = unfold(&imported)?;

    assert_eq!(original.layout.tex_w, reimported.layout.tex_w);
    assert_eq!(original.layout.tex_h, reimported.layout.tex_h);
    assert_eq!(original.faces.len(), reimported.faces.len());

    Ok(())
}

#[test]
fn full_pipeline_writes_all_artifacts() -> Result<()> {
    let mesh = cuboid(Vector3::new(4.0, 1.2, 2.0));
    let projection = unfold(&mesh)?;

    let dir = tempdir()?;
    let png = dir.path().join("template.png");
    let obj = dir.path().join("part.obj");
    let layout = dir.path().join("layout.json");

    std::fs::write(&png, &projection.template_png)?;
    export_obj(&mesh, &projection.uvs, &obj)?;
    write_layout_json(&projection.layout, &layout)?;

    assert!(image::open(&png).is_ok());

    let obj_text = std::fs::read_to_string(&obj)?;
    assert_eq!(obj_text.lines().filter(|l| l.starts_with("f ")).count(), 12);

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&layout)?)?;
    let tex_w = json["tex_w"].as_f64().expect("tex_w missing");
    let tex_h = json["tex_h"].as_f64().expect("tex_h missing");
    assert_relative_eq!(tex_w, 12.0, epsilon = 1e-5); // 2*(4+2)
    assert_relative_eq!(tex_h, 5.2, epsilon = 1e-5); // 2*2 + 1.2

    Ok(())
}
