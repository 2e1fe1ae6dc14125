// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Mesh and layout exporters

use crate::geometry::TriangleMesh;
use crate::unfold::AtlasLayout;
use crate::utils::math::triangle_normal;
use anyhow::{bail, Context, Result};
use nalgebra::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a triangle soup as binary STL
pub fn export_stl(mesh: &TriangleMesh, path: &Path) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let triangles: Vec<StlTriangle> = mesh
        .triangles()
        .map(|[a, b, c]| {
            let normal = triangle_normal(&a, &b, &c);
            StlTriangle {
                normal: Normal::new([normal.x, normal.y, normal.z]),
                vertices: [
                    StlVertex::new([a.x, a.y, a.z]),
                    StlVertex::new([b.x, b.y, b.z]),
                    StlVertex::new([c.x, c.y, c.z]),
                ],
            }
        })
        .collect();

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    stl_io::write_stl(&mut file, triangles.iter())
        .with_context(|| format!("Failed to write STL file: {}", path.display()))?;

    Ok(())
}

/// Write an OBJ with one `vt` record per position slot so consumers can
/// texture the mesh with the template image.
///
/// Sentinel (0,0) UVs are written as-is: downstream tooling detects
/// "deliberately unmapped" triangles by that exact value.
pub fn export_obj(mesh: &TriangleMesh, uvs: &[Point2<f32>], path: &Path) -> Result<()> {
    let positions = mesh.positions();
    if uvs.len() != positions.len() {
        bail!(
            "UV count {} does not match position count {}",
            uvs.len(),
            positions.len()
        );
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create OBJ file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# exported by brickwrap")?;
    for p in positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for i in 0..mesh.triangle_count() {
        // OBJ indices are 1-based; position and texture indices coincide
        let (a, b, c) = (3 * i + 1, 3 * i + 2, 3 * i + 3);
        writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write OBJ file: {}", path.display()))?;
    Ok(())
}

/// Serialize the atlas layout as pretty JSON
pub fn write_layout_json(layout: &AtlasLayout, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create layout report: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), layout)
        .with_context(|| format!("Failed to serialize layout report: {}", path.display()))?;
    Ok(())
}
