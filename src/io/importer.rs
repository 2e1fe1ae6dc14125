// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! STL importer
//!
//! Expands the indexed STL representation into the non-indexed triangle
//! soup the projector requires: index sharing is discarded so each triangle
//! owns its 3 position slots.

use crate::geometry::TriangleMesh;
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::fs::File;
use std::path::Path;

/// Read an STL file into a triangle soup
pub fn import_stl(path: &Path) -> Result<TriangleMesh> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open STL file: {}", path.display()))?;
    let stl = stl_io::read_stl(&mut file)
        .with_context(|| format!("Failed to read STL contents: {}", path.display()))?;

    let mut positions = Vec::with_capacity(stl.faces.len() * 3);
    for face in &stl.faces {
        for &index in &face.vertices {
            let v = stl.vertices[index];
            positions.push(Point3::new(v[0], v[1], v[2]));
        }
    }

    TriangleMesh::from_positions(positions)
        .with_context(|| format!("STL file holds no usable triangles: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cuboid;
    use crate::io::exporter::export_stl;
    use nalgebra::Vector3;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_roundtrip() -> Result<()> {
        let mesh = cuboid(Vector3::new(2.0, 1.0, 3.0));

        let file = NamedTempFile::new()?;
        export_stl(&mesh, file.path())?;

        let imported = import_stl(file.path())?;
        assert_eq!(imported.triangle_count(), 12);
        assert!(imported
            .bounding_box()
            .approx_eq(&mesh.bounding_box(), 1e-5));

        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(import_stl(Path::new("/nonexistent/part.stl")).is_err());
    }
}
