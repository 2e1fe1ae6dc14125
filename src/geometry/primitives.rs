// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Triangle-soup primitive generators

use super::TriangleMesh;
use nalgebra::{Point3, Vector3};

/// Generate an axis-aligned cuboid soup spanning `min` to `min + size`.
///
/// Emits 12 triangles (36 positions) with outward winding, 2 triangles per
/// face, each face owning its own position slots.
pub fn cuboid_at(min: Point3<f32>, size: Vector3<f32>) -> TriangleMesh {
    let max = min + size;

    let p000 = Point3::new(min.x, min.y, min.z);
    let p100 = Point3::new(max.x, min.y, min.z);
    let p110 = Point3::new(max.x, max.y, min.z);
    let p010 = Point3::new(min.x, max.y, min.z);
    let p001 = Point3::new(min.x, min.y, max.z);
    let p101 = Point3::new(max.x, min.y, max.z);
    let p111 = Point3::new(max.x, max.y, max.z);
    let p011 = Point3::new(min.x, max.y, max.z);

    // Quads wound counter-clockwise viewed from outside
    let faces = [
        [p100, p110, p111, p101], // +X
        [p000, p001, p011, p010], // -X
        [p010, p011, p111, p110], // +Y
        [p000, p100, p101, p001], // -Y
        [p001, p101, p111, p011], // +Z
        [p000, p010, p110, p100], // -Z
    ];

    let mut positions = Vec::with_capacity(36);
    for [a, b, c, d] in faces {
        positions.extend_from_slice(&[a, b, c]);
        positions.extend_from_slice(&[a, c, d]);
    }

    // 36 positions always pass structural validation
    TriangleMesh::from_positions(positions).unwrap()
}

/// Cuboid with its minimum corner at the origin
pub fn cuboid(size: Vector3<f32>) -> TriangleMesh {
    cuboid_at(Point3::origin(), size)
}
