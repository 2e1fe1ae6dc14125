// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Exterior-visibility testing
//!
//! A vertex counts as exterior-visible when a ray cast from just outside the
//! bounding box, along the face's dominant axis, reaches the vertex without
//! hitting anything closer. This is an outward single-ray heuristic, not a
//! visibility solver: thin protrusions and concave pockets can misclassify.
//! Ray queries are a capability injected into the projector so the unfold
//! core stays testable without a geometry backend.

use super::BoxFace;
use crate::geometry::{BoundingBox, TriangleMesh};
use nalgebra::{Point3, Vector3};
use parry3d::query::{Ray, RayCast};
use parry3d::shape::TriMesh;

/// Hit tolerance in model units. Preserved verbatim from the observed
/// behavior of the original tool.
pub const VISIBILITY_EPSILON: f32 = 0.001;

/// Distance the reference point sits outside the bounding box
pub const REFERENCE_OFFSET: f32 = 1.0;

/// Nearest-hit ray queries against the whole mesh
pub trait RayBackend: Sync {
    /// Distance along the (normalized) direction to the nearest hit, if any
    fn nearest_hit(&self, origin: &Point3<f32>, dir: &Vector3<f32>) -> Option<f32>;
}

/// parry3d-backed ray queries
pub struct ParryBackend {
    trimesh: TriMesh,
}

impl ParryBackend {
    /// Build the acceleration structure once per projection
    pub fn new(mesh: &TriangleMesh) -> Self {
        Self {
            trimesh: mesh.to_trimesh(),
        }
    }
}

impl RayBackend for ParryBackend {
    fn nearest_hit(&self, origin: &Point3<f32>, dir: &Vector3<f32>) -> Option<f32> {
        let ray = Ray::new(*origin, *dir);
        self.trimesh.cast_local_ray(&ray, f32::MAX, false)
    }
}

/// Fallback when no ray backend is available: reports nothing hit, so every
/// vertex counts as exterior and the filter degrades instead of crashing.
pub struct AlwaysExterior;

impl RayBackend for AlwaysExterior {
    fn nearest_hit(&self, _origin: &Point3<f32>, _dir: &Vector3<f32>) -> Option<f32> {
        None
    }
}

/// Reference point for a vertex: the vertex with the face's dominant axis
/// coordinate replaced by the box bound offset outward.
pub fn reference_point(face: BoxFace, bbox: &BoundingBox, v: &Point3<f32>) -> Point3<f32> {
    match face {
        BoxFace::Top => Point3::new(v.x, bbox.max.y + REFERENCE_OFFSET, v.z),
        BoxFace::Bottom => Point3::new(v.x, bbox.min.y - REFERENCE_OFFSET, v.z),
        BoxFace::Back => Point3::new(v.x, v.y, bbox.max.z + REFERENCE_OFFSET),
        BoxFace::Front => Point3::new(v.x, v.y, bbox.min.z - REFERENCE_OFFSET),
        BoxFace::Right => Point3::new(bbox.max.x + REFERENCE_OFFSET, v.y, v.z),
        BoxFace::Left => Point3::new(bbox.min.x - REFERENCE_OFFSET, v.y, v.z),
    }
}

/// Test whether `v`, classified to `face`, is reachable from outside the box.
///
/// The vertex passes when the nearest hit distance equals the reference
/// point's distance to the vertex within [`VISIBILITY_EPSILON`].
pub fn vertex_exterior(
    backend: &dyn RayBackend,
    face: BoxFace,
    bbox: &BoundingBox,
    v: &Point3<f32>,
) -> bool {
    let origin = reference_point(face, bbox, v);
    let to_vertex = v - origin;
    let distance = to_vertex.norm();
    if distance <= VISIBILITY_EPSILON {
        return true;
    }

    match backend.nearest_hit(&origin, &(to_vertex / distance)) {
        Some(hit) => (hit - distance).abs() <= VISIBILITY_EPSILON,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cuboid;
    use nalgebra::Vector3;

    #[test]
    fn test_reference_point_offsets() {
        let bbox = BoundingBox::new(Point3::origin(), Point3::new(2.0, 3.0, 4.0));
        let v = Point3::new(1.0, 1.5, 2.0);

        assert_eq!(
            reference_point(BoxFace::Top, &bbox, &v),
            Point3::new(1.0, 4.0, 2.0)
        );
        assert_eq!(
            reference_point(BoxFace::Left, &bbox, &v),
            Point3::new(-1.0, 1.5, 2.0)
        );
        assert_eq!(
            reference_point(BoxFace::Front, &bbox, &v),
            Point3::new(1.0, 1.5, -1.0)
        );
    }

    #[test]
    fn test_cube_surface_vertices_are_exterior() {
        let mesh = cuboid(Vector3::new(1.0, 1.0, 1.0));
        let bbox = mesh.bounding_box();
        let backend = ParryBackend::new(&mesh);

        // Top face corner, seen from above
        let v = Point3::new(0.25, 1.0, 0.25);
        assert!(vertex_exterior(&backend, BoxFace::Top, &bbox, &v));
    }

    #[test]
    fn test_occluded_vertex_is_not_exterior() {
        let mesh = cuboid(Vector3::new(1.0, 1.0, 1.0));
        let bbox = mesh.bounding_box();
        let backend = ParryBackend::new(&mesh);

        // A point on the cube floor is shadowed by the top face from above
        let v = Point3::new(0.25, 0.0, 0.25);
        assert!(!vertex_exterior(&backend, BoxFace::Top, &bbox, &v));
    }

    #[test]
    fn test_always_exterior_fallback() {
        let bbox = BoundingBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let v = Point3::new(0.5, 0.0, 0.5);
        assert!(vertex_exterior(&AlwaysExterior, BoxFace::Top, &bbox, &v));
    }
}
