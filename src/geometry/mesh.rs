// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Triangle-soup mesh representation
//!
//! The unfold pipeline consumes a fully expanded, non-indexed triangle
//! stream: every triangle owns 3 exclusive position slots so it can receive
//! independent UV coordinates. Duplicated positions across triangles are
//! expected and required.

use super::BoundingBox;
use crate::error::UnfoldError;
use nalgebra::Point3;
use parry3d::shape::TriMesh;
use serde::{Deserialize, Serialize};

/// Non-indexed triangular mesh: three consecutive positions per triangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    positions: Vec<Point3<f32>>,
}

impl TriangleMesh {
    /// Build a mesh from a flat position stream.
    ///
    /// Rejects streams whose length is zero or not a multiple of 3 before
    /// any derived state is allocated.
    pub fn from_positions(positions: Vec<Point3<f32>>) -> Result<Self, UnfoldError> {
        if positions.is_empty() || positions.len() % 3 != 0 {
            return Err(UnfoldError::MalformedMesh {
                position_count: positions.len(),
            });
        }
        Ok(Self { positions })
    }

    /// Flat position stream, 3 consecutive entries per triangle
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// The three corners of triangle `index`
    pub fn triangle(&self, index: usize) -> [Point3<f32>; 3] {
        let base = index * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Iterate over triangles as corner triples
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f32>; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
    }

    /// Append another soup's triangles to this mesh
    pub fn merge(&mut self, other: &TriangleMesh) {
        self.positions.extend_from_slice(&other.positions);
    }

    /// Compute bounding box over all positions
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.positions)
    }

    /// Convert to a parry3d TriMesh for ray queries.
    ///
    /// The soup stays non-indexed: triangle `i` maps to indices
    /// `[3i, 3i+1, 3i+2]`.
    pub fn to_trimesh(&self) -> TriMesh {
        let vertices: Vec<Point3<f32>> = self.positions.clone();
        let indices: Vec<[u32; 3]> = (0..self.triangle_count() as u32)
            .map(|i| [3 * i, 3 * i + 1, 3 * i + 2])
            .collect();
        TriMesh::new(vertices, indices)
    }
}
