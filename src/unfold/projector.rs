// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Box-unfold UV projector
//!
//! One projection call: bounding box, atlas layout, per-triangle dominant
//! axis classification, per-region affine mapping, optional raycast exterior
//! filtering, template rasterization. Fails fast and whole on structural
//! errors; never raises per-triangle failures.

use super::classify::classify_triangle;
use super::layout::{AtlasLayout, BoxFace};
use super::template;
use super::visibility::{vertex_exterior, AlwaysExterior, ParryBackend, RayBackend};
use crate::error::UnfoldError;
use crate::geometry::TriangleMesh;
use nalgebra::Point2;
use rayon::prelude::*;

/// Default rasterization scale, in pixels per model unit
pub const DEFAULT_SCALE: f32 = 50.0;

/// Whether triangles invisible from outside the hull are excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExteriorFilter {
    /// Keep every triangle
    #[default]
    Off,
    /// Raycast against the mesh itself; triangles with no exterior-visible
    /// vertex collapse to the all-zero UV sentinel
    Raycast,
}

/// Configured projector
#[derive(Debug, Clone, Copy)]
pub struct BoxUnfoldProjector {
    scale: f32,
    filter: ExteriorFilter,
}

impl Default for BoxUnfoldProjector {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            filter: ExteriorFilter::Off,
        }
    }
}

impl BoxUnfoldProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_exterior_filter(mut self, filter: ExteriorFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Project a mesh, building the configured ray backend.
    pub fn project(&self, mesh: &TriangleMesh) -> Result<Projection, UnfoldError> {
        match self.filter {
            ExteriorFilter::Raycast => {
                let backend = ParryBackend::new(mesh);
                self.project_with_backend(mesh, &backend)
            }
            ExteriorFilter::Off => self.project_with_backend(mesh, &AlwaysExterior),
        }
    }

    /// Project with an injected ray backend.
    ///
    /// The per-triangle loop is data parallel: each triangle owns a disjoint
    /// output slice, so there is no shared mutable state. With a real ray
    /// backend the cost is O(triangles x 3 rays x mesh intersection) and the
    /// raycasts dominate.
    pub fn project_with_backend(
        &self,
        mesh: &TriangleMesh,
        backend: &dyn RayBackend,
    ) -> Result<Projection, UnfoldError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(UnfoldError::InvalidScale { scale: self.scale });
        }

        let bbox = mesh.bounding_box();
        let layout = AtlasLayout::new(&bbox)?;

        let per_triangle: Vec<(BoxFace, [Point2<f32>; 3])> = (0..mesh.triangle_count())
            .into_par_iter()
            .map(|i| {
                let corners = mesh.triangle(i);
                let face = classify_triangle(&corners[0], &corners[1], &corners[2]);

                let visible = corners
                    .iter()
                    .any(|v| vertex_exterior(backend, face, &bbox, v));

                let uvs = if visible {
                    corners.map(|v| layout.to_uv(&layout.map_vertex(face, &v)))
                } else {
                    [Point2::origin(); 3]
                };

                (face, uvs)
            })
            .collect();

        let mut faces = Vec::with_capacity(per_triangle.len());
        let mut uvs = Vec::with_capacity(per_triangle.len() * 3);
        for (face, triple) in per_triangle {
            faces.push(face);
            uvs.extend_from_slice(&triple);
        }

        let template_png = template::render_template(&layout, &uvs, self.scale)?;

        Ok(Projection {
            uvs,
            faces,
            layout,
            template_png,
        })
    }
}

/// Result of one projection call
#[derive(Debug, Clone)]
pub struct Projection {
    /// One UV per input position slot, same count and ordering. Visible UVs
    /// lie in [0,1]^2; excluded triangles carry the exact (0,0) sentinel.
    pub uvs: Vec<Point2<f32>>,
    /// Classified face per triangle (recorded even for excluded triangles)
    pub faces: Vec<BoxFace>,
    pub layout: AtlasLayout,
    /// PNG-encoded template image
    pub template_png: Vec<u8>,
}

impl Projection {
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn triangle_uvs(&self, index: usize) -> [Point2<f32>; 3] {
        let base = index * 3;
        [self.uvs[base], self.uvs[base + 1], self.uvs[base + 2]]
    }

    /// Whether the exterior filter collapsed this triangle to the sentinel
    pub fn is_excluded(&self, index: usize) -> bool {
        template::is_sentinel(&self.uvs[index * 3..index * 3 + 3])
    }
}
