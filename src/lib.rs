// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Brickwrap
//!
//! Computes box-unfold (cross/cube-map style) UV layouts for single
//! triangulated parts: each triangle is classified by its face normal's
//! dominant axis onto one of six bounding-box faces, mapped into a packed 2D
//! atlas, optionally filtered by raycast exterior visibility, and traced
//! onto a printable PNG template.

pub mod error;
pub mod geometry;
pub mod io;
pub mod unfold;
pub mod utils;

pub use error::UnfoldError;
pub use geometry::{BoundingBox, TriangleMesh};
pub use io::{export_obj, export_stl, import_stl, write_layout_json};
pub use unfold::{AtlasLayout, BoxFace, BoxUnfoldProjector, ExteriorFilter, Projection};

/// Project a mesh with default settings (50 px per model unit, no exterior
/// filtering)
pub fn unfold(mesh: &TriangleMesh) -> Result<Projection, UnfoldError> {
    BoxUnfoldProjector::new().project(mesh)
}
