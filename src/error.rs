// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Error taxonomy for the unfold pipeline
//!
//! Structural input errors fail fast and whole: no partial UV buffer is ever
//! returned. Numerical edge cases (near-tie normals) are not errors.

use thiserror::Error;

/// Errors produced by mesh construction and projection
#[derive(Debug, Error)]
pub enum UnfoldError {
    /// Position count is zero or not a multiple of 3
    #[error("malformed mesh: {position_count} positions is not a non-zero multiple of 3")]
    MalformedMesh { position_count: usize },

    /// Bounding box has zero extent on at least one axis
    #[error("degenerate bounding box: extents {extents:?} must all be > 0")]
    DegenerateBounds { extents: [f32; 3] },

    /// Rasterization scale is not a positive finite number
    #[error("invalid rasterization scale {scale}: must be finite and > 0")]
    InvalidScale { scale: f32 },

    /// Template image could not be encoded
    #[error("failed to encode template image")]
    TemplateEncoding(#[from] image::ImageError),
}
