// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Box-unfold UV projection

mod classify;
mod layout;
mod projector;
mod template;
mod visibility;

pub use classify::{classify_normal, classify_triangle};
pub use layout::{AtlasLayout, BoxFace, Region};
pub use projector::{BoxUnfoldProjector, ExteriorFilter, Projection, DEFAULT_SCALE};
pub use template::{is_sentinel, render_template, BACKGROUND_COLOR, OUTLINE_COLOR};
pub use visibility::{
    reference_point, vertex_exterior, AlwaysExterior, ParryBackend, RayBackend,
    REFERENCE_OFFSET, VISIBILITY_EPSILON,
};
