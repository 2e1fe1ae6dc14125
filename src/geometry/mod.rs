// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Geometry module - mesh representation and bounds

mod bbox;
mod mesh;
mod primitives;

pub use bbox::BoundingBox;
pub use mesh::TriangleMesh;
pub use primitives::{cuboid, cuboid_at};
