// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Dominant-axis face classification

use super::BoxFace;
use crate::utils::math::triangle_normal;
use nalgebra::{Point3, Vector3};

/// Classify a normal by its dominant absolute component.
///
/// Comparisons are strict `>` in fixed priority order Y, then Z, then X, so
/// an exact tie falls through to the next branch. Normals computed near a
/// box edge can sit on that boundary and flip classification between
/// numerically equivalent inputs; this nondeterminism on degenerate geometry
/// is accepted behavior.
pub fn classify_normal(normal: &Vector3<f32>) -> BoxFace {
    let ax = normal.x.abs();
    let ay = normal.y.abs();
    let az = normal.z.abs();

    if ay > ax && ay > az {
        if normal.y > 0.0 {
            BoxFace::Top
        } else {
            BoxFace::Bottom
        }
    } else if az > ax {
        if normal.z > 0.0 {
            BoxFace::Back
        } else {
            BoxFace::Front
        }
    } else if normal.x > 0.0 {
        BoxFace::Right
    } else {
        BoxFace::Left
    }
}

/// Classify a triangle from its corner positions
pub fn classify_triangle(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> BoxFace {
    classify_normal(&triangle_normal(a, b, c))
}
