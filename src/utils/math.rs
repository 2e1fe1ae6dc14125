// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Math utilities

use nalgebra::{Point3, Vector3};

/// Calculate the normal of a triangle given three vertices
pub fn triangle_normal(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>) -> Vector3<f32> {
    let v1 = p1 - p0;
    let v2 = p2 - p0;
    v1.cross(&v2).normalize()
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
