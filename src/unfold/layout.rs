// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Unfolded-box atlas layout
//!
//! The six faces of the bounding box are laid flat in a cross pattern:
//!
//! ```text
//!          +--------+
//!          |  top   |
//! +--------+--------+--------+--------+
//! |  left  | front  | right  |  back  |
//! +--------+--------+--------+--------+
//!          | bottom |
//!          +--------+
//! ```
//!
//! With box extents L (X), H (Y), W (Z), the atlas is `2*(L+W)` wide and
//! `2*W+H` tall. Region positions and per-face vertex mappings are fixed;
//! each face encodes a different axis-pair projection and flip so unfolded
//! faces stay contiguous with their neighbors.

use crate::error::UnfoldError;
use crate::geometry::BoundingBox;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// One of the six box faces, named by outward direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxFace {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl BoxFace {
    pub const ALL: [BoxFace; 6] = [
        BoxFace::Top,
        BoxFace::Bottom,
        BoxFace::Front,
        BoxFace::Back,
        BoxFace::Left,
        BoxFace::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoxFace::Top => "top",
            BoxFace::Bottom => "bottom",
            BoxFace::Front => "front",
            BoxFace::Back => "back",
            BoxFace::Left => "left",
            BoxFace::Right => "right",
        }
    }

    fn index(&self) -> usize {
        match self {
            BoxFace::Top => 0,
            BoxFace::Bottom => 1,
            BoxFace::Front => 2,
            BoxFace::Back => 3,
            BoxFace::Left => 4,
            BoxFace::Right => 5,
        }
    }
}

/// Rectangle in atlas units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    /// Intersection area with another region is zero
    pub fn is_disjoint(&self, other: &Region) -> bool {
        self.x + self.width <= other.x
            || other.x + other.width <= self.x
            || self.y + self.height <= other.y
            || other.y + other.height <= self.y
    }

    pub fn contains(&self, p: &Point2<f32>) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }
}

/// Packed 2D layout of the six unfolded box faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasLayout {
    pub tex_w: f32,
    pub tex_h: f32,
    bbox: BoundingBox,
    regions: [Region; 6],
}

impl AtlasLayout {
    /// Derive the layout from a bounding box.
    ///
    /// Rejects boxes with zero extent on any axis: those would divide by
    /// zero during UV normalization.
    pub fn new(bbox: &BoundingBox) -> Result<Self, UnfoldError> {
        let size = bbox.size();
        let (l, h, w) = (size.x, size.y, size.z);
        if !(l > 0.0 && h > 0.0 && w > 0.0) {
            return Err(UnfoldError::DegenerateBounds { extents: [l, h, w] });
        }

        let tex_w = 2.0 * (l + w);
        let tex_h = 2.0 * w + h;

        // Indexed by BoxFace::index
        let regions = [
            Region { x: w, y: 0.0, width: l, height: w },             // top
            Region { x: w, y: w + h, width: l, height: w },           // bottom
            Region { x: w, y: w, width: l, height: h },               // front
            Region { x: w + l + w, y: w, width: l, height: h },       // back
            Region { x: 0.0, y: w, width: w, height: h },             // left
            Region { x: w + l, y: w, width: w, height: h },           // right
        ];

        Ok(Self {
            tex_w,
            tex_h,
            bbox: *bbox,
            regions,
        })
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn region(&self, face: BoxFace) -> Region {
        self.regions[face.index()]
    }

    /// Map a world-space vertex into its face's region, in raw atlas units.
    ///
    /// Each face projects out its dominant axis and flips one coordinate to
    /// keep the unfolded faces contiguous.
    pub fn map_vertex(&self, face: BoxFace, v: &Point3<f32>) -> Point2<f32> {
        let min = self.bbox.min;
        let size = self.bbox.size();
        let (l, h, w) = (size.x, size.y, size.z);

        let dx = v.x - min.x;
        let dy = v.y - min.y;
        let dz = v.z - min.z;

        match face {
            BoxFace::Top => Point2::new(w + dx, w - dz),
            BoxFace::Bottom => Point2::new(w + dx, (w + h) + dz),
            BoxFace::Front => Point2::new(w + dx, w + (h - dy)),
            BoxFace::Back => Point2::new((w + l + w) + (l - dx), w + (h - dy)),
            BoxFace::Left => Point2::new(dz, w + (h - dy)),
            BoxFace::Right => Point2::new((w + l) + (w - dz), w + (h - dy)),
        }
    }

    /// Normalize a raw atlas coordinate to UV space with the vertical axis
    /// flipped so the origin matches image top-left convention.
    pub fn to_uv(&self, mapped: &Point2<f32>) -> Point2<f32> {
        Point2::new(mapped.x / self.tex_w, 1.0 - mapped.y / self.tex_h)
    }
}
