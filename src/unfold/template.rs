// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Template image rasterization
//!
//! Draws every visible triangle's UV outline onto a white canvas and encodes
//! the result as PNG bytes. The canvas is `tex_w*scale` by `tex_h*scale`
//! pixels, so the printed template lines up with the atlas layout.

use super::AtlasLayout;
use crate::error::UnfoldError;
use image::{ImageFormat, Rgb, RgbImage};
use nalgebra::Point2;
use std::io::Cursor;

pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([206, 17, 38]);

/// All-zero UV triple marking a triangle excluded by the exterior filter
pub fn is_sentinel(triangle_uvs: &[Point2<f32>]) -> bool {
    triangle_uvs.iter().all(|uv| uv.x == 0.0 && uv.y == 0.0)
}

/// Rasterize the template for a UV buffer (3 consecutive entries per
/// triangle, as produced by the projector) and encode it as PNG.
pub fn render_template(
    layout: &AtlasLayout,
    uvs: &[Point2<f32>],
    scale: f32,
) -> Result<Vec<u8>, UnfoldError> {
    let width = ((layout.tex_w * scale).round() as u32).max(1);
    let height = ((layout.tex_h * scale).round() as u32).max(1);
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND_COLOR);

    for triangle in uvs.chunks_exact(3) {
        if is_sentinel(triangle) {
            continue;
        }

        // Undo normalization and the vertical flip to get pixel coordinates.
        // u = 1.0 and v = 0.0 round to width/height, one past the last pixel
        // row/column, so clamp to keep border edges on the canvas.
        let px: [(i64, i64); 3] = [
            uv_to_pixel(&triangle[0], layout, scale),
            uv_to_pixel(&triangle[1], layout, scale),
            uv_to_pixel(&triangle[2], layout, scale),
        ]
        .map(|(x, y)| (x.min(width as i64 - 1), y.min(height as i64 - 1)));

        for k in 0..3 {
            let (x0, y0) = px[k];
            let (x1, y1) = px[(k + 1) % 3];
            draw_line(&mut canvas, x0, y0, x1, y1, OUTLINE_COLOR);
        }
    }

    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn uv_to_pixel(uv: &Point2<f32>, layout: &AtlasLayout, scale: f32) -> (i64, i64) {
    let x = (uv.x * layout.tex_w * scale).round() as i64;
    let y = ((1.0 - uv.y) * layout.tex_h * scale).round() as i64;
    (x, y)
}

/// Bresenham line, clipped to the canvas
fn draw_line(canvas: &mut RgbImage, mut x0: i64, mut y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as u32) < canvas.width() && (y0 as u32) < canvas.height() {
            canvas.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use nalgebra::Point3;

    fn unit_layout() -> AtlasLayout {
        let bbox = BoundingBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        AtlasLayout::new(&bbox).unwrap()
    }

    #[test]
    fn test_canvas_dimensions() {
        let layout = unit_layout();
        let png = render_template(&layout, &[], 50.0).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 150);
    }

    #[test]
    fn test_outline_marks_pixels() {
        let layout = unit_layout();
        let uvs = [
            Point2::new(0.3, 0.5),
            Point2::new(0.5, 0.5),
            Point2::new(0.4, 0.7),
        ];
        let png = render_template(&layout, &uvs, 50.0).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        let accent = decoded
            .pixels()
            .filter(|p| **p == OUTLINE_COLOR)
            .count();
        assert!(accent > 0, "outline drew no pixels");
    }

    #[test]
    fn test_sentinel_triangle_not_drawn() {
        let layout = unit_layout();
        let uvs = [Point2::origin(), Point2::origin(), Point2::origin()];
        let png = render_template(&layout, &uvs, 50.0).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert!(decoded.pixels().all(|p| *p == BACKGROUND_COLOR));
    }

    #[test]
    fn test_border_edges_stay_on_canvas() {
        let layout = unit_layout();

        // Vertical edge on the right atlas border: u = 1.0 must land in the
        // last pixel column (199 on the 200px canvas)
        let uvs = [
            Point2::new(1.0, 0.4),
            Point2::new(1.0, 0.6),
            Point2::new(0.9, 0.5),
        ];
        let png = render_template(&layout, &uvs, 50.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(*decoded.get_pixel(199, 75), OUTLINE_COLOR);

        // Horizontal edge on the bottom border: v = 0.0 must land in the
        // last pixel row (149 on the 150px canvas)
        let uvs = [
            Point2::new(0.4, 0.0),
            Point2::new(0.6, 0.0),
            Point2::new(0.5, 0.1),
        ];
        let png = render_template(&layout, &uvs, 50.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(*decoded.get_pixel(100, 149), OUTLINE_COLOR);
    }

    #[test]
    fn test_rasterization_is_idempotent() {
        let layout = unit_layout();
        let uvs = [
            Point2::new(0.1, 0.2),
            Point2::new(0.9, 0.2),
            Point2::new(0.5, 0.9),
        ];
        let first = render_template(&layout, &uvs, 50.0).unwrap();
        let second = render_template(&layout, &uvs, 50.0).unwrap();
        assert_eq!(first, second);
    }
}
