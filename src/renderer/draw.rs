//! Immediate-mode outline drawing over an RGB frame buffer.
//!
//! All helpers clip per pixel; callers may pass coordinates that straddle or
//! exceed the buffer bounds.

use image::{Rgb, RgbImage};

/// Projected radii beyond this only occur when a point sits almost exactly on
/// the focal plane; such degenerate rings are skipped instead of rasterized.
const MAX_RADIUS: i32 = 8192;

pub(crate) fn put_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Clips a segment to the buffer rectangle (Liang-Barsky), returning integer
/// endpoints, or `None` when the segment lies fully outside.
fn clip_line(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    height: f32,
) -> Option<(i32, i32, i32, i32)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let mut t0: f32 = 0.;
    let mut t1: f32 = 1.;

    for (p, q) in [
        (-dx, x0),
        (dx, width - 1. - x0),
        (-dy, y0),
        (dy, height - 1. - y0),
    ] {
        if p == 0. {
            if q < 0. {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0. {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    let ax = (x0 + t0 * dx).round() as i32;
    let ay = (y0 + t0 * dy).round() as i32;
    let bx = (x0 + t1 * dx).round() as i32;
    let by = (y0 + t1 * dy).round() as i32;
    Some((ax, ay, bx, by))
}

/// Draws a 1-px Bresenham line, clipped to the buffer.
pub fn draw_line(img: &mut RgbImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb<u8>) {
    let (width, height) = (img.width() as f32, img.height() as f32);
    let (mut x, mut y, bx, by) = match clip_line(x0, y0, x1, y1, width, height) {
        Some(segment) => segment,
        None => return,
    };

    let dx = (bx - x).abs();
    let dy = -(by - y).abs();
    let sx = if x < bx { 1 } else { -1 };
    let sy = if y < by { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(img, x, y, color);
        if x == bx && y == by {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws a circle outline of the given stroke width, strokes growing inward.
pub fn draw_circle_outline(
    img: &mut RgbImage,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Rgb<u8>,
    width: u32,
) {
    if radius.round() > MAX_RADIUS as f32 {
        return;
    }
    // reject before the integer cast; centers can be arbitrarily far out
    let (w, h) = (img.width() as f32, img.height() as f32);
    if cx + radius < 0. || cy + radius < 0. || cx - radius > w || cy - radius > h {
        return;
    }
    let cx = cx.round() as i32;
    let cy = cy.round() as i32;
    let radius = radius.round() as i32;
    for inset in 0..width as i32 {
        let r = radius - inset;
        if r <= 0 {
            break;
        }
        circle_ring(img, cx, cy, r, color);
    }
}

// midpoint circle, eight octants per step
fn circle_ring(img: &mut RgbImage, cx: i32, cy: i32, r: i32, color: Rgb<u8>) {
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;
    while x >= y {
        put_pixel(img, cx + x, cy + y, color);
        put_pixel(img, cx + y, cy + x, color);
        put_pixel(img, cx - y, cy + x, color);
        put_pixel(img, cx - x, cy + y, color);
        put_pixel(img, cx - x, cy - y, color);
        put_pixel(img, cx - y, cy - x, color);
        put_pixel(img, cx + y, cy - x, color);
        put_pixel(img, cx + x, cy - y, color);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draws an axis-aligned square outline centered at `(cx, cy)` with the given
/// half-extent, strokes growing inward.
pub fn draw_rect_outline(
    img: &mut RgbImage,
    cx: f32,
    cy: f32,
    half_extent: f32,
    color: Rgb<u8>,
    width: u32,
) {
    for inset in 0..width {
        let e = half_extent - inset as f32;
        if e <= 0. {
            break;
        }
        let (left, top, right, bottom) = (cx - e, cy - e, cx + e, cy + e);
        draw_line(img, left, top, right, top, color);
        draw_line(img, right, top, right, bottom, color);
        draw_line(img, right, bottom, left, bottom, color);
        draw_line(img, left, bottom, left, top, color);
    }
}

/// Draws a closed 1-px polygon outline through the given points.
pub fn draw_polygon_outline(img: &mut RgbImage, points: &[(f32, f32)], color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % points.len()];
        draw_line(img, x0, y0, x1, y1, color);
    }
}
