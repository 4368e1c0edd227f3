use crate::font;
use crate::types::{Finger, Point2D, HAND_SKELETON};

/// Skeleton and HUD drawing over the raw RGB frame buffer.

fn put_pixel(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: (u8, u8, u8)) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 3;
    if idx + 2 < buffer.len() {
        buffer[idx] = color.0;
        buffer[idx + 1] = color.1;
        buffer[idx + 2] = color.2;
    }
}

fn draw_dot(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    p: Point2D,
    size: i32,
    color: (u8, u8, u8),
) {
    for dy in -size..=size {
        for dx in -size..=size {
            put_pixel(buffer, width, height, p.x as i32 + dx, p.y as i32 + dy, color);
        }
    }
}

fn draw_line(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    a: Point2D,
    b: Point2D,
    color: (u8, u8, u8),
) {
    let mut t = 0.0;
    while t < 1.0 {
        let px = a.x + (b.x - a.x) * t;
        let py = a.y + (b.y - a.y) * t;
        put_pixel(buffer, width, height, px as i32, py as i32, color);
        t += 0.002;
    }
}

/// Draw the 21 landmarks with their bone connections.
pub fn draw_skeleton(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    points: &[Point2D],
    bone_color: (u8, u8, u8),
    dot_color: (u8, u8, u8),
) {
    for &(a, b) in HAND_SKELETON.iter() {
        if a < points.len() && b < points.len() {
            draw_line(buffer, width, height, points[a], points[b], bone_color);
        }
    }
    for &p in points {
        draw_dot(buffer, width, height, p, 2, dot_color);
    }
}

/// Per-finger bend angle readout, stacked on the right edge of the frame.
pub fn draw_angle_panel(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    angles: &[f32; 5],
    scale: usize,
    color: (u8, u8, u8),
) {
    let x_base = width.saturating_sub(220);
    let mut y = 40;
    for (finger, angle) in Finger::ALL.iter().zip(angles.iter()) {
        let text = format!("{}: {:.1}", finger.label(), angle);
        font::draw_text_line(buffer, width, height, x_base, y, &text, color, scale);
        y += font::line_height(scale);
    }
}

pub fn parse_hex(hex: &str) -> (u8, u8, u8) {
    if hex.len() == 7 && hex.starts_with('#') {
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
        (r, g, b)
    } else {
        (0, 255, 0) // Default Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF0000"), (255, 0, 0));
        assert_eq!(parse_hex("#00FF00"), (0, 255, 0));
        assert_eq!(parse_hex("#FFFFFF"), (255, 255, 255));
        assert_eq!(parse_hex("invalid"), (0, 255, 0)); // Fallback
    }

    #[test]
    fn test_skeleton_draws_inside_bounds() {
        // Points outside the frame must not write outside the buffer
        let mut buffer = vec![0u8; 64 * 64 * 3];
        let points = vec![
            Point2D::new(-50.0, -50.0),
            Point2D::new(500.0, 500.0),
            Point2D::new(32.0, 32.0),
        ];
        draw_skeleton(&mut buffer, 64, 64, &points, (0, 255, 0), (255, 0, 0));
        // Center dot landed
        let idx = (32 * 64 + 32) * 3;
        assert_eq!(buffer[idx], 255);
    }
}
