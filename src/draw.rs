use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);

/// Create a canvas filled with a solid background color
pub fn canvas(width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, background)
}

/// Filled axis-aligned rectangle; both corners are inclusive.
/// Parts outside the canvas are clipped.
pub fn fill_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(img, rect, color);
}

/// Filled circle given by center and radius
pub fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    draw_filled_circle_mut(img, (cx, cy), radius, color);
}

/// Filled circle given by the top-left corner and side of its bounding box
pub fn fill_circle_bbox(img: &mut RgbImage, x: i32, y: i32, size: i32, color: Rgb<u8>) {
    let r = size / 2;
    draw_filled_ellipse_mut(img, (x + r, y + r), r, r, color);
}

/// Filled triangle through three vertices
pub fn fill_triangle(
    img: &mut RgbImage,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    color: Rgb<u8>,
) {
    let points = [
        Point::new(a.0, a.1),
        Point::new(b.0, b.1),
        Point::new(c.0, c.1),
    ];
    draw_polygon_mut(img, &points, color);
}

/// Line segment between two points; the part inside the canvas is drawn
pub fn line(img: &mut RgbImage, start: (f32, f32), end: (f32, f32), color: Rgb<u8>) {
    draw_line_segment_mut(img, start, end, color);
}
