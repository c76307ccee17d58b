use image::{Rgb, RgbImage};

use super::{HEIGHT, WIDTH};
use crate::draw::{self, WHITE};

/// Two stacked gradients, sampled once per column / row.
/// Top half: red falls and green rises left to right, blue held at 0x80.
/// Bottom half: blue rises top to bottom, green is its complement, red 0x80.
pub fn render() -> RgbImage {
    let mut img = draw::canvas(WIDTH, HEIGHT, WHITE);

    let half = HEIGHT as i32 / 2;

    for x in 0..WIDTH as i32 {
        let r = (255.0 * (1.0 - x as f32 / WIDTH as f32)) as u8;
        let g = (255.0 * x as f32 / WIDTH as f32) as u8;
        let color = Rgb([r, g, 0x80]);
        draw::line(&mut img, (x as f32, 0.0), (x as f32, half as f32), color);
    }

    for y in half..HEIGHT as i32 {
        let b = (255.0 * (y - half) as f32 / half as f32) as u8;
        let color = Rgb([0x80, 255 - b, b]);
        draw::line(&mut img, (0.0, y as f32), (WIDTH as f32, y as f32), color);
    }

    img
}
