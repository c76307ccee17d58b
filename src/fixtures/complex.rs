use image::{Rgb, RgbImage};

use super::{HEIGHT, WIDTH};
use crate::draw;

const BEIGE: Rgb<u8> = Rgb([0xF5, 0xF5, 0xDC]);

/// Overlay palette, cycled by loop index
const PALETTE: [Rgb<u8>; 10] = [
    Rgb([0xFF, 0x6B, 0x6B]),
    Rgb([0x4E, 0xCD, 0xC4]),
    Rgb([0x45, 0xB7, 0xD1]),
    Rgb([0xFF, 0xA0, 0x7A]),
    Rgb([0x98, 0xD8, 0xC8]),
    Rgb([0xF7, 0xDC, 0x6F]),
    Rgb([0xBB, 0x8F, 0xCE]),
    Rgb([0x85, 0xC1, 0xE2]),
    Rgb([0xF8, 0xB5, 0x00]),
    Rgb([0x00, 0xCE, 0xD1]),
];

/// Color of the grid cell whose top-left corner is (x, y)
fn grid_color(x: i32, y: i32) -> Rgb<u8> {
    Rgb([
        (x * 3 % 255) as u8,
        (y * 2 % 255) as u8,
        ((x + y) * 2 % 255) as u8,
    ])
}

/// Many shapes and patterns over a sparse procedural grid
pub fn render() -> RgbImage {
    let mut img = draw::canvas(WIDTH, HEIGHT, BEIGE);

    // Sparse grid: only cells on the (x + y) % 100 == 0 diagonals are filled
    for x in (0..WIDTH as i32).step_by(50) {
        for y in (0..HEIGHT as i32).step_by(50) {
            if (x + y) % 100 == 0 {
                draw::fill_rect(&mut img, x, y, x + 48, y + 48, grid_color(x, y));
            }
        }
    }

    // Circles
    for i in 0..10i32 {
        let x = 30 + i * 35;
        let y = 30 + (i % 3) * 100;
        let size = 25 + i * 3;
        draw::fill_circle_bbox(&mut img, x, y, size, PALETTE[i as usize % PALETTE.len()]);
    }

    // Rectangles
    for i in 0..8i32 {
        let x = 20 + i * 45;
        let y = 150 + (i % 2) * 80;
        draw::fill_rect(&mut img, x, y, x + 35, y + 60, PALETTE[(i as usize + 3) % PALETTE.len()]);
    }

    // Triangles
    for i in 0..6i32 {
        let x = 50 + i * 60;
        let color = PALETTE[(i as usize + 6) % PALETTE.len()];
        draw::fill_triangle(&mut img, (x, 300), (x - 25, 370), (x + 25, 370), color);
    }

    // Small detail circles
    for i in 0..20i32 {
        let x = 10 + (i % 10) * 40;
        let y = 350 + (i / 10) * 25;
        draw::fill_circle_bbox(&mut img, x, y, 8, PALETTE[i as usize % PALETTE.len()]);
    }

    img
}
