use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{HEIGHT, WIDTH};
use crate::draw::{self, WHITE};

const RAINBOW: [Rgb<u8>; 7] = [
    Rgb([0xFF, 0x00, 0x00]),
    Rgb([0xFF, 0x7F, 0x00]),
    Rgb([0xFF, 0xFF, 0x00]),
    Rgb([0x00, 0xFF, 0x00]),
    Rgb([0x00, 0x00, 0xFF]),
    Rgb([0x4B, 0x00, 0x82]),
    Rgb([0x94, 0x00, 0xD3]),
];

const STRIPE_LIGHT: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const STRIPE_DARK: Rgb<u8> = Rgb([0xE0, 0xE0, 0xE0]);

/// Seed for the random scatter. Output is identical run to run; pixel-exact
/// values are tied to this crate's rand version, not portable across RNGs.
const SCATTER_SEED: u64 = 42;

/// High-detail stress image: bullseye rings, corner grids, stripe texture
/// and a seeded random scatter
pub fn render() -> RgbImage {
    let mut img = draw::canvas(WIDTH, HEIGHT, WHITE);

    let (center_x, center_y) = (WIDTH as i32 / 2, HEIGHT as i32 / 2);

    // Concentric rings, largest first so smaller rings land on top
    for i in (1..=20i32).rev() {
        let radius = i * 10;
        let color = RAINBOW[i as usize % RAINBOW.len()];
        draw::fill_circle(&mut img, center_x, center_y, radius, color);
    }

    // 8x8 mini pattern in each corner
    let corners = [
        (0, 0),
        (WIDTH as i32 - 80, 0),
        (0, HEIGHT as i32 - 80),
        (WIDTH as i32 - 80, HEIGHT as i32 - 80),
    ];
    for (idx, &(x, y)) in corners.iter().enumerate() {
        let idx = idx as i32;
        for i in 0..8i32 {
            for j in 0..8i32 {
                let color = Rgb([
                    ((i * 30 + idx * 60) % 255) as u8,
                    ((j * 30 + idx * 40) % 255) as u8,
                    ((i + j + idx) * 20 % 255) as u8,
                ]);
                let (cx, cy) = (x + i * 10, y + j * 10);
                draw::fill_rect(&mut img, cx, cy, cx + 8, cy + 8, color);
            }
        }
    }

    // Alternating near-white stripes simulating a transparency texture
    for y in (0..HEIGHT as i32).step_by(4) {
        let color = if (y / 4) % 2 == 0 { STRIPE_LIGHT } else { STRIPE_DARK };
        draw::fill_rect(&mut img, 0, y, WIDTH as i32, y + 2, color);
    }

    // Scattered small shapes
    let mut rng = StdRng::seed_from_u64(SCATTER_SEED);
    for _ in 0..100 {
        let x = rng.gen_range(0..=WIDTH as i32 - 10);
        let y = rng.gen_range(0..=HEIGHT as i32 - 10);
        let size = rng.gen_range(3..=12);
        let color = Rgb([
            rng.gen_range(0..=255u8),
            rng.gen_range(0..=255u8),
            rng.gen_range(0..=255u8),
        ]);
        if rng.gen_bool(0.5) {
            draw::fill_circle_bbox(&mut img, x, y, size, color);
        } else {
            draw::fill_rect(&mut img, x, y, x + size, y + size, color);
        }
    }

    img
}
