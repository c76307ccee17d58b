use image::{Rgb, RgbImage};

use super::{HEIGHT, WIDTH};
use crate::draw::{self, WHITE};

const LIGHT_PINK: Rgb<u8> = Rgb([0xFF, 0xB6, 0xC1]);
const PALE_GREEN: Rgb<u8> = Rgb([0x98, 0xFB, 0x98]);
const SKY_BLUE: Rgb<u8> = Rgb([0x87, 0xCE, 0xEB]);
const PLUM: Rgb<u8> = Rgb([0xDD, 0xA0, 0xDD]);
const TOMATO: Rgb<u8> = Rgb([0xFF, 0x63, 0x47]);
const ROYAL_BLUE: Rgb<u8> = Rgb([0x41, 0x69, 0xE1]);
const LIME_GREEN: Rgb<u8> = Rgb([0x32, 0xCD, 0x32]);
const GOLD: Rgb<u8> = Rgb([0xFF, 0xD7, 0x00]);
const ORANGE_RED: Rgb<u8> = Rgb([0xFF, 0x45, 0x00]);

/// Multiple shapes with overlapping regions; later draws occlude earlier ones
pub fn render() -> RgbImage {
    let mut img = draw::canvas(WIDTH, HEIGHT, WHITE);

    // Quadrant backgrounds
    draw::fill_rect(&mut img, 0, 0, 200, 200, LIGHT_PINK);
    draw::fill_rect(&mut img, 200, 0, 400, 200, PALE_GREEN);
    draw::fill_rect(&mut img, 0, 200, 200, 400, SKY_BLUE);
    draw::fill_rect(&mut img, 200, 200, 400, 400, PLUM);

    // Overlapping circles
    draw::fill_circle(&mut img, 150, 150, 50, TOMATO);
    draw::fill_circle(&mut img, 200, 150, 50, ROYAL_BLUE);
    draw::fill_circle(&mut img, 250, 200, 50, LIME_GREEN);

    // Foreground shapes
    draw::fill_rect(&mut img, 50, 250, 150, 350, GOLD);
    draw::fill_triangle(&mut img, (300, 250), (250, 350), (350, 350), ORANGE_RED);

    img
}
