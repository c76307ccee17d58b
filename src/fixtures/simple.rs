use image::RgbImage;

use super::{HEIGHT, WIDTH};
use crate::draw::{self, BLUE, GREEN, RED, WHITE, YELLOW};

/// Basic geometric shapes with solid colors
pub fn render() -> RgbImage {
    let mut img = draw::canvas(WIDTH, HEIGHT, WHITE);

    draw::fill_circle(&mut img, 100, 100, 50, RED);
    draw::fill_rect(&mut img, 200, 50, 350, 150, BLUE);
    draw::fill_triangle(&mut img, (125, 200), (50, 350), (200, 350), GREEN);
    draw::fill_rect(&mut img, 250, 200, 350, 350, YELLOW);

    img
}
