pub mod draw;
pub mod fixtures;

pub use fixtures::{Fixture, FIXTURES, HEIGHT, OUTPUT_DIR, WIDTH};
