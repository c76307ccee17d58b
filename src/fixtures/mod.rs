//! The fixture set: five self-contained image procedures of increasing
//! complexity, plus the shared persistence and output-directory plumbing.
//! Each procedure renders a fresh 400x400 canvas and is deterministic run
//! to run (the scatter step in `very_complex` uses a fixed seed).

pub mod complex;
pub mod gradient;
pub mod medium;
pub mod simple;
pub mod very_complex;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbImage;

/// Canvas width shared by every fixture
pub const WIDTH: u32 = 400;

/// Canvas height shared by every fixture
pub const HEIGHT: u32 = 400;

/// Fixed output directory, relative to the working directory
pub const OUTPUT_DIR: &str = "fixtures/input";

/// One entry per output image
pub struct Fixture {
    /// File name under the output directory
    pub file_name: &'static str,
    /// Short caption printed after a successful write
    pub caption: &'static str,
    /// Description used in the final summary listing
    pub summary: &'static str,
    /// Required fixtures abort the run on failure; the rest are best-effort
    pub required: bool,
    /// Renders the canvas for this fixture
    pub render: fn() -> RgbImage,
}

/// The full fixture set, in generation order
pub const FIXTURES: [Fixture; 5] = [
    Fixture {
        file_name: "simple.png",
        caption: "Basic shapes with solid colors",
        summary: "Basic geometric shapes (good for basic conversion)",
        required: true,
        render: simple::render,
    },
    Fixture {
        file_name: "medium.png",
        caption: "Multiple shapes with overlapping",
        summary: "Multiple overlapping shapes (tests edge handling)",
        required: true,
        render: medium::render,
    },
    Fixture {
        file_name: "complex.png",
        caption: "Many shapes with patterns",
        summary: "Many shapes and patterns (tests performance)",
        required: true,
        render: complex::render,
    },
    Fixture {
        file_name: "very_complex.png",
        caption: "High detail with many elements",
        summary: "High detail (stress test)",
        required: true,
        render: very_complex::render,
    },
    Fixture {
        file_name: "gradient.png",
        caption: "Color gradient transitions",
        summary: "Color gradients (tests color accuracy)",
        required: false,
        render: gradient::render,
    },
];

impl Fixture {
    /// Render this fixture and encode it as a PNG under `dir`.
    /// Overwrites any file already at that path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        let img = (self.render)();
        img.save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
        Ok(path)
    }
}

/// Ensure the output directory exists, creating parents as needed.
/// Succeeds silently if it is already there.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("Failed to create output directory {}: {}", dir.display(), e))
}
