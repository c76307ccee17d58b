use clap::Parser;
use std::path::Path;

use img2svg_fixtures::fixtures::{self, FIXTURES, HEIGHT, OUTPUT_DIR, WIDTH};

#[derive(Parser)]
#[command(name = "img2svg-fixtures")]
#[command(about = "Generate raster test images for img2svg conversion testing")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let out_dir = Path::new(OUTPUT_DIR);
    fixtures::prepare_output_dir(out_dir)?;

    if args.verbose {
        println!("Output directory: {}", out_dir.display());
        println!("Canvas size: {}x{}\n", WIDTH, HEIGHT);
    }

    println!("Generating test images for img2svg conversion testing...\n");

    for fixture in &FIXTURES {
        match fixture.write_to(out_dir) {
            Ok(path) => {
                println!("Created {} - {}", fixture.file_name, fixture.caption);
                if args.verbose {
                    println!("  -> {}", path.display());
                }
            }
            Err(err) if !fixture.required => {
                println!("Skipped {} due to: {}", fixture.file_name, err);
            }
            Err(err) => return Err(err),
        }
    }

    println!("\nAll test images saved to {}/", out_dir.display());

    println!("\nComplexity levels:");
    for (i, fixture) in FIXTURES.iter().enumerate() {
        // Best-effort fixtures are listed only if their file actually landed
        if fixture.required || out_dir.join(fixture.file_name).exists() {
            println!("  {}. {} - {}", i + 1, fixture.file_name, fixture.summary);
        }
    }

    Ok(())
}
