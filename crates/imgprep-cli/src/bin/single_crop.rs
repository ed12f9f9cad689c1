//! Image center crop tool. Loads an image file, takes a square crop from
//! the center, and outputs a JPEG file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use imgprep_processing::ImagePreparer;

#[derive(Parser, Debug)]
#[command(name = "single-crop")]
#[command(about = "Load an image, take a square crop from the center, write a JPEG")]
struct Args {
    /// Name of source image
    #[arg(short, long)]
    infile: PathBuf,

    /// Where to write the JPEG
    #[arg(short, long)]
    outfile: PathBuf,

    /// Size of square image
    #[arg(short, long, default_value_t = 256)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    imgprep_cli::init_tracing();
    let args = Args::parse();

    ImagePreparer::prepare_and_save(&args.infile, &args.outfile, args.size)
        .with_context(|| format!("Failed to process {}", args.infile.display()))?;
    Ok(())
}
