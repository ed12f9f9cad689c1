//! Image center crop tool for directories. Every file in the input
//! directory is cropped and written as `<stem>.jpg` into the output
//! directory; per-file failures are reported at the end without aborting
//! the batch.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use imgprep_processing::BatchRunner;

#[derive(Parser, Debug)]
#[command(name = "batch-crop")]
#[command(about = "Center-crop every image in a directory to square JPEGs")]
struct Args {
    /// Directory with input images
    #[arg(short, long)]
    indir: PathBuf,

    /// Directory to write images to (must exist)
    #[arg(short, long)]
    outdir: PathBuf,

    /// Size of square image
    #[arg(short, long, default_value_t = 256)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    imgprep_cli::init_tracing();
    let args = Args::parse();

    let runner = BatchRunner::new(&args.outdir, args.size);
    let report = runner
        .run(&args.indir)
        .with_context(|| format!("Failed to process directory {}", args.indir.display()))?;

    // Per-file failures are part of the summary, not the exit code
    println!("{}", report.summary());
    Ok(())
}
