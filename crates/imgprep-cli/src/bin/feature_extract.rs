//! Extracts CNN features for all the image files in a directory and saves
//! them as a JSON file mapping filename stems to feature vectors.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use imgprep_features::{save_features, Device, FeatureExtractor, OnnxEncoder};

#[derive(Parser, Debug)]
#[command(name = "feature-extract")]
#[command(about = "Extract CNN feature vectors for every image in a directory")]
struct Args {
    /// Directory with input images
    #[arg(short, long)]
    indir: PathBuf,

    /// File to write all the features to in JSON
    #[arg(short, long)]
    outputfile: PathBuf,

    /// Path to the ONNX classifier exported with its penultimate layer as output
    #[arg(short, long)]
    model: PathBuf,

    /// Run inference on the GPU
    #[arg(short, long)]
    gpu: bool,
}

fn main() -> anyhow::Result<()> {
    imgprep_cli::init_tracing();
    let args = Args::parse();

    let device = if args.gpu {
        Device::Gpu { device_id: 0 }
    } else {
        Device::Cpu
    };

    let encoder = OnnxEncoder::from_file(&args.model, device)
        .with_context(|| format!("Failed to load model {}", args.model.display()))?;
    let mut extractor = FeatureExtractor::new(encoder);

    let features = extractor
        .extract_dir(&args.indir)
        .with_context(|| format!("Failed to extract features from {}", args.indir.display()))?;
    save_features(&features, &args.outputfile)
        .with_context(|| format!("Failed to write {}", args.outputfile.display()))?;

    println!(
        "Wrote {} feature vectors to {}",
        features.len(),
        args.outputfile.display()
    );
    Ok(())
}
