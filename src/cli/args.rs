use clap::Parser;
use std::path::PathBuf;

use favicrop::{FillPolicy, PngCompression, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "favicrop",
    version,
    about = "Crop an image to a centered square and write 512x512 icon.png / apple-icon.png"
)]
pub struct CliArgs {
    /// Source image (any format the decoder understands)
    pub input: PathBuf,

    /// Primary output PNG; its file name must contain the primary marker (default "icon.png")
    pub output: PathBuf,

    /// JSON file with processing parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output side length in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Fraction of the short side kept by the crop (0, 1]
    #[arg(long)]
    pub crop_ratio: Option<f64>,

    /// Upward shift of the crop centre as a fraction of the height
    #[arg(long, allow_negative_numbers = true)]
    pub vertical_shift: Option<f64>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Fill policy for crop pixels outside the source
    #[arg(long, value_enum)]
    pub fill: Option<FillPolicy>,

    /// PNG compression level
    #[arg(long, value_enum)]
    pub compression: Option<PngCompression>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
