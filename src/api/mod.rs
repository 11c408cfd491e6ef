//! High-level, ergonomic library API: turn a source image into a primary and an
//! Apple-variant icon on disk, or render the icon in memory. Prefer these entry
//! points over the low-level processing modules when integrating favicrop.
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::info;

use crate::core::params::IconParams;
use crate::core::processing::geometry::PixelBounds;
use crate::core::processing::pipeline::{ProcessedIcon, process_rgba_pipeline};
use crate::core::processing::save::{save_icon_pair, secondary_output_path};
use crate::error::Result;
use crate::io::reader::load_rgba;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct IconOutputs {
    pub primary: PathBuf,
    pub secondary: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub crop_bounds: PixelBounds,
    pub size: u32,
}

/// Crop and resize `input` with default parameters, writing `output` and its
/// `apple-icon.png` sibling.
pub fn process(input: &Path, output: &Path) -> Result<IconOutputs> {
    process_with_params(input, output, &IconParams::default())
}

pub fn process_with_params(input: &Path, output: &Path, params: &IconParams) -> Result<IconOutputs> {
    params.validate()?;
    // Resolve the secondary path before decoding so a bad output name writes nothing
    let secondary = secondary_output_path(output, params)?;

    let icon = render_from_path(input, params)?;
    save_icon_pair(&icon.image, output, &secondary, params)?;

    info!(
        "Successfully processed: {:?} -> {:?}, {:?}",
        input, output, secondary
    );
    Ok(IconOutputs {
        primary: output.to_path_buf(),
        secondary,
        source_width: icon.source_width,
        source_height: icon.source_height,
        crop_bounds: icon.crop_bounds,
        size: params.size,
    })
}

/// Decode `input` and render the icon in memory (no disk writes)
pub fn process_to_buffer(input: &Path, params: &IconParams) -> Result<ProcessedIcon> {
    params.validate()?;
    render_from_path(input, params)
}

/// Render an already-decoded image; any colour type is normalized to RGBA8 first.
pub fn render_icon(img: &DynamicImage, params: &IconParams) -> Result<ProcessedIcon> {
    params.validate()?;
    match img.as_rgba8() {
        Some(rgba) => process_rgba_pipeline(rgba, params),
        None => process_rgba_pipeline(&img.to_rgba8(), params),
    }
}

fn render_from_path(input: &Path, params: &IconParams) -> Result<ProcessedIcon> {
    let source = load_rgba(input)?;
    process_rgba_pipeline(&source.rgba, params)
}
