use image::RgbaImage;
use tracing::info;

use crate::core::params::IconParams;
use crate::core::processing::crop::{crop_with_fill, effective_bounds};
use crate::core::processing::geometry::{CropRect, PixelBounds, compute_crop_rect};
use crate::core::processing::resize::resize_to_square;
use crate::error::Result;

/// Everything produced by the crop/resize pipeline for one source raster.
#[derive(Debug, Clone)]
pub struct ProcessedIcon {
    pub image: RgbaImage,
    pub source_width: u32,
    pub source_height: u32,
    pub crop_rect: CropRect,
    pub crop_bounds: PixelBounds,
    /// Dimensions of the crop before resizing
    pub cropped_width: u32,
    pub cropped_height: u32,
}

/// Crop and resize `src`. `params` must already have passed `IconParams::validate`;
/// the `api` entry points check them before any I/O.
pub fn process_rgba_pipeline(src: &RgbaImage, params: &IconParams) -> Result<ProcessedIcon> {
    let (width, height) = src.dimensions();

    let crop_rect = compute_crop_rect(width, height, params.crop_ratio, params.vertical_shift);
    let crop_bounds = effective_bounds(crop_rect.to_pixel_bounds(), params.fill);
    let cropped = crop_with_fill(src, crop_bounds, params.fill)?;
    let (cropped_width, cropped_height) = cropped.dimensions();
    info!(
        "Cropped to {}x{} ({:.0}% of short side, fill={})",
        cropped_width,
        cropped_height,
        params.crop_ratio * 100.0,
        params.fill
    );

    let image = resize_to_square(&cropped, params.size, params.filter)?;

    Ok(ProcessedIcon {
        image,
        source_width: width,
        source_height: height,
        crop_rect,
        crop_bounds,
        cropped_width,
        cropped_height,
    })
}
