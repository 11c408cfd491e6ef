use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Nearest => ResizeAlg::Nearest,
    }
}

/// Resize an RGBA buffer to `target_cols` x `target_rows`. Alpha is premultiplied
/// during convolution so transparent regions do not bleed colour.
pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

/// Scale `img` to a `size` x `size` square, stretching non-square input.
pub fn resize_to_square(img: &RgbaImage, size: u32, filter: ResampleFilter) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();
    if cols == size && rows == size {
        debug!("Crop already {}x{}; skipping resize", size, size);
        return Ok(img.clone());
    }

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        cols, rows, size, size, filter
    );
    let resized = resize_rgba_image(img.as_raw(), cols, rows, size, size, filter)?;
    RgbaImage::from_raw(size, size, resized)
        .ok_or_else(|| Error::Resize(format!("resized buffer does not match {}x{}", size, size)))
}
