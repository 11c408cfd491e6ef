use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

use crate::error::{Error, Result};
use crate::types::PngCompression;

fn encoder_settings(compression: PngCompression) -> (CompressionType, FilterType) {
    match compression {
        PngCompression::Best => (CompressionType::Best, FilterType::Adaptive),
        PngCompression::Default => (CompressionType::Default, FilterType::Adaptive),
        PngCompression::Fast => (CompressionType::Fast, FilterType::NoFilter),
    }
}

/// Encode `img` as RGBA8 PNG into `writer`. Output is deterministic for a given image and level.
pub fn encode_png<W: Write>(
    img: &RgbaImage,
    writer: W,
    compression: PngCompression,
) -> std::result::Result<(), ImageError> {
    let (compression_type, filter) = encoder_settings(compression);
    let encoder = PngEncoder::new_with_quality(writer, compression_type, filter);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )
}

pub fn write_icon_png(img: &RgbaImage, output: &Path, compression: PngCompression) -> Result<()> {
    let write_err = |source: ImageError| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(|e| write_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    encode_png(img, &mut writer, compression).map_err(write_err)?;
    writer
        .flush()
        .map_err(|e| write_err(ImageError::IoError(e)))?;
    Ok(())
}
