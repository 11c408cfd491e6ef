use std::path::Path;

use image::{ColorType, DynamicImage, ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Decoded source raster normalized to RGBA8, with the colour type it was stored in.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub rgba: RgbaImage,
    pub original_color: ColorType,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}

pub fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    debug!("Detected format for {:?}: {:?}", path, reader.format());

    reader.decode().map_err(decode_err)
}

/// Convert to RGBA8, synthesizing an opaque alpha channel when the source has none.
pub fn to_rgba(img: DynamicImage) -> SourceImage {
    let original_color = img.color();
    let rgba = match img {
        DynamicImage::ImageRgba8(buf) => buf,
        other => {
            debug!("Converting {:?} to Rgba8", original_color);
            other.into_rgba8()
        }
    };
    SourceImage {
        rgba,
        original_color,
    }
}

pub fn load_rgba(path: &Path) -> Result<SourceImage> {
    let source = to_rgba(decode(path)?);
    info!(
        "Original image size: {}x{} ({:?})",
        source.width(),
        source.height(),
        source.original_color
    );
    Ok(source)
}
