use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::params::IconParams;
use crate::error::{Error, Result};
use crate::io::paths::derive_secondary_path;
use crate::io::writers::png::write_icon_png;

/// Secondary output path for `output`. Fails with `NoSecondaryPath` when the file name lacks
/// the marker, or `NonUtf8FileName` when it cannot be searched for it.
pub fn secondary_output_path(output: &Path, params: &IconParams) -> Result<PathBuf> {
    if output.file_name().is_some_and(|name| name.to_str().is_none()) {
        return Err(Error::NonUtf8FileName {
            path: output.to_path_buf(),
        });
    }
    derive_secondary_path(output, &params.primary_marker, &params.secondary_marker).ok_or_else(
        || Error::NoSecondaryPath {
            path: output.to_path_buf(),
            marker: params.primary_marker.clone(),
        },
    )
}

/// Write the primary icon to `output` and the same pixels to `secondary`.
/// A failing secondary write leaves the primary file in place.
pub fn save_icon_pair(
    icon: &RgbaImage,
    output: &Path,
    secondary: &Path,
    params: &IconParams,
) -> Result<()> {
    write_icon_png(icon, output, params.compression)?;
    info!("Saved icon: {}", output.display());

    write_icon_png(icon, secondary, params.compression)?;
    info!("Saved Apple icon: {}", secondary.display());
    Ok(())
}
