use std::path::{Path, PathBuf};

use crate::core::params::{APPLE_ICON_MARKER, PRIMARY_ICON_MARKER};

/// Replace `primary_marker` with `secondary_marker` in the file name of `output`,
/// keeping the directory. Returns `None` when the file name has no marker or is not
/// valid UTF-8.
pub fn derive_secondary_path(
    output: &Path,
    primary_marker: &str,
    secondary_marker: &str,
) -> Option<PathBuf> {
    let file_name = output.file_name()?.to_str()?;
    if !file_name.contains(primary_marker) {
        return None;
    }
    let renamed = file_name.replace(primary_marker, secondary_marker);
    Some(output.with_file_name(renamed))
}

/// `.../icon.png` -> `.../apple-icon.png`
pub fn apple_icon_path(output: &Path) -> Option<PathBuf> {
    derive_secondary_path(output, PRIMARY_ICON_MARKER, APPLE_ICON_MARKER)
}
