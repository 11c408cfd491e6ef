use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FillPolicy, PngCompression, ResampleFilter};

pub const DEFAULT_ICON_SIZE: u32 = 512;
pub const DEFAULT_CROP_RATIO: f64 = 0.85;
pub const DEFAULT_VERTICAL_SHIFT: f64 = 0.03;
pub const PRIMARY_ICON_MARKER: &str = "icon.png";
pub const APPLE_ICON_MARKER: &str = "apple-icon.png";

/// Icon processing parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconParams {
    /// Side length of the square output in pixels
    pub size: u32,
    /// Fraction of the short side kept by the crop
    pub crop_ratio: f64,
    /// Upward shift of the crop centre, as a fraction of the source height
    pub vertical_shift: f64,
    pub filter: ResampleFilter,
    pub fill: FillPolicy,
    pub compression: PngCompression,
    /// File-name substring of the primary output replaced to derive the secondary one
    pub primary_marker: String,
    pub secondary_marker: String,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            crop_ratio: DEFAULT_CROP_RATIO,
            vertical_shift: DEFAULT_VERTICAL_SHIFT,
            filter: ResampleFilter::Lanczos3,
            fill: FillPolicy::Transparent,
            compression: PngCompression::Best,
            primary_marker: PRIMARY_ICON_MARKER.to_string(),
            secondary_marker: APPLE_ICON_MARKER.to_string(),
        }
    }
}

impl IconParams {
    /// Load parameters from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: IconParams = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: self.size.to_string(),
            });
        }
        if !(self.crop_ratio > 0.0 && self.crop_ratio <= 1.0) {
            return Err(Error::InvalidArgument {
                arg: "crop_ratio",
                value: self.crop_ratio.to_string(),
            });
        }
        if !self.vertical_shift.is_finite() {
            return Err(Error::InvalidArgument {
                arg: "vertical_shift",
                value: self.vertical_shift.to_string(),
            });
        }
        if self.primary_marker.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "primary_marker",
                value: self.primary_marker.clone(),
            });
        }
        if self.secondary_marker.is_empty() || self.secondary_marker == self.primary_marker {
            return Err(Error::InvalidArgument {
                arg: "secondary_marker",
                value: self.secondary_marker.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_icon_constants() {
        let p = IconParams::default();
        assert_eq!(p.size, 512);
        assert_eq!(p.crop_ratio, 0.85);
        assert_eq!(p.vertical_shift, 0.03);
        assert_eq!(p.filter, ResampleFilter::Lanczos3);
        assert_eq!(p.fill, FillPolicy::Transparent);
        assert_eq!(p.primary_marker, "icon.png");
        assert_eq!(p.secondary_marker, "apple-icon.png");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: IconParams =
            serde_json::from_str(r#"{ "size": 180, "fill": "clamp", "filter": "catmull-rom" }"#)
                .unwrap();
        assert_eq!(p.size, 180);
        assert_eq!(p.fill, FillPolicy::Clamp);
        assert_eq!(p.filter, ResampleFilter::CatmullRom);
        assert_eq!(p.crop_ratio, DEFAULT_CROP_RATIO);
        assert_eq!(p.compression, PngCompression::Best);
    }

    #[test]
    fn rejects_bad_values() {
        let zero = IconParams { size: 0, ..Default::default() };
        assert!(matches!(zero.validate(), Err(Error::InvalidArgument { arg: "size", .. })));

        let ratio = IconParams { crop_ratio: 1.5, ..Default::default() };
        assert!(matches!(ratio.validate(), Err(Error::InvalidArgument { arg: "crop_ratio", .. })));

        let nan = IconParams { crop_ratio: f64::NAN, ..Default::default() };
        assert!(nan.validate().is_err());

        let same = IconParams {
            secondary_marker: "icon.png".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            same.validate(),
            Err(Error::InvalidArgument { arg: "secondary_marker", .. })
        ));
    }

    #[test]
    fn unknown_fill_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "fill": "mirror" }"#).unwrap();
        assert!(matches!(IconParams::from_json_file(&path), Err(Error::Config(_))));
    }
}
