//! Shared enums used across favicrop.
//! Includes the resampling `ResampleFilter`, the out-of-bounds `FillPolicy`
//! for crops, and the `PngCompression` level used by the PNG writer.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Resampling filter used when scaling the crop to the output size.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    Bilinear,
    Nearest,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Lanczos3 => "Lanczos3",
            ResampleFilter::CatmullRom => "CatmullRom",
            ResampleFilter::Mitchell => "Mitchell",
            ResampleFilter::Bilinear => "Bilinear",
            ResampleFilter::Nearest => "Nearest",
        };
        write!(f, "{}", s)
    }
}

/// How crop pixels falling outside the source image are produced.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FillPolicy {
    /// Zero pixels (fully transparent black); the crop stays square.
    #[default]
    Transparent,
    /// Intersect with the source bounds; the resize stretches the remainder.
    Clamp,
    /// Fail when the rectangle leaves the source.
    Reject,
}

impl std::fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillPolicy::Transparent => write!(f, "Transparent"),
            FillPolicy::Clamp => write!(f, "Clamp"),
            FillPolicy::Reject => write!(f, "Reject"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PngCompression {
    #[default]
    Best,
    Default,
    Fast,
}

impl std::fmt::Display for PngCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PngCompression::Best => write!(f, "Best"),
            PngCompression::Default => write!(f, "Default"),
            PngCompression::Fast => write!(f, "Fast"),
        }
    }
}
