//! I/O layer: decoding source rasters (`reader`), deriving the secondary icon
//! path (`paths`), and `writers` for optimized PNG output.
pub mod paths;
pub use paths::{apple_icon_path, derive_secondary_path};

pub mod reader;
pub use reader::{SourceImage, load_rgba};

pub mod writers;
