//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Decode and write failures carry the offending path and the underlying image
//! error; the remaining variants cover parameter validation and crop geometry.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Output file name {path} does not contain '{marker}'; cannot derive the secondary icon path")]
    NoSecondaryPath { path: PathBuf, marker: String },

    #[error("Output file name {path:?} is not valid UTF-8; cannot derive the secondary icon path")]
    NonUtf8FileName { path: PathBuf },

    #[error(
        "Crop rectangle ({left}, {top})-({right}, {bottom}) exceeds source bounds {width}x{height}"
    )]
    CropOutOfBounds {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        width: u32,
        height: u32,
    },

    #[error("Crop region is empty for source {width}x{height}")]
    EmptyCrop { width: u32, height: u32 },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
