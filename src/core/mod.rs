//! Core processing building blocks: crop geometry, fill-aware cropping,
//! Lanczos resizing, the render pipeline, and save helpers. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
