use image::RgbaImage;
use image::imageops;
use tracing::{info, warn};

use crate::core::processing::geometry::PixelBounds;
use crate::error::{Error, Result};
use crate::types::FillPolicy;

/// Bounds actually cropped under `fill`. Transparent and clamp crops never collapse
/// to zero pixels on an axis; reject crops are taken as computed.
pub fn effective_bounds(bounds: PixelBounds, fill: FillPolicy) -> PixelBounds {
    match fill {
        FillPolicy::Transparent | FillPolicy::Clamp => bounds.at_least_one_pixel(),
        FillPolicy::Reject => bounds,
    }
}

/// Extract `bounds` from `src`, producing pixels outside the source according to `fill`.
pub fn crop_with_fill(src: &RgbaImage, bounds: PixelBounds, fill: FillPolicy) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    let bounds = effective_bounds(bounds, fill);

    if !bounds.is_within(width, height) {
        match fill {
            FillPolicy::Reject => {
                return Err(Error::CropOutOfBounds {
                    left: bounds.left,
                    top: bounds.top,
                    right: bounds.right,
                    bottom: bounds.bottom,
                    width,
                    height,
                });
            }
            FillPolicy::Clamp => {
                let clamped = bounds.clamp_to(width, height);
                warn!(
                    "Crop bounds {:?} exceed source {}x{}; clamping to {:?}",
                    bounds, width, height, clamped
                );
                return crop_inside(src, clamped);
            }
            FillPolicy::Transparent => {
                info!(
                    "Crop bounds {:?} exceed source {}x{}; filling outside pixels with transparency",
                    bounds, width, height
                );
            }
        }
    }

    if bounds.width() == 0 || bounds.height() == 0 {
        return Err(Error::EmptyCrop { width, height });
    }

    // Zeroed canvas is fully transparent; paste the source offset so the crop origin lands at (0, 0)
    let mut canvas = RgbaImage::new(bounds.width() as u32, bounds.height() as u32);
    imageops::replace(&mut canvas, src, -bounds.left, -bounds.top);
    Ok(canvas)
}

fn crop_inside(src: &RgbaImage, bounds: PixelBounds) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    if bounds.width() == 0 || bounds.height() == 0 {
        return Err(Error::EmptyCrop { width, height });
    }
    Ok(imageops::crop_imm(
        src,
        bounds.left as u32,
        bounds.top as u32,
        bounds.width() as u32,
        bounds.height() as u32,
    )
    .to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn inside_bounds_copies_exact_region() {
        let src = gradient(10, 10);
        let b = PixelBounds { left: 2, top: 3, right: 6, bottom: 7 };
        let out = crop_with_fill(&src, b, FillPolicy::Reject).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(*out.get_pixel(0, 0), Rgba([2, 3, 7, 255]));
        assert_eq!(*out.get_pixel(3, 3), Rgba([5, 6, 7, 255]));
    }

    #[test]
    fn transparent_fill_zeroes_outside_pixels() {
        let src = gradient(10, 10);
        let b = PixelBounds { left: 0, top: -2, right: 10, bottom: 8 };
        let out = crop_with_fill(&src, b, FillPolicy::Transparent).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
        assert_eq!(*out.get_pixel(4, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(4, 1), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(4, 2), Rgba([4, 0, 7, 255]));
        assert_eq!(*out.get_pixel(9, 9), Rgba([9, 7, 7, 255]));
    }

    #[test]
    fn clamp_fill_intersects_with_source() {
        let src = gradient(10, 10);
        let b = PixelBounds { left: -1, top: -2, right: 10, bottom: 8 };
        let out = crop_with_fill(&src, b, FillPolicy::Clamp).unwrap();
        assert_eq!(out.dimensions(), (10, 8));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 7, 255]));
    }

    #[test]
    fn reject_fill_errors_when_outside() {
        let src = gradient(10, 10);
        let b = PixelBounds { left: 0, top: -1, right: 10, bottom: 9 };
        let err = crop_with_fill(&src, b, FillPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::CropOutOfBounds { top: -1, width: 10, height: 10, .. }));
    }

    #[test]
    fn collapsed_bounds_grow_to_one_pixel() {
        let src = gradient(4, 4);
        let b = PixelBounds { left: 2, top: 2, right: 2, bottom: 3 };

        let out = crop_with_fill(&src, b, FillPolicy::Transparent).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(*out.get_pixel(0, 0), Rgba([2, 2, 7, 255]));

        let out = crop_with_fill(&src, b, FillPolicy::Clamp).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
    }

    #[test]
    fn single_row_source_keeps_a_pixel() {
        let src = gradient(1024, 1);
        let b = PixelBounds { left: 512, top: 0, right: 512, bottom: 1 };
        let out = crop_with_fill(&src, b, FillPolicy::Transparent).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn empty_bounds_are_rejected() {
        let src = gradient(4, 4);
        let b = PixelBounds { left: 2, top: 2, right: 2, bottom: 3 };
        assert!(matches!(
            crop_with_fill(&src, b, FillPolicy::Reject),
            Err(Error::EmptyCrop { .. })
        ));

        let far = PixelBounds { left: 20, top: 20, right: 30, bottom: 30 };
        assert!(matches!(
            crop_with_fill(&src, far, FillPolicy::Clamp),
            Err(Error::EmptyCrop { .. })
        ));
    }
}
