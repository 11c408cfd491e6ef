use tracing::debug;

/// Crop rectangle in source pixel space, unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Integer pixel bounds actually sampled by the crop. `right`/`bottom` are exclusive
/// and may lie outside the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropRect {
    pub fn side(&self) -> f64 {
        self.right - self.left
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Round each bound half-to-even, the way fractional crop boxes are snapped to pixels.
    pub fn to_pixel_bounds(&self) -> PixelBounds {
        PixelBounds {
            left: self.left.round_ties_even() as i64,
            top: self.top.round_ties_even() as i64,
            right: self.right.round_ties_even() as i64,
            bottom: self.bottom.round_ties_even() as i64,
        }
    }
}

impl PixelBounds {
    pub fn width(&self) -> i64 {
        (self.right - self.left).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.bottom - self.top).max(0)
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= width as i64
            && self.bottom <= height as i64
    }

    /// Grow a collapsed axis to one pixel starting at its rounded bound. Sources only
    /// a pixel or two thick can snap both edges of an axis to the same coordinate.
    pub fn at_least_one_pixel(&self) -> PixelBounds {
        PixelBounds {
            left: self.left,
            top: self.top,
            right: self.right.max(self.left + 1),
            bottom: self.bottom.max(self.top + 1),
        }
    }

    /// Intersection with `[0, width] x [0, height]`.
    pub fn clamp_to(&self, width: u32, height: u32) -> PixelBounds {
        let (w, h) = (width as i64, height as i64);
        let left = self.left.clamp(0, w);
        let top = self.top.clamp(0, h);
        PixelBounds {
            left,
            top,
            right: self.right.clamp(left, w),
            bottom: self.bottom.clamp(top, h),
        }
    }
}

/// Square crop of `min(width, height) * crop_ratio`, centred horizontally and
/// `height * vertical_shift` above the vertical midpoint.
pub fn compute_crop_rect(width: u32, height: u32, crop_ratio: f64, vertical_shift: f64) -> CropRect {
    let (w, h) = (width as f64, height as f64);
    let crop_size = w.min(h) * crop_ratio;
    let center_x = w / 2.0;
    let center_y = h / 2.0 - h * vertical_shift;
    let half = crop_size / 2.0;

    let rect = CropRect {
        left: center_x - half,
        top: center_y - half,
        right: center_x + half,
        bottom: center_y + half,
    };
    debug!(
        "Crop rect for {}x{}: size={:.2}, center=({:.2}, {:.2}), bounds=({:.2}, {:.2}, {:.2}, {:.2})",
        width, height, crop_size, center_x, center_y, rect.left, rect.top, rect.right, rect.bottom
    );
    rect
}
