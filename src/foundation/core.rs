pub use kurbo::{Affine, Point, Rect, Vec2};

/// Host viewport in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Create a viewport. Invalid pixel ratios (non-finite or `<= 0`) fall back to `1.0`.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Viewport with a pixel ratio of `1.0`.
    pub fn css(width: f64, height: f64) -> Self {
        Self::new(width, height, 1.0)
    }

    /// Same CSS size, ratio forced to `1.0`.
    pub fn without_pixel_ratio(self) -> Self {
        Self::css(self.width, self.height)
    }

    /// Width clamped to `>= 0` (NaN becomes `0`).
    pub fn clamped_width(self) -> f64 {
        clamp_dim(self.width)
    }

    /// Height clamped to `>= 0` (NaN becomes `0`).
    pub fn clamped_height(self) -> f64 {
        clamp_dim(self.height)
    }

    /// CSS-pixel area; `0` for degenerate viewports.
    pub fn area(self) -> f64 {
        self.clamped_width() * self.clamped_height()
    }

    /// Return `true` when either dimension is zero, negative or not a number.
    pub fn is_degenerate(self) -> bool {
        self.area() <= 0.0
    }

    /// Backing-store size in device pixels: `floor(css * ratio)` per axis.
    pub fn backing_size(self) -> (u32, u32) {
        fn px(v: f64) -> u32 {
            let v = v.floor();
            if v >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                v.max(0.0) as u32
            }
        }
        (
            px(self.clamped_width() * self.pixel_ratio),
            px(self.clamped_height() * self.pixel_ratio),
        )
    }

    /// The full surface in CSS pixels, anchored at the origin.
    pub fn css_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.clamped_width(), self.clamped_height())
    }

    /// Transform mapping CSS-pixel drawing coordinates onto the backing store.
    pub fn device_transform(self) -> Affine {
        Affine::scale(self.pixel_ratio)
    }
}

fn clamp_dim(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
