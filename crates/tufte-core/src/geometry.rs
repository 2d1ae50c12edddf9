// File: crates/tufte-core/src/geometry.rs
// Summary: Lightweight geometry helpers for figure-fraction and pixel rectangles.

/// Rectangle in figure fractions, origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const UNIT: RectF = RectF { left: 0.0, bottom: 0.0, width: 1.0, height: 1.0 };

    pub const fn from_lbwh(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self { left, bottom, width, height }
    }

    pub fn from_extents(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self { left, bottom, width: right - left, height: top - bottom }
    }

    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn top(&self) -> f64 { self.bottom + self.height }

    /// Pixel rectangle (y down) for a canvas of `width` x `height` pixels.
    pub fn to_pixels(&self, width: f32, height: f32) -> PixelRect {
        PixelRect {
            left: self.left as f32 * width,
            right: self.right() as f32 * width,
            top: (1.0 - self.top()) as f32 * height,
            bottom: (1.0 - self.bottom) as f32 * height,
        }
    }
}

/// Rectangle in device pixels, y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}

/// Points (1/72 inch) to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}
