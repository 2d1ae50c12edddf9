// File: crates/tufte-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the horizontal and vertical axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// reversed (vertical axes grow upwards in data but downwards on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), pixels: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, p0: pixels.0, p1: pixels.1 }
    }

    /// Horizontal scale: `limits` onto `left..right`.
    pub fn horizontal(limits: (f64, f64), left: f32, right: f32) -> Self {
        Self::new(limits, (left, right))
    }

    /// Vertical scale: `limits` onto `bottom..top` (screen y decreases upwards).
    pub fn vertical(limits: (f64, f64), top: f32, bottom: f32) -> Self {
        Self::new(limits, (bottom, top))
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        let t = if span.is_finite() {
            let span = if span.abs() < 1e-12 { 1e-12 } else { span };
            (v - self.d0) / span
        } else {
            // Domains wider than f64::MAX: halve both terms to stay finite.
            (v * 0.5 - self.d0 * 0.5) / (self.d1 * 0.5 - self.d0 * 0.5)
        };
        self.p0 + t as f32 * (self.p1 - self.p0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.p1 - self.p0;
        if span.abs() < f32::EPSILON {
            return self.d0;
        }
        self.d0 + ((px - self.p0) / span) as f64 * (self.d1 - self.d0)
    }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        v >= lo && v <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_flips() {
        let s = LinearScale::vertical((0.0, 10.0), 100.0, 300.0);
        assert_eq!(s.to_px(0.0), 300.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert_eq!(s.to_px(5.0), 200.0);
        assert!((s.from_px(200.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn horizontal_scale() {
        let s = LinearScale::horizontal((-1.0, 1.0), 0.0, 200.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert!(s.contains(1.0) && !s.contains(1.5));
    }

    #[test]
    fn huge_domain_maps_midpoint_to_center() {
        let s = LinearScale::horizontal((-1.5e308, 1.5e308), 0.0, 200.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(1.5e308), 200.0);
    }
}
