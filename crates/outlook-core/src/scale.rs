// File: crates/outlook-core/src/scale.rs
// Summary: Year (X) and value (Y) transforms from data coordinates to surface pixels.

use crate::axis::ScaleKind;

/// Horizontal linear mapping of `[min, max]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct YearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: f64,
    pub max: f64,
}

impl YearScale {
    pub fn new(left_px: f32, right_px: f32, min: f64, max: f64) -> Self {
        let max = if (max - min).abs() < 1e-12 { min + 1.0 } else { max };
        Self { left_px, right_px, min, max }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        self.left_px + ((x - self.min) / (self.max - self.min)) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new(kind: ScaleKind, top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(top_px, bottom_px, vmin, vmax),
            ScaleKind::Log10 => Self::new_log10(top_px, bottom_px, vmin, vmax),
        }
    }
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min, log_max }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        if self.log {
            let yy = y.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.bottom_px - ((yy - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_scale_spaces_decades_evenly() {
        let s = ValueScale::new(ScaleKind::Log10, 0.0, 300.0, 10.0, 10_000.0);
        assert!((s.to_px(10.0) - 300.0).abs() < 1e-3);
        assert!((s.to_px(100.0) - 200.0).abs() < 1e-3);
        assert!((s.to_px(10_000.0) - 0.0).abs() < 1e-3);
    }

    #[test]
    fn log_scale_never_sees_zero() {
        let s = ValueScale::new_log10(0.0, 100.0, 0.0, 100.0);
        assert!(s.vmin > 0.0);
        assert!(s.to_px(0.0).is_finite());
    }

    #[test]
    fn year_scale_maps_bounds() {
        let s = YearScale::new(100.0, 1100.0, 2010.0, 2060.0);
        assert_eq!(s.to_px(2010.0), 100.0);
        assert_eq!(s.to_px(2060.0), 1100.0);
        assert_eq!(s.to_px(2035.0), 600.0);
    }
}
