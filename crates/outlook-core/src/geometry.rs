// File: crates/outlook-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_skia(self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }

    /// Point at fractional position (`fx`, `fy`) of the rect, measured from the bottom-left corner.
    pub fn at_fraction(&self, fx: f32, fy: f32) -> (f32, f32) {
        let x = self.left as f32 + fx * self.width() as f32;
        let y = self.bottom as f32 - fy * self.height() as f32;
        (x, y)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_measured_from_bottom_left() {
        let r = RectI32::from_ltrb(0, 0, 100, 50);
        assert_eq!(r.at_fraction(0.0, 0.0), (0.0, 50.0));
        assert_eq!(r.at_fraction(1.0, 1.0), (100.0, 0.0));
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    }
}
