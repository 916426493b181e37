// File: crates/outlook-core/src/grid.rs
// Summary: Default tick generation for linear and log axes, plus post-hoc tick thinning.

use crate::axis::ScaleKind;

/// Evenly spaced "nice" ticks (1, 2 or 5 x 10^n step) covering `[lo, hi]`.
pub fn nice_linear_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return vec![lo];
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = if norm <= 1.0 {
        mag
    } else if norm <= 2.0 {
        2.0 * mag
    } else if norm <= 5.0 {
        5.0 * mag
    } else {
        10.0 * mag
    };
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    // Snap to the step's decimal precision so 3 x 0.1 reads as 0.3.
    let digits = (-step.log10()).ceil().max(0.0) as i32;
    let scale = 10f64.powi(digits);
    (first..=last).map(|i| (i as f64 * step * scale).round() / scale).collect()
}

/// 1-2-5 ladder per decade, clipped to `[lo, hi]`. Requires `lo > 0`.
pub fn log_ladder_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo > 0.0 && hi > lo) {
        return Vec::new();
    }
    let min_exp = lo.log10().floor() as i32;
    let max_exp = hi.log10().ceil() as i32;
    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10f64.powi(exp);
        for multiplier in [1.0, 2.0, 5.0] {
            let candidate = decade * multiplier;
            if within(candidate, lo, hi) {
                ticks.push(candidate);
            }
        }
    }
    ticks
}

/// Minor grid positions 2..9 x 10^n that are not already on the 1-2-5 ladder.
pub fn log_minor_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo > 0.0 && hi > lo) {
        return Vec::new();
    }
    let min_exp = lo.log10().floor() as i32;
    let max_exp = hi.log10().ceil() as i32;
    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10f64.powi(exp);
        for multiplier in [3.0, 4.0, 6.0, 7.0, 8.0, 9.0] {
            let candidate = decade * multiplier;
            if within(candidate, lo, hi) {
                ticks.push(candidate);
            }
        }
    }
    ticks
}

/// Ticks the drawing layer would place for this range before any thinning.
pub fn default_ticks(kind: ScaleKind, lo: f64, hi: f64, target: usize) -> Vec<f64> {
    match kind {
        ScaleKind::Linear => nice_linear_ticks(lo, hi, target),
        ScaleKind::Log10 => log_ladder_ticks(lo, hi),
    }
}

/// Keep indices `0, stride, 2*stride, ...`. A stride of 0 or 1 keeps everything.
pub fn decimate<T: Copy>(ticks: &[T], stride: usize) -> Vec<T> {
    ticks.iter().step_by(stride.max(1)).copied().collect()
}

fn within(v: f64, lo: f64, hi: f64) -> bool {
    let eps = 1e-9;
    v >= lo * (1.0 - eps) && v <= hi * (1.0 + eps)
}
