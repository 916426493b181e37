// File: crates/outlook-core/src/axis.rs
// Summary: Axis plan for one render pass: year ticks and labels, vertical range, scale kind and tick thinning.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Years before this are shown as their two-digit suffix.
pub const ABBREVIATE_BEFORE: i32 = 2030;

/// Display string for a year tick: `2025` -> `"25"`, `2030` -> `"2030"`.
pub fn year_label(year: i32) -> String {
    if year < ABBREVIATE_BEFORE {
        format!("{:02}", year.rem_euclid(100))
    } else {
        year.to_string()
    }
}

/// Display string for a value tick. Whole numbers print without decimals.
pub fn value_label(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisPlan {
    /// Year tick positions, ascending.
    pub years: Vec<i32>,
    pub x_min: f64,
    pub x_max: f64,
    pub vertical_floor: f64,
    pub vertical_ceiling: f64,
    pub scale_kind: ScaleKind,
    /// Keep every n-th default value tick; 1 keeps all.
    pub tick_decimation: usize,
    /// Value ticks after thinning.
    pub value_ticks: Vec<f64>,
    /// Unlabelled grid lines (log pass only).
    pub minor_ticks: Vec<f64>,
}

impl AxisPlan {
    pub fn label_for(&self, year: i32) -> String {
        year_label(year)
    }

    /// Labels for every year tick, in tick order.
    pub fn year_labels(&self) -> Vec<String> {
        self.years.iter().map(|&y| self.label_for(y)).collect()
    }

    pub fn value_labels(&self) -> Vec<String> {
        self.value_ticks.iter().map(|&v| value_label(v)).collect()
    }

    /// Year ticks falling inside the horizontal limits.
    pub fn visible_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years
            .iter()
            .copied()
            .filter(move |&y| (y as f64) >= self.x_min && (y as f64) <= self.x_max)
    }
}
