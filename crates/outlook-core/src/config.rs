// File: crates/outlook-core/src/config.rs
// Summary: Compiled-in chart configuration: column names, scenario filters, axis presets, captions and output names.

use crate::axis::ScaleKind;
use crate::error::{OutlookError, OutlookResult};
use crate::extract::normalize_track;
use crate::text::HAlign;

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnNames {
    pub year: String,
    pub actual: String,
    pub policy_track: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "Year".to_string(),
            actual: "Actually got".to_string(),
            policy_track: "pol".to_string(),
        }
    }
}

/// Milestone-year columns, strictly ascending. Each year doubles as its column name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneYears(Vec<i32>);

impl MilestoneYears {
    pub fn new(years: Vec<i32>) -> OutlookResult<Self> {
        if years.is_empty() {
            return Err(OutlookError::InvalidConfig("milestone year list is empty".into()));
        }
        if years.windows(2).any(|w| w[0] >= w[1]) {
            return Err(OutlookError::InvalidConfig(format!(
                "milestone years must be strictly ascending: {:?}",
                years
            )));
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> &[i32] {
        &self.0
    }
}

impl Default for MilestoneYears {
    fn default() -> Self {
        Self(vec![2020, 2025, 2030, 2035, 2040, 2050])
    }
}

/// Fixed vertical range for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuePreset {
    floor: f64,
    ceiling: f64,
    kind: ScaleKind,
}

impl ValuePreset {
    pub fn linear(floor: f64, ceiling: f64) -> OutlookResult<Self> {
        if !floor.is_finite() || !ceiling.is_finite() || ceiling <= floor {
            return Err(OutlookError::InvalidConfig(format!(
                "linear range must satisfy floor < ceiling, got [{floor}, {ceiling}]"
            )));
        }
        Ok(Self { floor, ceiling, kind: ScaleKind::Linear })
    }

    /// Log ranges need a strictly positive floor.
    pub fn log10(floor: f64, ceiling: f64) -> OutlookResult<Self> {
        if !floor.is_finite() || floor <= 0.0 {
            return Err(OutlookError::InvalidConfig(format!(
                "log floor must be strictly positive, got {floor}"
            )));
        }
        if !ceiling.is_finite() || ceiling <= floor {
            return Err(OutlookError::InvalidConfig(format!(
                "log range must satisfy floor < ceiling, got [{floor}, {ceiling}]"
            )));
        }
        Ok(Self { floor, ceiling, kind: ScaleKind::Log10 })
    }

    pub fn floor(&self) -> f64 { self.floor }
    pub fn ceiling(&self) -> f64 { self.ceiling }
    pub fn kind(&self) -> ScaleKind { self.kind }
}

/// Text placed at a fractional position of the figure (0,0 = bottom-left, 1,1 = top-right).
#[derive(Clone, Debug, PartialEq)]
pub struct FigureText {
    pub text: String,
    pub x_frac: f32,
    pub y_frac: f32,
    pub align: HAlign,
    pub size: f32,
}

impl FigureText {
    pub fn new(text: impl Into<String>, x_frac: f32, y_frac: f32, align: HAlign, size: f32) -> Self {
        Self { text: text.into(), x_frac, y_frac, align, size }
    }
}

/// Label attached to a data point; `text_at` is where the text is drawn, in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointAnnotation {
    pub text: String,
    pub at: (f64, f64),
    pub text_at: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PassConfig {
    pub preset: ValuePreset,
    pub tick_decimation: usize,
    pub minor_grid: bool,
    pub caption: FigureText,
    pub file_suffix: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub columns: ColumnNames,
    pub policy_track: String,
    pub excluded_year: i32,
    pub milestones: MilestoneYears,
    /// Always ticked on the year axis, in addition to every observed year.
    pub tick_years: Vec<i32>,
    pub x_bounds: (f64, f64),
    /// Interval count the linear tick generator aims for.
    pub target_value_ticks: usize,
    pub linear: PassConfig,
    pub log: PassConfig,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub observed_label: String,
    pub scenario_label: String,
    pub attribution: FigureText,
    pub annotations: Vec<PointAnnotation>,
    pub output_stem: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let caption = |text: &str| FigureText::new(text, 0.955, 0.87, HAlign::Right, 14.0);
        Self {
            columns: ColumnNames::default(),
            policy_track: "cur".to_string(),
            excluded_year: 2023,
            milestones: MilestoneYears::default(),
            tick_years: vec![2020, 2025, 2030, 2035, 2040, 2050],
            x_bounds: (2009.0, 2051.0),
            target_value_ticks: 6,
            linear: PassConfig {
                preset: ValuePreset { floor: 0.0, ceiling: 6000.0, kind: ScaleKind::Linear },
                tick_decimation: 1,
                minor_grid: false,
                caption: caption("Linear scale"),
                file_suffix: "linear".to_string(),
            },
            log: PassConfig {
                preset: ValuePreset { floor: 10.0, ceiling: 10_000.0, kind: ScaleKind::Log10 },
                tick_decimation: 2,
                minor_grid: true,
                caption: caption("Log scale"),
                file_suffix: "log".to_string(),
            },
            title: "World Solar PV Generation vs. International Energy Agency\u{2019}s Annual Predictions".to_string(),
            x_label: "Year".to_string(),
            y_label: "Solar Generation (TWh)".to_string(),
            observed_label: "Actual Solar Generation".to_string(),
            scenario_label: "IEA WEO projections (current policies)".to_string(),
            attribution: FigureText::new("by @iamredave", 0.98, 0.02, HAlign::Right, 12.0),
            annotations: vec![PointAnnotation {
                text: "2025 (projected)".to_string(),
                at: (2025.0, 2718.0),
                text_at: (2023.0, 2800.0),
            }],
            output_stem: "solar_generation_with_projections".to_string(),
        }
    }
}

impl ChartConfig {
    /// Re-check every invariant; called before any rendering.
    pub fn validate(&self) -> OutlookResult<()> {
        MilestoneYears::new(self.milestones.years().to_vec())?;
        if normalize_track(&self.policy_track).is_empty() {
            return Err(OutlookError::InvalidConfig("policy track identifier is blank".into()));
        }
        let (x0, x1) = self.x_bounds;
        if !(x0.is_finite() && x1.is_finite() && x0 < x1) {
            return Err(OutlookError::InvalidConfig(format!("horizontal bounds out of order: {x0}..{x1}")));
        }
        let p = self.linear.preset;
        if p.kind() != ScaleKind::Linear {
            return Err(OutlookError::InvalidConfig("linear pass needs a linear preset".into()));
        }
        ValuePreset::linear(p.floor(), p.ceiling())?;
        let p = self.log.preset;
        if p.kind() != ScaleKind::Log10 {
            return Err(OutlookError::InvalidConfig("log pass needs a log10 preset".into()));
        }
        ValuePreset::log10(p.floor(), p.ceiling())?;
        for pass in [&self.linear, &self.log] {
            if pass.tick_decimation == 0 {
                return Err(OutlookError::InvalidConfig("tick decimation stride must be at least 1".into()));
            }
        }
        if self.linear.file_suffix == self.log.file_suffix {
            return Err(OutlookError::InvalidConfig("render passes need distinct file suffixes".into()));
        }
        Ok(())
    }
}
