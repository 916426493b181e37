// File: crates/outlook-core/src/plan.rs
// Summary: Dual-scale render planning: shared year domain and geometry, one axis plan per vertical scale.

use std::collections::BTreeSet;

use tracing::debug;

use crate::axis::{AxisPlan, ScaleKind};
use crate::config::{ChartConfig, FigureText, PassConfig};
use crate::extract::ExtractedSeries;
use crate::grid::{decimate, default_ticks, log_minor_ticks};
use crate::series::ObservationSeries;
use crate::trend::{assemble_all, ScenarioTrend};

/// Everything one render pass needs beyond the shared geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPass {
    pub axis: AxisPlan,
    pub caption: FigureText,
    pub file_suffix: String,
}

/// Shared geometry plus the linear and log passes drawn from it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    pub observed: Vec<(f64, f64)>,
    pub scenarios: Vec<ScenarioTrend>,
    pub linear: RenderPass,
    pub log: RenderPass,
}

impl RenderPlan {
    /// Passes in render order.
    pub fn passes(&self) -> [&RenderPass; 2] {
        [&self.linear, &self.log]
    }
}

/// Observed years united with the configured tick years, ascending.
pub fn year_domain(observations: &ObservationSeries, tick_years: &[i32]) -> Vec<i32> {
    observations
        .years()
        .chain(tick_years.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Vertical plan for one pass; default ticks are generated for the preset range, then thinned.
pub fn plan_axis(years: &[i32], x_bounds: (f64, f64), pass: &PassConfig, target_ticks: usize) -> AxisPlan {
    let preset = pass.preset;
    let defaults = default_ticks(preset.kind(), preset.floor(), preset.ceiling(), target_ticks);
    let value_ticks = decimate(&defaults, pass.tick_decimation);
    let minor_ticks = match (preset.kind(), pass.minor_grid) {
        (ScaleKind::Log10, true) => log_minor_ticks(preset.floor(), preset.ceiling()),
        _ => Vec::new(),
    };
    debug!(kind = ?preset.kind(), defaults = ?defaults, kept = ?value_ticks, "value ticks");
    AxisPlan {
        years: years.to_vec(),
        x_min: x_bounds.0,
        x_max: x_bounds.1,
        vertical_floor: preset.floor(),
        vertical_ceiling: preset.ceiling(),
        scale_kind: preset.kind(),
        tick_decimation: pass.tick_decimation,
        value_ticks,
        minor_ticks,
    }
}

fn plan_pass(years: &[i32], config: &ChartConfig, pass: &PassConfig) -> RenderPass {
    RenderPass {
        axis: plan_axis(years, config.x_bounds, pass, config.target_value_ticks),
        caption: pass.caption.clone(),
        file_suffix: pass.file_suffix.clone(),
    }
}

/// Valid for empty inputs too; the plan then carries no geometry.
pub fn plan_render(series: &ExtractedSeries, config: &ChartConfig) -> RenderPlan {
    let years = year_domain(&series.observations, &config.tick_years);
    let scenarios = assemble_all(&series.observations, &series.scenarios);
    RenderPlan {
        observed: series.observations.to_xy(),
        scenarios,
        linear: plan_pass(&years, config, &config.linear),
        log: plan_pass(&years, config, &config.log),
    }
}
