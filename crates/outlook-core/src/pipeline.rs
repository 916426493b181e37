// File: crates/outlook-core/src/pipeline.rs
// Summary: End-to-end run: validate configuration, load the table, extract, plan and render both scales.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::{render_outputs, RenderOptions};
use crate::config::ChartConfig;
use crate::error::OutlookResult;
use crate::extract::{extract_series, ExtractedSeries};
use crate::plan::{plan_render, RenderPlan};
use crate::table::Table;

/// Table to plan, without touching the filesystem.
pub fn build_plan(table: &Table, config: &ChartConfig) -> OutlookResult<(ExtractedSeries, RenderPlan)> {
    config.validate()?;
    let series = extract_series(table, config)?;
    for p in series.observations.points() {
        info!(year = p.year, value = p.value, "actual");
    }
    for s in &series.scenarios {
        info!(year = s.publication_year(), milestones = ?s.milestones(), "projection");
    }
    let plan = plan_render(&series, config);
    info!(
        x_range = ?config.x_bounds,
        year_ticks = ?plan.linear.axis.years,
        "planned chart"
    );
    Ok((series, plan))
}

/// Every fatal error happens before the first image is written, except a failure
/// while rendering or saving the second pass.
pub fn run(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &ChartConfig,
    opts: &RenderOptions,
) -> OutlookResult<Vec<PathBuf>> {
    let input = input.as_ref();
    info!(path = %input.display(), "loading table");
    let table = Table::from_path(input)?;
    let (_, plan) = build_plan(&table, config)?;
    render_outputs(&plan, config, opts, out_dir)
}
