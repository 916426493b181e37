// File: crates/outlook-core/src/lib.rs
// Summary: Core library entry point; exports extraction, trend assembly, dual-scale planning and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod plan;
pub mod scale;
pub mod series;
pub mod table;
pub mod text;
pub mod theme;
pub mod trend;
pub mod types;

pub use axis::{year_label, AxisPlan, ScaleKind};
pub use chart::{render_outputs, render_pass, ChartContext, RenderOptions};
pub use config::{ChartConfig, FigureText, MilestoneYears, PassConfig, ValuePreset};
pub use error::{OutlookError, OutlookResult};
pub use extract::{extract_series, normalize_track, ExtractedSeries};
pub use grid::decimate;
pub use pipeline::{build_plan, run};
pub use plan::{plan_render, RenderPass, RenderPlan};
pub use series::{Milestone, ObservationPoint, ObservationSeries, ProjectionScenario};
pub use table::Table;
pub use text::TextShaper;
pub use theme::Theme;
pub use trend::{assemble_all, assemble_trend, ScenarioTrend, TrendSegment};
