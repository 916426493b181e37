// File: crates/outlook-core/src/trend.rs
// Summary: Builds each scenario's trend line: an optional anchor leg from the observed value, then milestone to milestone.

use tracing::debug;

use crate::series::{ObservationSeries, ProjectionScenario};

/// One directed edge of a scenario polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendSegment {
    pub start_year: i32,
    pub start_value: f64,
    pub end_year: i32,
    pub end_value: f64,
}

impl TrendSegment {
    pub const fn new(start_year: i32, start_value: f64, end_year: i32, end_value: f64) -> Self {
        Self { start_year, start_value, end_year, end_value }
    }

    pub fn start(&self) -> (f64, f64) {
        (self.start_year as f64, self.start_value)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.end_year as f64, self.end_value)
    }
}

/// Segments for one scenario, in drawing order.
///
/// When the publication year has an observation, the first segment runs from
/// that observation to the first milestone. Without one, only the
/// milestone-to-milestone legs are produced. Milestones are never reordered.
pub fn assemble_trend(observations: &ObservationSeries, scenario: &ProjectionScenario) -> Vec<TrendSegment> {
    let year = scenario.publication_year();
    let milestones = scenario.milestones();
    let mut segments = Vec::with_capacity(milestones.len());

    match (observations.value_at(year), milestones.first()) {
        (Some(anchor), Some(first)) => {
            segments.push(TrendSegment::new(year, anchor, first.year, first.value));
        }
        (None, _) => debug!(year, "no observation at publication year; trend starts at first milestone"),
        _ => {}
    }

    segments.extend(
        milestones
            .windows(2)
            .map(|w| TrendSegment::new(w[0].year, w[0].value, w[1].year, w[1].value)),
    );
    segments
}

/// Render-ready view of one scenario: its segments and milestone markers.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioTrend {
    pub publication_year: i32,
    pub segments: Vec<TrendSegment>,
    pub markers: Vec<(f64, f64)>,
}

pub fn assemble_all(observations: &ObservationSeries, scenarios: &[ProjectionScenario]) -> Vec<ScenarioTrend> {
    scenarios
        .iter()
        .map(|s| {
            let segments = assemble_trend(observations, s);
            let markers = s.milestones().iter().map(|m| (m.year as f64, m.value)).collect();
            debug!(year = s.publication_year(), segments = segments.len(), "assembled trend");
            ScenarioTrend { publication_year: s.publication_year(), segments, markers }
        })
        .collect()
}
