// File: crates/outlook-core/tests/trend.rs
// Purpose: Anchor lookup and segment stitching.

mod common;

use outlook_core::{
    assemble_all, assemble_trend, extract_series, ChartConfig, Milestone, ObservationPoint, ObservationSeries,
    ProjectionScenario, TrendSegment,
};

fn obs(points: &[(i32, f64)]) -> ObservationSeries {
    ObservationSeries::from_points(points.iter().map(|&(year, value)| ObservationPoint { year, value }))
}

fn scenario(year: i32, milestones: &[(i32, f64)]) -> ProjectionScenario {
    let ms = milestones.iter().map(|&(y, v)| Milestone::new(y, v)).collect();
    ProjectionScenario::try_new(year, "cur", ms).expect("valid scenario")
}

#[test]
fn anchored_scenario_starts_at_observation() {
    let observations = obs(&[(2019, 700.0), (2020, 1000.0)]);
    let s = scenario(2020, &[(2025, 1500.0), (2030, 2200.0)]);
    assert_eq!(
        assemble_trend(&observations, &s),
        vec![
            TrendSegment::new(2020, 1000.0, 2025, 1500.0),
            TrendSegment::new(2025, 1500.0, 2030, 2200.0),
        ]
    );
}

#[test]
fn missing_anchor_keeps_milestone_legs() {
    let observations = obs(&[(2020, 1000.0), (2024, 2000.0)]);
    let s = scenario(2035, &[(2040, 3000.0), (2050, 5000.0)]);
    assert_eq!(assemble_trend(&observations, &s), vec![TrendSegment::new(2040, 3000.0, 2050, 5000.0)]);
}

#[test]
fn single_milestone_without_anchor_has_no_segments() {
    let s = scenario(2035, &[(2040, 3000.0)]);
    assert!(assemble_trend(&ObservationSeries::new(), &s).is_empty());
}

#[test]
fn single_milestone_with_anchor_has_one_leg() {
    let observations = obs(&[(2010, 32.0)]);
    let s = scenario(2010, &[(2020, 200.0)]);
    assert_eq!(assemble_trend(&observations, &s), vec![TrendSegment::new(2010, 32.0, 2020, 200.0)]);
}

#[test]
fn no_nearest_year_fallback() {
    // 2021 is one year away from the only observation; still no anchor leg.
    let observations = obs(&[(2020, 1000.0)]);
    let s = scenario(2021, &[(2025, 1500.0), (2030, 2000.0)]);
    let segs = assemble_trend(&observations, &s);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start_year, 2025);
}

#[test]
fn milestone_at_publication_year_gives_vertical_anchor_leg() {
    let observations = obs(&[(2020, 846.0)]);
    let s = scenario(2020, &[(2020, 800.0), (2025, 1200.0)]);
    let segs = assemble_trend(&observations, &s);
    assert_eq!(segs[0], TrendSegment::new(2020, 846.0, 2020, 800.0));
    assert_eq!(segs.len(), 2);
}

#[test]
fn sample_table_trends() {
    let series = extract_series(&common::sample_table(), &ChartConfig::default()).expect("extract");
    let trends = assemble_all(&series.observations, &series.scenarios);
    let by_year = |y: i32| trends.iter().find(|t| t.publication_year == y).unwrap();

    // Anchored at the 2014 observation, then two milestone legs.
    let t2014 = by_year(2014);
    assert_eq!(t2014.segments.len(), 3);
    assert_eq!(t2014.segments[0].start(), (2014.0, 190.0));
    assert_eq!(t2014.markers, vec![(2020.0, 400.0), (2030.0, 600.0), (2040.0, 800.0)]);

    // 2026 has no observation: milestone legs only.
    let t2026 = by_year(2026);
    assert_eq!(t2026.segments.len(), 3);
    assert_eq!(t2026.segments[0].start(), (2030.0, 3600.0));
    assert_eq!(t2026.segments.last().unwrap().end(), (2050.0, 9000.0));
}
