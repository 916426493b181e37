// File: crates/outlook-core/src/extract.rs
// Summary: Splits a parsed table into the observed series and the projection scenarios of one policy track.

use tracing::{debug, info, warn};

use crate::config::ChartConfig;
use crate::error::OutlookResult;
use crate::series::{Milestone, ObservationPoint, ObservationSeries, ProjectionScenario};
use crate::table::Table;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedSeries {
    pub observations: ObservationSeries,
    pub scenarios: Vec<ProjectionScenario>,
}

/// Canonical form of a policy-track cell: trimmed and lowercased.
pub fn normalize_track(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fails only when a required column is absent; bad cells are skipped.
pub fn extract_series(table: &Table, config: &ChartConfig) -> OutlookResult<ExtractedSeries> {
    let year_ix = table.column(&config.columns.year)?;
    let actual_ix = table.column(&config.columns.actual)?;
    let track_ix = table.column(&config.columns.policy_track)?;
    let milestone_cols = config
        .milestones
        .years()
        .iter()
        .map(|&year| Ok((year, table.column(&year.to_string())?)))
        .collect::<OutlookResult<Vec<_>>>()?;

    let target = normalize_track(&config.policy_track);
    let mut observations = ObservationSeries::new();
    let mut scenarios = Vec::new();

    for (line, row) in table.rows().enumerate() {
        let Some(year) = row.year(year_ix) else {
            debug!(line, "skipping row without a usable year");
            continue;
        };

        if let Some(raw) = row.cell(actual_ix) {
            match row.number(actual_ix) {
                Some(value) if value >= 0.0 => {
                    if !observations.insert(ObservationPoint { year, value }) {
                        warn!(year, "duplicate observed year; keeping the first value");
                    }
                }
                _ => warn!(year, cell = raw, "ignoring actual value that is not a non-negative number"),
            }
        }

        let Some(track) = row.cell(track_ix).map(normalize_track) else { continue };
        if track != target {
            continue;
        }
        if year == config.excluded_year {
            debug!(year, "publication year excluded");
            continue;
        }

        let milestones = milestone_cols
            .iter()
            .filter_map(|&(m_year, ix)| row.number(ix).map(|value| Milestone::new(m_year, value)))
            .collect::<Vec<_>>();
        if milestones.is_empty() {
            debug!(year, "dropping scenario with no usable milestones");
            continue;
        }

        match ProjectionScenario::try_new(year, track, milestones) {
            Ok(s) => {
                debug!(year, milestones = ?s.milestones(), "projection scenario");
                scenarios.push(s);
            }
            Err(why) => warn!(year, why, "dropping scenario"),
        }
    }

    info!(
        observations = observations.len(),
        scenarios = scenarios.len(),
        track = %target,
        "extracted series"
    );
    Ok(ExtractedSeries { observations, scenarios })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_track("  Cur "), "cur");
        assert_eq!(normalize_track("CUR"), "cur");
        assert_eq!(normalize_track("stated"), "stated");
    }
}
