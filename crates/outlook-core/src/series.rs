// File: crates/outlook-core/src/series.rs
// Summary: Observed series and projection scenarios.
// Notes:
// - Observations are keyed by year, so they are ordered and unique by construction.
// - A scenario always holds at least one milestone, strictly ascending by year.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservationSeries {
    by_year: BTreeMap<i32, f64>,
}

impl ObservationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from points; the first value seen for a year wins.
    pub fn from_points(points: impl IntoIterator<Item = ObservationPoint>) -> Self {
        let mut s = Self::new();
        for p in points {
            s.insert(p);
        }
        s
    }

    /// Returns `false` (and keeps the existing value) when the year is already present.
    pub fn insert(&mut self, point: ObservationPoint) -> bool {
        match self.by_year.entry(point.year) {
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(point.value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Exact-year lookup; no interpolation.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.by_year.get(&year).copied()
    }

    pub fn points(&self) -> impl Iterator<Item = ObservationPoint> + '_ {
        self.by_year.iter().map(|(&year, &value)| ObservationPoint { year, value })
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Polyline coordinates in year order.
    pub fn to_xy(&self) -> Vec<(f64, f64)> {
        self.points().map(|p| (p.year as f64, p.value)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub year: i32,
    pub value: f64,
}

impl Milestone {
    pub const fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// One publication's projections on a single policy track.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionScenario {
    publication_year: i32,
    policy_track: String,
    milestones: Vec<Milestone>,
}

impl ProjectionScenario {
    /// Enforces a non-empty milestone list with strictly ascending years.
    pub fn try_new(
        publication_year: i32,
        policy_track: impl Into<String>,
        milestones: Vec<Milestone>,
    ) -> Result<Self, &'static str> {
        if milestones.is_empty() { return Err("scenario has no milestones"); }
        if milestones.windows(2).any(|w| w[0].year >= w[1].year) {
            return Err("milestone years not strictly ascending");
        }
        Ok(Self { publication_year, policy_track: policy_track.into(), milestones })
    }

    pub fn publication_year(&self) -> i32 { self.publication_year }
    pub fn policy_track(&self) -> &str { &self.policy_track }
    pub fn milestones(&self) -> &[Milestone] { &self.milestones }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observations_stay_sorted_and_unique() {
        let s = ObservationSeries::from_points([
            ObservationPoint { year: 2021, value: 2.0 },
            ObservationPoint { year: 2019, value: 1.0 },
            ObservationPoint { year: 2021, value: 9.0 },
        ]);
        assert_eq!(s.to_xy(), vec![(2019.0, 1.0), (2021.0, 2.0)]);
        assert_eq!(s.value_at(2020), None);
    }

    #[test]
    fn scenario_rejects_empty_and_unordered() {
        assert!(ProjectionScenario::try_new(2020, "cur", vec![]).is_err());
        let unordered = vec![Milestone::new(2030, 1.0), Milestone::new(2025, 2.0)];
        assert!(ProjectionScenario::try_new(2020, "cur", unordered).is_err());
        let ok = ProjectionScenario::try_new(2020, "cur", vec![Milestone::new(2020, 1.0)]).unwrap();
        assert_eq!(ok.milestones().len(), 1);
    }
}
