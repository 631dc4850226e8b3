use std::fmt;

use log::debug;

use crate::location::{Location, location_distance_km};
use crate::parallel::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReport {
    /// `from` and `to` hold the normalized coordinates
    pub from: Location,
    pub to: Location,
    pub distance_km: f64,
}

/// Prints both locations and the distance between them:
///
/// ```text
/// Stockholm   :  59.33270° N,  18.06560° E
/// New York    :  40.71280° N, -73.93520° W
/// Distance between Stockholm and New York is 6312.039 km
///
/// ```
impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12}: {}", self.from.name, self.from.coordinate)?;
        writeln!(f, "{:<12}: {}", self.to.name, self.to.coordinate)?;
        writeln!(
            f,
            "Distance between {} and {} is {:.3} km",
            self.from.name, self.to.name, self.distance_km
        )?;
        writeln!(f)
    }
}

pub fn report_distance(a: &Location, b: &Location) -> DistanceReport {
    DistanceReport {
        from: a.normalized(),
        to: b.normalized(),
        distance_km: location_distance_km(a, b),
    }
}

/// Reports every ordered pair of distinct locations, ordered by the index
/// of the first and then of the second location
pub fn pairwise_reports(locations: &[Location]) -> Vec<DistanceReport> {
    debug!(
        "Reporting {} pairs (parallel: {})",
        locations.len() * locations.len().saturating_sub(1),
        PARALLEL
    );

    opt_par_iter(locations)
        .enumerate()
        .flat_map(|(i, a)| {
            locations
                .iter()
                .enumerate()
                .filter(|&(j, _)| i != j)
                .map(|(_, b)| report_distance(a, b))
                .collect::<Vec<_>>()
        })
        .collect()
}
