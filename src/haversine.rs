use log::trace;

use crate::Point;

/// Earth radius used for all reported distances.
///
/// This is 4 km below the usual mean radius (see [`MEAN_EARTH_RADIUS_KM`]).
/// Pass the latter to [`haversine_distance_with_radius`] for the more
/// common figure.
pub const EARTH_RADIUS_KM: f64 = 6367.;

pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.;

const KM_PER_NAUTICAL_MILE: f64 = 1.852;
const KM_PER_STATUTE_MILE: f64 = 1.609;

/// Great-circle distance in kilometers.
///
/// Both points must already have their signs reconciled with their
/// hemispheres, see [`Coordinate::normalize`](crate::Coordinate::normalize).
pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    haversine_distance_with_radius(fix1, fix2, EARTH_RADIUS_KM)
}

pub fn haversine_distance_with_radius(fix1: &dyn Point, fix2: &dyn Point, radius: f64) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let sin_phi = (delta_phi / 2.).sin();
    let sin_rho = (delta_rho / 2.).sin();

    let a = sin_phi * sin_phi + phi1.cos() * phi2.cos() * sin_rho * sin_rho;

    // rounding can push `a` just past 1 for antipodes
    let a = a.max(0.).min(1.);

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());
    trace!("haversine: a = {}, c = {}", a, c);

    radius * c
}

pub fn km_to_nautical_miles(km: f64) -> f64 {
    km / KM_PER_NAUTICAL_MILE
}

pub fn km_to_statute_miles(km: f64) -> f64 {
    km / KM_PER_STATUTE_MILE
}
