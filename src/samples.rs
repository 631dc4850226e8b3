use crate::coordinate::{Coordinate, LatHemisphere, LonHemisphere};
use crate::location::Location;

/// The fixed set of locations printed by the `greatcircle` binary.
///
/// "Antarctica" carries a positive latitude tagged South and is reported
/// south of the equator once normalized. The fourth slot starts out as the
/// South Pole and is replaced by Paris.
pub fn sample_locations() -> Vec<Location> {
    use self::LatHemisphere::*;
    use self::LonHemisphere::*;

    let mut locations = vec![
        Location::new("Stockholm", Coordinate::new(59.3327, 18.0656, North, East)),
        Location::new("New York", Coordinate::new(40.7128, -73.9352, North, West)),
        Location::new("Antarctica", Coordinate::new(82.8628, 135.000, South, East)),
        Location::new("South Pole", Coordinate::new(-90.0000, 0.00000, South, East)),
    ];

    locations[3] = Location::from_decimal_degrees("Paris", 45.7597, 4.8422);

    locations
}
