use log::debug;

use crate::{Coordinate, Dms, Point};
use crate::haversine::haversine_distance;

/// A named point of interest. Names don't have to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new<S: Into<String>>(name: S, coordinate: Coordinate) -> Self {
        Location { name: name.into(), coordinate }
    }

    pub fn from_decimal_degrees<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> Self {
        Location::new(name, Coordinate::from_decimal_degrees(latitude, longitude))
    }

    pub fn from_dms<S: Into<String>>(
        name: S,
        lat: Dms,
        lat_hemisphere: char,
        lon: Dms,
        lon_hemisphere: char,
    ) -> Self {
        Location::new(name, Coordinate::from_dms(lat, lat_hemisphere, lon, lon_hemisphere))
    }

    pub fn normalized(&self) -> Self {
        Location { name: self.name.clone(), coordinate: self.coordinate.normalize() }
    }

    pub fn distance_to(&self, other: &Location) -> f64 {
        location_distance_km(self, other)
    }
}

/// Yields the normalized position, so the hemisphere tags always win
impl Point for Location {
    fn latitude(&self) -> f64 {
        self.coordinate.normalize().latitude
    }
    fn longitude(&self) -> f64 {
        self.coordinate.normalize().longitude
    }
}

/// Normalizes both coordinates and returns the great-circle distance in
/// kilometers between them
pub fn location_distance_km(a: &Location, b: &Location) -> f64 {
    let c1 = a.coordinate.normalize();
    let c2 = b.coordinate.normalize();

    let distance = haversine_distance(&c1, &c2);
    debug!("{} -> {}: {:.3} km", a.name, b.name, distance);

    distance
}
