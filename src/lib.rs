extern crate cfg_if;
extern crate failure;
extern crate log;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod coordinate;
pub mod haversine;
pub mod location;
pub mod report;
pub mod samples;
mod parallel;
mod point;

pub use crate::coordinate::{Coordinate, CoordinateError, Dms, LatHemisphere, LonHemisphere};
pub use crate::location::Location;
pub use crate::point::Point;
