use std::convert::TryFrom;
use std::fmt;

use failure::Fail;

use crate::Point;

pub const NORTH_CHAR: char = 'N';
pub const SOUTH_CHAR: char = 'S';
pub const EAST_CHAR: char = 'E';
pub const WEST_CHAR: char = 'W';

#[derive(Debug, Fail, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[fail(display = "latitude {} is outside of [-90, 90]", _0)]
    InvalidLatitude(f64),
    #[fail(display = "longitude {} is outside of [-180, 180]", _0)]
    InvalidLongitude(f64),
    #[fail(display = "'{}' is not a hemisphere", _0)]
    InvalidHemisphere(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatHemisphere {
    North,
    South,
}

impl LatHemisphere {
    pub fn from_sign(latitude: f64) -> Self {
        if latitude < 0. {
            LatHemisphere::South
        } else {
            LatHemisphere::North
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LatHemisphere::North => NORTH_CHAR,
            LatHemisphere::South => SOUTH_CHAR,
        }
    }
}

impl TryFrom<char> for LatHemisphere {
    type Error = CoordinateError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            NORTH_CHAR => Ok(LatHemisphere::North),
            SOUTH_CHAR => Ok(LatHemisphere::South),
            _ => Err(CoordinateError::InvalidHemisphere(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonHemisphere {
    East,
    West,
}

impl LonHemisphere {
    pub fn from_sign(longitude: f64) -> Self {
        if longitude < 0. {
            LonHemisphere::West
        } else {
            LonHemisphere::East
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LonHemisphere::East => EAST_CHAR,
            LonHemisphere::West => WEST_CHAR,
        }
    }
}

impl TryFrom<char> for LonHemisphere {
    type Error = CoordinateError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            EAST_CHAR => Ok(LonHemisphere::East),
            WEST_CHAR => Ok(LonHemisphere::West),
            _ => Err(CoordinateError::InvalidHemisphere(c)),
        }
    }
}

/// A single angle in degrees, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Dms { degrees, minutes, seconds }
    }

    /// Unsigned decimal degrees
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees + self.minutes / 60. + self.seconds / 3600.
    }
}

/// Converts a DMS angle to signed decimal degrees.
///
/// `'S'` and `'W'` negate the result. Every other character, including
/// lowercase letters, leaves it positive.
pub fn dms_to_decimal_degrees(degrees: f64, minutes: f64, seconds: f64, hemisphere: char) -> f64 {
    signed_decimal_degrees(&Dms::new(degrees, minutes, seconds), hemisphere)
}

fn signed_decimal_degrees(angle: &Dms, hemisphere: char) -> f64 {
    let dd = angle.to_decimal_degrees();
    match hemisphere {
        SOUTH_CHAR | WEST_CHAR => -dd,
        _ => dd,
    }
}

/// A geographic point with hemisphere tags.
///
/// The numeric sign and the tags are stored separately and may disagree
/// until [`Coordinate::normalize`] reconciles them. The tags win.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub lat_hemisphere: LatHemisphere,
    pub lon_hemisphere: LonHemisphere,
}

impl Coordinate {
    /// Stores all four fields as given, without reconciling sign and tags
    pub fn new(
        latitude: f64,
        longitude: f64,
        lat_hemisphere: LatHemisphere,
        lon_hemisphere: LonHemisphere,
    ) -> Self {
        Coordinate { latitude, longitude, lat_hemisphere, lon_hemisphere }
    }

    /// Derives the hemisphere tags from the signs. Out-of-range values are
    /// accepted as they are.
    pub fn from_decimal_degrees(latitude: f64, longitude: f64) -> Self {
        Coordinate::new(
            latitude,
            longitude,
            LatHemisphere::from_sign(latitude),
            LonHemisphere::from_sign(longitude),
        )
    }

    /// Like [`Coordinate::from_decimal_degrees`] but rejects values outside
    /// of [-90, 90] / [-180, 180] and non-finite values.
    pub fn try_from_decimal_degrees(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90. ..=90.).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }
        if !(-180. ..=180.).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Coordinate::from_decimal_degrees(latitude, longitude))
    }

    pub fn from_dms(lat: Dms, lat_hemisphere: char, lon: Dms, lon_hemisphere: char) -> Self {
        let latitude = signed_decimal_degrees(&lat, lat_hemisphere);
        let longitude = signed_decimal_degrees(&lon, lon_hemisphere);

        Coordinate::from_decimal_degrees(latitude, longitude)
    }

    /// Returns a copy whose signs follow the hemisphere tags
    pub fn normalize(&self) -> Self {
        let latitude = match self.lat_hemisphere {
            LatHemisphere::South => -self.latitude.abs(),
            LatHemisphere::North => self.latitude.abs(),
        };
        let longitude = match self.lon_hemisphere {
            LonHemisphere::West => -self.longitude.abs(),
            LonHemisphere::East => self.longitude.abs(),
        };

        Coordinate { latitude, longitude, ..*self }
    }

    pub fn is_normalized(&self) -> bool {
        *self == self.normalize()
    }
}

impl Point for Coordinate {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:9.5}° {}, {:9.5}° {}",
            self.latitude,
            self.lat_hemisphere.as_char(),
            self.longitude,
            self.lon_hemisphere.as_char()
        )
    }
}
