#[macro_use]
extern crate assert_approx_eq;

extern crate greatcircle;

use std::convert::TryFrom;

use greatcircle::coordinate::dms_to_decimal_degrees;
use greatcircle::{Coordinate, CoordinateError, Dms, LatHemisphere, LonHemisphere};

#[test]
fn hemispheres_follow_sign() {
    let c = Coordinate::from_decimal_degrees(-33.8688, 151.2093);
    assert_eq!(c.lat_hemisphere, LatHemisphere::South);
    assert_eq!(c.lon_hemisphere, LonHemisphere::East);

    let c = Coordinate::from_decimal_degrees(0., -0.1276);
    assert_eq!(c.lat_hemisphere, LatHemisphere::North);
    assert_eq!(c.lon_hemisphere, LonHemisphere::West);
}

#[test]
fn out_of_range_is_accepted_unchecked() {
    let c = Coordinate::from_decimal_degrees(200., -400.);
    assert_eq!(c.latitude, 200.);
    assert_eq!(c.longitude, -400.);
}

#[test]
fn checked_constructor_rejects_out_of_range() {
    assert_eq!(
        Coordinate::try_from_decimal_degrees(200., 0.),
        Err(CoordinateError::InvalidLatitude(200.))
    );
    assert_eq!(
        Coordinate::try_from_decimal_degrees(0., -180.5),
        Err(CoordinateError::InvalidLongitude(-180.5))
    );
    assert!(Coordinate::try_from_decimal_degrees(std::f64::NAN, 0.).is_err());

    let c = Coordinate::try_from_decimal_degrees(-90., 180.).unwrap();
    assert_eq!(c, Coordinate::from_decimal_degrees(-90., 180.));
}

#[test]
fn hemisphere_chars() {
    assert_eq!(LatHemisphere::try_from('N'), Ok(LatHemisphere::North));
    assert_eq!(LatHemisphere::try_from('S'), Ok(LatHemisphere::South));
    assert_eq!(LonHemisphere::try_from('E'), Ok(LonHemisphere::East));
    assert_eq!(LonHemisphere::try_from('W'), Ok(LonHemisphere::West));
    assert_eq!(LatHemisphere::try_from('X'), Err(CoordinateError::InvalidHemisphere('X')));
    assert_eq!(LonHemisphere::try_from('N'), Err(CoordinateError::InvalidHemisphere('N')));
    assert_eq!(LatHemisphere::South.as_char(), 'S');
    assert_eq!(LonHemisphere::East.as_char(), 'E');
}

#[test]
fn error_messages() {
    assert_eq!(
        CoordinateError::InvalidLatitude(91.).to_string(),
        "latitude 91 is outside of [-90, 90]"
    );
    assert_eq!(CoordinateError::InvalidHemisphere('Q').to_string(), "'Q' is not a hemisphere");
}

#[test]
fn dms_conversion() {
    let c = Coordinate::from_dms(Dms::new(45., 45., 34.8), 'N', Dms::new(4., 50., 32.), 'E');
    assert_approx_eq!(c.latitude, 45. + 45. / 60. + 34.8 / 3600.);
    assert_approx_eq!(c.longitude, 4. + 50. / 60. + 32. / 3600.);
    assert_approx_eq!(c.latitude, 45.7597, 1e-4);
    assert_approx_eq!(c.longitude, 4.8422, 1e-4);

    let dd = Coordinate::from_decimal_degrees(45.7597, 4.8422);
    assert_eq!(c.lat_hemisphere, dd.lat_hemisphere);
    assert_eq!(c.lon_hemisphere, dd.lon_hemisphere);
}

#[test]
fn dms_south_and_west_negate() {
    let c = Coordinate::from_dms(Dms::new(33., 52., 7.7), 'S', Dms::new(151., 12., 33.5), 'W');
    assert!(c.latitude < 0.);
    assert!(c.longitude < 0.);
    assert_eq!(c.lat_hemisphere, LatHemisphere::South);
    assert_eq!(c.lon_hemisphere, LonHemisphere::West);

    assert_approx_eq!(dms_to_decimal_degrees(10., 30., 0., 'S'), -10.5);
    assert_approx_eq!(dms_to_decimal_degrees(10., 30., 0., 's'), 10.5);
}

#[test]
fn normalize_uses_hemisphere_tag() {
    let c = Coordinate::new(-10., 20., LatHemisphere::North, LonHemisphere::West);
    let n = c.normalize();
    assert_eq!(n.latitude, 10.);
    assert_eq!(n.longitude, -20.);
    assert_eq!(n.lat_hemisphere, LatHemisphere::North);
    assert_eq!(n.lon_hemisphere, LonHemisphere::West);
    assert!(!c.is_normalized());
    assert!(n.is_normalized());
}

#[test]
fn normalize_is_idempotent() {
    let coordinates = [
        Coordinate::new(82.8628, 135., LatHemisphere::South, LonHemisphere::East),
        Coordinate::new(-1., -2., LatHemisphere::North, LonHemisphere::East),
        Coordinate::from_decimal_degrees(40.7128, -73.9352),
        Coordinate::from_decimal_degrees(0., 0.),
    ];

    for c in &coordinates {
        assert_eq!(c.normalize().normalize(), c.normalize());
    }
}

#[test]
fn display() {
    let c = Coordinate::from_decimal_degrees(59.3327, 18.0656);
    assert_eq!(c.to_string(), " 59.33270° N,  18.06560° E");

    let c = Coordinate::new(82.8628, 135., LatHemisphere::South, LonHemisphere::East);
    assert_eq!(c.normalize().to_string(), "-82.86280° S, 135.00000° E");
}
