//! Great-circle distance between geographic coordinates.
//!
//! Distances use the Haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Coordinates follow the `geo` convention of
//! `x = longitude` and `y = latitude`, both in decimal degrees.
//!
//! Invalid input never fails: if either coordinate has a non-finite
//! component the distance is reported as `0.0`. Callers must not read a
//! zero result as proof that two points coincide.

use geo::Coord;

use crate::Location;

/// Mean Earth radius used by the Haversine computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Report whether both components of `coord` are finite numbers.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use eventrank_core::geodistance::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(Coord { x: 2.35, y: 48.85 }));
/// assert!(!is_valid_coordinate(Coord { x: f64::INFINITY, y: 0.0 }));
/// ```
#[must_use]
pub const fn is_valid_coordinate(coord: Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

/// Haversine distance between two coordinates in kilometres.
///
/// Returns `0.0` when either coordinate is invalid.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use eventrank_core::geodistance::haversine_km;
///
/// let equator = Coord { x: 0.0, y: 0.0 };
/// let quarter = Coord { x: 90.0, y: 0.0 };
/// let km = haversine_km(equator, quarter);
/// assert!((km - 10_007.5).abs() < 0.1);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    if !is_valid_coordinate(from) || !is_valid_coordinate(to) {
        log::trace!("distance requested for invalid coordinate {from:?} -> {to:?}");
        return 0.0;
    }

    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = to.x.to_radians() - from.x.to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();
    // Rounding can push `a` just past 1 for near-antipodal points.
    let haversine = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    let a = haversine.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two locations in kilometres.
///
/// Returns `0.0` when either location has a non-finite latitude or
/// longitude.
///
/// # Examples
/// ```
/// use eventrank_core::{Location, distance};
///
/// let london = Location::new(51.5074, -0.1278);
/// let paris = Location::new(48.8566, 2.3522);
/// let km = distance(london, paris);
/// assert!((343.0..345.0).contains(&km));
/// ```
#[must_use]
pub fn distance(from: Location, to: Location) -> f64 {
    haversine_km(from.into(), to.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-9;

    #[rstest]
    #[case(Location::new(0.0, 0.0))]
    #[case(Location::new(51.5074, -0.1278))]
    #[case(Location::new(-33.8688, 151.2093))]
    #[case(Location::new(90.0, 0.0))]
    fn self_distance_is_zero(#[case] point: Location) {
        assert!(distance(point, point).abs() <= TOLERANCE_KM);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tests compare against known distances")]
    fn quarter_meridian_on_equator() {
        let km = distance(Location::new(0.0, 0.0), Location::new(0.0, 90.0));
        assert!((km - 10_007.543).abs() < 0.01, "got {km}");
    }

    #[rstest]
    fn london_to_paris() {
        let km = distance(Location::new(51.5074, -0.1278), Location::new(48.8566, 2.3522));
        assert!((343.0..=344.5).contains(&km), "got {km}");
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tests compare against known distances")]
    fn antipodes_are_half_circumference() {
        let km = distance(Location::new(0.0, 0.0), Location::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((km - half).abs() < 1e-6, "got {km}");
    }

    #[rstest]
    #[case(Location::new(-74.4, -180.0), Location::new(74.4, 0.0))]
    #[case(Location::new(0.0, 0.0), Location::new(0.0, 180.0))]
    #[case(Location::new(33.3, 12.7), Location::new(-33.3, -167.3))]
    #[expect(clippy::float_arithmetic, reason = "tests compare against known distances")]
    fn near_antipodal_points_stay_finite(#[case] from: Location, #[case] to: Location) {
        let km = distance(from, to);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(km.is_finite(), "got {km}");
        assert!((km - half).abs() < 1e-2, "got {km}");
    }

    #[rstest]
    #[case(Location::new(f64::NAN, 0.0), Location::new(0.0, 0.0))]
    #[case(Location::new(0.0, f64::INFINITY), Location::new(0.0, 0.0))]
    #[case(Location::new(0.0, 0.0), Location::new(f64::NEG_INFINITY, 0.0))]
    #[case(Location::new(0.0, 0.0), Location::new(10.0, f64::NAN))]
    fn invalid_coordinates_yield_zero(#[case] from: Location, #[case] to: Location) {
        let km = distance(from, to);
        assert!(km.to_bits() == 0.0_f64.to_bits(), "expected exact zero, got {km}");
    }
}
