//! Geographic positions expressed in decimal degrees.

use std::str::FromStr;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geodistance;

/// A latitude/longitude pair in decimal degrees.
///
/// Converts into a [`geo::Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use eventrank_core::Location;
///
/// let london = Location::new(51.5074, -0.1278);
/// let coord: Coord<f64> = london.into();
/// assert_eq!(coord.y, 51.5074);
/// assert_eq!(coord.x, -0.1278);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Report whether both components are finite numbers.
    ///
    /// # Examples
    /// ```
    /// use eventrank_core::Location;
    ///
    /// assert!(Location::new(0.0, 0.0).is_valid());
    /// assert!(!Location::new(f64::NAN, 0.0).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(self) -> bool {
        geodistance::is_valid_coordinate(self.into())
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        Self {
            x: location.longitude,
            y: location.latitude,
        }
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

/// Errors returned when parsing a `"lat,lon"` string into a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationParseError {
    /// The input did not contain exactly one comma.
    #[error("expected `latitude,longitude`, found {input:?}")]
    Format {
        /// Raw input string.
        input: String,
    },
    /// A component was not a number.
    #[error("invalid {component} {value:?}")]
    Component {
        /// Which component failed (`latitude` or `longitude`).
        component: &'static str,
        /// Raw component text.
        value: String,
    },
}

impl FromStr for Location {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LocationParseError::Format {
                input: s.to_owned(),
            });
        };
        let latitude = parse_component(lat, "latitude")?;
        let longitude = parse_component(lon, "longitude")?;
        Ok(Self::new(latitude, longitude))
    }
}

fn parse_component(raw: &str, component: &'static str) -> Result<f64, LocationParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LocationParseError::Component {
            component,
            value: raw.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("51.5074,-0.1278", Location::new(51.5074, -0.1278))]
    #[case(" 0 , 90 ", Location::new(0.0, 90.0))]
    fn parses_lat_lon_pairs(#[case] input: &str, #[case] expected: Location) {
        assert_eq!(input.parse::<Location>(), Ok(expected));
    }

    #[rstest]
    #[case("51.5")]
    #[case("1,2,3")]
    fn rejects_wrong_arity(#[case] input: &str) {
        let err = input.parse::<Location>().expect_err("arity should be rejected");
        assert!(matches!(err, LocationParseError::Format { .. }));
    }

    #[rstest]
    fn rejects_non_numeric_component() {
        let err = "x,0".parse::<Location>().expect_err("non-numeric latitude");
        assert_eq!(
            err,
            LocationParseError::Component {
                component: "latitude",
                value: "x".into(),
            }
        );
    }

    #[rstest]
    fn coord_round_trip_swaps_axes() {
        let coord = Coord { x: 2.0, y: 1.0 };
        let location = Location::from(coord);
        assert_eq!(location, Location::new(1.0, 2.0));
        assert_eq!(Coord::from(location), coord);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_named_fields() {
        let location: Location =
            serde_json::from_str(r#"{"latitude":48.8566,"longitude":2.3522}"#)
                .expect("valid location json");
        assert_eq!(location, Location::new(48.8566, 2.3522));
    }
}
