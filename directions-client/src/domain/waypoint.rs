//! Waypoint types.

use std::fmt;

use crate::encoding::encode;

/// Error returned when constructing an invalid [`Waypoint`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidWaypoint {
    #[error("invalid waypoint: address must not be empty")]
    EmptyAddress,

    #[error("invalid waypoint: place ID must not be empty")]
    EmptyPlaceId,

    #[error("invalid waypoint: coordinates must be finite")]
    NonFinite,

    #[error("invalid waypoint: latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("invalid waypoint: longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq)]
enum Location {
    Address(String),
    PlaceId(String),
    Coordinate { lat: f64, lng: f64 },
}

/// A point on a route.
///
/// Given as a free-text address, an opaque place identifier, or a
/// latitude/longitude pair. Constructors validate their input, so every
/// `Waypoint` can be encoded.
///
/// # Examples
///
/// ```
/// use directions_client::domain::Waypoint;
///
/// let london = Waypoint::address("London").unwrap();
/// assert_eq!(london.fragment(), "London");
///
/// let point = Waypoint::coordinate(51.5, -0.12).unwrap();
/// assert_eq!(point.fragment(), "51.500000,-0.120000");
///
/// assert!(Waypoint::coordinate(91.0, 0.0).is_err());
/// assert!(Waypoint::address("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint(Location);

impl Waypoint {
    /// A place name or street address such as `"1 Infinite Loop, Cupertino"`.
    pub fn address(text: impl Into<String>) -> Result<Self, InvalidWaypoint> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidWaypoint::EmptyAddress);
        }
        Ok(Self(Location::Address(text)))
    }

    /// A place identifier such as `"ChIJdd4hrwug2EcRmSrV3Vo6llI"`.
    pub fn place_id(id: impl Into<String>) -> Result<Self, InvalidWaypoint> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidWaypoint::EmptyPlaceId);
        }
        Ok(Self(Location::PlaceId(id)))
    }

    /// A latitude/longitude pair in degrees.
    pub fn coordinate(lat: f64, lng: f64) -> Result<Self, InvalidWaypoint> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidWaypoint::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidWaypoint::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidWaypoint::LongitudeOutOfRange(lng));
        }
        Ok(Self(Location::Coordinate { lat, lng }))
    }

    /// The encoded form of this waypoint as it appears in a query string.
    ///
    /// Coordinates are written with six fractional digits and are not
    /// percent-encoded.
    pub fn fragment(&self) -> String {
        match &self.0 {
            Location::Address(text) => encode(text),
            Location::PlaceId(id) => encode(&format!("place_id:{id}")),
            Location::Coordinate { lat, lng } => format!("{lat:.6},{lng:.6}"),
        }
    }

    /// The encoded form of this waypoint when the route passes through it
    /// without stopping.
    ///
    /// The `via:` prefix wraps the already encoded [`fragment`](Self::fragment)
    /// and the whole string is encoded again, so escapes inside addresses and
    /// place IDs end up double-encoded.
    pub fn via_fragment(&self) -> String {
        encode(&format!("via:{}", self.fragment()))
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
