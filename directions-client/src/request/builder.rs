//! The directions request builder and its serialization.

use std::fmt;

use crate::domain::{TravelMode, Units, Waypoint};
use crate::encoding::{encode, encode_into};

use super::error::RequestError;

/// Fixed endpoint every request is sent to. Parameters follow directly.
pub const BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json?";

/// A waypoint together with whether the route only passes through it.
#[derive(Debug, Clone, PartialEq)]
struct RouteWaypoint {
    waypoint: Waypoint,
    via: bool,
}

impl RouteWaypoint {
    fn fragment(&self) -> String {
        if self.via {
            self.waypoint.via_fragment()
        } else {
            self.waypoint.fragment()
        }
    }
}

/// A route query for the directions API.
///
/// Origin, destination and travel mode are fixed at construction. The
/// remaining options are set with chained calls that consume and return
/// the request. [`to_request_url`](Self::to_request_url) serializes the
/// current state and can be called any number of times.
///
/// # Examples
///
/// ```
/// use directions_client::domain::{Units, Waypoint};
/// use directions_client::request::DirectionsRequest;
///
/// let request = DirectionsRequest::new(
///     "KEY",
///     Waypoint::address("London").unwrap(),
///     Waypoint::address("Paris").unwrap(),
/// )
/// .unwrap()
/// .units(Units::Imperial)
/// .language("fr");
///
/// assert_eq!(
///     request.to_request_url(),
///     "https://maps.googleapis.com/maps/api/directions/json?key=KEY&origin=London\
///      &destination=Paris&travel_mode=driving&units=imperial&language=fr"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    api_key: String,
    origin: Waypoint,
    destination: Waypoint,
    travel_mode: TravelMode,
    waypoints: Vec<RouteWaypoint>,
    optimize_waypoints: bool,
    alternatives: bool,
    units: Option<Units>,
    region: Option<String>,
    language: Option<String>,
}

impl DirectionsRequest {
    /// Create a driving request.
    pub fn new(
        api_key: impl Into<String>,
        origin: Waypoint,
        destination: Waypoint,
    ) -> Result<Self, RequestError> {
        Self::with_travel_mode(api_key, origin, destination, TravelMode::default())
    }

    /// Create a request with an explicit travel mode.
    ///
    /// The API key is embedded in the URL verbatim, so it must already be
    /// URL-safe.
    pub fn with_travel_mode(
        api_key: impl Into<String>,
        origin: Waypoint,
        destination: Waypoint,
        travel_mode: TravelMode,
    ) -> Result<Self, RequestError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RequestError::EmptyApiKey);
        }

        Ok(Self {
            api_key,
            origin,
            destination,
            travel_mode,
            waypoints: Vec::new(),
            optimize_waypoints: false,
            alternatives: false,
            units: None,
            region: None,
            language: None,
        })
    }

    /// Ask for alternative routes as well as the best one.
    pub fn provide_alternatives(mut self) -> Self {
        self.alternatives = true;
        self
    }

    /// Add a stop on the route.
    pub fn visiting(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.push(RouteWaypoint {
            waypoint,
            via: false,
        });
        self
    }

    /// Add several stops, in iteration order.
    pub fn visiting_all(mut self, waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        self.waypoints
            .extend(waypoints.into_iter().map(|waypoint| RouteWaypoint {
                waypoint,
                via: false,
            }));
        self
    }

    /// Add a point the route passes through without stopping.
    pub fn via(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.push(RouteWaypoint {
            waypoint,
            via: true,
        });
        self
    }

    /// Add several pass-through points, in iteration order.
    pub fn via_all(mut self, waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        self.waypoints
            .extend(waypoints.into_iter().map(|waypoint| RouteWaypoint {
                waypoint,
                via: true,
            }));
        self
    }

    /// Let the API reorder the waypoints. Has no effect without waypoints.
    pub fn optimize_waypoints(mut self) -> Self {
        self.optimize_waypoints = true;
        self
    }

    pub fn units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    /// Bias results toward a region, given as a ccTLD code such as `"gb"`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Language for the returned instructions and addresses, such as `"ru"`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn origin(&self) -> &Waypoint {
        &self.origin
    }

    pub fn destination(&self) -> &Waypoint {
        &self.destination
    }

    pub fn travel_mode(&self) -> &TravelMode {
        &self.travel_mode
    }

    /// Number of waypoints added so far, stops and pass-throughs together.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Serialize the request as the full URL: base endpoint plus query.
    ///
    /// Parameters always appear in the same order. Optional parameters
    /// that are unset are left out entirely.
    pub fn to_request_url(&self) -> String {
        let mut url = String::from(BASE_URL);

        url.push_str("key=");
        url.push_str(&self.api_key);
        url.push_str("&origin=");
        url.push_str(&self.origin.fragment());
        url.push_str("&destination=");
        url.push_str(&self.destination.fragment());
        url.push_str("&travel_mode=");
        url.push_str(&self.travel_mode.fragment());

        if !self.waypoints.is_empty() {
            url.push_str("&waypoints=");
            if self.optimize_waypoints {
                encode_into(&mut url, "optimize:true");
                url.push('|');
            }
            let list: Vec<String> = self.waypoints.iter().map(RouteWaypoint::fragment).collect();
            url.push_str(&list.join("|"));
        }

        if let Some(units) = self.units {
            url.push_str("&units=");
            url.push_str(units.as_str());
        }

        if self.alternatives {
            url.push_str("&alternatives=true");
        }

        if let Some(region) = &self.region {
            url.push_str("&region=");
            url.push_str(&encode(region));
        }

        if let Some(language) = &self.language {
            url.push_str("&language=");
            url.push_str(&encode(language));
        }

        url
    }

    /// The request URL parsed for handing to an HTTP client.
    pub fn to_url(&self) -> Result<reqwest::Url, RequestError> {
        reqwest::Url::parse(&self.to_request_url())
            .map_err(|e| RequestError::InvalidUrl(e.to_string()))
    }
}

impl fmt::Display for DirectionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_request_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransitOptions, WalkingOptions};

    fn london() -> Waypoint {
        Waypoint::address("London").unwrap()
    }

    fn paris() -> Waypoint {
        Waypoint::address("Paris").unwrap()
    }

    fn request() -> DirectionsRequest {
        DirectionsRequest::new("KEY", london(), paris()).unwrap()
    }

    #[test]
    fn minimal_url() {
        assert_eq!(
            request().to_request_url(),
            "https://maps.googleapis.com/maps/api/directions/json?\
             key=KEY&origin=London&destination=Paris&travel_mode=driving"
        );
    }

    #[test]
    fn reject_empty_key() {
        assert_eq!(
            DirectionsRequest::new("", london(), paris()),
            Err(RequestError::EmptyApiKey)
        );
        assert_eq!(
            DirectionsRequest::new("   ", london(), paris()),
            Err(RequestError::EmptyApiKey)
        );
    }

    #[test]
    fn key_is_verbatim() {
        let url = DirectionsRequest::new("AIza-_abc", london(), paris())
            .unwrap()
            .to_request_url();
        assert!(url.contains("?key=AIza-_abc&"));
    }

    #[test]
    fn explicit_travel_mode() {
        let req = DirectionsRequest::with_travel_mode(
            "KEY",
            london(),
            paris(),
            TravelMode::Walking(WalkingOptions::new().avoid_indoor()),
        )
        .unwrap();
        assert!(req.to_request_url().ends_with("&travel_mode=walking&avoid=indoor"));
        assert_eq!(req.travel_mode().keyword(), "walking");
    }

    #[test]
    fn every_option_in_order() {
        let req = DirectionsRequest::with_travel_mode(
            "KEY",
            london(),
            paris(),
            TravelMode::Transit(TransitOptions::new()),
        )
        .unwrap()
        .language("ru")
        .region("gb")
        .provide_alternatives()
        .units(Units::Metric)
        .via(Waypoint::coordinate(1.0, 2.0).unwrap())
        .visiting(Waypoint::address("Lille").unwrap())
        .optimize_waypoints();

        assert_eq!(
            req.to_request_url(),
            "https://maps.googleapis.com/maps/api/directions/json?\
             key=KEY&origin=London&destination=Paris&travel_mode=transit\
             &waypoints=optimize%3Atrue|via%3A1.000000%2C2.000000|Lille\
             &units=metric&alternatives=true&region=gb&language=ru"
        );
    }

    #[test]
    fn optimize_without_waypoints_is_silent() {
        let url = request().optimize_waypoints().to_request_url();
        assert!(!url.contains("waypoints"));
        assert!(!url.contains("optimize"));
    }

    #[test]
    fn later_setters_overwrite() {
        let url = request()
            .units(Units::Metric)
            .units(Units::Imperial)
            .language("en")
            .language("de")
            .region("us")
            .region("fr")
            .to_request_url();
        assert!(url.ends_with("&units=imperial&region=fr&language=de"));
    }

    #[test]
    fn region_and_language_are_encoded() {
        let url = request().language("zh-Hant TW").region("é").to_request_url();
        assert!(url.ends_with("&region=%C3%A9&language=zh-Hant%20TW"));
    }

    #[test]
    fn serialization_is_repeatable() {
        let req = request().visiting(london()).provide_alternatives();
        assert_eq!(req.to_request_url(), req.to_request_url());
        assert_eq!(req.to_string(), req.to_request_url());
    }

    #[test]
    fn waypoint_count() {
        let req = request()
            .visiting_all([london(), paris()])
            .via(london());
        assert_eq!(req.waypoint_count(), 3);
    }

    #[test]
    fn accessors() {
        let req = request();
        assert_eq!(req.origin(), &london());
        assert_eq!(req.destination(), &paris());
        assert_eq!(req.travel_mode(), &TravelMode::default());
    }

    #[test]
    fn to_url_parses() {
        let url = request().visiting(london()).to_url().unwrap();
        assert_eq!(url.host_str(), Some("maps.googleapis.com"));
        assert_eq!(url.path(), "/maps/api/directions/json");
        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(
            keys,
            vec!["key", "origin", "destination", "travel_mode", "waypoints"]
        );
    }
}
