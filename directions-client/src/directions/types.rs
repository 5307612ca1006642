//! Directions API response DTOs.
//!
//! These types map directly to the JSON payload. Most fields default when
//! absent because the API omits them rather than sending null.

use serde::Deserialize;

use crate::polyline::{Polyline, PolylineDecoder, PolylineError};

/// Top-level status of a directions response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Other,
}

impl ResponseStatus {
    /// Whether the request itself succeeded, even if no route was found.
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::Ok | ResponseStatus::ZeroResults)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::NotFound => "NOT_FOUND",
            ResponseStatus::ZeroResults => "ZERO_RESULTS",
            ResponseStatus::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            ResponseStatus::MaxRouteLengthExceeded => "MAX_ROUTE_LENGTH_EXCEEDED",
            ResponseStatus::InvalidRequest => "INVALID_REQUEST",
            ResponseStatus::OverDailyLimit => "OVER_DAILY_LIMIT",
            ResponseStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ResponseStatus::RequestDenied => "REQUEST_DENIED",
            ResponseStatus::UnknownError => "UNKNOWN_ERROR",
            ResponseStatus::Other => "OTHER",
        }
    }
}

/// Response to a directions request.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: ResponseStatus,

    /// Human-readable detail accompanying a failure status.
    pub error_message: Option<String>,

    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,

    #[serde(default)]
    pub routes: Vec<Route>,

    /// Travel modes the API would have accepted when none matched.
    #[serde(default)]
    pub available_travel_modes: Vec<String>,
}

/// Geocoding result for the origin, destination or a waypoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedWaypoint {
    pub geocoder_status: Option<String>,
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub partial_match: bool,
}

/// One suggested route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Order the API chose for the waypoints when optimizing.
    #[serde(default)]
    pub waypoint_order: Vec<usize>,

    pub overview_polyline: Option<EncodedPolyline>,

    #[serde(default)]
    pub warnings: Vec<String>,

    #[serde(default)]
    pub copyrights: String,
}

impl Route {
    /// Decoded overview geometry, or `None` if the route has none.
    pub fn overview_path<D: PolylineDecoder>(
        &self,
        decoder: &D,
    ) -> Option<Result<Polyline, PolylineError>> {
        self.overview_polyline
            .as_ref()
            .map(|p| p.decode_with(decoder))
    }

    /// Total distance over all legs, in metres.
    pub fn distance_meters(&self) -> u64 {
        self.legs
            .iter()
            .filter_map(|leg| leg.distance.as_ref())
            .map(|d| d.value)
            .sum()
    }

    /// Total duration over all legs, in seconds.
    pub fn duration_secs(&self) -> u64 {
        self.legs
            .iter()
            .filter_map(|leg| leg.duration.as_ref())
            .map(|d| d.value)
            .sum()
    }
}

/// Part of a route between two consecutive stops.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub duration_in_traffic: Option<TextValue>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single instruction within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub html_instructions: Option<String>,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    pub polyline: Option<EncodedPolyline>,
    pub travel_mode: Option<String>,
}

/// A numeric value with its localized display text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geometry in the API's encoded polyline format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

impl EncodedPolyline {
    pub fn decode_with<D: PolylineDecoder>(&self, decoder: &D) -> Result<Polyline, PolylineError> {
        decoder.decode(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "geocoded_waypoints": [
            {"geocoder_status": "OK", "place_id": "ChIJdd4hrwug2EcRmSrV3Vo6llI", "types": ["locality", "political"]},
            {"geocoder_status": "OK", "place_id": "ChIJD7fiBh9u5kcRYJSMaMOCCwQ", "types": ["locality"]}
        ],
        "routes": [{
            "summary": "A1",
            "copyrights": "Map data",
            "warnings": [],
            "waypoint_order": [1, 0],
            "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC"},
            "legs": [
                {
                    "distance": {"text": "10 km", "value": 10000},
                    "duration": {"text": "12 mins", "value": 720},
                    "start_address": "London, UK",
                    "end_address": "Luton, UK",
                    "start_location": {"lat": 51.5, "lng": -0.12},
                    "end_location": {"lat": 51.88, "lng": -0.42},
                    "steps": [{
                        "html_instructions": "Head <b>north</b>",
                        "distance": {"text": "10 km", "value": 10000},
                        "duration": {"text": "12 mins", "value": 720},
                        "polyline": {"points": "abc"},
                        "travel_mode": "DRIVING"
                    }]
                },
                {
                    "distance": {"text": "5 km", "value": 5000},
                    "duration": {"text": "6 mins", "value": 360},
                    "steps": []
                }
            ]
        }],
        "status": "OK"
    }"#;

    #[test]
    fn parse_sample() {
        let response: DirectionsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.geocoded_waypoints.len(), 2);
        assert_eq!(response.routes.len(), 1);

        let route = &response.routes[0];
        assert_eq!(route.summary, "A1");
        assert_eq!(route.waypoint_order, vec![1, 0]);
        assert_eq!(route.legs[0].steps.len(), 1);
        assert_eq!(route.legs[0].start_location, Some(LatLng { lat: 51.5, lng: -0.12 }));
        assert_eq!(route.distance_meters(), 15000);
        assert_eq!(route.duration_secs(), 1080);
    }

    #[test]
    fn parse_failure_status() {
        let json = r#"{"status": "REQUEST_DENIED", "error_message": "bad key", "routes": []}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, ResponseStatus::RequestDenied);
        assert!(!response.status.is_success());
        assert_eq!(response.error_message.as_deref(), Some("bad key"));
    }

    #[test]
    fn unknown_status() {
        let json = r#"{"status": "SOMETHING_NEW"}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, ResponseStatus::Other);
        assert!(response.routes.is_empty());
    }

    #[test]
    fn zero_results_is_success() {
        assert!(ResponseStatus::ZeroResults.is_success());
        assert!(ResponseStatus::Ok.is_success());
        assert!(!ResponseStatus::OverQueryLimit.is_success());
        assert_eq!(ResponseStatus::ZeroResults.as_str(), "ZERO_RESULTS");
    }

    #[test]
    fn overview_path_uses_decoder() {
        let response: DirectionsResponse = serde_json::from_str(SAMPLE).unwrap();
        let decoder = |encoded: &str| {
            assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC");
            Ok::<_, PolylineError>(Polyline::new(vec![(38.5, -120.2), (40.7, -120.95)]))
        };
        let path = response.routes[0].overview_path(&decoder).unwrap().unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn overview_path_reports_decoder_failure() {
        let response: DirectionsResponse = serde_json::from_str(SAMPLE).unwrap();
        let decoder = |_: &str| Err::<Polyline, _>(PolylineError::new("truncated"));
        let result = response.routes[0].overview_path(&decoder).unwrap();
        assert_eq!(result, Err(PolylineError::new("truncated")));
    }

    #[test]
    fn missing_overview() {
        let json = r#"{"status": "OK", "routes": [{"legs": []}]}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let decoder = |_: &str| Ok::<_, PolylineError>(Polyline::new(vec![]));
        assert!(response.routes[0].overview_path(&decoder).is_none());
    }
}
