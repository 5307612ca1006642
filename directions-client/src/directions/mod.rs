//! Directions API client.
//!
//! Everything past the request URL lives here: an HTTP transport that
//! issues the GET, a client that decodes the JSON payload, and a mock
//! transport for tests.
//!
//! Key characteristics of the API:
//! - HTTP success does not mean the query succeeded; the payload carries
//!   its own `status` field
//! - `ZERO_RESULTS` is a valid answer with an empty route list
//! - Route geometry arrives as encoded polylines, decoded by the caller

mod client;
mod error;
pub mod mock;
mod transport;
mod types;

pub use client::DirectionsClient;
pub use error::{DirectionsError, TransportError};
pub use transport::{HttpTransport, HttpTransportConfig, Transport};
pub use types::{
    DirectionsResponse, EncodedPolyline, GeocodedWaypoint, LatLng, Leg, ResponseStatus, Route,
    Step, TextValue,
};
