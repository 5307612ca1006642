//! Request builder and client for a routing/directions web API.
//!
//! Encodes a route query (origin, destination, travel mode, waypoints and
//! options) into the exact, order-sensitive query string the API expects,
//! and optionally dispatches it.

pub mod directions;
pub mod domain;
pub mod encoding;
pub mod polyline;
pub mod request;
