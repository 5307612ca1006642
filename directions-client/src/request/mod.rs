//! Directions request builder.
//!
//! Turns a route query (origin, destination, travel mode, waypoints and
//! options) into the request URL for the directions API. Serialization is
//! pure: no I/O, no caching, the same state always gives the same URL.

mod builder;
mod error;


pub use builder::{BASE_URL, DirectionsRequest};
pub use error::RequestError;
