//! Domain types for building a directions request.
//!
//! All types enforce their invariants at construction time and know how to
//! write their own query-string fragment.

mod travel_mode;
mod units;
mod waypoint;
mod waypoint_time;

pub use travel_mode::{
    DrivingOptions, TrafficModel, TransitMode, TransitOptions, TransitRoutingPreference,
    TravelMode, WalkingOptions,
};
pub use units::Units;
pub use waypoint::{InvalidWaypoint, Waypoint};
pub use waypoint_time::WaypointTime;
