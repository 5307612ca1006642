//! Travel modes and their routing options.
//!
//! Each mode carries only the options that apply to it. The encoded form
//! is the mode keyword followed by one `&key=value` suffix per option that
//! is set; unset options add nothing.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};

use super::waypoint_time::{WaypointTime, epoch_seconds};
use crate::encoding::encode;

/// Assumption the API makes about traffic when estimating driving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficModel {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl TrafficModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficModel::BestGuess => "best_guess",
            TrafficModel::Pessimistic => "pessimistic",
            TrafficModel::Optimistic => "optimistic",
        }
    }
}

/// A kind of public transport a transit route may use.
///
/// `Rail` covers train, tram and subway together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransitMode {
    Bus,
    Subway,
    Train,
    Tram,
    Rail,
}

impl TransitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Train => "train",
            TransitMode::Tram => "tram",
            TransitMode::Rail => "rail",
        }
    }
}

/// Preference applied when ranking transit routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitRoutingPreference {
    FewerTransfers,
    LessWalking,
}

impl TransitRoutingPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitRoutingPreference::FewerTransfers => "fewer_transfers",
            TransitRoutingPreference::LessWalking => "less_walking",
        }
    }
}

/// Options for driving routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrivingOptions {
    /// Departure time in epoch seconds.
    pub departure_time: Option<i64>,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
    pub traffic_model: Option<TrafficModel>,
}

impl DrivingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depart at `time`, dropping any fractional second.
    pub fn departing_at(mut self, time: DateTime<Utc>) -> Self {
        self.departure_time = Some(epoch_seconds(time));
        self
    }

    /// Depart at `secs` seconds since the Unix epoch.
    pub fn departing_at_epoch(mut self, secs: i64) -> Self {
        self.departure_time = Some(secs);
        self
    }

    pub fn avoid_tolls(mut self) -> Self {
        self.avoid_tolls = true;
        self
    }

    pub fn avoid_highways(mut self) -> Self {
        self.avoid_highways = true;
        self
    }

    pub fn avoid_ferries(mut self) -> Self {
        self.avoid_ferries = true;
        self
    }

    pub fn with_traffic_model(mut self, model: TrafficModel) -> Self {
        self.traffic_model = Some(model);
        self
    }

    fn write_fragment(&self, out: &mut String) {
        out.push_str("driving");

        if let Some(secs) = self.departure_time {
            out.push_str(&format!("&departure_time={secs}"));
        }

        let avoid: Vec<&str> = [
            (self.avoid_tolls, "tolls"),
            (self.avoid_highways, "highways"),
            (self.avoid_ferries, "ferries"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        if !avoid.is_empty() {
            out.push_str("&avoid=");
            out.push_str(&avoid.join("|"));
        }

        if let Some(model) = self.traffic_model {
            out.push_str("&traffic_model=");
            out.push_str(model.as_str());
        }
    }
}

/// Options for walking routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkingOptions {
    pub avoid_indoor: bool,
}

impl WalkingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avoid_indoor(mut self) -> Self {
        self.avoid_indoor = true;
        self
    }

    fn write_fragment(&self, out: &mut String) {
        out.push_str("walking");
        if self.avoid_indoor {
            out.push_str("&avoid=indoor");
        }
    }
}

/// Options for public transport routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitOptions {
    pub time: Option<WaypointTime>,
    /// Duplicates collapse; the wire order is the declaration order of
    /// [`TransitMode`].
    pub modes: BTreeSet<TransitMode>,
    pub routing_preference: Option<TransitRoutingPreference>,
}

impl TransitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time(mut self, time: WaypointTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_mode(mut self, mode: TransitMode) -> Self {
        self.modes.insert(mode);
        self
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = TransitMode>) -> Self {
        self.modes.extend(modes);
        self
    }

    pub fn with_routing_preference(mut self, pref: TransitRoutingPreference) -> Self {
        self.routing_preference = Some(pref);
        self
    }

    fn write_fragment(&self, out: &mut String) {
        out.push_str("transit");

        if let Some(time) = self.time {
            out.push('&');
            out.push_str(&time.fragment());
        }

        if !self.modes.is_empty() {
            let modes: Vec<&str> = self.modes.iter().map(TransitMode::as_str).collect();
            out.push_str("&transit_mode=");
            out.push_str(&encode(&modes.join("|")));
        }

        if let Some(pref) = self.routing_preference {
            out.push_str("&transit_routing_preference=");
            out.push_str(pref.as_str());
        }
    }
}

/// Mode of transport for a route request.
///
/// # Examples
///
/// ```
/// use directions_client::domain::{TravelMode, WalkingOptions};
///
/// assert_eq!(TravelMode::default().fragment(), "driving");
/// assert_eq!(TravelMode::Bicycling.fragment(), "bicycling");
///
/// let walk = TravelMode::Walking(WalkingOptions::new().avoid_indoor());
/// assert_eq!(walk.fragment(), "walking&avoid=indoor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelMode {
    Driving(DrivingOptions),
    Walking(WalkingOptions),
    Bicycling,
    Transit(TransitOptions),
}

impl Default for TravelMode {
    fn default() -> Self {
        TravelMode::Driving(DrivingOptions::default())
    }
}

impl TravelMode {
    /// The mode keyword on its own, without any option suffixes.
    pub fn keyword(&self) -> &'static str {
        match self {
            TravelMode::Driving(_) => "driving",
            TravelMode::Walking(_) => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit(_) => "transit",
        }
    }

    /// The encoded value of the `travel_mode` parameter, options included.
    pub fn fragment(&self) -> String {
        let mut out = String::new();
        match self {
            TravelMode::Driving(opts) => opts.write_fragment(&mut out),
            TravelMode::Walking(opts) => opts.write_fragment(&mut out),
            TravelMode::Bicycling => out.push_str("bicycling"),
            TravelMode::Transit(opts) => opts.write_fragment(&mut out),
        }
        out
    }
}

impl From<DrivingOptions> for TravelMode {
    fn from(opts: DrivingOptions) -> Self {
        TravelMode::Driving(opts)
    }
}

impl From<WalkingOptions> for TravelMode {
    fn from(opts: WalkingOptions) -> Self {
        TravelMode::Walking(opts)
    }
}

impl From<TransitOptions> for TravelMode {
    fn from(opts: TransitOptions) -> Self {
        TravelMode::Transit(opts)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
