//! Arrival and departure times.

use std::fmt;

use chrono::{DateTime, Utc};

/// Whole seconds since the Unix epoch, truncated toward zero.
///
/// `chrono` floors pre-epoch timestamps, so those are nudged back up when
/// a fractional second is present.
pub(crate) fn epoch_seconds(time: DateTime<Utc>) -> i64 {
    let secs = time.timestamp();
    if secs < 0 && time.timestamp_subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

/// A time of either arrival or departure, in whole epoch seconds.
///
/// # Examples
///
/// ```
/// use directions_client::domain::WaypointTime;
///
/// assert_eq!(WaypointTime::Arrival(1_700_000_000).fragment(), "arrival_time=1700000000");
/// assert_eq!(WaypointTime::Departure(0).fragment(), "departure_time=0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaypointTime {
    Arrival(i64),
    Departure(i64),
}

impl WaypointTime {
    /// Arrive by `time`.
    pub fn arrive_by(time: DateTime<Utc>) -> Self {
        WaypointTime::Arrival(epoch_seconds(time))
    }

    /// Depart at `time`.
    pub fn depart_at(time: DateTime<Utc>) -> Self {
        WaypointTime::Departure(epoch_seconds(time))
    }

    /// Epoch seconds carried by either variant.
    pub fn epoch_seconds(&self) -> i64 {
        match self {
            WaypointTime::Arrival(s) | WaypointTime::Departure(s) => *s,
        }
    }

    /// The `key=value` pair for this time. Digits only, so no escaping.
    pub fn fragment(&self) -> String {
        match self {
            WaypointTime::Arrival(s) => format!("arrival_time={s}"),
            WaypointTime::Departure(s) => format!("departure_time={s}"),
        }
    }
}

impl fmt::Display for WaypointTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    proptest! {
        /// Fractional seconds never change the encoded value for post-epoch times
        #[test]
        fn truncation(secs in 0i64..4_000_000_000, nanos in 0u32..1_000_000_000) {
            let t = Utc.timestamp_opt(secs, nanos).unwrap();
            prop_assert_eq!(
                WaypointTime::depart_at(t).fragment(),
                format!("departure_time={secs}")
            );
        }
    }
}
