//! Individual departure estimates and their ordering.

use super::Minutes;

/// One train heading to one destination, some minutes from now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub minutes: Minutes,
    pub destination: String,
}

impl Departure {
    pub fn new(minutes: Minutes, destination: impl Into<String>) -> Self {
        Self {
            minutes,
            destination: destination.into(),
        }
    }
}

/// Sort departures soonest first.
///
/// The sort is stable: departures with equal minutes keep the order in
/// which they were given.
pub fn sort_departures(mut departures: Vec<Departure>) -> Vec<Departure> {
    departures.sort_by_key(|d| d.minutes);
    departures
}
