//! Domain types for the departure board.
//!
//! These types represent validated BART data. Raw API text is converted
//! into them at the edge (see `crate::bart`), so code that receives a
//! `ResponseSnapshot` can trust that every estimate has a numeric value.

mod departure;
mod minutes;
mod snapshot;
mod station;

pub use departure::{Departure, sort_departures};
pub use minutes::{InvalidMinutes, LEAVING, Minutes};
pub use snapshot::{DestinationGroup, ResponseSnapshot};
pub use station::{InvalidStationAbbr, StationAbbr};
