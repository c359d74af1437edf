//! Real-time BART departure board.
//!
//! Fetches estimated departures for one station, sorts them soonest first
//! and prints the next few to the console.

pub mod bart;
pub mod board;
pub mod domain;
pub mod logging;
