//! BART legacy API client.
//!
//! This module provides an HTTP client for the `etd.aspx` real-time
//! departure endpoint.
//!
//! Key characteristics of the API:
//! - Every scalar is a string, including minutes until departure
//! - A departing train is reported as `"Leaving"` rather than `"0"`
//! - Errors such as a bad key arrive with HTTP 200 and a `message.error` entry
//! - A station with no trains running omits its `etd` array entirely

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{BartClient, BartConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ETD_COMMAND};
pub use convert::{ConversionError, convert_etd_response};
pub use error::BartError;
pub use mock::MockBartClient;
pub use types::{Estimate, Etd, EtdResponse, EtdRoot, StationEtd};
