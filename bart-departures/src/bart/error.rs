//! BART client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the BART HTTP client.
#[derive(Debug)]
pub enum BartError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error, either as a status code or in-band
    ApiError { status: u16, message: String },

    /// Invalid API key
    Unauthorized,

    /// Response decoded but its contents don't describe a departure board
    Malformed(ConversionError),

    /// Mock data missing or unreadable
    MockData(String),
}

impl fmt::Display for BartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BartError::Http(e) => write!(f, "HTTP error: {e}"),
            BartError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            BartError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            BartError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            BartError::Malformed(e) => write!(f, "malformed response: {e}"),
            BartError::MockData(msg) => write!(f, "mock data: {msg}"),
        }
    }
}

impl std::error::Error for BartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BartError::Http(e) => Some(e),
            BartError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BartError {
    fn from(err: reqwest::Error) -> Self {
        BartError::Http(err)
    }
}

impl From<ConversionError> for BartError {
    fn from(err: ConversionError) -> Self {
        BartError::Malformed(err)
    }
}
