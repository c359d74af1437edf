//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station abbreviation: {reason}")]
pub struct InvalidStationAbbr {
    reason: &'static str,
}

/// A valid 4-character BART station abbreviation.
///
/// Abbreviations are uppercase ASCII letters or digits, e.g. `MONT` for
/// Montgomery St. or `12TH` for 12th St. Oakland City Center.
///
/// # Examples
///
/// ```
/// use bart_departures::domain::StationAbbr;
///
/// let mont = StationAbbr::parse("MONT").unwrap();
/// assert_eq!(mont.as_str(), "MONT");
///
/// // Digits are allowed
/// assert!(StationAbbr::parse("24TH").is_ok());
///
/// // Lowercase and wrong lengths are rejected
/// assert!(StationAbbr::parse("mont").is_err());
/// assert!(StationAbbr::parse("MON").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationAbbr([u8; 4]);

impl StationAbbr {
    /// Parse a station abbreviation from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationAbbr> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidStationAbbr {
                reason: "must be exactly 4 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationAbbr {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationAbbr([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the abbreviation as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationAbbr({})", self.as_str())
    }
}

impl fmt::Display for StationAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
