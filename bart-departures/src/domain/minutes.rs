//! Minutes-until-departure values.

use std::fmt;

/// The text BART sends in place of a number when a train is departing now.
pub const LEAVING: &str = "Leaving";

/// Error returned when an estimate's minutes field is not understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid minutes value: {0:?}")]
pub struct InvalidMinutes(pub String);

/// Whole minutes until a train departs.
///
/// BART reports these as strings; [`LEAVING`] is normalised to zero.
///
/// # Examples
///
/// ```
/// use bart_departures::domain::Minutes;
///
/// assert_eq!(Minutes::parse("7").unwrap().get(), 7);
/// assert_eq!(Minutes::parse("Leaving").unwrap().get(), 0);
/// assert!(Minutes::parse("soon").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minutes(u32);

impl Minutes {
    /// Zero minutes: the train is leaving.
    pub const NOW: Minutes = Minutes(0);

    pub fn new(minutes: u32) -> Self {
        Minutes(minutes)
    }

    /// Parse the API's textual minutes field.
    ///
    /// Accepts an unsigned decimal integer (surrounding whitespace is
    /// ignored) or the literal `"Leaving"`.
    pub fn parse(s: &str) -> Result<Self, InvalidMinutes> {
        let trimmed = s.trim();

        if trimmed == LEAVING {
            return Ok(Minutes::NOW);
        }

        trimmed
            .parse::<u32>()
            .map(Minutes)
            .map_err(|_| InvalidMinutes(s.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Minutes {
    /// Delegates to the integer so width and alignment flags apply.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_roundtrips_display(n in 0u32..10_000) {
            let parsed = Minutes::parse(&n.to_string()).unwrap();
            prop_assert_eq!(parsed.get(), n);
            prop_assert_eq!(parsed.to_string(), n.to_string());
        }

        #[test]
        fn alphabetic_text_is_rejected(s in "[a-zA-Z]{1,12}") {
            prop_assume!(s != LEAVING);
            prop_assert!(Minutes::parse(&s).is_err());
        }
    }
}
